//! Rock-Paper-Scissors Game Core Library
//!
//! This crate provides the commit-reveal primitives, the generalized move
//! rules and the interactive session for playing Rock-Paper-Scissors with any
//! odd number of moves against a computer that commits to its move first.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{HexError, HmacKey, MoveHmac, RevealedMove, SealedMove};
pub use error::GameError;
pub use games::{resolve, HelpTable, MoveSet, MoveSetError, Outcome};
pub use protocol::{Command, RoundResult, Session, SessionSummary, TranscriptRecord};
