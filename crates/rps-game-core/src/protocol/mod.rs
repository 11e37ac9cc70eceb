//! Protocol types, session loop and transcript.

mod session;
mod transcript;
mod types;

pub use session::{Session, FAREWELL, INVALID_INPUT, PROMPT};
pub use transcript::TranscriptRecord;
pub use types::{Command, RoundResult, SessionSummary};
