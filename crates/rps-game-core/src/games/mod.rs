//! Move sets and the rules that judge them.

mod moves;
mod rps;
mod table;

pub use moves::{MoveSet, MoveSetError};
pub use rps::{resolve, Outcome};
pub use table::HelpTable;
