//! Errors from playing a game session.

use thiserror::Error;

/// Errors that end a session
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Secure random source unavailable: {0}")]
    Entropy(rand::Error),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transcript error: {0}")]
    Transcript(#[from] serde_json::Error),
}
