//! Validated, ordered list of move names.

use std::collections::HashSet;
use thiserror::Error;

/// Why a move list was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {0}")]
    TooFew(usize),

    #[error("an odd number of moves is required, got {0}")]
    EvenCount(usize),

    #[error("move {0:?} is listed more than once")]
    Duplicate(String),
}

/// Ordered, duplicate-free moves; the count is odd and at least 3.
///
/// Moves are identified by their 1-based position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < 3 {
            return Err(MoveSetError::TooFew(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount(names.len()));
        }

        let mut seen = HashSet::with_capacity(names.len());
        if let Some(dup) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(MoveSetError::Duplicate(dup.clone()));
        }

        Ok(Self { names })
    }

    /// Number of moves (N)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Never true for a validated set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the move at 1-based `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    /// All names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// (1-based index, name) pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, name.as_str()))
    }
}
