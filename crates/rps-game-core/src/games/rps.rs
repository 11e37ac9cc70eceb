//! Generalized Rock-Paper-Scissors rule.
//!
//! Moves sit on a cycle of odd length N. Each move beats the `N / 2` moves
//! before it and loses to the `N / 2` moves after it, so for
//! `[Rock, Paper, Scissors]` Paper beats Rock, Scissors beats Paper and Rock
//! beats Scissors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a round from the user's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Same round seen from the other side
    pub fn reverse(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Line announced to the user after a round
    pub fn announcement(&self) -> &'static str {
        match self {
            Outcome::Win => "You win!",
            Outcome::Lose => "You lose!",
            Outcome::Draw => "It's a draw!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve `user_move` against `computer_move`, both 1-based, among `n` moves.
///
/// Indices are taken modulo `n`, so `n + 1` is the same move as `1`.
///
/// # Panics
///
/// If `n` is even.
pub fn resolve(user_move: usize, computer_move: usize, n: usize) -> Outcome {
    assert!(n % 2 == 1, "move count must be odd, got {}", n);

    let half = n / 2;
    let ahead = (computer_move % n + n - user_move % n) % n;

    if ahead == 0 {
        Outcome::Draw
    } else if ahead <= half {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}
