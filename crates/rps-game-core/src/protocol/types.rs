//! Protocol types.

use crate::games::{resolve, Outcome};
use serde::{Deserialize, Serialize};

/// One line of user input at the move prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `0`
    Exit,
    /// `?`
    Help,
    /// 1-based move index
    Play(usize),
}

impl Command {
    /// Parse a prompt line against a set of `moves` moves; `None` if invalid
    pub fn parse(input: &str, moves: usize) -> Option<Command> {
        match input.trim() {
            "0" => Some(Command::Exit),
            "?" => Some(Command::Help),
            other => other
                .parse::<usize>()
                .ok()
                .filter(|index| (1..=moves).contains(index))
                .map(Command::Play),
        }
    }
}

/// Resolved round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub user_move: usize,
    pub computer_move: usize,
    pub outcome: Outcome,
}

impl RoundResult {
    /// Judge `user_move` against `computer_move` among `n` moves
    pub fn new(user_move: usize, computer_move: usize, n: usize) -> Self {
        Self {
            user_move,
            computer_move,
            outcome: resolve(user_move, computer_move, n),
        }
    }
}

/// Outcome tallies for one session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    wins: usize,
    losses: usize,
    draws: usize,
}

impl SessionSummary {
    pub fn record(&mut self, result: &RoundResult) {
        match result.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    pub fn wins(&self) -> usize {
        self.wins
    }

    pub fn losses(&self) -> usize {
        self.losses
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}
