//! Interactive game session.
//!
//! Each round the computer commits first and prints the hmac, then the user
//! picks a move, then the computer reveals its move and key. Input and output
//! are any `BufRead` / `Write` pair so the loop runs the same against a
//! terminal or an in-memory script.

use super::{Command, RoundResult, SessionSummary, TranscriptRecord};
use crate::crypto::SealedMove;
use crate::error::GameError;
use crate::games::{HelpTable, MoveSet};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const PROMPT: &str = "Enter your move: ";
pub const FAREWELL: &str = "Exiting the game. Goodbye!";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number from the menu or '0' to exit.";

enum Turn {
    Played,
    Exit,
}

/// Console game against the committed computer
pub struct Session<'a, R, W> {
    moves: &'a MoveSet,
    input: R,
    output: W,
    transcript: Option<Box<dyn Write + 'a>>,
    summary: SessionSummary,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(moves: &'a MoveSet, input: R, output: W) -> Self {
        Self {
            moves,
            input,
            output,
            transcript: None,
            summary: SessionSummary::default(),
        }
    }

    /// Append a [`TranscriptRecord`] line to `writer` after every round
    pub fn with_transcript(mut self, writer: impl Write + 'a) -> Self {
        self.transcript = Some(Box::new(writer));
        self
    }

    /// Play rounds until the user exits or input ends
    pub fn run(mut self) -> Result<SessionSummary, GameError> {
        info!("Starting session with {} moves", self.moves.len());

        while let Turn::Played = self.play_round()? {}

        info!(
            "Session ended after {} rounds: {} won, {} lost, {} drawn",
            self.summary.rounds(),
            self.summary.wins(),
            self.summary.losses(),
            self.summary.draws()
        );
        Ok(self.summary)
    }

    fn play_round(&mut self) -> Result<Turn, GameError> {
        let sealed = SealedMove::commit(self.moves)?;

        writeln!(self.output, "HMAC: {}", sealed.hmac())?;
        self.print_menu()?;

        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(Turn::Exit);
            }

            match Command::parse(&line, self.moves.len()) {
                Some(Command::Exit) => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    return Ok(Turn::Exit);
                }
                Some(Command::Help) => {
                    write!(self.output, "{}", HelpTable::new(self.moves))?;
                }
                Some(Command::Play(user_move)) => {
                    self.finish_round(user_move, sealed)?;
                    return Ok(Turn::Played);
                }
                None => {
                    debug!("Rejected input {:?}", line.trim());
                    writeln!(self.output, "{}", INVALID_INPUT)?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), GameError> {
        for (index, name) in self.moves.iter() {
            writeln!(self.output, "{} - {}", index, name)?;
        }
        writeln!(self.output, "0 - exit")?;
        writeln!(self.output, "? - help")?;
        Ok(())
    }

    fn finish_round(&mut self, user_move: usize, sealed: SealedMove) -> Result<(), GameError> {
        let revealed = sealed.reveal();
        let result = RoundResult::new(user_move, revealed.move_index, self.moves.len());
        let names = self.moves.names();

        writeln!(self.output, "Your move: {}", names[result.user_move - 1])?;
        writeln!(self.output, "Computer move: {}", names[result.computer_move - 1])?;
        writeln!(self.output, "{}", result.outcome.announcement())?;
        writeln!(self.output, "HMAC key: {}", revealed.key)?;

        self.summary.record(&result);
        let round = self.summary.rounds();
        info!("Round {} resolved: {:?}", round, result);

        if let Some(transcript) = self.transcript.as_mut() {
            TranscriptRecord::new(round, self.moves, &revealed, &result).write_line(transcript)?;
        }
        Ok(())
    }
}
