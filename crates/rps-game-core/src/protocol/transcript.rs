//! Audit transcript: one JSON line per resolved round.

use crate::crypto::{HmacKey, MoveHmac, RevealedMove};
use crate::error::GameError;
use crate::games::{MoveSet, Outcome};
use crate::protocol::RoundResult;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Everything needed to re-check one round's commitment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub round: usize,
    pub hmac: MoveHmac,
    pub key: HmacKey,
    pub user_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
}

impl TranscriptRecord {
    pub fn new(
        round: usize,
        moves: &MoveSet,
        revealed: &RevealedMove,
        result: &RoundResult,
    ) -> Self {
        let name = |index: usize| moves.get(index).unwrap_or_default().to_string();
        Self {
            round,
            hmac: revealed.hmac,
            key: revealed.key.clone(),
            user_move: name(result.user_move),
            computer_move: name(result.computer_move),
            outcome: result.outcome,
        }
    }

    /// Does the revealed key and computer move match the published hmac?
    pub fn verify(&self) -> bool {
        self.hmac.verify(&self.key, &self.computer_move)
    }

    /// Append this record as a single line
    pub fn write_line<W: Write>(&self, mut writer: W) -> Result<(), GameError> {
        serde_json::to_writer(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read every record from a transcript, skipping blank lines
    pub fn read_all<R: BufRead>(reader: R) -> Result<Vec<Self>, GameError> {
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}
