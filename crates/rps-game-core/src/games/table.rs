//! Help table: every move against every other move.

use super::{resolve, MoveSet, Outcome};
use std::fmt;

const CORNER: &str = "User v / PC >";
const GAP: &str = "  ";

/// N×N grid; cell (i, j) is the outcome of row move i against column move j
#[derive(Clone, Debug)]
pub struct HelpTable<'a> {
    moves: &'a MoveSet,
}

impl<'a> HelpTable<'a> {
    pub fn new(moves: &'a MoveSet) -> Self {
        Self { moves }
    }

    /// Outcome for row `i` against column `j`, both 1-based
    pub fn cell(&self, i: usize, j: usize) -> Outcome {
        resolve(i, j, self.moves.len())
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> Vec<Vec<Outcome>> {
        let n = self.moves.len();
        (1..=n)
            .map(|i| (1..=n).map(|j| self.cell(i, j)).collect())
            .collect()
    }
}

impl fmt::Display for HelpTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = |s: &str| s.chars().count();

        let label_width = self
            .moves
            .names()
            .iter()
            .map(|name| width(name))
            .chain([width(CORNER)])
            .max()
            .unwrap_or_default();
        let column_widths: Vec<usize> = self
            .moves
            .names()
            .iter()
            .map(|name| width(name).max(Outcome::Draw.as_str().len()))
            .collect();

        let mut header = format!("{:<label_width$}", CORNER);
        for (name, w) in self.moves.names().iter().zip(column_widths.iter().copied()) {
            header.push_str(GAP);
            header.push_str(&format!("{:<w$}", name));
        }
        writeln!(f, "{}", header.trim_end())?;

        for (name, row) in self.moves.names().iter().zip(self.rows()) {
            let mut line = format!("{:<label_width$}", name);
            for (outcome, w) in row.iter().zip(column_widths.iter().copied()) {
                line.push_str(GAP);
                line.push_str(&format!("{:<w$}", outcome.as_str()));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
