//! Rock-Paper-Scissors Console Game
//!
//! Plays any odd number of distinct moves against a computer that publishes
//! an HMAC of its move before the user picks, and reveals the key afterwards.

use clap::Parser;
use rps_game_cli::{init_tracing, USAGE};
use rps_game_core::{GameError, MoveSet, Session, SessionSummary};
use std::fs::OpenOptions;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "rps-game", version, about = "Rock-Paper-Scissors with committed computer moves")]
struct Cli {
    /// Move names in cyclic order: an odd number (at least 3) of distinct strings.
    ///
    /// Names may start with `-`; options must come before the first move.
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    moves: Vec<String>,

    /// Append a JSON line per round (hmac, key, moves, outcome) to this file
    #[arg(long, value_name = "PATH")]
    transcript: Option<PathBuf>,

    /// Tracing filter for the stderr log
    #[arg(long, env = "RPS_LOG", default_value = "warn")]
    log_level: String,
}

fn play(moves: &MoveSet, transcript: Option<&Path>) -> Result<SessionSummary, GameError> {
    let session = Session::new(moves, io::stdin().lock(), io::stdout().lock());

    let session = match transcript {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            info!("Writing transcript to {}", path.display());
            session.with_transcript(BufWriter::new(file))
        }
        None => session,
    };

    session.run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(e) => {
            info!("Rejected move list: {}", e);
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
    };

    match play(&moves, cli.transcript.as_deref()) {
        Ok(summary) => {
            info!(
                "Played {} rounds: {} won, {} lost, {} drawn",
                summary.rounds(),
                summary.wins(),
                summary.losses(),
                summary.draws()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Game aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_collects_moves() {
        let cli = Cli::try_parse_from(["rps-game", "Rock", "Paper", "Scissors"]).unwrap();

        assert_eq!(cli.moves, vec!["Rock", "Paper", "Scissors"]);
        assert!(cli.transcript.is_none());
    }

    #[test]
    fn test_cli_accepts_hyphenated_moves() {
        let cli = Cli::try_parse_from(["rps-game", "-1", "0", "1"]).unwrap();
        assert_eq!(cli.moves, vec!["-1", "0", "1"]);

        let cli = Cli::try_parse_from(["rps-game", "Rock", "-Paper-", "Scissors"]).unwrap();
        assert_eq!(cli.moves, vec!["Rock", "-Paper-", "Scissors"]);
    }

    #[test]
    fn test_cli_options_before_hyphenated_moves() {
        let cli =
            Cli::try_parse_from(["rps-game", "--transcript", "t.jsonl", "-a", "-b", "-c"]).unwrap();

        assert_eq!(cli.transcript, Some(PathBuf::from("t.jsonl")));
        assert_eq!(cli.moves, vec!["-a", "-b", "-c"]);
    }

    #[test]
    fn test_cli_accepts_no_moves() {
        let cli = Cli::try_parse_from(["rps-game"]).unwrap();
        assert!(cli.moves.is_empty());
    }

    #[test]
    fn test_cli_transcript_option() {
        let cli =
            Cli::try_parse_from(["rps-game", "--transcript", "game.jsonl", "a", "b", "c"]).unwrap();

        assert_eq!(cli.transcript, Some(PathBuf::from("game.jsonl")));
        assert_eq!(cli.moves.len(), 3);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
