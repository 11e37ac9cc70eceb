//! Commitment Verifier
//!
//! Checks that a revealed key and computer move reproduce the HMAC that was
//! published before the user moved, for a single round or a whole transcript.

use clap::Parser;
use rps_game_cli::init_tracing;
use rps_game_core::{GameError, HmacKey, MoveHmac, TranscriptRecord};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "rps-verify", version, about = "Verify revealed Rock-Paper-Scissors moves")]
struct Cli {
    /// HMAC published before the round (hex)
    #[arg(required_unless_present = "transcript", requires_all = ["key", "move_name"])]
    hmac: Option<MoveHmac>,

    /// Key revealed after the round (hex)
    key: Option<HmacKey>,

    /// Computer move revealed after the round
    #[arg(value_name = "MOVE")]
    move_name: Option<String>,

    /// Check every round in a transcript written by `rps-game --transcript`
    #[arg(long, value_name = "PATH", conflicts_with = "hmac")]
    transcript: Option<PathBuf>,

    /// Tracing filter for the stderr log
    #[arg(long, env = "RPS_LOG", default_value = "warn")]
    log_level: String,
}

/// Exit status when the arguments or the transcript cannot be read
const EXIT_UNREADABLE: u8 = 2;

fn verify_transcript(path: &Path) -> Result<bool, GameError> {
    let records = TranscriptRecord::read_all(BufReader::new(File::open(path)?))?;
    info!("Checking {} rounds from {}", records.len(), path.display());

    let mut all_valid = true;
    for record in &records {
        if record.verify() {
            println!("round {}: valid", record.round);
        } else {
            warn!("Round {} does not match its hmac", record.round);
            println!("round {}: invalid", record.round);
            all_valid = false;
        }
    }
    Ok(all_valid)
}

fn status(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Some(path) = cli.transcript {
        return match verify_transcript(&path) {
            Ok(valid) => status(valid),
            Err(e) => {
                error!("Cannot read transcript {}: {}", path.display(), e);
                ExitCode::from(EXIT_UNREADABLE)
            }
        };
    }

    match (cli.hmac, cli.key, cli.move_name) {
        (Some(hmac), Some(key), Some(move_name)) => {
            let valid = hmac.verify(&key, &move_name);
            println!("{}", if valid { "valid" } else { "invalid" });
            status(valid)
        }
        _ => {
            error!("Expected <HMAC> <KEY> <MOVE> or --transcript <PATH>");
            ExitCode::from(EXIT_UNREADABLE)
        }
    }
}
