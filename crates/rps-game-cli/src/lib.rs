//! Shared setup for the `rps-game` and `rps-verify` binaries.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Printed when the move list is rejected
pub const USAGE: &str = "\
Incorrect arguments. Please provide an odd number of non-repeating strings.
Example: Rock Paper Scissors
";

/// Install a stderr tracing subscriber filtered by `directives` (e.g. `warn`, `rps_game_core=debug`)
pub fn init_tracing(directives: &str) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
