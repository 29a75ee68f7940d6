//! HMAC Rock-Paper-Scissors
//!
//! Play one provably fair round against the computer:
//!
//! ```bash
//! hmac-rps Rock Paper Scissors Lizard Spock
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use hmac_rps::{logging, usage_error, CliConfig, Session};
use hmac_rps_core::games::MoveSet;
use hmac_rps_core::protocol::Round;

/// Provably fair rock-paper-scissors with any odd number of moves
#[derive(Parser)]
#[command(name = "hmac-rps")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Moves in circular order: an odd number (at least 3) of unique labels
    #[arg(value_name = "MOVE", allow_hyphen_values = true, trailing_var_arg = true)]
    moves: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::setup_logging()?;

    let mut config = CliConfig::from_env();
    config.clear_screen &= console::user_attended();

    let moves = match MoveSet::new(cli.moves) {
        Ok(moves) => moves,
        Err(e) => {
            tracing::debug!(error = %e, "Refusing to start a round");
            eprintln!("{}", usage_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing::info!(moves = moves.len(), "Starting round");
    let round = Round::start(&moves)?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Session::new(&moves, &config).run(round, &mut input, &mut output)?;

    Ok(ExitCode::SUCCESS)
}
