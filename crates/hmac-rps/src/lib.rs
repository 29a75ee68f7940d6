//! Terminal frontend for HMAC rock-paper-scissors.
//!
//! The binary validates the moves given on the command line, commits to the
//! computer's move, and runs one interactive [`Session`] on stdin/stdout.

mod config;
mod help_view;
pub mod logging;
mod menu;
mod session;

pub use config::CliConfig;
pub use help_view::{browse, render_page};
pub use menu::{parse_choice, write_menu, InputError, MenuChoice};
pub use session::{Session, SessionEnd};

use hmac_rps_core::games::MoveSetError;

/// Example invocation shown after an argument error
pub const USAGE_EXAMPLE: &str = "Example: hmac-rps Rock Paper Scissors";

/// Message printed when the command-line moves cannot be played
pub fn usage_error(error: &MoveSetError) -> String {
    format!(
        "Error: Invalid arguments. You must provide an odd number (>= 3) of unique moves.\n\
         Reason: {error}\n\
         {USAGE_EXAMPLE}"
    )
}
