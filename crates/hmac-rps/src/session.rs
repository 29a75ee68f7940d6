//! Interactive round over a line-based text stream.

use std::io::{BufRead, Write};

use anyhow::Result;
use hmac_rps_core::games::{HelpTable, MoveSet};
use hmac_rps_core::protocol::{Round, RoundOutcome};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::help_view;
use crate::menu::{parse_choice, read_line_lossy, write_menu, InputError, MenuChoice};

/// How a session ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user moved and the round was revealed
    Revealed(RoundOutcome),
    /// The user chose exit, or input ended before a move
    Exited,
}

/// One interactive round: commitment, menu, reveal
pub struct Session<'a> {
    moves: &'a MoveSet,
    config: &'a CliConfig,
}

impl<'a> Session<'a> {
    pub fn new(moves: &'a MoveSet, config: &'a CliConfig) -> Self {
        Self { moves, config }
    }

    /// Show the round's commitment, then read lines until the user moves or leaves
    pub fn run<R, W>(&self, round: Round<'a>, input: &mut R, output: &mut W) -> Result<SessionEnd>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "HMAC: {}", round.commitment())?;
        write_menu(output, self.moves)?;

        loop {
            let Some(line) = read_line_lossy(input)? else {
                info!("Input closed before a move was made");
                writeln!(output)?;
                return Ok(SessionEnd::Exited);
            };

            let choice = parse_choice(&line, self.moves.len()).and_then(|choice| match choice {
                MenuChoice::Move(index) => round
                    .check_move(index)
                    .map(MenuChoice::Move)
                    .map_err(|_| InputError::OutOfRange {
                        value: index + 1,
                        count: self.moves.len(),
                    }),
                other => Ok(other),
            });

            match choice {
                Ok(MenuChoice::Exit) => {
                    writeln!(output, "Exiting...")?;
                    return Ok(SessionEnd::Exited);
                }
                Ok(MenuChoice::Help) => {
                    let mut table =
                        HelpTable::new(self.moves, self.moves.rules(), self.config.page_size);
                    help_view::browse(&mut table, input, output, self.config.clear_screen)?;
                    write_menu(output, self.moves)?;
                }
                Ok(MenuChoice::Move(index)) => {
                    let outcome = round.play(index)?;
                    self.reveal(&outcome, output)?;
                    return Ok(SessionEnd::Revealed(outcome));
                }
                Err(e) => {
                    debug!(error = %e, "Rejected menu input");
                    writeln!(output, "Invalid input. Please try again.")?;
                    write_menu(output, self.moves)?;
                }
            }
        }
    }

    fn reveal<W: Write>(&self, outcome: &RoundOutcome, output: &mut W) -> Result<()> {
        let user_label = self.moves.get(outcome.user_move).unwrap_or_default();
        let computer_label = self.moves.get(outcome.computer_move).unwrap_or_default();

        writeln!(output, "Your move: {user_label}")?;
        writeln!(output, "Computer move: {computer_label}")?;
        writeln!(output, "{}", outcome.verdict)?;
        writeln!(output, "HMAC key: {}", outcome.key.to_hex())?;
        writeln!(output)?;
        writeln!(
            output,
            "To verify, compute HMAC-SHA256 of \"{computer_label}\" with the hex key above"
        )?;
        writeln!(output, "and compare it with the HMAC shown before your move.")?;
        output.flush()?;
        Ok(())
    }
}
