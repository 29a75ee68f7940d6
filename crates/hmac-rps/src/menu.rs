//! Move menu: rendering and input parsing.

use std::io::{self, BufRead, Write};

use hmac_rps_core::games::MoveSet;
use thiserror::Error;

/// What the user picked from the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Help,
    /// 0-based move index
    Move(usize),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a menu option: {0:?}")]
    Unrecognized(String),

    #[error("move {value} is out of range (expected 1..={count})")]
    OutOfRange { value: usize, count: usize },
}

/// Parse one line of menu input. Moves are numbered from 1.
pub fn parse_choice(input: &str, move_count: usize) -> Result<MenuChoice, InputError> {
    let input = input.trim();
    match input {
        "0" => return Ok(MenuChoice::Exit),
        "?" => return Ok(MenuChoice::Help),
        _ => {}
    }

    let value: usize = input
        .parse()
        .map_err(|_| InputError::Unrecognized(input.to_string()))?;

    if (1..=move_count).contains(&value) {
        Ok(MenuChoice::Move(value - 1))
    } else {
        Err(InputError::OutOfRange {
            value,
            count: move_count,
        })
    }
}

/// Read one line, replacing invalid UTF-8. `None` once input is exhausted.
pub fn read_line_lossy<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

pub fn write_menu<W: Write>(output: &mut W, moves: &MoveSet) -> io::Result<()> {
    writeln!(output, "Available moves:")?;
    for (index, label) in moves.iter().enumerate() {
        writeln!(output, "{} - {}", index + 1, label)?;
    }
    writeln!(output, "0 - exit")?;
    writeln!(output, "? - help")?;
    write!(output, "Enter your move: ")?;
    output.flush()
}
