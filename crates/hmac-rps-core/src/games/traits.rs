//! Game traits and types.

use std::fmt;

/// Outcome of one move against another, seen from the user's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    Draw,
    Win,
    Lose,
}

impl Verdict {
    /// Message shown when a round is revealed
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Draw => "Draw",
            Verdict::Win => "You win!",
            Verdict::Lose => "You lose!",
        }
    }

    /// Compact label used in the help table
    pub fn short_label(&self) -> &'static str {
        match self {
            Verdict::Draw => "Draw",
            Verdict::Win => "Win",
            Verdict::Lose => "Lose",
        }
    }

    /// The same outcome seen from the opponent's side
    pub fn reversed(&self) -> Verdict {
        match self {
            Verdict::Draw => Verdict::Draw,
            Verdict::Win => Verdict::Lose,
            Verdict::Lose => Verdict::Win,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for game rules - each rule set implements this
pub trait GameRules {
    /// Number of moves these rules are defined over
    fn move_count(&self) -> usize;

    /// Judge the user's move against the computer's move.
    ///
    /// Both indices must be below [`GameRules::move_count`].
    fn judge(&self, user_move: usize, computer_move: usize) -> Verdict;
}
