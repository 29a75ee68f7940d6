//! Game definitions and logic.

mod circular;
mod help;
mod moves;
mod traits;

pub use circular::{determine_winner, CircularRules};
pub use help::{
    HelpPage, HelpRow, HelpTable, PagerCommand, PagerState, PaginationError, DEFAULT_PAGE_SIZE,
};
pub use moves::{MoveSet, MoveSetError, MIN_MOVES};
pub use traits::{GameRules, Verdict};
