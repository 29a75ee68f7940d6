//! Validated, ordered set of move labels.

use std::collections::HashSet;
use thiserror::Error;

use super::CircularRules;

/// Smallest playable number of moves
pub const MIN_MOVES: usize = 3;

/// Reasons a list of moves cannot be played
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveSetError {
    #[error("expected at least {MIN_MOVES} moves, got {0}")]
    TooFewMoves(usize),

    #[error("expected an odd number of moves, got {0}")]
    EvenMoveCount(usize),

    #[error("move {0:?} is listed more than once")]
    DuplicateMove(String),
}

/// Ordered move labels; a move is identified by its index.
///
/// Always holds an odd number of at least [`MIN_MOVES`] distinct labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    labels: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set. Labels are compared case-sensitively.
    pub fn new<I, S>(labels: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.len() < MIN_MOVES {
            return Err(MoveSetError::TooFewMoves(labels.len()));
        }
        if labels.len() % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount(labels.len()));
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(MoveSetError::DuplicateMove(label.clone()));
            }
        }

        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of the move at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Circular rules over this move set
    pub fn rules(&self) -> CircularRules {
        CircularRules::for_moves(self)
    }
}
