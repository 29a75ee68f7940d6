//! Paginated move-versus-move help table.
//!
//! Every move is a row; columns are split into pages of at most
//! `page_size` moves. A cell holds the verdict of the row move played
//! against the column move.

use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;

use super::traits::{GameRules, Verdict};
use super::MoveSet;

/// Columns shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Navigation command typed while the table is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerCommand {
    Next,
    Previous,
    Exit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("unknown pagination command: {0:?}")]
    UnknownCommand(String),
}

impl FromStr for PagerCommand {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" => Ok(PagerCommand::Next),
            "p" => Ok(PagerCommand::Previous),
            "e" => Ok(PagerCommand::Exit),
            _ => Err(PaginationError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Whether the table stays open after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerState {
    Open,
    Closed,
}

/// One row of a rendered page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpRow<'a> {
    pub label: &'a str,
    pub cells: Vec<Verdict>,
}

/// Snapshot of the current page, ready to be drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpPage<'a> {
    /// 1-based page number
    pub number: usize,
    pub total: usize,
    pub columns: Vec<&'a str>,
    pub rows: Vec<HelpRow<'a>>,
}

/// Help table over a move set, tracking the current column page
pub struct HelpTable<'a, G: GameRules> {
    moves: &'a MoveSet,
    rules: G,
    page_size: usize,
    page: usize,
}

impl<'a, G: GameRules> HelpTable<'a, G> {
    /// Create a table opened on the first page. A zero page size is treated as one.
    pub fn new(moves: &'a MoveSet, rules: G, page_size: usize) -> Self {
        Self {
            moves,
            rules,
            page_size: page_size.max(1),
            page: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.moves.len().div_ceil(self.page_size)
    }

    /// Current page, 1-based
    pub fn current_page(&self) -> usize {
        self.page + 1
    }

    /// Move indices shown as columns on the current page
    pub fn columns(&self) -> Range<usize> {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.moves.len());
        start..end
    }

    /// Verdict for the row move played against the column move
    pub fn cell(&self, row: usize, column: usize) -> Verdict {
        self.rules.judge(row, column)
    }

    pub fn page(&self) -> HelpPage<'a> {
        let columns = self.columns();
        let rows = self
            .moves
            .iter()
            .enumerate()
            .map(|(row, label)| HelpRow {
                label,
                cells: columns.clone().map(|column| self.cell(row, column)).collect(),
            })
            .collect();

        HelpPage {
            number: self.current_page(),
            total: self.total_pages(),
            columns: columns.filter_map(|column| self.moves.get(column)).collect(),
            rows,
        }
    }

    /// Apply a navigation command. Moving past either end stays put.
    pub fn apply(&mut self, command: PagerCommand) -> PagerState {
        match command {
            PagerCommand::Next => {
                if self.page + 1 < self.total_pages() {
                    self.page += 1;
                }
                PagerState::Open
            }
            PagerCommand::Previous => {
                self.page = self.page.saturating_sub(1);
                PagerState::Open
            }
            PagerCommand::Exit => PagerState::Closed,
        }
    }
}
