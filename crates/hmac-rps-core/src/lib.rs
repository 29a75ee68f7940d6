//! HMAC Rock-Paper-Scissors Core Library
//!
//! This crate provides the move rules, commit-reveal primitives, and the
//! single-round protocol for a provably fair N-move rock-paper-scissors game.

pub mod crypto;
pub mod games;
pub mod protocol;

pub use crypto::{compute_hmac, generate_key, Commitment, CommitmentError, HmacKey};
pub use games::{
    determine_winner, CircularRules, GameRules, HelpTable, MoveSet, MoveSetError, PagerCommand,
    PaginationError, Verdict,
};
pub use protocol::{Round, RoundError, RoundOutcome};
