//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - HmacKey, the per-round secret revealed after the user moves
//! - Commitment, the HMAC-SHA256 of the computer's move under that key
//! - Hex-string helpers for users checking a round by hand

mod commitment;
mod key;

pub use commitment::{compute_hmac, Commitment, CommitmentError};
pub use key::{generate_key, HmacKey, KEY_LEN};
