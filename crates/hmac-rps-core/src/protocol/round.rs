//! One commit-reveal round against the computer.
//!
//! A [`Round`] picks the computer's move and commits to it before the user
//! chooses. Playing consumes the round and reveals the move and key in a
//! [`RoundOutcome`], so a round can be revealed at most once.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::crypto::{Commitment, CommitmentError, HmacKey};
use crate::games::{CircularRules, GameRules, MoveSet, Verdict};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("move {index} is out of range (expected 0..{count})")]
    MoveOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

/// A committed, not yet revealed round
pub struct Round<'a> {
    moves: &'a MoveSet,
    rules: CircularRules,
    key: HmacKey,
    computer_move: usize,
    commitment: Commitment,
}

impl<'a> Round<'a> {
    /// Start a round using the operating system's secure random source
    pub fn start(moves: &'a MoveSet) -> Result<Self, RoundError> {
        Self::start_with_rng(moves, &mut OsRng)
    }

    /// Start a round drawing the key and the computer's move from `rng`
    pub fn start_with_rng<R: RngCore + CryptoRng>(
        moves: &'a MoveSet,
        rng: &mut R,
    ) -> Result<Self, RoundError> {
        let key = HmacKey::generate_with(rng);
        let computer_move = rng.gen_range(0..moves.len());
        let commitment = Commitment::new(&key, &moves.labels()[computer_move])?;

        debug!(moves = moves.len(), %commitment, "Round committed");

        Ok(Self {
            moves,
            rules: moves.rules(),
            key,
            computer_move,
            commitment,
        })
    }

    /// Commitment to show the user before they move
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Check that `index` names a move in this round
    pub fn check_move(&self, index: usize) -> Result<usize, RoundError> {
        if index < self.moves.len() {
            Ok(index)
        } else {
            Err(RoundError::MoveOutOfRange {
                index,
                count: self.moves.len(),
            })
        }
    }

    /// Play the user's move and reveal the round
    pub fn play(self, user_move: usize) -> Result<RoundOutcome, RoundError> {
        self.check_move(user_move)?;
        let verdict = self.rules.judge(user_move, self.computer_move);

        info!(
            user_move,
            computer_move = self.computer_move,
            ?verdict,
            "Round revealed"
        );

        Ok(RoundOutcome {
            user_move,
            computer_move: self.computer_move,
            verdict,
            key: self.key,
            commitment: self.commitment,
        })
    }
}

impl fmt::Debug for Round<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("moves", &self.moves.len())
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Everything revealed once the user has moved
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub user_move: usize,
    pub computer_move: usize,
    pub verdict: Verdict,
    pub key: HmacKey,
    pub commitment: Commitment,
}

impl RoundOutcome {
    /// Recompute the commitment from the revealed key and computer move
    pub fn verify(&self, moves: &MoveSet) -> bool {
        moves
            .get(self.computer_move)
            .is_some_and(|label| self.commitment.verify(&self.key, label))
    }
}
