//! Commitment for the commit-reveal round.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::HmacKey;

type HmacSha256 = Hmac<Sha256>;

/// Digest length in bytes
const COMMITMENT_LEN: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("invalid commitment: {0}")]
    InvalidCommitment(String),
}

/// Commitment = HMAC-SHA256(key, move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; COMMITMENT_LEN]);

impl Commitment {
    /// Commit to `message` under `key`
    pub fn new(key: &HmacKey, message: &str) -> Result<Self, CommitmentError> {
        let mac = keyed_mac(key.as_bytes(), message.as_bytes())?;
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Parse a commitment previously shown as hex
    pub fn from_hex(hex_str: &str) -> Result<Self, CommitmentError> {
        let bytes =
            hex::decode(hex_str).map_err(|e| CommitmentError::InvalidCommitment(e.to_string()))?;
        let bytes: [u8; COMMITMENT_LEN] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            CommitmentError::InvalidCommitment(format!(
                "expected {COMMITMENT_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Verify that the given key and message produce this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &HmacKey, message: &str) -> bool {
        keyed_mac(key.as_bytes(), message.as_bytes())
            .map(|mac| mac.verify_slice(&self.0).is_ok())
            .unwrap_or(false)
    }
}

impl FromStr for Commitment {
    type Err = CommitmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// HMAC-SHA256 of `message` under a hex-encoded 32-byte key, as lowercase hex
pub fn compute_hmac(key_hex: &str, message: &str) -> Result<String, CommitmentError> {
    let key = HmacKey::from_hex(key_hex)?;
    Ok(Commitment::new(&key, message)?.to_string())
}

fn keyed_mac(key: &[u8], message: &[u8]) -> Result<HmacSha256, CommitmentError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|e| CommitmentError::InvalidKey(e.to_string()))?;
    mac.update(message);
    Ok(mac)
}
