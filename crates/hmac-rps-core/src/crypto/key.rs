//! Per-round HMAC key.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::str::FromStr;

use super::CommitmentError;

/// Key length in bytes
pub const KEY_LEN: usize = 32;

/// Secret key for one round's commitment
#[derive(Clone, PartialEq, Eq)]
pub struct HmacKey([u8; KEY_LEN]);

impl HmacKey {
    /// Create a new key from the operating system's secure random source
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    /// Create a new key from the given cryptographically secure generator
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a key from hex; it must decode to exactly [`KEY_LEN`] bytes
    pub fn from_hex(hex_str: &str) -> Result<Self, CommitmentError> {
        let bytes = hex::decode(hex_str).map_err(|e| CommitmentError::InvalidKey(e.to_string()))?;
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            CommitmentError::InvalidKey(format!(
                "expected {KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for HmacKey {
    type Err = CommitmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey({}..)", hex::encode(&self.0[..4]))
    }
}

/// Generate a fresh key and return it as lowercase hex
pub fn generate_key() -> String {
    HmacKey::generate().to_hex()
}
