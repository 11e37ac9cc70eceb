//! Cryptographic primitives for the committed computer move.
//!
//! This module provides:
//! - HmacKey, a fresh 256-bit secret per round
//! - MoveHmac, the published HMAC-SHA256 of the move name
//! - SealedMove and RevealedMove for the commit-reveal round

mod commitment;
mod key;
mod sealed;

pub use commitment::MoveHmac;
pub use key::{HexError, HmacKey};
pub use sealed::{RevealedMove, SealedMove};

/// Serde helper: 32 bytes as a lowercase hex string
mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::key::decode_32(&hex_str).map_err(serde::de::Error::custom)
    }
}
