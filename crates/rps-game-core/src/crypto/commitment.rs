//! Move hmac for the commit-reveal scheme.

use super::key::{decode_32, HexError};
use super::HmacKey;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

fn keyed(key: &HmacKey, move_name: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any size");
    mac.update(move_name.as_bytes());
    mac
}

/// MoveHmac = HMAC-SHA256(key, utf8(move name))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveHmac(#[serde(with = "super::hex_bytes")] [u8; 32]);

impl MoveHmac {
    /// Compute the hmac of a move name under the given key
    pub fn new(key: &HmacKey, move_name: &str) -> Self {
        Self(keyed(key, move_name).finalize().into_bytes().into())
    }

    /// Verify that the given key and move name produce this hmac.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &HmacKey, move_name: &str) -> bool {
        keyed(key, move_name).verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for MoveHmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveHmac({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for MoveHmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for MoveHmac {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_32(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> HmacKey {
        HmacKey::from_bytes([byte; 32])
    }

    #[test]
    fn test_hmac_verification() {
        let key = key(1);
        let hmac = MoveHmac::new(&key, "Rock");

        assert!(hmac.verify(&key, "Rock"));
    }

    #[test]
    fn test_different_moves_different_hmacs() {
        let key = key(1);
        assert_ne!(MoveHmac::new(&key, "Rock"), MoveHmac::new(&key, "Paper"));
    }

    #[test]
    fn test_different_keys_different_hmacs() {
        assert_ne!(MoveHmac::new(&key(1), "Rock"), MoveHmac::new(&key(2), "Rock"));
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = key(1);
        let hmac = MoveHmac::new(&key, "Rock");

        assert!(!hmac.verify(&key, "Paper"));
        assert!(!hmac.verify(&key, "rock"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let hmac = MoveHmac::new(&key(1), "Rock");
        assert!(!hmac.verify(&key(2), "Rock"));
    }

    #[test]
    fn test_known_vector() {
        // A zero key pads to the same block as an empty key: HMAC-SHA256("", "")
        let hmac = MoveHmac::new(&HmacKey::from_bytes([0u8; 32]), "");
        assert_eq!(
            hmac.to_string(),
            "b613679a0814d9ec772f95d778c35fc5ff1697c493715653c6c712144292c5ad"
        );
    }

    #[test]
    fn test_utf8_move_names() {
        let key = key(3);
        let hmac = MoveHmac::new(&key, "Камень");

        assert!(hmac.verify(&key, "Камень"));
        assert!(!hmac.verify(&key, "Камен"));
    }

    #[test]
    fn test_parse_roundtrip() {
        let hmac = MoveHmac::new(&key(9), "Scissors");
        let parsed: MoveHmac = hmac.to_string().parse().unwrap();

        assert_eq!(hmac, parsed);
    }
}
