//! Round-scoped computer move: committed once, revealed once.
//!
//! A [`SealedMove`] owns the secret key and the chosen move. Only its hmac is
//! observable until [`SealedMove::reveal`] consumes it, so a move can never be
//! revealed before it was committed, or revealed twice.

use super::{HmacKey, MoveHmac};
use crate::error::GameError;
use crate::games::MoveSet;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use std::fmt;
use tracing::debug;

/// Computer move hidden behind its hmac
pub struct SealedMove {
    key: HmacKey,
    move_index: usize,
    hmac: MoveHmac,
}

impl SealedMove {
    /// Commit to a uniformly random move using OS entropy
    pub fn commit(moves: &MoveSet) -> Result<Self, GameError> {
        Self::commit_with(moves, OsRng)
    }

    /// Commit to a uniformly random move, seeding a round-scoped CSPRNG from `source`.
    ///
    /// The key and the move index are two independent draws from that
    /// generator. It is dropped before returning.
    pub fn commit_with<R: RngCore + CryptoRng>(
        moves: &MoveSet,
        source: R,
    ) -> Result<Self, GameError> {
        let mut rng = StdRng::from_rng(source).map_err(GameError::Entropy)?;

        let key = HmacKey::generate(&mut rng);
        let position = rng.gen_range(0..moves.len());
        let hmac = MoveHmac::new(&key, &moves.names()[position]);

        debug!("Committed computer move: {}", hmac);

        Ok(Self {
            key,
            move_index: position + 1,
            hmac,
        })
    }

    /// The published hmac
    pub fn hmac(&self) -> &MoveHmac {
        &self.hmac
    }

    /// Open the commitment
    pub fn reveal(self) -> RevealedMove {
        RevealedMove {
            key: self.key,
            move_index: self.move_index,
            hmac: self.hmac,
        }
    }
}

impl fmt::Debug for SealedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SealedMove")
            .field("hmac", &self.hmac)
            .finish_non_exhaustive()
    }
}

/// An opened commitment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealedMove {
    /// Key the hmac was computed with
    pub key: HmacKey,
    /// 1-based index into the move set
    pub move_index: usize,
    /// Hmac published at commit time
    pub hmac: MoveHmac,
}

impl RevealedMove {
    /// Check the revealed key and move against the published hmac
    pub fn verify(&self, moves: &MoveSet) -> bool {
        moves
            .get(self.move_index)
            .is_some_and(|name| self.hmac.verify(&self.key, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    /// Entropy source that is never available
    struct DeadSource;

    impl RngCore for DeadSource {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used for seeding")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used for seeding")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used for seeding")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    impl CryptoRng for DeadSource {}

    #[test]
    fn test_commit_then_reveal_verifies() {
        let moves = rps();
        let sealed = SealedMove::commit(&moves).unwrap();
        let published = *sealed.hmac();

        let revealed = sealed.reveal();

        assert_eq!(revealed.hmac, published);
        assert!((1..=moves.len()).contains(&revealed.move_index));
        assert!(published.verify(&revealed.key, moves.get(revealed.move_index).unwrap()));
        assert!(revealed.verify(&moves));
    }

    #[test]
    fn test_fresh_key_every_round() {
        let moves = rps();
        let first = SealedMove::commit(&moves).unwrap().reveal();
        let second = SealedMove::commit(&moves).unwrap().reveal();

        assert_ne!(first.key, second.key);
    }

    #[test]
    fn test_seeded_commit_is_reproducible() {
        let moves = rps();
        let a = SealedMove::commit_with(&moves, StdRng::seed_from_u64(42)).unwrap();
        let b = SealedMove::commit_with(&moves, StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.reveal(), b.reveal());
    }

    #[test]
    fn test_dead_entropy_source_is_fatal() {
        let result = SealedMove::commit_with(&rps(), DeadSource);
        assert!(matches!(result, Err(GameError::Entropy(_))));
    }

    #[test]
    fn test_every_move_gets_chosen() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e"]).unwrap();
        let mut seen = [false; 5];
        let mut source = StdRng::seed_from_u64(3);

        for _ in 0..500 {
            let revealed = SealedMove::commit_with(&moves, &mut source).unwrap().reveal();
            seen[revealed.move_index - 1] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_tampered_reveal_fails() {
        let moves = rps();
        let mut revealed = SealedMove::commit(&moves).unwrap().reveal();
        revealed.move_index = revealed.move_index % moves.len() + 1;

        assert!(!revealed.verify(&moves));
    }

    #[test]
    fn test_debug_hides_secret() {
        let sealed = SealedMove::commit(&rps()).unwrap();
        let text = format!("{:?}", sealed);

        assert!(text.contains("hmac"));
        assert!(!text.contains("key"));
        assert!(!text.contains("move_index"));
    }
}
