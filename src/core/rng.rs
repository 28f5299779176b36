//! Shuffle randomness for the dealer.
//!
//! ## Key Features
//!
//! - **Seedable**: Same seed produces the same deals, for tests and replays
//! - **Entropy-seeded by default**: `from_entropy` draws the full ChaCha
//!   key from the operating system
//! - **Snapshot-friendly**: cloning captures the exact stream position, so a
//!   restored snapshot re-deals identically
//!
//! ## Usage
//!
//! ```
//! use judgement_engine::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shuffle source backed by ChaCha8.
///
/// ChaCha8 is fast while keeping cryptographic-quality output.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG whose full 256-bit key comes from the operating system,
    /// so every permutation of the deck stays reachable.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// Two streams are equal when they share key, stream id and position, i.e.
/// they will produce the same output from here on.
impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.inner.get_seed() == other.inner.get_seed()
            && self.inner.get_stream() == other.inner.get_stream()
            && self.inner.get_word_pos() == other.inner.get_word_pos()
    }
}

impl Eq for GameRng {}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u8> {
        let mut deck: Vec<u8> = (0..52).collect();
        rng.shuffle(&mut deck);
        deck
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u8> = (0..52).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (overwhelmingly likely for 52 items)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_clone_continues_identically() {
        let mut rng = GameRng::new(7);
        shuffled(&mut rng);

        let mut copy = rng.clone();
        assert_eq!(rng, copy);
        assert_eq!(shuffled(&mut rng), shuffled(&mut copy));

        shuffled(&mut rng);
        assert_ne!(rng, copy);
    }

    #[test]
    fn test_entropy_streams_are_independent() {
        let mut a = GameRng::from_entropy();
        let mut b = GameRng::from_entropy();
        assert_ne!(a, b);

        assert_ne!(shuffled(&mut a), shuffled(&mut b));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3, 4, 5];
        assert!(items.contains(rng.choose(&items).unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
