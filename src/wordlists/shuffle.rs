//! Deterministic seeded shuffling

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Seed for a deterministic permutation
///
/// Built from a text phrase so it can come straight from configuration.
/// `FxHasher` carries no per-process randomness, so the same phrase maps to
/// the same seed on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    #[must_use]
    pub fn new(phrase: &str) -> Self {
        let mut hasher = FxHasher::default();
        phrase.hash(&mut hasher);
        Self(hasher.finish())
    }

    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Permute `items` deterministically for `seed`
#[must_use]
pub fn shuffle<T>(mut items: Vec<T>, seed: Seed) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed.value());
    items.shuffle(&mut rng);
    items
}
