//! Seedable grid randomness.
//!
//! A `GameSession` owns one root `GameRng`. Every `start` forks a child from
//! it, so a run's grids depend only on the root seed and how many sessions
//! came before.
//!
//! ```
//! use prime_duel::core::GameRng;
//!
//! let mut root_a = GameRng::new(42);
//! let mut root_b = GameRng::new(42);
//!
//! let mut grid_a = root_a.fork();
//! let mut grid_b = root_b.fork();
//! assert_eq!(grid_a.gen_range_inclusive(100..=500), grid_b.gen_range_inclusive(100..=500));
//! ```

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Weyl increment used to spread child seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 generator that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    children: u64,
}

impl GameRng {
    /// Seeded generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            children: 0,
        }
    }

    /// Generator seeded from OS randomness.
    ///
    /// The seed is still recorded, so logging it makes the run reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next child generator.
    ///
    /// The n-th child of a given seed is always the same generator.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.children += 1;
        Self::new(self.seed.wrapping_add(self.children.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform draw from `range`, both ends included.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Uniform pick from `items`; `None` when empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
