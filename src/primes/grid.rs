//! Randomized number grids.
//!
//! Each cell is drawn in two steps: pick one of the configured ranges
//! uniformly, then pick a value uniformly inside it. Duplicates are kept.
//! After drawing, every distinct prime value lands in the prime set, so
//! correctness is decided by value, not by position.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::oracle::is_prime;
use crate::core::{GameRng, NumberRange};

/// A generated grid: the ordered values and the set of those that are prime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberGrid {
    /// Values in display order.
    pub numbers: Vec<u32>,
    /// Distinct values of `numbers` that are prime.
    pub primes: FxHashSet<u32>,
}

impl NumberGrid {
    /// Build a grid from explicit values, computing the prime set.
    #[must_use]
    pub fn from_numbers(numbers: Vec<u32>) -> Self {
        let primes = numbers
            .iter()
            .copied()
            .filter(|&n| is_prime(i64::from(n)))
            .collect();
        Self { numbers, primes }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Check if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Check if a value belongs to the prime set.
    #[must_use]
    pub fn is_prime_value(&self, value: u32) -> bool {
        self.primes.contains(&value)
    }
}

/// Draw `count` values from `ranges`.
///
/// Returns an empty grid if `ranges` is empty.
pub fn generate_numbers(rng: &mut GameRng, ranges: &[NumberRange], count: usize) -> NumberGrid {
    let mut numbers = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(range) = rng.choose(ranges) else {
            break;
        };
        numbers.push(rng.gen_range_inclusive(range.bounds()));
    }

    let grid = NumberGrid::from_numbers(numbers);
    debug!(cells = grid.len(), primes = grid.primes.len(), "Generated number grid");
    grid
}
