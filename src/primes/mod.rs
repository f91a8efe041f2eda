//! Primality and number-grid generation.
//!
//! - `oracle`: trial-division primality test
//! - `grid`: randomized grids of numbers with their prime subset

pub mod oracle;
pub mod grid;

pub use oracle::is_prime;
pub use grid::{generate_numbers, NumberGrid};
