//! # prime-duel
//!
//! A two-player prime-picking game engine.
//!
//! Players take turns picking numbers from a 25-cell grid. Picking a prime
//! scores a point; every turn runs against a 30-second clock.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The core never draws. Hosts implement
//!    `Presenter` and feed input through a `Controller`.
//!
//! 2. **One Time Source**: Hosts drive the session clock with `tick` or
//!    `advance`. The short pause after a pick is a deadline on the same
//!    clock, not a second timer.
//!
//! 3. **Deterministic**: Grids come from a seedable ChaCha8 RNG, so a seed
//!    reproduces every grid of a run.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, actions
//! - `primes`: Primality oracle and grid generation
//! - `rules`: Outcome and final report
//! - `session`: State machine, clock, views, presenter seam
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod primes;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Action, GameConfig, GameRng, NumberRange, Player, PlayerPair, SelectionRecord};

pub use crate::error::{GameError, GameErrorKind, GameResult};

pub use crate::primes::{generate_numbers, is_prime, NumberGrid};

pub use crate::rules::{FinalReport, Outcome};

pub use crate::session::{
    Cell, CellView, Controller, Events, GameSession, PassReason, PhaseKind, Presenter,
    Session, SessionEvent, SessionView,
};
