//! Core types: players, RNG, configuration, actions.
//!
//! These are the building blocks the primality oracle, grid generator and
//! session state machine share.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use player::{Player, PlayerPair};
pub use rng::GameRng;
pub use config::{default_ranges, GameConfig, NumberRange};
pub use action::{Action, SelectionRecord};
