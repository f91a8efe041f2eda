//! Actions a host can feed into a session, and the record of accepted picks.
//!
//! Every session operation has an `Action` counterpart so a host can drive
//! the game as a reducer: `(session, action) -> events`. Picks that the
//! session accepts are kept as `SelectionRecord`s for replay and display.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::Player;

/// An input to a game session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Begin a new session with the two typed-in names.
    Start {
        /// Raw name for player one (trimmed, blank means default).
        player_one: String,
        /// Raw name for player two.
        player_two: String,
    },
    /// Pick the cell at this index.
    Select(usize),
    /// One second of turn time elapsed.
    Tick,
    /// Wall-clock time elapsed since the host last reported.
    Advance(Duration),
    /// Stop the session and decide the winner.
    End,
    /// Drop the session and return to setup.
    Reset,
}

impl Action {
    /// Create a start action.
    #[must_use]
    pub fn start(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Action::Start {
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Short name of the operation, used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Start { .. } => "start",
            Action::Select(_) => "select",
            Action::Tick => "tick",
            Action::Advance(_) => "advance",
            Action::End => "end",
            Action::Reset => "reset",
        }
    }
}

/// A pick the session accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// The player who picked.
    pub player: Player,

    /// Index of the picked cell.
    pub index: usize,

    /// Value shown on the cell.
    pub value: u32,

    /// Whether the value was prime.
    pub correct: bool,

    /// Turn number the pick was made in (starts at 1).
    pub turn: u32,
}
