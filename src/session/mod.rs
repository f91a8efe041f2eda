//! Game session: the turn / timer / score state machine.
//!
//! ## Phases
//!
//! `Setup -> Playing -> Over`, with `reset` returning to a fresh `Setup`
//! from anywhere and `start` (re)entering `Playing` from anywhere.
//!
//! ## Time
//!
//! A session owns a single logical clock. Hosts either call `tick` once per
//! second or report wall-clock time through `advance`; both paths resolve
//! the short pending pass that follows a pick, so there is one time source.
//!
//! ## Modules
//!
//! - `state`: the live session data (names, scores, cells, history)
//! - `clock`: turn clock and pending-pass deadline
//! - `events`: what each operation reports back
//! - `view`: serializable snapshot for presentation layers
//! - `machine`: `GameSession`, the state machine itself
//! - `controller`: `Presenter` seam and the `Controller` that drives it

pub mod state;
pub mod clock;
pub mod events;
pub mod view;
pub mod machine;
pub mod controller;

use serde::{Deserialize, Serialize};

pub use state::{Cell, Pick, Session};
pub use clock::{ClockEvent, TurnClock};
pub use events::{Events, PassReason, SessionEvent};
pub use view::{CellView, SessionView};
pub use machine::GameSession;
pub use controller::{Controller, Presenter};

/// Which phase a session is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    /// Waiting for names.
    Setup,
    /// Turns are running.
    Playing,
    /// Finished; the outcome is fixed.
    Over,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseKind::Setup => write!(f, "setup"),
            PhaseKind::Playing => write!(f, "playing"),
            PhaseKind::Over => write!(f, "over"),
        }
    }
}
