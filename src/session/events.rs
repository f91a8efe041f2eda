//! Events reported by session operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, PlayerPair, SelectionRecord};
use crate::rules::FinalReport;

/// Why the turn moved to the other player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassReason {
    /// The player picked a cell.
    Picked,
    /// The clock ran out.
    TimeUp,
}

/// A state change a presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new session began.
    Started {
        /// Names after trimming and defaulting.
        names: PlayerPair<String>,
        /// Number of cells generated.
        cells: usize,
        /// Number of distinct prime values among them.
        primes: usize,
    },
    /// A cell was picked.
    Picked(SelectionRecord),
    /// The turn passed.
    TurnPassed {
        /// Player now to move.
        to: Player,
        /// What caused the pass.
        reason: PassReason,
    },
    /// A second came off the clock.
    Ticked {
        /// Seconds left afterwards.
        time_left: u32,
    },
    /// The session finished.
    GameOver(FinalReport),
    /// The session was discarded.
    Reset,
}

/// Events produced by one operation, oldest first.
pub type Events = SmallVec<[SessionEvent; 4]>;
