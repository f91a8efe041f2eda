//! Serializable snapshot of a session for presentation layers.

use serde::{Deserialize, Serialize};

use super::state::{Cell, Session};
use super::PhaseKind;
use crate::core::{Player, PlayerPair};
use crate::rules::FinalReport;

/// One cell as a presentation layer sees it.
///
/// Correctness is only revealed once the cell is picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Displayed value.
    pub value: u32,
    /// Whether the cell has been picked.
    pub selected: bool,
    /// Whether the pick was prime; `None` while unpicked.
    pub correct: Option<bool>,
    /// Who picked the cell.
    pub owner: Option<Player>,
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        Self {
            value: cell.value,
            selected: cell.is_selected(),
            correct: cell.correct(),
            owner: cell.owner(),
        }
    }
}

/// Everything a host needs to draw the game after a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Current phase.
    pub phase: PhaseKind,
    /// Player names; blank during setup.
    pub names: PlayerPair<String>,
    /// Scores.
    pub scores: PlayerPair<u32>,
    /// Player to move.
    pub current_player: Player,
    /// Seconds left in the turn.
    pub time_left: u32,
    /// Turn number.
    pub turn: u32,
    /// A pick was made and the turn is about to pass.
    pub pass_pending: bool,
    /// Cells in display order; empty during setup.
    pub cells: Vec<CellView>,
    /// Present once the session is over.
    pub report: Option<FinalReport>,
}

impl SessionView {
    /// View of an empty setup screen.
    #[must_use]
    pub fn setup(turn_seconds: u32) -> Self {
        Self {
            phase: PhaseKind::Setup,
            names: PlayerPair::default(),
            scores: PlayerPair::default(),
            current_player: Player::One,
            time_left: turn_seconds,
            turn: 1,
            pass_pending: false,
            cells: Vec::new(),
            report: None,
        }
    }

    /// View of a live or finished session.
    #[must_use]
    pub fn of_session(
        phase: PhaseKind,
        session: &Session,
        pass_pending: bool,
        report: Option<&FinalReport>,
    ) -> Self {
        Self {
            phase,
            names: session.names().clone(),
            scores: session.scores().clone(),
            current_player: session.current_player(),
            time_left: session.time_left(),
            turn: session.turn(),
            pass_pending,
            cells: session.cells().iter().map(CellView::from).collect(),
            report: report.cloned(),
        }
    }

    /// `"<name>'s Turn"` for the player to move.
    #[must_use]
    pub fn turn_banner(&self) -> String {
        format!("{}'s Turn", self.names[self.current_player])
    }

    /// Number of picked cells.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::NumberGrid;

    #[test]
    fn test_setup_view_is_blank() {
        let view = SessionView::setup(30);
        assert_eq!(view.phase, PhaseKind::Setup);
        assert_eq!(view.names, PlayerPair::new(String::new(), String::new()));
        assert!(view.cells.is_empty());
        assert!(view.report.is_none());
    }

    #[test]
    fn test_session_view_hides_unpicked_correctness() {
        let names = PlayerPair::new("Ann".to_string(), "Bo".to_string());
        let mut session = Session::new(names, NumberGrid::from_numbers(vec![101, 100]), 30);
        session.record_pick(0);

        let view = SessionView::of_session(PhaseKind::Playing, &session, true, None);
        assert_eq!(view.cells[0].correct, Some(true));
        assert_eq!(view.cells[0].owner, Some(Player::One));
        assert_eq!(view.cells[1].correct, None);
        assert!(!view.cells[1].selected);
        assert!(view.pass_pending);
        assert_eq!(view.selected_count(), 1);
        assert_eq!(view.turn_banner(), "Ann's Turn");
    }

    #[test]
    fn test_view_serialization() {
        let view = SessionView::setup(30);
        let json = serde_json::to_string(&view).unwrap();
        let deserialized: SessionView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, deserialized);
    }
}
