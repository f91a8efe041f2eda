//! Error types with caller location tracking.

use derive_more::{Display, Error};

use crate::session::PhaseKind;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A cell index outside the grid.
    #[display("cell index {index} out of range (grid has {len} cells)")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of cells in the grid.
        len: usize,
    },
    /// An operation that is not allowed in the current phase.
    #[display("`{operation}` is not allowed during {phase}")]
    WrongPhase {
        /// Operation that was attempted.
        operation: &'static str,
        /// Phase the session was in.
        phase: PhaseKind,
    },
    /// Configuration failed to parse or validate.
    #[display("invalid configuration: {_0}")]
    InvalidConfig(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Out-of-range cell index.
    #[track_caller]
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::new(GameErrorKind::InvalidIndex { index, len })
    }

    /// Operation attempted in the wrong phase.
    #[track_caller]
    pub fn wrong_phase(operation: &'static str, phase: PhaseKind) -> Self {
        Self::new(GameErrorKind::WrongPhase { operation, phase })
    }

    /// Bad configuration.
    #[track_caller]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidConfig(message.into()))
    }
}

impl From<toml::de::Error> for GameError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::invalid_config(format!("TOML parse error: {}", err))
    }
}

/// Result alias for fallible game operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location() {
        let err = GameError::invalid_index(30, 25);
        let text = err.to_string();

        assert!(text.starts_with("cell index 30 out of range (grid has 25 cells)"));
        assert!(text.contains("error.rs"));
    }

    #[test]
    fn test_wrong_phase_display() {
        let err = GameError::wrong_phase("select", PhaseKind::Setup);
        assert_eq!(
            err.kind.to_string(),
            "`select` is not allowed during setup"
        );
    }

    #[test]
    fn test_kind_is_comparable() {
        let err = GameError::invalid_config("no ranges");
        assert_eq!(err.kind, GameErrorKind::InvalidConfig("no ranges".into()));
    }
}
