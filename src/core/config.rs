//! Game configuration.
//!
//! `GameConfig` collects every tunable of a session: turn length, grid
//! shape, the number ranges grids are drawn from, the post-selection
//! feedback delay and the RNG seed. Defaults reproduce the classic game.
//! Configs can be loaded from TOML; missing keys fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{GameError, GameResult};

/// Seconds a player has per turn.
pub const DEFAULT_TURN_SECONDS: u32 = 30;

/// Number of cells on the grid.
pub const DEFAULT_GRID_SIZE: usize = 25;

/// Columns used when laying the grid out.
pub const DEFAULT_GRID_COLUMNS: usize = 5;

/// Delay between a selection and the turn passing.
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 500;

/// Largest accepted `grid_size`.
pub const MAX_GRID_SIZE: usize = 1024;

/// Largest accepted `grid_columns`.
pub const MAX_GRID_COLUMNS: usize = 64;

/// An inclusive range of integers a grid cell can be drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberRange {
    /// Smallest value (inclusive).
    pub low: u32,
    /// Largest value (inclusive).
    pub high: u32,
}

impl NumberRange {
    /// Create a new inclusive range.
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Check if a value lies inside the range.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// The range as a std inclusive range.
    #[must_use]
    pub fn bounds(&self) -> std::ops::RangeInclusive<u32> {
        self.low..=self.high
    }
}

impl std::fmt::Display for NumberRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// The four ranges of the classic game.
///
/// Adjacent ranges share their boundary, so 200, 300 and 400 are twice as
/// likely as interior values.
#[must_use]
pub fn default_ranges() -> Vec<NumberRange> {
    vec![
        NumberRange::new(100, 200),
        NumberRange::new(200, 300),
        NumberRange::new(300, 400),
        NumberRange::new(400, 500),
    ]
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds on the clock at the start of every turn.
    pub turn_seconds: u32,

    /// Number of cells generated per session.
    pub grid_size: usize,

    /// Columns used by hosts that lay the grid out as a table.
    pub grid_columns: usize,

    /// Ranges cells are drawn from; one is picked uniformly per cell.
    pub ranges: Vec<NumberRange>,

    /// Milliseconds between a selection and the turn passing.
    /// Zero passes the turn synchronously. Must be under one second.
    pub feedback_delay_ms: u64,

    /// End the session as soon as the last cell is picked instead of
    /// waiting for the clock to run out.
    pub end_on_last_selection: bool,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_seconds: DEFAULT_TURN_SECONDS,
            grid_size: DEFAULT_GRID_SIZE,
            grid_columns: DEFAULT_GRID_COLUMNS,
            ranges: default_ranges(),
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
            end_on_last_selection: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the turn length in seconds.
    #[must_use]
    pub fn with_turn_seconds(mut self, seconds: u32) -> Self {
        self.turn_seconds = seconds;
        self
    }

    /// Set the number of cells.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Replace the number ranges.
    #[must_use]
    pub fn with_ranges(mut self, ranges: Vec<NumberRange>) -> Self {
        self.ranges = ranges;
        self
    }

    /// Set the post-selection feedback delay.
    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// End the session as soon as the final cell is picked.
    #[must_use]
    pub fn with_end_on_last_selection(mut self, enabled: bool) -> Self {
        self.end_on_last_selection = enabled;
        self
    }

    /// The feedback delay as a `Duration`.
    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> GameResult<()> {
        if self.turn_seconds == 0 {
            return Err(GameError::invalid_config("turn_seconds must be at least 1"));
        }
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(GameError::invalid_config(format!(
                "grid_size must be between 1 and {MAX_GRID_SIZE}"
            )));
        }
        if !(1..=MAX_GRID_COLUMNS).contains(&self.grid_columns) {
            return Err(GameError::invalid_config(format!(
                "grid_columns must be between 1 and {MAX_GRID_COLUMNS}"
            )));
        }
        if self.ranges.is_empty() {
            return Err(GameError::invalid_config("at least one number range is required"));
        }
        if let Some(range) = self.ranges.iter().find(|r| r.low > r.high) {
            return Err(GameError::invalid_config(format!(
                "range {} has low above high",
                range
            )));
        }
        if self.feedback_delay_ms >= 1000 {
            return Err(GameError::invalid_config(
                "feedback_delay_ms must be below 1000 so a pass settles before the next tick",
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GameError::invalid_config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.turn_seconds, 30);
        assert_eq!(config.grid_size, 25);
        assert_eq!(config.ranges.len(), 4);
        assert_eq!(config.feedback_delay(), Duration::from_millis(500));
        assert!(!config.end_on_last_selection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_turn_seconds(10)
            .with_seed(123)
            .with_feedback_delay(Duration::ZERO)
            .with_end_on_last_selection(true);

        assert_eq!(config.turn_seconds, 10);
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.feedback_delay_ms, 0);
        assert!(config.end_on_last_selection);
    }

    #[test]
    fn test_range_contains_boundaries() {
        let range = NumberRange::new(100, 200);
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert!(GameConfig::default().with_turn_seconds(0).validate().is_err());
        assert!(GameConfig::default().with_grid_size(0).validate().is_err());
        assert!(GameConfig::default().with_ranges(vec![]).validate().is_err());
        assert!(GameConfig::default()
            .with_ranges(vec![NumberRange::new(5, 4)])
            .validate()
            .is_err());
        assert!(GameConfig::default()
            .with_feedback_delay(Duration::from_secs(1))
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_caps_grid_shape() {
        assert!(GameConfig::default().with_grid_size(MAX_GRID_SIZE).validate().is_ok());
        assert!(GameConfig::default().with_grid_size(MAX_GRID_SIZE + 1).validate().is_err());
        assert!(GameConfig::default().with_grid_size(usize::MAX).validate().is_err());

        let mut config = GameConfig::default();
        config.grid_columns = MAX_GRID_COLUMNS + 1;
        assert!(config.validate().is_err());
        config.grid_columns = MAX_GRID_COLUMNS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_rejects_huge_grid() {
        let err = GameConfig::from_toml_str("grid_size = 9223372036854775807").unwrap_err();
        assert!(matches!(err.kind, crate::error::GameErrorKind::InvalidConfig(_)));

        let err = GameConfig::from_toml_str("grid_columns = 100000").unwrap_err();
        assert!(matches!(err.kind, crate::error::GameErrorKind::InvalidConfig(_)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("turn_seconds = 15\nseed = 9\n").unwrap();
        assert_eq!(config.turn_seconds, 15);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.grid_size, 25);
        assert_eq!(config.ranges, default_ranges());
    }

    #[test]
    fn test_toml_ranges() {
        let text = r#"
            [[ranges]]
            low = 2
            high = 50
        "#;
        let config = GameConfig::from_toml_str(text).unwrap();
        assert_eq!(config.ranges, vec![NumberRange::new(2, 50)]);
    }

    #[test]
    fn test_toml_invalid_is_config_error() {
        let err = GameConfig::from_toml_str("turn_seconds = \"soon\"").unwrap_err();
        assert!(matches!(err.kind, crate::error::GameErrorKind::InvalidConfig(_)));

        let err = GameConfig::from_toml_str("feedback_delay_ms = 2000").unwrap_err();
        assert!(matches!(err.kind, crate::error::GameErrorKind::InvalidConfig(_)));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GameConfig::default()
            .with_seed(5)
            .with_turn_seconds(20)
            .with_end_on_last_selection(true);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
    }
}
