//! Command-line interface for prime-duel.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use prime_duel::GameConfig;

/// Prime Duel - two players, one grid, pick the primes
#[derive(Parser, Debug)]
#[command(name = "prime-duel")]
#[command(about = "Two-player prime picking in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML game configuration; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RNG seed for reproducible grids
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds per turn
    #[arg(long)]
    pub turn_seconds: Option<u32>,

    /// Milliseconds between a pick and the turn passing (0 = instant)
    #[arg(long)]
    pub feedback_ms: Option<u64>,

    /// End the game as soon as the last cell is picked
    #[arg(long)]
    pub end_on_last_pick: bool,

    /// Where to write logs (the terminal is taken by the UI)
    #[arg(long, default_value = "prime_duel.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Build the game configuration from the config file and flags.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(seconds) = self.turn_seconds {
            config = config.with_turn_seconds(seconds);
        }
        if let Some(ms) = self.feedback_ms {
            config = config.with_feedback_delay(Duration::from_millis(ms));
        }
        if self.end_on_last_pick {
            config = config.with_end_on_last_selection(true);
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}
