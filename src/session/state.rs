//! Live session data.
//!
//! `Session` holds everything that changes while turns run. Cells and the
//! pick history use `im` persistent vectors so snapshots are O(1) clones.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::core::{Player, PlayerPair, SelectionRecord};
use crate::primes::NumberGrid;

/// A pick that consumed a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pick {
    /// Who picked the cell.
    pub player: Player,
    /// Whether the value was prime.
    pub correct: bool,
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Displayed value.
    pub value: u32,
    /// Set once the cell is picked.
    pub pick: Option<Pick>,
}

impl Cell {
    /// Create an unpicked cell.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value, pick: None }
    }

    /// Check if the cell has been picked.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.pick.is_some()
    }

    /// The player who picked the cell.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        self.pick.map(|p| p.player)
    }

    /// Whether the pick was correct, once picked.
    #[must_use]
    pub fn correct(&self) -> Option<bool> {
        self.pick.map(|p| p.correct)
    }
}

/// Trim a typed-in name, falling back to the seat's default when blank.
#[must_use]
pub fn normalize_name(raw: &str, player: Player) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        player.default_name().to_string()
    } else {
        trimmed.to_string()
    }
}

/// State of a running (or finished) session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    names: PlayerPair<String>,
    scores: PlayerPair<u32>,
    current: Player,
    time_left: u32,
    turn: u32,
    cells: Vector<Cell>,
    primes: FxHashSet<u32>,
    history: Vector<SelectionRecord>,
}

impl Session {
    /// Create a session with zero scores, player one to move and a full clock.
    #[must_use]
    pub fn new(names: PlayerPair<String>, grid: NumberGrid, turn_seconds: u32) -> Self {
        Self {
            names,
            scores: PlayerPair::default(),
            current: Player::One,
            time_left: turn_seconds,
            turn: 1,
            cells: grid.numbers.into_iter().map(Cell::new).collect(),
            primes: grid.primes,
            history: Vector::new(),
        }
    }

    /// Both player names.
    #[must_use]
    pub fn names(&self) -> &PlayerPair<String> {
        &self.names
    }

    /// One player's name.
    #[must_use]
    pub fn name(&self, player: Player) -> &str {
        &self.names[player]
    }

    /// Both scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerPair<u32> {
        &self.scores
    }

    /// One player's score.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Seconds left in the current turn.
    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Cells in display order.
    #[must_use]
    pub fn cells(&self) -> &Vector<Cell> {
        &self.cells
    }

    /// A single cell.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell values in display order.
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().map(|c| c.value)
    }

    /// Distinct prime values on the grid.
    #[must_use]
    pub fn primes(&self) -> &FxHashSet<u32> {
        &self.primes
    }

    /// Accepted picks, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<SelectionRecord> {
        &self.history
    }

    /// Number of picked cells.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_selected()).count()
    }

    /// True iff every cell has been picked.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.cells.iter().all(Cell::is_selected)
    }

    /// Consume the cell at `index` for the current player.
    ///
    /// Caller guarantees the index is in range and the cell is unpicked.
    pub(super) fn record_pick(&mut self, index: usize) -> SelectionRecord {
        let value = self.cells[index].value;
        let correct = self.primes.contains(&value);
        let player = self.current;

        if correct {
            self.scores[player] += 1;
        }
        self.cells.set(index, Cell {
            value,
            pick: Some(Pick { player, correct }),
        });

        let record = SelectionRecord {
            player,
            index,
            value,
            correct,
            turn: self.turn,
        };
        self.history.push_back(record);
        record
    }

    /// Hand the turn to the other player with a full clock.
    pub(super) fn pass_turn(&mut self, turn_seconds: u32) -> Player {
        self.current = self.current.other();
        self.time_left = turn_seconds;
        self.turn += 1;
        self.current
    }

    /// Take one second off the clock, returning what is left.
    pub(super) fn count_down(&mut self) -> u32 {
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left
    }
}
