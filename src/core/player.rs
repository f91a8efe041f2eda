//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player: `Player::One` always moves first.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `Player`, used for names and scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player; opens every session.
    One,
    /// Second player.
    Two,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The player sitting opposite this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// 1-based seat number, as shown to humans.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Name used when the player leaves the name field blank.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A value for each of the two players.
///
/// ## Example
///
/// ```
/// use prime_duel::core::{Player, PlayerPair};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::default();
/// scores[Player::Two] += 1;
///
/// assert_eq!(scores[Player::One], 0);
/// assert_eq!(scores[Player::Two], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    one: T,
    two: T,
}

impl<T> PlayerPair<T> {
    /// Create a pair from the two values in seat order.
    #[must_use]
    pub const fn new(one: T, two: T) -> Self {
        Self { one, two }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::One => &mut self.one,
            Player::Two => &mut self.two,
        }
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::One, &self.one), (Player::Two, &self.two)].into_iter()
    }

    /// Transform both values.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerPair<U> {
        PlayerPair {
            one: f(&self.one),
            two: f(&self.two),
        }
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
