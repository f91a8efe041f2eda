//! Outcome of a finished session.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerPair};

/// Result of a completed session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One player scored strictly more.
    Winner(Player),
    /// Scores are equal.
    Tie,
}

impl Outcome {
    /// Decide the outcome from the final scores.
    #[must_use]
    pub fn decide(scores: &PlayerPair<u32>) -> Self {
        let one = scores[Player::One];
        let two = scores[Player::Two];
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }
}

/// Everything a host shows once the session is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    /// Player names as used during the session.
    pub names: PlayerPair<String>,
    /// Final scores.
    pub scores: PlayerPair<u32>,
    /// Who won.
    pub outcome: Outcome,
}

impl FinalReport {
    /// Build a report, deciding the outcome from the scores.
    #[must_use]
    pub fn new(names: PlayerPair<String>, scores: PlayerPair<u32>) -> Self {
        let outcome = Outcome::decide(&scores);
        Self {
            names,
            scores,
            outcome,
        }
    }

    /// The banner text: `"<name> Wins!"` or `"It's a Tie!"`.
    #[must_use]
    pub fn announcement(&self) -> String {
        match self.outcome.winner() {
            Some(player) => format!("{} Wins!", self.names[player]),
            None => "It's a Tie!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> PlayerPair<String> {
        PlayerPair::new("Ann".to_string(), "Bo".to_string())
    }

    #[test]
    fn test_decide() {
        assert_eq!(Outcome::decide(&PlayerPair::new(3, 1)), Outcome::Winner(Player::One));
        assert_eq!(Outcome::decide(&PlayerPair::new(0, 1)), Outcome::Winner(Player::Two));
        assert_eq!(Outcome::decide(&PlayerPair::new(2, 2)), Outcome::Tie);
        assert_eq!(Outcome::decide(&PlayerPair::new(0, 0)), Outcome::Tie);
    }

    #[test]
    fn test_is_winner() {
        let result = Outcome::Winner(Player::Two);
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));
        assert_eq!(result.winner(), Some(Player::Two));

        assert!(!Outcome::Tie.is_winner(Player::One));
        assert_eq!(Outcome::Tie.winner(), None);
    }

    #[test]
    fn test_announcement() {
        assert_eq!(FinalReport::new(names(), PlayerPair::new(1, 4)).announcement(), "Bo Wins!");
        assert_eq!(FinalReport::new(names(), PlayerPair::new(5, 4)).announcement(), "Ann Wins!");
        assert_eq!(FinalReport::new(names(), PlayerPair::new(4, 4)).announcement(), "It's a Tie!");
    }
}
