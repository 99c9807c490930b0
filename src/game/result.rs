//! Final result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Who won. The lowest penalty total wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the lowest total.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build a result from the players sharing the lowest total.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn from_leaders(mut leaders: Vec<PlayerId>) -> Option<Self> {
        match leaders.len() {
            0 => None,
            1 => leaders.pop().map(GameResult::Winner),
            _ => Some(GameResult::Winners(leaders)),
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let shared = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(shared.is_winner(PlayerId::new(0)));
        assert!(!shared.is_winner(PlayerId::new(1)));
        assert!(shared.is_winner(PlayerId::new(2)));
    }

    #[test]
    fn test_from_leaders() {
        assert_eq!(GameResult::from_leaders(vec![]), None);
        assert_eq!(
            GameResult::from_leaders(vec![PlayerId::new(3)]),
            Some(GameResult::Winner(PlayerId::new(3)))
        );
        assert_eq!(
            GameResult::from_leaders(vec![PlayerId::new(0), PlayerId::new(1)]),
            Some(GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1)]))
        );
    }
}
