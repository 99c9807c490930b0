//! Game configuration.
//!
//! A `GameConfig` fixes the shape of a table before the first card is dealt:
//! seats, rows, row length, hand size, deck size and the penalty threshold.
//! Games validate it once at construction and never mutate it afterwards.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Card;

/// Default highest card value (cards run `1..=104`).
pub const DEFAULT_MAX_CARD: u16 = 104;
/// Default number of rows on the board.
pub const DEFAULT_ROW_COUNT: usize = 4;
/// Default maximum row length. The card that would be the sixth takes the row.
pub const DEFAULT_MAX_ROW_LENGTH: usize = 6;
/// Default cards dealt to each player.
pub const DEFAULT_MAX_HAND_SIZE: usize = 10;
/// Default penalty total that ends the game.
pub const DEFAULT_PENALTY_THRESHOLD: u32 = 66;

/// Complete table configuration.
///
/// ```
/// use take_six::core::GameConfig;
///
/// let config = GameConfig::new(5).with_penalty_threshold(33);
/// assert_eq!(config.row_count, 4);
/// assert_eq!(config.row_capacity(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Number of rows on the board.
    pub row_count: usize,

    /// Maximum row length `L`. A row holds at most `L - 1` cards; the card
    /// that would be the `L`-th replaces the row instead.
    pub max_row_length: usize,

    /// Cards dealt to each player, and the largest hand allowed.
    pub max_hand_size: usize,

    /// Highest card value `N`. The deck is `1..=N`.
    pub max_card: u16,

    /// Penalty total at which the game ends.
    pub penalty_threshold: u32,
}

impl GameConfig {
    /// Standard table for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            row_count: DEFAULT_ROW_COUNT,
            max_row_length: DEFAULT_MAX_ROW_LENGTH,
            max_hand_size: DEFAULT_MAX_HAND_SIZE,
            max_card: DEFAULT_MAX_CARD,
            penalty_threshold: DEFAULT_PENALTY_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_row_count(mut self, rows: usize) -> Self {
        self.row_count = rows;
        self
    }

    #[must_use]
    pub fn with_max_row_length(mut self, length: usize) -> Self {
        self.max_row_length = length;
        self
    }

    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_card(mut self, max_card: u16) -> Self {
        self.max_card = max_card;
        self
    }

    #[must_use]
    pub fn with_penalty_threshold(mut self, threshold: u32) -> Self {
        self.penalty_threshold = threshold;
        self
    }

    /// Most cards a row can hold (`max_row_length - 1`).
    #[must_use]
    pub fn row_capacity(&self) -> usize {
        self.max_row_length.saturating_sub(1)
    }

    /// Cards needed to seed every row and fill every hand.
    ///
    /// Saturates at `usize::MAX`, which no deck can supply.
    #[must_use]
    pub fn cards_needed(&self) -> usize {
        self.player_count
            .saturating_mul(self.max_hand_size)
            .saturating_add(self.row_count)
    }

    /// Is `card` inside `[1, max_card]`?
    #[must_use]
    pub fn in_range(&self, card: Card) -> bool {
        card.value() >= 1 && card.value() <= self.max_card
    }

    /// Check that a game can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_count == 0 {
            return Err(ConfigError::NoRows);
        }
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > 255 {
            return Err(ConfigError::TooManyPlayers {
                count: self.player_count,
            });
        }
        if self.max_row_length < 2 {
            return Err(ConfigError::RowLengthTooShort {
                max_row_length: self.max_row_length,
            });
        }
        if self.max_hand_size == 0 {
            return Err(ConfigError::EmptyHands);
        }
        if self.max_card == 0 {
            return Err(ConfigError::EmptyDeck);
        }

        let needed = self.cards_needed();
        let available = usize::from(self.max_card);
        if needed > available {
            return Err(ConfigError::DeckTooSmall { needed, available });
        }

        Ok(())
    }
}
