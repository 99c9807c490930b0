//! Card values and the penalty model.
//!
//! Penalties ("cattle heads") are charged when a player takes a row:
//! - multiples of 11 are worth 5
//! - multiples of 10 add 3, other multiples of 5 add 2
//! - any card matching none of the above is worth 1
//!
//! Contributions stack, so 55 is worth 5 + 2 = 7.

use serde::{Deserialize, Serialize};

/// A card, identified by its face value.
///
/// Values are unique within a deck, so `Card` ordering is the resolution
/// order of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u16);

impl Card {
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Penalty charged for this card when its row is taken.
    ///
    /// ```
    /// use take_six::cards::Card;
    ///
    /// assert_eq!(Card::new(7).penalty(), 1);
    /// assert_eq!(Card::new(55).penalty(), 7);
    /// ```
    #[must_use]
    pub const fn penalty(self) -> u32 {
        card_penalty(self)
    }
}

impl From<u16> for Card {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Forward so width flags ("{:3}") pad the number
        self.0.fmt(f)
    }
}

/// Penalty of a single card. Always at least 1.
#[must_use]
pub const fn card_penalty(card: Card) -> u32 {
    let value = card.0;
    let mut penalty = 0;

    if value % 11 == 0 {
        penalty += 5;
    }
    if value % 10 == 0 {
        penalty += 3;
    } else if value % 5 == 0 {
        penalty += 2;
    }

    if penalty == 0 {
        1
    } else {
        penalty
    }
}

/// Total penalty of a sequence of cards.
#[must_use]
pub fn row_penalty(cards: &[Card]) -> u32 {
    cards.iter().map(|&c| card_penalty(c)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(values: &[u16]) -> Vec<Card> {
        values.iter().copied().map(Card::new).collect()
    }

    #[test]
    fn test_card_penalty_values() {
        assert_eq!(card_penalty(Card::new(5)), 2);
        assert_eq!(card_penalty(Card::new(10)), 3);
        assert_eq!(card_penalty(Card::new(11)), 5);
        assert_eq!(card_penalty(Card::new(55)), 7);
        assert_eq!(card_penalty(Card::new(7)), 1);
    }

    #[test]
    fn test_card_penalty_edges() {
        assert_eq!(card_penalty(Card::new(1)), 1);
        assert_eq!(card_penalty(Card::new(100)), 3);
        assert_eq!(card_penalty(Card::new(104)), 1);
        // 110 is a multiple of both 11 and 10
        assert_eq!(card_penalty(Card::new(110)), 8);
    }

    #[test]
    fn test_full_deck_total() {
        let deck: Vec<Card> = (1..=104).map(Card::new).collect();
        assert_eq!(row_penalty(&deck), 171);
    }

    #[test]
    fn test_row_penalty() {
        assert_eq!(row_penalty(&cards(&[12, 17, 21])), 3);
        // 22 is a double, worth 5
        assert_eq!(row_penalty(&cards(&[12, 17, 22])), 7);
        assert_eq!(row_penalty(&cards(&[100, 101])), 4);
        assert_eq!(row_penalty(&cards(&[45, 51, 55, 74])), 11);
        assert_eq!(row_penalty(&[]), 0);
    }

    #[test]
    fn test_penalty_is_pure() {
        let row = cards(&[32, 44, 52, 57]);
        let first = row_penalty(&row);
        let second = row_penalty(&row);

        assert_eq!(first, 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_card_display_pads() {
        assert_eq!(format!("{:3}", Card::new(7)), "  7");
        assert_eq!(Card::new(104).to_string(), "104");
    }
}
