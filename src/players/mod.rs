//! Players: a hand of cards and a running penalty total.
//!
//! The hand is unordered; cards leave it exactly once, when played. The
//! penalty total only ever grows, round after round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Cards held by one player.
///
/// Inline storage covers the standard ten-card hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 10]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.to_vec();
        cards.sort_unstable();
        cards
    }

    /// Remove one occurrence of `card`. Returns whether it was held.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(index) => {
                // Hand order is irrelevant
                self.cards.swap_remove(index);
                true
            }
            None => false,
        }
    }
}

/// One seat's state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Not used to identify the player.
    pub name: String,
    hand: Hand,
    penalty: u32,
}

impl Player {
    /// A player with an empty hand and no penalty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            penalty: 0,
        }
    }

    /// Give the player a starting hand.
    #[must_use]
    pub fn with_hand(mut self, cards: &[Card]) -> Self {
        self.hand = Hand::from_cards(cards);
        self
    }

    /// Start with an existing penalty total.
    #[must_use]
    pub fn with_penalty(mut self, penalty: u32) -> Self {
        self.penalty = penalty;
        self
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Accumulated penalty over every round so far.
    #[must_use]
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Remove a played card from the hand.
    ///
    /// Returns `false`, leaving the hand untouched, when the card is absent.
    pub fn remove_card(&mut self, card: Card) -> bool {
        self.hand.remove(card)
    }

    /// Add `amount` to the running total.
    pub fn accumulate_penalty(&mut self, amount: u32) {
        self.penalty = self.penalty.saturating_add(amount);
    }

    /// Replace the hand for a new deal. The penalty total is kept.
    pub fn deal(&mut self, cards: &[Card]) {
        self.hand = Hand::from_cards(cards);
    }
}
