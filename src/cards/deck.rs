//! The draw pile.
//!
//! A deck holds every card `1..=max_card` exactly once. Shuffling goes
//! through `GameRng` so a seed fully determines the deal.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::GameRng;

/// Ordered draw pile. Cards are drawn from the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck `1..=max_card`, lowest card drawn last.
    #[must_use]
    pub fn full(max_card: u16) -> Self {
        Self {
            cards: (1..=max_card).map(Card::new).collect(),
        }
    }

    /// Full deck shuffled by `rng`.
    #[must_use]
    pub fn shuffled(max_card: u16, rng: &mut GameRng) -> Self {
        let mut deck = Self::full(max_card);
        rng.shuffle(&mut deck.cards);
        deck
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `count` cards. Fewer are returned if the deck runs out.
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(count);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }
}
