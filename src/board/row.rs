//! A single row of the board.
//!
//! A row is a strictly increasing, never-empty run of cards. It grows one
//! card at a time until it holds `capacity` cards (`max_row_length - 1`).
//! After that, or whenever a card cannot extend it, the row is taken: its
//! penalty is charged and it is rebuilt around the incoming card alone.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{row_penalty, Card};
use crate::core::RoundError;

/// How a card ended up on its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    /// Appended after the row's top. Nothing charged.
    Appended,
    /// The row was full (or the card was below its top) and was taken.
    Replaced,
    /// No row could take the card; the cheapest row was taken.
    Forced,
}

/// Result of placing one card on a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PlacementKind,
    /// Penalty charged to the card's owner.
    pub charge: u32,
}

impl Placement {
    #[must_use]
    pub const fn appended() -> Self {
        Self {
            kind: PlacementKind::Appended,
            charge: 0,
        }
    }

    #[must_use]
    pub fn took_row(&self) -> bool {
        self.kind != PlacementKind::Appended
    }
}

/// One row of cards.
///
/// Inline storage covers the standard five-card row without allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    cards: SmallVec<[Card; 5]>,
}

impl Row {
    /// A fresh row holding only `card`.
    #[must_use]
    pub fn new(card: Card) -> Self {
        let mut cards = SmallVec::new();
        cards.push(card);
        Self { cards }
    }

    /// Build a row from existing cards.
    ///
    /// Returns `None` unless the cards are non-empty, strictly increasing
    /// and at most `capacity` long.
    #[must_use]
    pub fn from_cards(cards: &[Card], capacity: usize) -> Option<Self> {
        let increasing = cards.windows(2).all(|w| w[0] < w[1]);
        if cards.is_empty() || cards.len() > capacity || !increasing {
            return None;
        }
        Some(Self {
            cards: SmallVec::from_slice(cards),
        })
    }

    /// The row's last and largest card.
    #[must_use]
    pub fn top(&self) -> Card {
        // Rows are never empty
        self.cards[self.cards.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// Penalty charged to whoever takes this row.
    #[must_use]
    pub fn penalty(&self) -> u32 {
        row_penalty(&self.cards)
    }

    #[must_use]
    pub fn is_full(&self, capacity: usize) -> bool {
        self.cards.len() >= capacity
    }

    /// Can `card` be appended without taking the row?
    #[must_use]
    pub fn accepts(&self, card: Card, capacity: usize) -> bool {
        card > self.top() && !self.is_full(capacity)
    }

    /// Append `card` after the top.
    ///
    /// Fails if `card` is not above the top or the row is at capacity. The
    /// row is left unchanged on failure.
    pub fn extend(&mut self, card: Card, capacity: usize) -> Result<(), RoundError> {
        let top = self.top();
        if card <= top {
            return Err(RoundError::RowInvariantViolation { card, top });
        }
        if self.is_full(capacity) {
            return Err(RoundError::RowOverflow { card, capacity });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Take the row: charge its penalty and restart it with `card` alone.
    ///
    /// Returns the penalty held before replacement.
    pub fn take(&mut self, card: Card) -> u32 {
        let charge = self.penalty();
        *self = Row::new(card);
        charge
    }

    /// Place `card` by the row rule: append if it fits, otherwise take.
    pub fn place(&mut self, card: Card, capacity: usize) -> Result<Placement, RoundError> {
        if self.accepts(card, capacity) {
            self.extend(card, capacity)?;
            return Ok(Placement::appended());
        }

        Ok(Placement {
            kind: PlacementKind::Replaced,
            charge: self.take(card),
        })
    }
}

impl std::fmt::Display for Row {
    /// `(penalty) card card ...`, penalty two wide and cards three wide.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:2}) ", self.penalty())?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:3}", card)?;
        }
        Ok(())
    }
}
