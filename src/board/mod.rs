//! The shared board.
//!
//! A fixed number of rows, each a strictly increasing run of cards. The
//! board decides which row a card goes to:
//! - the row whose top leaves the smallest positive gap below the card
//! - if no top is below the card, the row with the smallest penalty, which
//!   the card's owner takes
//!
//! ```
//! use take_six::board::Board;
//! use take_six::cards::Card;
//! use take_six::core::GameConfig;
//!
//! let config = GameConfig::new(2);
//! let starting = [17, 100, 57, 74].map(Card::new);
//! let board = Board::new(&starting, &config).unwrap();
//!
//! assert_eq!(board.select_row_for(Card::new(63)), Some(2));
//! assert_eq!(board.select_row_for(Card::new(10)), None);
//! ```

mod row;

pub use row::{Placement, PlacementKind, Row};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{ConfigError, GameConfig, RoundError};

/// Where a card landed and what it cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardPlacement {
    /// Index of the row the card now sits on.
    pub row: usize,
    pub placement: Placement,
}

/// Fixed set of rows, indexed `0..row_count`.
///
/// Rows are replaced in place; the row count never changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Row>,
    capacity: usize,
}

impl Board {
    /// Board with one single-card row per starting card.
    pub fn new(starting: &[Card], config: &GameConfig) -> Result<Self, ConfigError> {
        let rows: Vec<Row> = starting.iter().map(|&c| Row::new(c)).collect();
        Self::from_rows(rows, config)
    }

    /// Board from prepared rows.
    ///
    /// Checks the row count and that every row fits the configured length.
    pub fn from_rows(rows: Vec<Row>, config: &GameConfig) -> Result<Self, ConfigError> {
        if rows.is_empty() {
            return Err(ConfigError::NoRows);
        }
        if rows.len() != config.row_count {
            return Err(ConfigError::RowCountMismatch {
                expected: config.row_count,
                actual: rows.len(),
            });
        }

        let capacity = config.row_capacity();
        if let Some(row) = rows.iter().position(|r| r.len() > capacity) {
            return Err(ConfigError::InvalidRow { row });
        }

        Ok(Self { rows, capacity })
    }

    /// Board from starting cards already checked against a validated config.
    pub(crate) fn seeded(starting: &[Card], capacity: usize) -> Self {
        Self {
            rows: starting.iter().map(|&c| Row::new(c)).collect(),
            capacity,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Most cards a row holds before the next one takes it.
    #[must_use]
    pub fn row_capacity(&self) -> usize {
        self.capacity
    }

    /// Top card of every row, in row order.
    pub fn tops(&self) -> impl Iterator<Item = Card> + '_ {
        self.rows.iter().map(Row::top)
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.rows.iter().any(|r| r.contains(card))
    }

    /// Penalty of the row at `index`.
    #[must_use]
    pub fn row_penalty(&self, index: usize) -> Option<u32> {
        self.rows.get(index).map(Row::penalty)
    }

    /// Row whose top is the largest card still below `card`.
    ///
    /// That is the smallest positive gap `card - top`. Ties keep the lowest
    /// index. `None` when every top is at or above `card`.
    #[must_use]
    pub fn select_row_for(&self, card: Card) -> Option<usize> {
        let mut best: Option<(usize, Card)> = None;
        for (index, top) in self.tops().enumerate() {
            if top >= card {
                continue;
            }
            match best {
                Some((_, best_top)) if best_top >= top => {}
                _ => best = Some((index, top)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Row with the smallest penalty. Ties keep the lowest index.
    #[must_use]
    pub fn cheapest_row(&self) -> usize {
        let mut best = 0;
        let mut best_penalty = u32::MAX;
        for (index, row) in self.rows.iter().enumerate() {
            let penalty = row.penalty();
            if penalty < best_penalty {
                best = index;
                best_penalty = penalty;
            }
        }
        best
    }

    /// Place `card` by the full board rule.
    ///
    /// Goes to the smallest-gap row when one exists; otherwise the cheapest
    /// row is taken regardless of its length.
    pub fn place(&mut self, card: Card) -> Result<BoardPlacement, RoundError> {
        let capacity = self.capacity;

        if let Some(index) = self.select_row_for(card) {
            let placement = self.rows[index].place(card, capacity)?;
            return Ok(BoardPlacement { row: index, placement });
        }

        let index = self.cheapest_row();
        Ok(BoardPlacement {
            row: index,
            placement: self.force_take(index, card),
        })
    }

    /// Take row `index` with `card`, whatever its length.
    fn force_take(&mut self, index: usize, card: Card) -> Placement {
        Placement {
            kind: PlacementKind::Forced,
            charge: self.rows[index].take(card),
        }
    }
}

impl std::fmt::Display for Board {
    /// One line per row, e.g. `( 7)  12  17  22`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
