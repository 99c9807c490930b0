//! # take-six
//!
//! A deterministic rules engine for Take 6, the card-laying game where
//! everyone plays at once and the lowest penalty wins.
//!
//! ## Rules in brief
//!
//! Every round each player commits one card. The cards are revealed and
//! resolved one at a time, lowest first. A card goes on the row whose top
//! card is the largest still below it. If that row already holds five
//! cards, the player takes the row (scoring its penalty) and the card
//! starts a new row. If no row's top is below the card, the player takes
//! the cheapest row. The game ends once someone reaches the penalty
//! threshold.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: resolution is a sequential fold over the sorted
//!    cards; dealing is driven by a seeded RNG.
//!
//! 2. **Atomic rounds**: a round either resolves completely or is rejected
//!    without touching the board, hands or scores.
//!
//! 3. **Configuration over constants**: rows, row length, hand size, deck
//!    size and threshold come from `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: Player IDs, configuration, errors, RNG
//! - `cards`: Card values, penalties, the deck
//! - `board`: Rows and row selection
//! - `players`: Hands and penalty totals
//! - `round`: Round resolution and its state machine
//! - `game`: The game aggregate tying it all together

pub mod core;
pub mod cards;
pub mod board;
pub mod players;
pub mod round;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CommitProblem, ConfigError, GameConfig, GameRng, PlayerId, PlayerMap,
    RoundError,
};

pub use crate::cards::{card_penalty, row_penalty, Card, Deck};

pub use crate::board::{Board, BoardPlacement, Placement, PlacementKind, Row};

pub use crate::players::{Hand, Player};

pub use crate::round::{
    resolution_order, resolve_round, PlacementRecord, RoundOutcome, RoundPhase, RoundStatus,
};

pub use crate::game::{Game, GameResult};
