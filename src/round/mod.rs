//! Round resolution.
//!
//! A round is one simultaneous commitment: every player puts one card face
//! down, then the cards are revealed and resolved one at a time in
//! ascending order. Resolution is a sequential fold over that order, so the
//! outcome is fully determined by the board and the committed cards.
//!
//! ## Phases
//!
//! `Collecting → Resolving → Scored → (GameOver | NextRound)`
//!
//! - `Collecting`: players commit cards
//! - `Resolving`: cards are placed in ascending order
//! - `Scored`: charges have been added to penalty totals
//! - `GameOver` once any total reaches the threshold, else `NextRound`

mod resolver;

pub use resolver::{losers, resolution_order, resolve_round, validate_submissions};

use serde::{Deserialize, Serialize};

use crate::board::{Board, PlacementKind};
use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};
use crate::players::Hand;

/// Where the round state machine stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for committed cards.
    #[default]
    Collecting,
    /// Cards are being placed.
    Resolving,
    /// Every card is placed and charged.
    Scored,
    /// Round finished, nobody reached the threshold.
    NextRound,
    /// Some player reached the threshold. Terminal.
    GameOver,
}

impl RoundPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == RoundPhase::GameOver
    }
}

/// One card placement, in resolution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Round number (starts at 1).
    pub round: u32,
    pub player: PlayerId,
    pub card: Card,
    /// Row the card ended up on.
    pub row: usize,
    pub kind: PlacementKind,
    /// Penalty charged to `player` for this placement.
    pub charge: u32,
}

/// How the game stands after a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Nobody reached the threshold.
    NextRound,
    /// These players reached or passed the threshold. Several may tie.
    GameOver { losers: Vec<PlayerId> },
}

impl RoundStatus {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, RoundStatus::GameOver { .. })
    }
}

/// Everything a caller needs after a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    /// Placements in resolution (ascending card) order.
    pub placements: Vec<PlacementRecord>,
    /// Penalty charged to each player this round.
    pub charges: PlayerMap<u32>,
    /// Board after the round.
    pub board: Board,
    /// Hands after the round.
    pub hands: PlayerMap<Hand>,
    pub status: RoundStatus,
}

impl RoundOutcome {
    /// Players who took a row this round.
    pub fn takers(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.charges
            .iter()
            .filter(|(_, charge)| **charge > 0)
            .map(|(p, _)| p)
    }
}
