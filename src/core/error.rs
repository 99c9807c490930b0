//! Error types.
//!
//! - `ConfigError`: a game could not be constructed. Checked once, before
//!   any round is played.
//! - `RoundError`: a submission or round was rejected. A rejected round
//!   leaves hands, rows and scores untouched.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// Why a `GameConfig` or a prepared table was refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    /// Row count is zero, so no card could ever be placed.
    NoRows,
    /// Player count is zero.
    NoPlayers,
    /// More players than seats can be addressed.
    TooManyPlayers { count: usize },
    /// Rows must be able to hold at least one card (`max_row_length >= 2`).
    RowLengthTooShort { max_row_length: usize },
    /// Hand size is zero.
    EmptyHands,
    /// The deck cannot seed every row and fill every hand.
    DeckTooSmall { needed: usize, available: usize },
    /// `max_card` is zero, so the deck holds no cards.
    EmptyDeck,
    /// A prepared board has the wrong number of rows.
    RowCountMismatch { expected: usize, actual: usize },
    /// A prepared table has the wrong number of players.
    PlayerCountMismatch { expected: usize, actual: usize },
    /// A prepared row is empty, too long, or not strictly increasing.
    InvalidRow { row: usize },
    /// A prepared hand holds more cards than `max_hand_size`.
    HandTooLarge { player: PlayerId, size: usize, max: usize },
    /// Prepared hands differ in size, so one would run out mid-deal.
    UnevenHands { player: PlayerId, size: usize, expected: usize },
    /// A card lies outside `[1, max_card]`.
    CardOutOfRange { card: Card },
    /// A card appears twice across board and hands.
    DuplicateCard { card: Card },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoRows => write!(f, "Board must have at least one row"),
            ConfigError::NoPlayers => write!(f, "Game must have at least one player"),
            ConfigError::TooManyPlayers { count } => {
                write!(f, "{} players requested, at most 255 supported", count)
            }
            ConfigError::RowLengthTooShort { max_row_length } => {
                write!(f, "Maximum row length {} is below 2", max_row_length)
            }
            ConfigError::EmptyHands => write!(f, "Hand size must be at least 1"),
            ConfigError::DeckTooSmall { needed, available } => {
                write!(f, "Deck has {} cards, {} needed to deal", available, needed)
            }
            ConfigError::EmptyDeck => write!(f, "Deck must hold at least one card"),
            ConfigError::RowCountMismatch { expected, actual } => {
                write!(f, "Expected {} rows, got {}", expected, actual)
            }
            ConfigError::PlayerCountMismatch { expected, actual } => {
                write!(f, "Expected {} players, got {}", expected, actual)
            }
            ConfigError::InvalidRow { row } => write!(f, "Row {} is not a valid row", row),
            ConfigError::UnevenHands { player, size, expected } => {
                write!(f, "{} holds {} cards, other hands hold {}", player, size, expected)
            }
            ConfigError::HandTooLarge { player, size, max } => {
                write!(f, "{} holds {} cards, at most {} allowed", player, size, max)
            }
            ConfigError::CardOutOfRange { card } => write!(f, "Card {} is out of range", card),
            ConfigError::DuplicateCard { card } => write!(f, "Card {} appears twice", card),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why a committed card was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitProblem {
    /// The card is not in the player's hand.
    NotInHand,
    /// Another player committed the same card this round.
    Duplicate,
    /// The card is already on the board.
    OnBoard,
}

impl std::fmt::Display for CommitProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitProblem::NotInHand => write!(f, "not in hand"),
            CommitProblem::Duplicate => write!(f, "committed twice"),
            CommitProblem::OnBoard => write!(f, "already on the board"),
        }
    }
}

/// Why a submission, round or re-deal was refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundError {
    /// A committed card breaks the submission contract.
    InvalidCommittedCard {
        player: PlayerId,
        card: Card,
        problem: CommitProblem,
    },
    /// The player is not seated at this table.
    UnknownPlayer(PlayerId),
    /// The player already committed a card this round.
    AlreadySubmitted(PlayerId),
    /// Resolution was requested before every player committed.
    MissingSubmission(PlayerId),
    /// The submission map does not cover the table.
    WrongSubmissionCount { expected: usize, actual: usize },
    /// A card was appended below a row's top. Internal consistency failure.
    RowInvariantViolation { card: Card, top: Card },
    /// A card was appended to a row already at capacity. Internal consistency failure.
    RowOverflow { card: Card, capacity: usize },
    /// The game already ended.
    GameOver,
    /// A re-deal was requested while cards remain in hand.
    HandsNotEmpty,
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundError::InvalidCommittedCard { player, card, problem } => {
                write!(f, "{} committed card {}: {}", player, card, problem)
            }
            RoundError::UnknownPlayer(player) => write!(f, "{} is not at this table", player),
            RoundError::AlreadySubmitted(player) => {
                write!(f, "{} already committed a card this round", player)
            }
            RoundError::MissingSubmission(player) => {
                write!(f, "{} has not committed a card", player)
            }
            RoundError::WrongSubmissionCount { expected, actual } => {
                write!(f, "Expected {} committed cards, got {}", expected, actual)
            }
            RoundError::RowInvariantViolation { card, top } => {
                write!(f, "Card {} cannot extend a row topped by {}", card, top)
            }
            RoundError::RowOverflow { card, capacity } => {
                write!(f, "Card {} cannot extend a row holding {} cards", card, capacity)
            }
            RoundError::GameOver => write!(f, "Game is over"),
            RoundError::HandsNotEmpty => write!(f, "Players still hold cards"),
        }
    }
}

impl std::error::Error for RoundError {}
