//! The game aggregate.
//!
//! A `Game` owns the configuration, the board, the players and the round
//! state machine. It is the only thing that mutates board and players, and
//! it does so only while resolving a round.
//!
//! ## Example
//!
//! ```
//! use take_six::core::{GameConfig, PlayerId};
//! use take_six::game::Game;
//!
//! let mut game = Game::new(GameConfig::new(3), 42).unwrap();
//!
//! // Every player commits their lowest card
//! for player in PlayerId::all(3) {
//!     let card = game.players()[player].hand().sorted()[0];
//!     game.submit(player, card).unwrap();
//! }
//! let outcome = game.resolve().unwrap();
//!
//! assert_eq!(outcome.placements.len(), 3);
//! assert_eq!(game.round(), 2);
//! ```

mod result;

pub use result::GameResult;

use im::Vector;
use rustc_hash::FxHashSet;

use crate::board::{Board, Row};
use crate::cards::{Card, Deck};
use crate::core::{
    CommitProblem, ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, RoundError,
};
use crate::players::Player;
use crate::round::{self, PlacementRecord, RoundOutcome, RoundPhase, RoundStatus};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,

    // === Progression ===
    phase: RoundPhase,
    /// Round currently being collected (starts at 1).
    round: u32,
    /// Number of deals so far (starts at 1).
    deal: u32,
    /// Cards committed so far this round.
    pending: PlayerMap<Option<Card>>,

    /// Every placement since the game began.
    history: Vector<PlacementRecord>,
    rng: GameRng,
}

impl Game {
    /// Shuffle a fresh deck with `seed`, seed one card per row and deal
    /// `max_hand_size` cards to every player.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut players = PlayerMap::new(config.player_count, |p| Player::new(p.to_string()));
        let mut rng = GameRng::new(seed).for_context("deal");
        let board = Self::deal_into(&config, &mut rng, &mut players);
        Ok(Self::assemble(config, board, players, rng))
    }

    /// Build a game around a prepared table.
    ///
    /// Rows and hands are taken as given. Every hand must hold the same
    /// number of cards. Every card must lie in `[1, max_card]`, appear at
    /// most once on the board, and be held by at most one player. A held card may also sit on the board; it can only
    /// be played once its row has been taken.
    pub fn from_parts(
        config: GameConfig,
        rows: &[Vec<Card>],
        players: Vec<Player>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if players.len() != config.player_count {
            return Err(ConfigError::PlayerCountMismatch {
                expected: config.player_count,
                actual: players.len(),
            });
        }

        let check = |seen: &mut FxHashSet<Card>, card: Card| {
            if !config.in_range(card) {
                return Err(ConfigError::CardOutOfRange { card });
            }
            if !seen.insert(card) {
                return Err(ConfigError::DuplicateCard { card });
            }
            Ok(())
        };

        let mut on_board: FxHashSet<Card> = FxHashSet::default();
        let mut held: FxHashSet<Card> = FxHashSet::default();

        let mut built = Vec::with_capacity(rows.len());
        for (index, cards) in rows.iter().enumerate() {
            let row = Row::from_cards(cards, config.row_capacity())
                .ok_or(ConfigError::InvalidRow { row: index })?;
            cards.iter().try_for_each(|&c| check(&mut on_board, c))?;
            built.push(row);
        }

        let expected = players.first().map_or(0, |p| p.hand().len());
        for (index, player) in players.iter().enumerate() {
            let size = player.hand().len();
            if size > config.max_hand_size {
                return Err(ConfigError::HandTooLarge {
                    player: PlayerId::new(index as u8),
                    size,
                    max: config.max_hand_size,
                });
            }
            if size != expected {
                return Err(ConfigError::UnevenHands {
                    player: PlayerId::new(index as u8),
                    size,
                    expected,
                });
            }
            player.hand().cards().iter().try_for_each(|&c| check(&mut held, c))?;
        }

        let board = Board::from_rows(built, &config)?;
        let rng = GameRng::new(seed).for_context("deal");
        Ok(Self::assemble(config, board, PlayerMap::from_vec(players), rng))
    }

    fn assemble(config: GameConfig, board: Board, players: PlayerMap<Player>, rng: GameRng) -> Self {
        let pending = PlayerMap::with_value(config.player_count, None);
        Self {
            config,
            board,
            players,
            phase: RoundPhase::Collecting,
            round: 1,
            deal: 1,
            pending,
            history: Vector::new(),
            rng,
        }
    }

    /// Shuffle a new deck, deal hands into `players`, return the seeded board.
    fn deal_into(config: &GameConfig, rng: &mut GameRng, players: &mut PlayerMap<Player>) -> Board {
        let mut deck = Deck::shuffled(config.max_card, rng);
        let starting = deck.draw_many(config.row_count);
        for (_, player) in players.iter_mut() {
            player.deal(&deck.draw_many(config.max_hand_size));
        }
        Board::seeded(&starting, config.row_capacity())
    }

    fn redeal_hands(&mut self) {
        self.board = Self::deal_into(&self.config, &mut self.rng, &mut self.players);
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Round currently being collected (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Number of deals so far (starts at 1).
    #[must_use]
    pub fn deal_number(&self) -> u32 {
        self.deal
    }

    /// Every placement since the game began, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<PlacementRecord> {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Have all hands been played out?
    #[must_use]
    pub fn hands_empty(&self) -> bool {
        self.players.values().all(|p| p.hand().is_empty())
    }

    // === Collecting ===

    /// Commit `card` for `player` this round.
    ///
    /// The card must be in the player's hand and not already committed by
    /// anyone. Each player commits once per round.
    pub fn submit(&mut self, player: PlayerId, card: Card) -> Result<(), RoundError> {
        if self.is_over() {
            return Err(RoundError::GameOver);
        }
        let holder = self
            .players
            .get(player)
            .ok_or(RoundError::UnknownPlayer(player))?;

        if self.pending[player].is_some() {
            return Err(RoundError::AlreadySubmitted(player));
        }

        let invalid = |problem| RoundError::InvalidCommittedCard {
            player,
            card,
            problem,
        };
        if !holder.hand().contains(card) {
            return Err(invalid(CommitProblem::NotInHand));
        }
        if self.pending.values().any(|&c| c == Some(card)) {
            return Err(invalid(CommitProblem::Duplicate));
        }

        self.pending[player] = Some(card);
        self.phase = RoundPhase::Collecting;
        Ok(())
    }

    /// Players who have not committed a card yet this round.
    #[must_use]
    pub fn waiting_on(&self) -> Vec<PlayerId> {
        self.pending
            .iter()
            .filter(|(_, c)| c.is_none())
            .map(|(p, _)| p)
            .collect()
    }

    /// Withdraw every commitment made so far this round.
    pub fn clear_submissions(&mut self) {
        self.pending = PlayerMap::with_value(self.config.player_count, None);
    }

    /// Resolve the round once every player has committed.
    pub fn resolve(&mut self) -> Result<RoundOutcome, RoundError> {
        if let Some(&player) = self.waiting_on().first() {
            return Err(RoundError::MissingSubmission(player));
        }
        let cards: Vec<Card> = self.pending.values().flatten().copied().collect();
        self.play_round(&PlayerMap::from_vec(cards))
    }

    /// Resolve a full set of commitments in one step.
    ///
    /// The whole round is rejected, changing nothing, if any commitment is
    /// invalid. On success pending submissions are cleared.
    pub fn play_round(&mut self, committed: &PlayerMap<Card>) -> Result<RoundOutcome, RoundError> {
        if self.is_over() {
            return Err(RoundError::GameOver);
        }

        self.phase = RoundPhase::Resolving;
        let outcome = match round::resolve_round(
            &mut self.board,
            &mut self.players,
            committed,
            self.round,
            self.config.penalty_threshold,
        ) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.phase = RoundPhase::Collecting;
                return Err(err);
            }
        };
        self.phase = RoundPhase::Scored;

        self.history.extend(outcome.placements.iter().copied());
        self.clear_submissions();
        self.round += 1;
        self.phase = match outcome.status {
            RoundStatus::NextRound => RoundPhase::NextRound,
            RoundStatus::GameOver { .. } => RoundPhase::GameOver,
        };

        Ok(outcome)
    }

    /// Start a new deal once every hand is played out.
    ///
    /// The board is reseeded and hands refilled from a freshly shuffled
    /// deck; penalty totals carry over.
    pub fn redeal(&mut self) -> Result<(), RoundError> {
        if self.is_over() {
            return Err(RoundError::GameOver);
        }
        if !self.hands_empty() {
            return Err(RoundError::HandsNotEmpty);
        }

        self.redeal_hands();
        self.clear_submissions();
        self.deal += 1;
        self.phase = RoundPhase::Collecting;
        Ok(())
    }

    // === Standings ===

    /// Players at or above the penalty threshold.
    #[must_use]
    pub fn losers(&self) -> Vec<PlayerId> {
        round::losers(&self.players, self.config.penalty_threshold)
    }

    /// Players from lowest to highest penalty; ties keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u32)> {
        let mut standings: Vec<(PlayerId, u32)> =
            self.players.iter().map(|(id, p)| (id, p.penalty())).collect();
        standings.sort_by_key(|&(id, penalty)| (penalty, id));
        standings
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let standings = self.standings();
        let best = standings.first().map(|&(_, penalty)| penalty)?;
        let leaders = standings
            .into_iter()
            .take_while(|&(_, penalty)| penalty == best)
            .map(|(id, _)| id)
            .collect();
        GameResult::from_leaders(leaders)
    }
}
