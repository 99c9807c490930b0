//! Sorting, placing and scoring one round.

use rustc_hash::FxHashMap;

use super::{PlacementRecord, RoundOutcome, RoundStatus};
use crate::board::Board;
use crate::cards::Card;
use crate::core::{CommitProblem, PlayerId, PlayerMap, RoundError};
use crate::players::Player;

/// Players ordered by ascending committed card.
///
/// ```
/// use take_six::cards::Card;
/// use take_six::core::{PlayerId, PlayerMap};
/// use take_six::round::resolution_order;
///
/// let committed = PlayerMap::from_vec(vec![10, 1, 63, 32].into_iter().map(Card::new).collect());
/// let order: Vec<u8> = resolution_order(&committed).into_iter().map(|p| p.0).collect();
/// assert_eq!(order, vec![1, 0, 3, 2]);
/// ```
#[must_use]
pub fn resolution_order(committed: &PlayerMap<Card>) -> Vec<PlayerId> {
    let mut order: Vec<(Card, PlayerId)> = committed.iter().map(|(p, &c)| (c, p)).collect();
    // Cards are unique; the player index only settles malformed input
    order.sort_unstable();
    order.into_iter().map(|(_, p)| p).collect()
}

/// Players whose total reached `threshold`, in seat order.
#[must_use]
pub fn losers(players: &PlayerMap<Player>, threshold: u32) -> Vec<PlayerId> {
    players
        .iter()
        .filter(|(_, p)| p.penalty() >= threshold)
        .map(|(id, _)| id)
        .collect()
}

/// Check a full set of commitments against the hands.
///
/// Every player must commit exactly one card they hold and no card may be
/// committed twice. Whether a card clashes with the board is only known
/// when its turn to be placed comes, so `resolve_round` checks that.
pub fn validate_submissions(
    players: &PlayerMap<Player>,
    committed: &PlayerMap<Card>,
) -> Result<(), RoundError> {
    if committed.player_count() != players.player_count() {
        return Err(RoundError::WrongSubmissionCount {
            expected: players.player_count(),
            actual: committed.player_count(),
        });
    }

    let mut seen: FxHashMap<Card, PlayerId> = FxHashMap::default();
    for (player, &card) in committed.iter() {
        let invalid = |problem| RoundError::InvalidCommittedCard {
            player,
            card,
            problem,
        };

        if !players[player].hand().contains(card) {
            return Err(invalid(CommitProblem::NotInHand));
        }
        if seen.insert(card, player).is_some() {
            return Err(invalid(CommitProblem::Duplicate));
        }
    }

    Ok(())
}

/// Resolve one round.
///
/// Validates the commitments, then places every card in ascending order:
/// the card leaves its owner's hand, goes to the smallest-gap row (or takes
/// the cheapest row when none fits), and any charge is added to the
/// owner's total. A card still on the board when its turn comes rejects
/// the round.
///
/// The round is atomic. Work happens on copies of the board and players
/// that replace the originals only once every card is placed, so an error
/// leaves the table exactly as it was.
pub fn resolve_round(
    board: &mut Board,
    players: &mut PlayerMap<Player>,
    committed: &PlayerMap<Card>,
    round: u32,
    threshold: u32,
) -> Result<RoundOutcome, RoundError> {
    validate_submissions(players, committed)?;

    let mut next_board = board.clone();
    let mut next_players = players.clone();
    let mut charges: PlayerMap<u32> = PlayerMap::with_value(players.player_count(), 0);
    let mut placements = Vec::with_capacity(committed.player_count());

    for player in resolution_order(committed) {
        let card = committed[player];

        if !next_players[player].remove_card(card) {
            return Err(RoundError::InvalidCommittedCard {
                player,
                card,
                problem: CommitProblem::NotInHand,
            });
        }

        if next_board.contains(card) {
            return Err(RoundError::InvalidCommittedCard {
                player,
                card,
                problem: CommitProblem::OnBoard,
            });
        }

        let placed = next_board.place(card)?;
        let charge = placed.placement.charge;
        next_players[player].accumulate_penalty(charge);
        charges[player] += charge;

        placements.push(PlacementRecord {
            round,
            player,
            card,
            row: placed.row,
            kind: placed.placement.kind,
            charge,
        });
    }

    *board = next_board;
    *players = next_players;

    let over = losers(players, threshold);
    let status = if over.is_empty() {
        RoundStatus::NextRound
    } else {
        RoundStatus::GameOver { losers: over }
    };

    Ok(RoundOutcome {
        round,
        placements,
        charges,
        board: board.clone(),
        hands: players.map(|_, p| p.hand().clone()),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PlacementKind, Row};
    use crate::core::GameConfig;

    fn cards(values: &[u16]) -> Vec<Card> {
        values.iter().copied().map(Card::new).collect()
    }

    fn committed(values: &[u16]) -> PlayerMap<Card> {
        PlayerMap::from_vec(cards(values))
    }

    fn table() -> (Board, PlayerMap<Player>) {
        let config = GameConfig::new(2);
        let layout: [&[u16]; 4] = [&[12, 17, 22], &[100, 101], &[32, 44, 52, 57], &[45, 51, 55, 74]];
        let rows = layout
            .iter()
            .map(|r| Row::from_cards(&cards(r), config.row_capacity()).unwrap())
            .collect();
        let board = Board::from_rows(rows, &config).unwrap();
        let players = PlayerMap::from_vec(vec![
            Player::new("A").with_hand(&cards(&[10, 63, 90])),
            Player::new("B").with_hand(&cards(&[5, 58, 102])),
        ]);
        (board, players)
    }

    #[test]
    fn test_resolution_order() {
        let order = resolution_order(&committed(&[63, 5, 100, 10]));
        assert_eq!(
            order,
            vec![PlayerId::new(1), PlayerId::new(3), PlayerId::new(0), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_validate_not_in_hand() {
        let (_, players) = table();
        let err = validate_submissions(&players, &committed(&[10, 6])).unwrap_err();

        assert_eq!(
            err,
            RoundError::InvalidCommittedCard {
                player: PlayerId::new(1),
                card: Card::new(6),
                problem: CommitProblem::NotInHand,
            }
        );
    }

    #[test]
    fn test_validate_duplicate() {
        let (_, mut players) = table();
        // Malformed table: both players hold 10
        players[PlayerId::new(1)] = Player::new("B").with_hand(&cards(&[10]));

        let err = validate_submissions(&players, &committed(&[10, 10])).unwrap_err();
        assert!(matches!(
            err,
            RoundError::InvalidCommittedCard { problem: CommitProblem::Duplicate, .. }
        ));
    }

    #[test]
    fn test_card_still_on_board_rejects_round() {
        let (mut board, mut players) = table();
        players[PlayerId::new(0)] = Player::new("A").with_hand(&cards(&[55]));
        let before = (board.clone(), players.clone());

        let err = resolve_round(&mut board, &mut players, &committed(&[55, 58]), 1, 66).unwrap_err();

        assert_eq!(
            err,
            RoundError::InvalidCommittedCard {
                player: PlayerId::new(0),
                card: Card::new(55),
                problem: CommitProblem::OnBoard,
            }
        );
        assert_eq!((board, players), before);
    }

    #[test]
    fn test_card_leaving_board_earlier_in_round_is_placed() {
        let (mut board, mut players) = table();
        // 100 sits in row 1, which B's 5 takes before A's 100 is placed
        players[PlayerId::new(0)] = Player::new("A").with_hand(&cards(&[100]));

        let outcome = resolve_round(&mut board, &mut players, &committed(&[100, 5]), 1, 66).unwrap();

        assert_eq!(outcome.placements[1].card, Card::new(100));
        assert_eq!(outcome.placements[1].row, 3);
        assert_eq!(board.row(1).unwrap().cards(), cards(&[5]).as_slice());
    }

    #[test]
    fn test_validate_wrong_count() {
        let (_, players) = table();
        let err = validate_submissions(&players, &committed(&[10])).unwrap_err();
        assert_eq!(err, RoundError::WrongSubmissionCount { expected: 2, actual: 1 });
    }

    #[test]
    fn test_rejected_round_changes_nothing() {
        let (mut board, mut players) = table();
        let before = (board.clone(), players.clone());

        let result = resolve_round(&mut board, &mut players, &committed(&[10, 6]), 1, 66);

        assert!(result.is_err());
        assert_eq!((board, players), before);
    }

    #[test]
    fn test_resolve_round() {
        let (mut board, mut players) = table();
        let outcome = resolve_round(&mut board, &mut players, &committed(&[63, 5]), 1, 66).unwrap();

        // 5 fits nowhere: takes row 1 (penalty 4). 63 extends row 2.
        assert_eq!(outcome.placements.len(), 2);
        assert_eq!(outcome.placements[0].player, PlayerId::new(1));
        assert_eq!(outcome.placements[0].kind, PlacementKind::Forced);
        assert_eq!(outcome.placements[0].row, 1);
        assert_eq!(outcome.placements[1].kind, PlacementKind::Appended);
        assert_eq!(outcome.placements[1].row, 2);

        assert_eq!(outcome.charges[PlayerId::new(0)], 0);
        assert_eq!(outcome.charges[PlayerId::new(1)], 4);
        assert_eq!(players[PlayerId::new(1)].penalty(), 4);
        assert_eq!(outcome.takers().collect::<Vec<_>>(), vec![PlayerId::new(1)]);

        assert_eq!(outcome.hands[PlayerId::new(0)].sorted(), cards(&[10, 90]));
        assert_eq!(outcome.hands[PlayerId::new(1)].sorted(), cards(&[58, 102]));
        assert_eq!(outcome.board, board);
        assert_eq!(outcome.status, RoundStatus::NextRound);
    }

    #[test]
    fn test_resolve_round_game_over() {
        let (mut board, mut players) = table();
        players[PlayerId::new(1)].accumulate_penalty(63);

        let outcome = resolve_round(&mut board, &mut players, &committed(&[63, 5]), 1, 66).unwrap();

        assert_eq!(players[PlayerId::new(1)].penalty(), 67);
        assert_eq!(
            outcome.status,
            RoundStatus::GameOver { losers: vec![PlayerId::new(1)] }
        );
    }

    #[test]
    fn test_losers_at_threshold() {
        let players = PlayerMap::from_vec(vec![
            Player::new("A").with_penalty(66),
            Player::new("B").with_penalty(65),
            Player::new("C").with_penalty(70),
        ]);
        assert_eq!(losers(&players, 66), vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(losers(&players, 71).is_empty());
    }
}
