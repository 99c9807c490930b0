//! Benchmarks for round resolution
//!
//! Measures a single round on a fresh table and a whole game to game over.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use take_six::{Card, Game, GameConfig, PlayerMap};

fn lowest_cards(game: &Game) -> PlayerMap<Card> {
    game.players().map(|_, p| p.hand().sorted()[0])
}

fn bench_single_round(c: &mut Criterion) {
    let game = Game::new(GameConfig::new(10), 42).unwrap();
    let committed = lowest_cards(&game);

    c.bench_function("resolve_round_10_players", |b| {
        b.iter(|| {
            let mut game = game.clone();
            let outcome = game.play_round(black_box(&committed)).unwrap();
            black_box(outcome)
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_4_players", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::new(4), black_box(7)).unwrap();
            while !game.is_over() {
                if game.hands_empty() {
                    game.redeal().unwrap();
                }
                let committed = lowest_cards(&game);
                game.play_round(&committed).unwrap();
            }
            black_box(game.standings())
        })
    });
}

criterion_group!(benches, bench_single_round, bench_full_game);
criterion_main!(benches);
