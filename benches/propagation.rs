//! Benchmark: full deterministic games end to end.
//!
//! Dominated by the propagation fixed point, which is the hot path of
//! the engine.

use criterion::{criterion_group, criterion_main, Criterion};
use sweepmind::{Board, GameRng, Grid, Session};

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_16x16_40_mines", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(7);
            let board = Board::random(Grid::new(16, 16), 40, &mut rng);
            let mut session = Session::new(board, 11);
            session.play().unwrap()
        });
    });

    c.bench_function("play_9x9_10_mines", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(3);
            let board = Board::random(Grid::new(9, 9), 10, &mut rng);
            let mut session = Session::new(board, 5);
            session.play().unwrap()
        });
    });
}

criterion_group!(benches, bench_full_game);
criterion_main!(benches);
