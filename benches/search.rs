use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use isolation::eval::Centrality;
use isolation::game::{Board, Move, State};
use isolation::search::{AlphaBeta, Depth, Minimax, Options};
use std::hint::black_box;
use std::time::Duration;

fn ample() -> Duration {
    Duration::MAX
}

fn midgame() -> Board {
    [(3, 3), (0, 0), (1, 2), (2, 1), (2, 4), (4, 2)]
        .into_iter()
        .fold(Board::default(), |b, (r, c)| b.play(Move::new(r, c)))
}

fn bench(c: &mut Criterion) {
    let board = midgame();
    let mut group = c.benchmark_group("search");

    for d in 1..=4 {
        let depth = Depth::new(d).unwrap();
        let options = Options::default().with_depth(depth);

        let minimax = Minimax::with_options(Centrality::default(), options);
        group.bench_with_input(BenchmarkId::new("minimax", d), &board, |b, pos| {
            b.iter(|| minimax.search(black_box(pos), &ample))
        });

        let alphabeta = AlphaBeta::with_options(Centrality::default(), options);
        group.bench_with_input(BenchmarkId::new("alphabeta", d), &board, |b, pos| {
            b.iter(|| alphabeta.search(black_box(pos), depth, &ample))
        });
    }

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
