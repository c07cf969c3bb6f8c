use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use detonello::board::Board;
use detonello_types::{Disc, DiscKind, Player, Position};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// A crowded midgame with detonating clusters on both sides.
fn midgame() -> Board {
    let mut rng = StdRng::seed_from_u64(0);
    let mut board = Board::new();
    for _ in 0..24 {
        let placements = board.legal_placements();
        let Some(placement) = placements.choose(&mut rng) else {
            break;
        };
        board.play(*placement).ok();
    }
    board
}

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let board = midgame();
    criterion.bench_function("legal moves", |b| {
        b.iter(|| black_box(black_box(&board).legal_moves()));
    });
    criterion.bench_function("legal placements", |b| {
        b.iter(|| black_box(black_box(&board).legal_placements()));
    });

    let mut chain = Board::empty();
    for index in 9..55 {
        let position = Position::from_index(index);
        if position.is_edge() {
            continue;
        }
        chain.set(position, Disc::new(Player::Second, DiscKind::Detonating));
    }
    chain.set(Position::new(1, 7), Disc::plain(Player::First));
    criterion.bench_function("detonation chain", |b| {
        b.iter(|| black_box(chain.captures(black_box(Position::new(1, 0)), Player::First)));
    });

    criterion.bench_function("apply", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            let mut board = Board::new();
            black_box(for _ in 0..60 {
                let placements = board.legal_placements();
                let Some(placement) = placements.choose(&mut rng) else {
                    // Game over
                    break;
                };
                board.play(*placement).ok();
            });
        });
    });
    criterion.bench_function("apply and undo", |b| {
        b.iter(|| {
            let mut board = board;
            for placement in board.legal_placements() {
                if let Ok(mv) = board.play(black_box(placement)) {
                    board.unplay(&mv);
                }
            }
            black_box(board);
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(300).warm_up_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
