use criterion::{Criterion, criterion_group, criterion_main};
use snake_engine::{Board, BoardRng, Command, Shape};

fn play_until_dead(shape: Shape, seed: u64, max_moves: u32) -> u32 {
    let mut board = match Board::new(shape, Some(seed)) {
        Ok(board) => board,
        Err(_) => return 0,
    };
    let mut commands = BoardRng::new(seed ^ 0x5eed);
    while board.is_alive() && board.moves_made() < max_moves {
        let command = *commands.pick(&Command::ALL).unwrap_or(&Command::Forward);
        board.apply(command);
    }
    board.moves_made()
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct_20x20", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            Board::new(Shape::new(20, 20), Some(seed))
        })
    });
}

fn bench_random_play(c: &mut Criterion) {
    c.bench_function("random_play_20x20", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            play_until_dead(Shape::new(20, 20), seed, 1_000)
        })
    });
}

fn bench_forward_on_large_board(c: &mut Criterion) {
    c.bench_function("forward_100x100", |b| {
        b.iter_batched(
            || Board::new(Shape::new(100, 100), Some(3)),
            |board| {
                if let Ok(mut board) = board {
                    while board.is_alive() {
                        board.forward();
                    }
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_random_play,
    bench_forward_on_large_board
);
criterion_main!(benches);
