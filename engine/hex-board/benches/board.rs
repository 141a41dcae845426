use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hex_board::{Board, Color, Coord};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Board of `size` filled with `stones` random alternating moves.
fn random_board(size: usize, stones: usize, seed: u64) -> Board {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut board = Board::new(size).unwrap();
    let mut moves = board.possible_moves();
    moves.shuffle(&mut rng);

    let mut color = Color::Red;
    for mv in moves.into_iter().take(stones) {
        board.place(mv, color).unwrap();
        color = color.opposite();
    }
    board
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_make_move");
    for size in [4, 7, 11] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let board = Board::new(size).unwrap();
            let center = Coord::new(size / 2, size / 2);
            b.iter(|| black_box(board.make_move(center, Color::Red).unwrap()));
        });
    }
    group.finish();
}

fn bench_winner(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_winner");
    for size in [4, 7, 11] {
        group.bench_with_input(BenchmarkId::new("midgame", size), &size, |b, &size| {
            let board = random_board(size, size * size / 2, 42);
            b.iter(|| black_box(board.winner()));
        });
        group.bench_with_input(BenchmarkId::new("full", size), &size, |b, &size| {
            let board = random_board(size, size * size, 42);
            b.iter(|| black_box(board.winner()));
        });
    }
    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_random_playout");
    group.bench_function("size_7", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        b.iter_batched(
            || {
                let mut moves = Board::new(7).unwrap().possible_moves();
                moves.shuffle(&mut rng);
                moves
            },
            |moves| {
                let mut board = Board::new(7).unwrap();
                let mut color = Color::Red;
                for mv in moves {
                    board.place(mv, color).unwrap();
                    if board.winner().is_some() {
                        break;
                    }
                    color = color.opposite();
                }
                board
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_make_move, bench_winner, bench_random_playout);
criterion_main!(benches);
