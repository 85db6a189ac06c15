//! Benchmarks for the sliding puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use npuzzle::{Board, Solver};

/// A 3x3 puzzle that starts ten Manhattan steps from the goal.
fn scrambled_puzzle() -> Board {
    Board::from_rows(&[[8u16, 1, 3], [4, 0, 2], [7, 6, 5]]).unwrap()
}

/// Benchmark solving a short 3x3 puzzle.
fn bench_solve_short(c: &mut Criterion) {
    let board = Board::from_rows(&[[0u16, 1, 3], [4, 2, 5], [7, 8, 6]]).unwrap();

    c.bench_function("solve_3x3_4_moves", |b| {
        b.iter(|| Solver::new(black_box(board.clone())).unwrap())
    });
}

/// Benchmark solving a longer 3x3 puzzle.
fn bench_solve_long(c: &mut Criterion) {
    let board = scrambled_puzzle();
    let mut group = c.benchmark_group("long");
    group.sample_size(10);
    group.bench_function("solve_3x3_scrambled", |b| {
        b.iter(|| Solver::new(black_box(board.clone())).unwrap())
    });
    group.finish();
}

/// Benchmark proving a 3x3 puzzle unsolvable.
fn bench_unsolvable(c: &mut Criterion) {
    let board = Board::from_rows(&[[1u16, 2, 3], [4, 5, 6], [8, 7, 0]]).unwrap();

    c.bench_function("unsolvable_3x3", |b| {
        b.iter(|| Solver::new(black_box(board.clone())).unwrap())
    });
}

/// Benchmark generating successors, heuristics included.
fn bench_neighbors(c: &mut Criterion) {
    let board = Board::goal(4).unwrap().twin();

    c.bench_function("neighbors_4x4", |b| b.iter(|| black_box(&board).neighbors()));
}

/// Benchmark computing Manhattan distance from scratch.
fn bench_manhattan(c: &mut Criterion) {
    let board = Board::goal(8).unwrap().twin();

    c.bench_function("manhattan_8x8", |b| {
        b.iter(|| Board::from_tiles(8, black_box(board.tiles().to_vec())).unwrap().manhattan())
    });
}

criterion_group!(
    benches,
    bench_solve_short,
    bench_solve_long,
    bench_unsolvable,
    bench_neighbors,
    bench_manhattan
);
criterion_main!(benches);
