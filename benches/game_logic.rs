use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swapples::core::{clear_pass, find_runs, gravity, resolve, Board, BoardConfig, Grid, SimpleRng};
use swapples::types::{Axis, Move};

fn bench_new_board(c: &mut Criterion) {
    let mut seed = 0u32;
    c.bench_function("new_board_8x8", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            Board::new(BoardConfig::default().with_seed(black_box(seed))).unwrap()
        })
    });
}

fn bench_find_runs(c: &mut Criterion) {
    let grid = Grid::random(8, 8, 5, &mut SimpleRng::new(12345)).unwrap();

    c.bench_function("find_runs_8x8", |b| b.iter(|| find_runs(black_box(&grid))));
}

fn bench_clear_and_refill(c: &mut Criterion) {
    let grid = Grid::random(8, 8, 5, &mut SimpleRng::new(12345)).unwrap();
    let mut rng = SimpleRng::new(1);

    c.bench_function("clear_pass_then_refill", |b| {
        b.iter(|| {
            let mut g = grid.clone();
            clear_pass(&mut g);
            gravity::refill(&mut g, &mut rng);
            g
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let mut rng = SimpleRng::new(777);

    c.bench_function("resolve_random_8x8", |b| {
        b.iter(|| {
            let mut g = Grid::random(8, 8, 5, &mut rng).unwrap();
            resolve(&mut g, &mut rng)
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut board = Board::new(BoardConfig::default().with_seed(12345)).unwrap();
    let mut i = 0usize;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            i = (i + 1) % 56;
            let mv = Move::new(Axis::Horizontal, i / 7, i % 7, i % 7 + 1);
            board.apply(black_box(mv)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_new_board,
    bench_find_runs,
    bench_clear_and_refill,
    bench_resolve,
    bench_apply_move
);
criterion_main!(benches);
