//! Criterion micro-benchmarks for grid reshaping and traversal.

use criterion::{criterion_group, criterion_main, Criterion};
use gridwork_bench::{maze, Cell};
use gridwork_core::{Position, Rotation};
use gridwork_grid::flood_fill;
use std::hint::black_box;

/// Benchmark: rotate a 100x100 grid clockwise.
fn bench_rotate_100x100(c: &mut Criterion) {
    let grid = maze(100);
    c.bench_function("rotate_100x100", |b| {
        b.iter_batched_ref(
            || grid.clone(),
            |g| g.rotate(Rotation::Clockwise),
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: flood a 100x100 grid from the corner.
fn bench_flood_fill_100x100(c: &mut Criterion) {
    let grid = maze(100);
    c.bench_function("flood_fill_100x100", |b| {
        b.iter_batched_ref(
            || grid.clone(),
            |g| {
                black_box(flood_fill(
                    g,
                    Position::ORIGIN,
                    |&cell| cell == Cell::Open,
                    Cell::Filled,
                ))
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: collect every column of a 100x100 grid.
fn bench_columns_100x100(c: &mut Criterion) {
    let grid = maze(100);
    c.bench_function("columns_100x100", |b| {
        b.iter(|| black_box(grid.columns().count()));
    });
}

criterion_group!(
    benches,
    bench_rotate_100x100,
    bench_flood_fill_100x100,
    bench_columns_100x100
);
criterion_main!(benches);
