//! Criterion micro-benchmarks for arena allocation, reset, and release.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kiln_arena::{Arena, ArenaConfig};
use kiln_bench::request_sizes;

/// Benchmark: 1000 small allocations served by the fast path.
fn bench_alloc_small(c: &mut Criterion) {
    let sizes = request_sizes(1000, 256, 42);
    c.bench_function("alloc_small_1000", |b| {
        b.iter(|| {
            let mut arena = Arena::new();
            for &bytes in &sizes {
                black_box(arena.alloc(bytes).unwrap());
            }
            arena.release();
        });
    });
}

/// Benchmark: allocations that repeatedly outgrow the region chain.
fn bench_alloc_growth(c: &mut Criterion) {
    c.bench_function("alloc_growth_path", |b| {
        b.iter(|| {
            let mut arena = Arena::with_config(ArenaConfig::new(64));
            // Each request exceeds the current tail, forcing a new region.
            for shift in 0..10 {
                black_box(arena.alloc(black_box(512 << shift)).unwrap());
            }
            arena.release();
        });
    });
}

/// Benchmark: steady-state reuse — allocate a batch, reset, repeat.
///
/// This is the intended usage pattern (per-request scratch memory); after
/// the first batch, no backing memory is reserved at all.
fn bench_reset_reuse(c: &mut Criterion) {
    let sizes = request_sizes(200, 256, 7);
    let mut arena = Arena::new();
    c.bench_function("reset_reuse_200", |b| {
        b.iter(|| {
            for &bytes in &sizes {
                black_box(arena.alloc(bytes).unwrap());
            }
            arena.reset();
        });
    });
}

criterion_group!(
    benches,
    bench_alloc_small,
    bench_alloc_growth,
    bench_reset_reuse
);
criterion_main!(benches);
