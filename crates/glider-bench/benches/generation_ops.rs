//! Criterion micro-benchmarks for generation pumping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glider_bench::{soup_profile, still_profile};
use glider_core::{CellState, Reply, Resumable, Suspension};
use glider_engine::{run_generation, GenerationSimulator};

/// Benchmark: one full generation over a 64x64 random soup (4096 cells,
/// ~45K suspensions).
fn bench_generation_soup_64x64(c: &mut Criterion) {
    let source = soup_profile(64, 64, 42);
    let mut sim = GenerationSimulator::new(64, 64).unwrap();

    c.bench_function("generation_soup_64x64", |b| {
        b.iter(|| {
            let next = run_generation(&source, &mut sim).unwrap();
            black_box(&next);
        });
    });
}

/// Benchmark: one full generation over a 64x64 field of still lifes.
///
/// Same protocol volume as the soup; isolates the cost of the
/// suspension plumbing from population-dependent branching.
fn bench_generation_still_64x64(c: &mut Criterion) {
    let source = still_profile(64, 64);
    let mut sim = GenerationSimulator::new(64, 64).unwrap();

    c.bench_function("generation_still_64x64", |b| {
        b.iter(|| {
            let next = run_generation(&source, &mut sim).unwrap();
            black_box(&next);
        });
    });
}

/// Benchmark: raw suspension throughput. 11K suspensions pulled from a
/// simulator with every query answered `Dead`, no grids involved.
fn bench_suspension_throughput(c: &mut Criterion) {
    let mut sim = GenerationSimulator::new(1024, 1024).unwrap();

    // A cell is exactly 11 suspensions; iterations must end on a cell
    // boundary or the next iteration's first reply would be mistyped.
    const SUSPENSIONS: usize = 11 * 1_000;

    c.bench_function("suspension_throughput_11k", |b| {
        b.iter(|| {
            let mut reply = Reply::Empty;
            for _ in 0..SUSPENSIONS {
                let suspension = sim.resume(reply).unwrap();
                reply = match suspension {
                    Suspension::Query(_) => Reply::State(CellState::Dead),
                    _ => Reply::Empty,
                };
                black_box(&suspension);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_generation_soup_64x64,
    bench_generation_still_64x64,
    bench_suspension_throughput
);
criterion_main!(benches);
