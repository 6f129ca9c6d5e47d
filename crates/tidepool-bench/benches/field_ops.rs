//! Criterion micro-benchmarks for wave field operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tidepool_bench::wide_field;
use tidepool_core::BoundaryMode;
use tidepool_test_utils::bounded_profile;

/// Benchmark: one tick of a 100-sample field (the demo size).
fn bench_tick_100(c: &mut Criterion) {
    let mut field = wide_field(100, BoundaryMode::Clamped).unwrap();
    field.set_displacement(&bounded_profile(100, 0.1, 1)).unwrap();
    c.bench_function("tick_clamped_100", |b| {
        b.iter(|| field.tick(black_box(0.01)).unwrap());
    });
}

/// Benchmark: one tick of a 10K-sample wrapped field.
fn bench_tick_10k(c: &mut Criterion) {
    let mut field = wide_field(10_000, BoundaryMode::Wrapped).unwrap();
    field.set_displacement(&bounded_profile(10_000, 0.1, 2)).unwrap();
    // dx = 1e-4, c = 0.05: keep the Courant ratio at 0.5
    let dt = 0.5 * field.dx() / field.propagation_constant();
    c.bench_function("tick_wrapped_10k", |b| {
        b.iter(|| field.tick(black_box(dt)).unwrap());
    });
}

/// Benchmark: Gaussian splash across a 1K-sample field.
fn bench_splash_1k(c: &mut Criterion) {
    let mut field = wide_field(1_000, BoundaryMode::Wrapped).unwrap();
    c.bench_function("splash_wrapped_1k", |b| {
        b.iter(|| {
            field.splash(black_box(0.4), black_box(0.05), 1.0).unwrap();
        });
    });
}

/// Benchmark: churn with three components across a 1K-sample field.
fn bench_churn_1k(c: &mut Criterion) {
    let mut field = wide_field(1_000, BoundaryMode::Clamped).unwrap();
    c.bench_function("churn_clamped_1k", |b| {
        b.iter(|| {
            field.churn(black_box(0.6), black_box(0.2), 0.3).unwrap();
        });
    });
}

/// Benchmark: swell-carrying tick (gain plus renormalization).
fn bench_swell_tick_1k(c: &mut Criterion) {
    let mut field = wide_field(1_000, BoundaryMode::Clamped).unwrap();
    let dt = 0.5 * field.dx() / field.propagation_constant();
    c.bench_function("swell_tick_1k", |b| {
        b.iter(|| {
            if !field.swell().is_active() {
                field.start_swell(0.5, 5.0, true, 100).unwrap();
            }
            field.tick(black_box(dt)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_tick_100,
    bench_tick_10k,
    bench_splash_1k,
    bench_churn_1k,
    bench_swell_tick_1k
);
criterion_main!(benches);
