//! Criterion benchmarks for the lockstep driver.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tidepool_bench::{click, duck_pond};
use tidepool_core::Command;
use tidepool_engine::{DriverConfig, SimulationDriver, StepMode};

/// Benchmark: one demo frame (10 sub-steps, three fields, one duck).
fn bench_duck_pond_frame(c: &mut Criterion) {
    let (scene, _) = duck_pond().unwrap();
    let config = DriverConfig {
        mode: StepMode::FixedSubsteps(10),
        ..Default::default()
    };
    let mut driver = SimulationDriver::new(scene, config).unwrap();

    c.bench_function("duck_pond_frame", |b| {
        b.iter(|| {
            let report = driver.advance(0.0).unwrap();
            black_box(report.steps);
        });
    });
}

/// Benchmark: a frame that also applies a click to every field.
fn bench_duck_pond_click_frame(c: &mut Criterion) {
    let (scene, _) = duck_pond().unwrap();
    let config = DriverConfig {
        mode: StepMode::FixedSubsteps(10),
        ..Default::default()
    };
    let mut driver = SimulationDriver::new(scene, config).unwrap();
    let fields: Vec<_> = driver.scene().fields().map(|(id, _)| id).collect();

    c.bench_function("duck_pond_click_frame", |b| {
        b.iter(|| {
            for &field in &fields {
                for d in click(black_box(120.0), black_box(180.0)) {
                    driver.submit(Command::new(field, d));
                }
            }
            black_box(driver.advance(0.0).unwrap().metrics.commands_applied);
        });
    });
}

/// Benchmark: catch-up advance over one second of wall time.
fn bench_catch_up_second(c: &mut Criterion) {
    let (scene, _) = duck_pond().unwrap();
    let mut driver = SimulationDriver::new(scene, DriverConfig::default()).unwrap();
    let mut wall = 0.0;

    c.bench_function("catch_up_one_second", |b| {
        b.iter(|| {
            wall += 1.0;
            black_box(driver.advance(wall).unwrap().steps);
        });
    });
}

criterion_group!(
    benches,
    bench_duck_pond_frame,
    bench_duck_pond_click_frame,
    bench_catch_up_second
);
criterion_main!(benches);
