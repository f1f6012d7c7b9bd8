//! Criterion benchmarks for isotopia-decay curve evaluation.
//!
//! Covers: isotope remaining quantity, tracer concentration, and half-life.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use isotopia_core::types::linspace;
use isotopia_decay::{DecayModel, TracerModel};

fn bench_remaining_quantity(c: &mut Criterion) {
    let model = DecayModel::new(0.1);
    let time = linspace(0.0, 100.0, 10_000);

    c.bench_function("remaining_quantity_10k", |b| {
        b.iter(|| model.remaining_quantity(black_box(100.0), black_box(&time)))
    });
}

fn bench_concentration_over_time(c: &mut Criterion) {
    let model = TracerModel::new(0.05, 0.02);
    let time = linspace(0.0, 100.0, 10_000);

    c.bench_function("concentration_over_time_10k", |b| {
        b.iter(|| model.concentration_over_time(black_box(50.0), black_box(&time)))
    });
}

fn bench_half_life(c: &mut Criterion) {
    let model = DecayModel::new(0.1);

    c.bench_function("half_life", |b| b.iter(|| black_box(&model).half_life()));
}

criterion_group!(
    benches,
    bench_remaining_quantity,
    bench_concentration_over_time,
    bench_half_life,
);
criterion_main!(benches);
