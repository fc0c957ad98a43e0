//! # Measurement Benchmarks
//!
//! Single shots and 1024-shot histograms over uniform superpositions.
//!
//! Run: `cargo bench --bench measurement_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsym_core::prelude::*;

fn uniform_state(depth: usize) -> ComplexMatrix {
    let mut circuit = Circuit::new(depth).unwrap();
    for lane in 0..depth {
        circuit.h(lane).unwrap();
    }
    circuit.run().unwrap()
}

fn bench_measure(c: &mut Criterion) {
    let state = uniform_state(6);
    let mut engine = MeasurementEngine::with_seed(1);

    c.bench_function("measure_6_qubits", |b| {
        b.iter(|| black_box(engine.measure(&state).unwrap()))
    });
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_1024");

    for depth in [1usize, 4, 8] {
        let state = uniform_state(depth);
        let mut engine = MeasurementEngine::with_seed(7);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(engine.histogram(&state, 1024).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measure, bench_histogram);
criterion_main!(benches);
