//! # Circuit Benchmarks
//!
//! Greedy packing and layer-by-layer evolution.
//!
//! Run: `cargo bench --bench circuit_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsym_core::prelude::*;

fn layered_circuit(depth: usize, rounds: usize) -> Circuit {
    let mut circuit = Circuit::new(depth).unwrap();
    for round in 0..rounds {
        for lane in 0..depth {
            let gate = if (round + lane) % 2 == 0 { Gate::H } else { Gate::T };
            circuit.apply(gate, lane).unwrap();
        }
    }
    circuit
}

fn bench_packing(c: &mut Criterion) {
    c.bench_function("pack_8_lanes_x_32_rounds", |b| {
        b.iter(|| black_box(layered_circuit(8, 32)))
    });
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_vector");

    for depth in [2usize, 4, 6, 8] {
        let circuit = layered_circuit(depth, 4);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(circuit.run().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_packing, bench_evolution);
criterion_main!(benches);
