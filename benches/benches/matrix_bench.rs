//! # ComplexMatrix Benchmarks
//!
//! Kronecker products and dense products at state-vector sizes.
//!
//! Run: `cargo bench --bench matrix_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsym_core::prelude::*;

/// 2x2 lanes folded into a 2^n operator
fn bench_tensor_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_fold");

    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let op = (1..n).fold(Gate::H.matrix().clone(), |acc, _| {
                    acc.tensor_product(Gate::H.matrix())
                });
                black_box(op)
            })
        });
    }

    group.finish();
}

/// Square operator × column vector
fn bench_matvec(c: &mut Criterion) {
    let mut group = c.benchmark_group("matvec");

    for n in [2usize, 4, 6, 8] {
        let op = (1..n).fold(Gate::X.matrix().clone(), |acc, _| {
            acc.tensor_product(Gate::H.matrix())
        });
        let state = ground_state(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(op.matmul(&state).unwrap()))
        });
    }

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let a = ComplexMatrix::identity(64);
    let b = ComplexMatrix::identity(64).scale(Complex64::new(0.5, -0.5));

    c.bench_function("elementwise_add_64", |bench| {
        bench.iter(|| black_box(a.checked_add(&b).unwrap()))
    });
}

criterion_group!(benches, bench_tensor_fold, bench_matvec, bench_elementwise);
criterion_main!(benches);
