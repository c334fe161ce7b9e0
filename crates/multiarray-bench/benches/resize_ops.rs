//! Criterion micro-benchmarks for resize and transpose.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multiarray_bench::{reference_profile, MATRIX_DIMS, REFERENCE_DIMS};

/// Benchmark: grow then shrink the innermost axis (worst case: every run moves).
fn bench_resize_inner(c: &mut Criterion) {
    let (mut store, mut array) = reference_profile(&REFERENCE_DIMS);
    let inner = REFERENCE_DIMS.len() - 1;
    c.bench_function("resize_inner_16_32_16", |b| {
        b.iter(|| {
            array = store.resize(array, inner, 32).unwrap();
            array = store.resize(array, inner, 16).unwrap();
            black_box(array);
        });
    });
}

/// Benchmark: grow then shrink the outermost axis (best case: one run).
fn bench_resize_outer(c: &mut Criterion) {
    let (mut store, mut array) = reference_profile(&REFERENCE_DIMS);
    c.bench_function("resize_outer_64_128_64", |b| {
        b.iter(|| {
            array = store.resize(array, 0, 128).unwrap();
            array = store.resize(array, 0, 64).unwrap();
            black_box(array);
        });
    });
}

/// Benchmark: transpose a 512x512 matrix and free the result.
fn bench_transpose(c: &mut Criterion) {
    let (mut store, array) = reference_profile(&MATRIX_DIMS);
    c.bench_function("transpose_512x512", |b| {
        b.iter(|| {
            let t = store.transpose(array).unwrap();
            store.free(t).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_resize_inner,
    bench_resize_outer,
    bench_transpose
);
criterion_main!(benches);
