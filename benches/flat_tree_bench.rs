//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flat_tree::*;

fn benchmark_navigation(c: &mut Criterion) {
    c.bench_function("parent+children 1k", |b| {
        b.iter(|| {
            for idx in (1..2048u64).step_by(2) {
                black_box(parent(black_box(idx)));
                black_box(children(black_box(idx)).ok());
            }
        });
    });

    c.bench_function("spans with depth hint 1k", |b| {
        b.iter(|| {
            for idx in (1..2048u64).step_by(2) {
                let d = depth(idx);
                black_box(spans_with_depth(black_box(idx), d));
            }
        });
    });
}

fn benchmark_full_roots(c: &mut Criterion) {
    let mut buffer = Vec::with_capacity(64);

    c.bench_function("full_roots worst case", |b| {
        b.iter(|| full_roots(black_box(u64::MAX - 1)));
    });

    c.bench_function("full_roots_into worst case", |b| {
        b.iter(|| full_roots_into(black_box(u64::MAX - 1), &mut buffer));
    });
}

criterion_group!(benches, benchmark_navigation, benchmark_full_roots);
criterion_main!(benches);
