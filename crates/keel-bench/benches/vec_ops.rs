//! Criterion micro-benchmarks for `SimpleVec` growth, insertion, and erasure.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use keel_bench::{filled_vec, insert_points, values};
use keel_vec::SimpleVec;

const N: usize = 10_000;

fn bench_push_back_doubling(c: &mut Criterion) {
    let input = values(N, 1);
    c.bench_function("vec_push_back_10k", |b| {
        b.iter(|| {
            let mut v = SimpleVec::new();
            for &x in &input {
                v.push_back(x);
            }
            black_box(v)
        });
    });
}

fn bench_push_back_reserved(c: &mut Criterion) {
    let input = values(N, 1);
    c.bench_function("vec_push_back_reserved_10k", |b| {
        b.iter(|| {
            let mut v = SimpleVec::with_capacity(N);
            for &x in &input {
                v.push_back(x);
            }
            black_box(v)
        });
    });
}

fn bench_insert_random(c: &mut Criterion) {
    let input = values(1_000, 2);
    let points = insert_points(1_000, 2);
    c.bench_function("vec_insert_random_1k", |b| {
        b.iter(|| {
            let mut v = SimpleVec::new();
            for (&x, &at) in input.iter().zip(&points) {
                v.insert(at, x);
            }
            black_box(v)
        });
    });
}

fn bench_erase_front(c: &mut Criterion) {
    c.bench_function("vec_erase_front_1k", |b| {
        b.iter_batched(
            || filled_vec(1_000, 3),
            |mut v| {
                while !v.is_empty() {
                    v.erase(0);
                }
                black_box(v)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_clone(c: &mut Criterion) {
    let v = filled_vec(N, 4);
    c.bench_function("vec_clone_10k", |b| {
        b.iter(|| black_box(v.clone()));
    });
}

criterion_group!(
    benches,
    bench_push_back_doubling,
    bench_push_back_reserved,
    bench_insert_random,
    bench_erase_front,
    bench_clone
);
criterion_main!(benches);
