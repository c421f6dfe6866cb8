//! Benchmarks for inmap vs a plain `iter_mut` loop
//!
//! Run with: `cargo bench --bench inmap`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use inmap_core::{SparseVec, inmap};

fn bench_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_i64");

    for size in [16usize, 256, 4096] {
        let input: Vec<i64> = (0..size as i64).collect();

        group.bench_with_input(BenchmarkId::new("inmap", size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                inmap(&mut v, |x: i64, i: usize| black_box(x * i as i64));
                black_box(v);
            });
        });

        group.bench_with_input(BenchmarkId::new("iter_mut", size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                for (i, x) in v.iter_mut().enumerate() {
                    *x = black_box(*x * i as i64);
                }
                black_box(v);
            });
        });
    }

    group.finish();
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_vec_i64");

    for size in [256usize, 4096] {
        // Every third slot is a hole.
        let input: SparseVec<i64> = (0..size as i64)
            .map(|x| (x % 3 != 0).then_some(x))
            .collect();

        group.bench_with_input(BenchmarkId::new("inmap", size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                inmap(&mut v, |x: i64| black_box(x + 1));
                black_box(v);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vec, bench_sparse);
criterion_main!(benches);
