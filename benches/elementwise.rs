//! Benchmarks for the delegated elementwise path
//!
//! Compares managed and accelerated vector addition across sizes. With the
//! `accel` feature off the accelerated numbers measure the software stand-in
//! plus dispatch overhead, which is the interesting baseline for deciding
//! where delegation is profitable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linal::backend::Backend;
use linal::factory::Factory;
use linal::scalar::Complex64;

fn vector_entries(n: usize) -> Vec<Complex64> {
    // deterministic, cheap pseudo-random entries
    let mut state = 0x2545_f491u64;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let re = ((state >> 33) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            let im = ((state >> 13) as u32 as f32 / u32::MAX as f32) * 2.0 - 1.0;
            Complex64::new(re, im)
        })
        .collect()
}

fn bench_vector_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_addition");

    for size in [256usize, 4096, 65536] {
        let entries = vector_entries(size);

        for (label, backend) in [
            ("managed", Backend::Managed),
            ("accelerated", Backend::Accelerated),
        ] {
            let factory = Factory::new(backend);
            let a = factory.v(entries.clone());
            let b = factory.v(entries.clone());

            group.bench_with_input(BenchmarkId::new(label, size), &size, |bencher, _| {
                bencher.iter(|| black_box(a.add(&b).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_matrix_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_product");

    for dim in [8usize, 32, 64] {
        let factory = Factory::new(Backend::Managed);
        let a = factory.m_from_fn(dim, |i, j| Complex64::new(i as f32, j as f32));
        let b = factory.m_from_fn(dim, |i, j| Complex64::new(j as f32, -(i as f32)));

        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |bencher, _| {
            bencher.iter(|| black_box(a.mul_matrix(&b).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vector_addition, bench_matrix_product);
criterion_main!(benches);
