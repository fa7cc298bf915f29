//! Performance benchmarks for tenfact-kernels
//!
//! Run with: cargo bench -p tenfact-kernels
//!
//! Benchmarks cover:
//! - Khatri-Rao product
//! - N-mode product
//! - MTTKRP
//! - CP reconstruction

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scirs2_core::ndarray_ext::Array2;
use std::hint::black_box;
use tenfact_core::DenseND;
use tenfact_kernels::*;

fn bench_khatri_rao(c: &mut Criterion) {
    let mut group = c.benchmark_group("khatri_rao");

    for &size in [10, 50, 100, 200].iter() {
        let rank = 16;
        let a = Array2::<f64>::from_shape_fn((size, rank), |(i, j)| (i + j) as f64);
        let b = Array2::<f64>::from_shape_fn((size, rank), |(i, j)| (i * j + 1) as f64);

        group.throughput(Throughput::Elements((size * size * rank) as u64));
        group.bench_with_input(
            BenchmarkId::new("pair", format!("{}x{}", size, rank)),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    black_box(khatri_rao(&a.view(), &b.view()));
                });
            },
        );
    }

    group.finish();
}

fn bench_nmode(c: &mut Criterion) {
    let mut group = c.benchmark_group("nmode_product");

    for &size in [16, 32, 64].iter() {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[size, size, size], 0.0, 1.0, 5);
        let matrix = Array2::<f64>::from_shape_fn((size / 2, size), |(i, j)| (i + j) as f64);

        for mode in 0..3 {
            group.throughput(Throughput::Elements((size * size * size) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{}^3", size), format!("mode_{}", mode)),
                &mode,
                |bencher, &mode| {
                    bencher.iter(|| {
                        black_box(nmode_product(&tensor.view(), &matrix.view(), mode).unwrap());
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_mttkrp(c: &mut Criterion) {
    let mut group = c.benchmark_group("mttkrp");

    for &size in [16, 32, 48].iter() {
        let rank = 8;
        let tensor = DenseND::<f64>::random_uniform_seeded(&[size, size, size], 0.0, 1.0, 9);
        let factors: Vec<Array2<f64>> = (0..3)
            .map(|k| Array2::from_shape_fn((size, rank), |(i, j)| ((i + j + k) % 7) as f64))
            .collect();
        let views: Vec<_> = factors.iter().map(|f| f.view()).collect();

        for mode in 0..3 {
            group.throughput(Throughput::Elements((size * size * size * rank) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{}^3_r{}", size, rank), format!("mode_{}", mode)),
                &mode,
                |bencher, &mode| {
                    bencher.iter(|| {
                        black_box(mttkrp(&tensor.view(), &views, mode).unwrap());
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_cp_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("cp_reconstruct");

    for &size in [16, 32, 64].iter() {
        let rank = 10;
        let factors: Vec<Array2<f64>> = (0..3)
            .map(|k| Array2::from_shape_fn((size, rank), |(i, j)| ((i * j + k) % 5) as f64))
            .collect();
        let views: Vec<_> = factors.iter().map(|f| f.view()).collect();

        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(cp_reconstruct(&views, None).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_khatri_rao,
    bench_nmode,
    bench_mttkrp,
    bench_cp_reconstruct
);
criterion_main!(benches);
