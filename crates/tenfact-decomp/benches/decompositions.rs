//! Performance benchmarks for tensor decompositions
//!
//! Run with: cargo bench -p tenfact-decomp

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tenfact_core::DenseND;
use tenfact_decomp::{
    relative_error, CpAls, Decomposition, Hooi, HooiConfig, Hosvd, InitStrategy, IterConfig,
    KruskalRank, MultilinearRank, TtRank, TtSvd,
};

// ============================================================================
// CP-ALS Benchmarks
// ============================================================================

fn bench_cp_als(c: &mut Criterion) {
    let mut group = c.benchmark_group("cp_als");
    group.sample_size(10);

    for &(size, rank) in &[(16, 5), (32, 10), (48, 10)] {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[size, size, size], 0.0, 1.0, 1);

        for init in [InitStrategy::Svd, InitStrategy::Random] {
            // Fixed pass count so timings compare
            let cp = CpAls::new(
                IterConfig::default()
                    .with_init(init)
                    .with_max_iter(10)
                    .with_tol(0.0)
                    .with_epsilon(0.0)
                    .with_random_state(7),
            )
            .unwrap();

            group.throughput(Throughput::Elements((size * size * size) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", init), format!("{}^3_r{}", size, rank)),
                &rank,
                |b, &rank| {
                    b.iter(|| black_box(cp.decompose(black_box(&tensor), &KruskalRank(rank))))
                },
            );
        }
    }

    group.finish();
}

// ============================================================================
// Tucker Benchmarks
// ============================================================================

fn bench_tucker(c: &mut Criterion) {
    let mut group = c.benchmark_group("tucker");
    group.sample_size(10);

    for &size in &[16, 32, 48] {
        let tensor = DenseND::<f64>::random_uniform_seeded(&[size, size, size], 0.0, 1.0, 2);
        let rank = MultilinearRank(vec![size / 4; 3]);
        let hooi = Hooi::new(HooiConfig::new(
            IterConfig::default().with_max_iter(5).with_tol(0.0).with_epsilon(0.0),
        ))
        .unwrap();

        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(BenchmarkId::new("hosvd", size), &rank, |b, rank| {
            b.iter(|| black_box(Hosvd::new().decompose(black_box(&tensor), rank)))
        });
        group.bench_with_input(BenchmarkId::new("hooi_5_passes", size), &rank, |b, rank| {
            b.iter(|| black_box(hooi.decompose(black_box(&tensor), rank)))
        });
    }

    group.finish();
}

// ============================================================================
// Tensor Train Benchmarks
// ============================================================================

fn bench_tt_svd(c: &mut Criterion) {
    let mut group = c.benchmark_group("tt_svd");
    group.sample_size(10);

    for &(size, order, bond) in &[(8, 4, 4), (8, 5, 8), (6, 6, 8)] {
        let shape = vec![size; order];
        let tensor = DenseND::<f64>::random_uniform_seeded(&shape, 0.0, 1.0, 3);
        let rank = TtRank(vec![bond; order - 1]);

        group.throughput(Throughput::Elements(tensor.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}^{}_r{}", size, order, bond)),
            &rank,
            |b, rank| b.iter(|| black_box(TtSvd::new().decompose(black_box(&tensor), rank))),
        );
    }

    group.finish();
}

// ============================================================================
// Evaluation
// ============================================================================

fn bench_relative_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative_error");

    let tensor = DenseND::<f64>::random_uniform_seeded(&[32, 32, 32], 0.0, 1.0, 4);
    let tucker = Hosvd::new()
        .decompose(&tensor, &MultilinearRank(vec![8, 8, 8]))
        .unwrap();
    let tt = TtSvd::new().decompose(&tensor, &TtRank(vec![8, 8])).unwrap();

    group.bench_function("tucker", |b| {
        b.iter(|| black_box(relative_error(&tensor, &tucker)))
    });
    group.bench_function("tensor_train", |b| {
        b.iter(|| black_box(relative_error(&tensor, &tt)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cp_als,
    bench_tucker,
    bench_tt_svd,
    bench_relative_error
);
criterion_main!(benches);
