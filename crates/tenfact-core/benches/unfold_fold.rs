//! Benchmarks for unfold/fold (matricization) operations.
//!
//! Compares the copying `unfold` against walking the borrowed `Unfolding` view.
//!
//! Run with:
//! ```bash
//! cargo bench --bench unfold_fold
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tenfact_core::DenseND;

fn test_cases() -> Vec<(&'static str, Vec<usize>)> {
    vec![
        ("3d_small", vec![10, 20, 30]),
        ("3d_medium", vec![50, 60, 70]),
        ("3d_rect", vec![200, 50, 25]),
        ("4d_small", vec![10, 10, 10, 10]),
        ("4d_medium", vec![20, 30, 40, 50]),
    ]
}

fn bench_unfold(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold");

    for (name, shape) in test_cases() {
        let tensor = DenseND::<f64>::ones(&shape);
        let total: usize = shape.iter().product();

        for mode in 0..shape.len() {
            group.throughput(Throughput::Elements(total as u64));
            group.bench_with_input(
                BenchmarkId::new(name, format!("mode_{}", mode)),
                &mode,
                |b, &mode| {
                    b.iter(|| {
                        let unfolded = tensor.unfold(black_box(mode)).unwrap();
                        black_box(unfolded);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_unfolding_view_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfolding_view_sum");

    for (name, shape) in test_cases() {
        let tensor = DenseND::<f64>::ones(&shape);
        let total: usize = shape.iter().product();

        for mode in 0..shape.len() {
            group.throughput(Throughput::Elements(total as u64));
            group.bench_with_input(
                BenchmarkId::new(name, format!("mode_{}", mode)),
                &mode,
                |b, &mode| {
                    b.iter(|| {
                        let view = tensor.unfolding(black_box(mode)).unwrap();
                        let s: f64 = (0..view.prefix()).map(|p| view.block(p).sum()).sum();
                        black_box(s);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    for (name, shape) in test_cases() {
        let tensor = DenseND::<f64>::ones(&shape);
        let total: usize = shape.iter().product();

        for mode in 0..shape.len() {
            let unfolded = tensor.unfold(mode).unwrap();
            group.throughput(Throughput::Elements(total as u64));
            group.bench_with_input(
                BenchmarkId::new(name, format!("mode_{}", mode)),
                &mode,
                |b, &mode| {
                    b.iter(|| {
                        let folded = DenseND::fold(&unfolded, black_box(&shape), mode).unwrap();
                        black_box(folded);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_unfold, bench_unfolding_view_sum, bench_fold);
criterion_main!(benches);
