//! Criterion comparison of the four strategies.
//!
//! Run with: cargo bench --bench matmul_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use matmul::{Matrix, ParallelConfig, Strategy};
use std::hint::black_box;
use std::time::Duration;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    let config = ParallelConfig::default();

    for size in [64, 128, 256] {
        let a = Matrix::sequential(size, size);
        let b = Matrix::sequential(size, size);
        let mut result = Matrix::zeros(size, size);
        group.throughput(Throughput::Elements(2 * (size * size * size) as u64));

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.label(), size), &size, |bench, _| {
                bench.iter(|| {
                    strategy
                        .multiply(black_box(&a), black_box(&b), &mut result, &config)
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_dispatch_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_threshold");
    group.sample_size(20);

    // Just around the default threshold: 10x10 stays sequential, 11x11 dispatches.
    for size in [8, 10, 11, 16] {
        let a = Matrix::sequential(size, size);
        let b = Matrix::sequential(size, size);
        let mut result = Matrix::zeros(size, size);

        for (name, config) in [
            ("default", ParallelConfig::default()),
            ("always_parallel", ParallelConfig::default().threshold(0)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |bench, _| {
                bench.iter(|| {
                    matmul::multiply_parallel(black_box(&a), black_box(&b), &mut result, &config)
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_dispatch_threshold);
criterion_main!(benches);
