//! Criterion benchmarks for the path-generation kernel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pathsim_engine::{PathGenerator, SimulationParameters};

fn bench_single_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_path");

    for n_steps in [64, 252, 1024] {
        let generator = PathGenerator::new(SimulationParameters::new(
            100.0, 0.05, 0.2, 1.0, n_steps,
        ))
        .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(n_steps),
            &generator,
            |b, generator| b.iter(|| black_box(generator.generate_seeded(42).unwrap())),
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_1000_paths");
    group.sample_size(20);

    let generator =
        PathGenerator::new(SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 252)).unwrap();

    group.bench_function("parallel", |b| {
        b.iter(|| black_box(generator.generate_batch(1_000, 42).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_single_path, bench_batch);
criterion_main!(benches);
