use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use skein::{ClassicalMds, Clustering, DistanceMatrix, Hierarchical, Structural};

fn synthetic_tokens(n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let levels = ["req", "design", "test", "doc"];
    let scopes = ["auth", "storage", "net", "ui", "core"];
    (0..n)
        .map(|_| {
            format!(
                "{}:{}:{}-{:04x}#v{}",
                levels[rng.random_range(0..levels.len())],
                scopes[rng.random_range(0..scopes.len())],
                ["login", "index", "flush", "parse", "merge"][rng.random_range(0..5)],
                rng.random::<u16>(),
                rng.random_range(1..4)
            )
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let items = synthetic_tokens(200, 42);
    let metric = Structural::default();

    group.bench_function("matrix_build_n200_structural", |b| {
        b.iter(|| DistanceMatrix::build(black_box(&items), &metric));
    });

    let matrix = DistanceMatrix::build(&items, &metric);

    group.bench_function("hierarchical_n200", |b| {
        b.iter(|| {
            let clusters = Hierarchical::new(0.3)
                .cluster(black_box(&items), black_box(&matrix))
                .unwrap();
            black_box(clusters);
        });
    });

    let small = synthetic_tokens(60, 7);
    let small_matrix = DistanceMatrix::build(&small, &metric);

    group.bench_function("mds_n60_d3", |b| {
        b.iter(|| {
            let result = ClassicalMds::default().project(black_box(&small_matrix));
            black_box(result);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
