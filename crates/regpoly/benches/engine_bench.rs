//! Criterion microbenches for the geometry engine.
//!
//! - properties: forward formulas and the three inverse derivations.
//! - vertices: loop generation for n in {3, 12, 100, 1000}.
//! - scene: composing a seeded five-layer random scene.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use regpoly::prelude::*;

fn bench_properties(c: &mut Criterion) {
    let mut group = c.benchmark_group("props");
    group.bench_function("compute_properties/hexagon", |b| {
        b.iter(|| compute_properties(6, 1.0).unwrap())
    });
    for kind in [QuantityKind::Perimeter, QuantityKind::Area, QuantityKind::Apothem] {
        group.bench_with_input(
            BenchmarkId::new("derive_side_length", kind),
            &kind,
            |b, &kind| b.iter(|| derive_side_length(12, 3.0, kind).unwrap()),
        );
    }
    group.finish();
}

fn bench_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertices");
    for &n in &[3u32, 12, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("generate_vertices", n), &n, |b, &n| {
            b.iter(|| generate_vertices(n, Point::zeros(), 1.0, 15.0).unwrap())
        });
    }
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    group.bench_function(BenchmarkId::new("compose_scene", "random-5"), |b| {
        let cfg = RandomSceneCfg {
            count_min: 5,
            count_max: 5,
            ..RandomSceneCfg::default()
        };
        b.iter_batched(
            || random_scene(cfg, 2025).unwrap().entries(),
            |entries| {
                let _ = compose_scene(&entries).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_properties, bench_vertices, bench_scene);
criterion_main!(benches);
