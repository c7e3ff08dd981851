//! Criterion benchmarks for the edge-merge Minkowski sum.
//! `polygons`: pre-hulled inputs (merge only). `points`: raw clouds end to end.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use minkowski::geom2::rand::{
    draw_cloud, draw_convex_polygon, CloudCfg, CloudShape, PointCount, ReplayToken,
};
use minkowski::{minkowski_sum, minkowski_sum_points, SumCfg};

fn ring(n: usize) -> CloudCfg {
    CloudCfg {
        point_count: PointCount::Fixed(n),
        shape: CloudShape::Ring {
            angle_jitter_frac: 0.3,
            radial_jitter: 0.001,
        },
        radius: 1e6,
        ..CloudCfg::default()
    }
}

fn bench_sum(c: &mut Criterion) {
    let sum_cfg = SumCfg::default();
    let mut group = c.benchmark_group("sum");
    for &n in &[10usize, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("polygons", n), &n, |b, &n| {
            let pa = draw_convex_polygon(ring(n), ReplayToken { seed: 44, index: 0 });
            let pb = draw_convex_polygon(ring(n), ReplayToken { seed: 44, index: 1 });
            b.iter(|| {
                let _s = minkowski_sum(&pa, &pb, &sum_cfg).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("points", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let cfg = CloudCfg {
                        point_count: PointCount::Fixed(n),
                        ..CloudCfg::default()
                    };
                    (
                        draw_cloud(cfg, ReplayToken { seed: 45, index: 0 }),
                        draw_cloud(cfg, ReplayToken { seed: 45, index: 1 }),
                    )
                },
                |(a, b)| {
                    let _s = minkowski_sum_points(&a, &b, &sum_cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sum);
criterion_main!(benches);
