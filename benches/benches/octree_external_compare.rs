// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_octree::{Aabb3D, Octree, Point3D};

use rstar::RTree;

fn gen_points(count: usize) -> Vec<Point3D<f64>> {
    let mut rng = StdRng::seed_from_u64(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            Point3D::new(
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..1000.0),
            )
        })
        .collect()
}

fn bench_nearest_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_external_compare_f64");
    for &n in &[1_000usize, 10_000] {
        let points = gen_points(n);
        let queries = gen_points(256);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_function(format!("understory_build_query_n{n}"), |b| {
            b.iter_batched(
                || {
                    let region = Aabb3D::new(0.0, 0.0, 0.0, 1000.0, 1000.0, 1000.0);
                    Octree::<f64, u32>::with_max_depth(region, 5)
                },
                |mut tree| {
                    for (i, p) in points.iter().copied().enumerate() {
                        let _ = tree.insert(i as u32, p).unwrap();
                    }
                    for q in &queries {
                        black_box(tree.nearest_to_point(*q));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y, p.z]).collect::<Vec<_>>(),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    for q in &queries {
                        black_box(tree.nearest_neighbor(&[q.x, q.y, q.z]));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_external_compare);
criterion_main!(benches);
