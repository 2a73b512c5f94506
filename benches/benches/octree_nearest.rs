// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_octree::{Aabb3D, Octree, Point3D};

const EXTENT: f64 = 1000.0;

fn region() -> Aabb3D<f64> {
    Aabb3D::new(0.0, 0.0, 0.0, EXTENT, EXTENT, EXTENT)
}

fn gen_uniform_points(count: usize, seed: u64) -> Vec<Point3D<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point3D::new(
                rng.random_range(0.0..EXTENT),
                rng.random_range(0.0..EXTENT),
                rng.random_range(0.0..EXTENT),
            )
        })
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point3D<f64>> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let c = Point3D::new(
            rng.random_range(spread..EXTENT - spread),
            rng.random_range(spread..EXTENT - spread),
            rng.random_range(spread..EXTENT - spread),
        );
        for _ in 0..per_cluster {
            out.push(Point3D::new(
                c.x + rng.random_range(-spread..spread),
                c.y + rng.random_range(-spread..spread),
                c.z + rng.random_range(-spread..spread),
            ));
        }
    }
    out
}

fn build(points: &[Point3D<f64>], depth: u8) -> Octree<f64, u32> {
    let mut tree = Octree::with_max_depth(region(), depth);
    for (i, p) in points.iter().copied().enumerate() {
        let _ = tree.insert(i as u32, p).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_insert");
    for &n in &[1_000usize, 10_000] {
        let points = gen_uniform_points(n, 0xCAFE_F00D);
        group.throughput(Throughput::Elements(n as u64));
        for depth in [3_u8, 5] {
            group.bench_function(format!("uniform_n{n}_depth{depth}"), |b| {
                b.iter(|| black_box(build(&points, depth)));
            });
        }
    }
    group.finish();
}

fn bench_update_drift(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_update");
    for &n in &[1_000usize, 10_000] {
        let points = gen_uniform_points(n, 0xFACE_FEED);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("drift_n{n}_depth5"), |b| {
            b.iter_batched(
                || build(&points, 5),
                |mut tree| {
                    // One tick: every object drifts a little, a few cross leaf faces.
                    for (i, p) in points.iter().enumerate() {
                        let k = i as u32;
                        let node = tree.node_of(k).unwrap();
                        let moved = Point3D::new((p.x + 7.5).min(EXTENT), p.y, p.z);
                        let _ = tree.update(k, node, moved).unwrap();
                    }
                    black_box(tree.len());
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_closest");
    let layouts = [
        ("uniform", gen_uniform_points(5_000, 0xBADC_F00D)),
        ("clustered", gen_clustered_points(50, 100, 10.0)),
    ];
    for (name, points) in &layouts {
        let tree = build(points, 5);
        let n = points.len();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("{name}_branch_and_bound_n{n}"), |b| {
            b.iter(|| {
                for k in 0..n as u32 {
                    black_box(tree.closest(k).unwrap());
                }
            });
        });
        group.bench_function(format!("{name}_brute_force_n{n}"), |b| {
            b.iter(|| {
                for k in (0..n as u32).step_by(10) {
                    black_box(tree.closest_brute_force(k).unwrap());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_update_drift, bench_closest);
criterion_main!(benches);
