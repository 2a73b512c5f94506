// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree with moving points.
//!
//! Simulate a handful of bodies drifting through a box. Each tick updates every body with the
//! node handle returned on the previous tick, then reports each body's nearest neighbor.
//! Positions are kept as Glam vectors and converted at the octree boundary.
//!
//! Run:
//! - `cargo run -p understory_examples --example octree_moving_points`
//! - `RUST_LOG=trace cargo run -p understory_examples --example octree_moving_points`

use glam::Vec3;
use understory_octree::{Aabb3D, NodeId, Octree, OctreeError};

const HALF_EXTENT: f32 = 50.0;

struct Body {
    id: u32,
    position: Vec3,
    velocity: Vec3,
    node: NodeId,
}

impl Body {
    /// Advance one tick, reflecting off the walls of the box.
    fn step(&mut self) {
        let next = self.position + self.velocity;
        let over = next.abs().cmpgt(Vec3::splat(HALF_EXTENT));
        self.velocity = Vec3::select(over, -self.velocity, self.velocity);
        let reflected = next.signum() * (2.0 * HALF_EXTENT - next.abs());
        self.position = Vec3::select(over, reflected, next);
    }
}

fn main() -> Result<(), OctreeError> {
    env_logger::init();

    let h = HALF_EXTENT;
    let region = Aabb3D::new(-h, -h, -h, h, h, h);
    let mut tree: Octree<f32, u32> = Octree::with_max_depth(region, 4);

    let seeds = [
        (Vec3::new(-40.0, -40.0, -40.0), Vec3::new(3.0, 1.5, 0.5)),
        (Vec3::new(40.0, 40.0, 40.0), Vec3::new(-2.0, -2.5, -1.0)),
        (Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.5, -0.5, 4.0)),
        (Vec3::new(-10.0, 25.0, 5.0), Vec3::new(1.0, -3.0, 0.0)),
        (Vec3::new(30.0, -20.0, -35.0), Vec3::new(-4.0, 0.0, 2.5)),
    ];
    let mut bodies = Vec::with_capacity(seeds.len());
    for (id, (position, velocity)) in (0_u32..).zip(seeds) {
        let node = tree.insert(id, position.into())?;
        bodies.push(Body {
            id,
            position,
            velocity,
            node,
        });
    }

    for tick in 0..10 {
        for body in &mut bodies {
            body.step();
            let node = tree.update(body.id, body.node, body.position.into())?;
            if node != body.node {
                log::info!("tick {tick}: body {} crossed into node {node:?}", body.id);
            }
            body.node = node;
        }
        let report: Vec<_> = bodies
            .iter()
            .map(|b| tree.closest(b.id).map(|n| (b.id, n)))
            .collect::<Result<_, _>>()?;
        println!("tick {tick:2}: nodes={:3} nearest={report:?}", tree.node_count());
    }

    // Positions read back from the tree convert to Glam as well.
    for (id, p) in tree.iter() {
        println!("body {id} ends at {}", Vec3::from(p));
    }

    tree.verify()?;
    Ok(())
}
