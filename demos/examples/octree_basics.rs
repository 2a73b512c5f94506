// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree basics.
//!
//! Track three objects, query nearest neighbors, move one, and address nodes by grid coordinate.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_examples --example octree_basics`

use understory_octree::{Aabb3D, Octree, OctreeError, Point3D};

fn main() -> Result<(), OctreeError> {
    env_logger::init();

    // A unit cube, subdivided at most twice.
    let mut tree: Octree<f64, &str> =
        Octree::with_max_depth(Aabb3D::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0), 2);

    let a = tree.insert("a", Point3D::new(0.1, 0.1, 0.1))?;
    let _b = tree.insert("b", Point3D::new(0.9, 0.9, 0.9))?;
    let _c = tree.insert("c", Point3D::new(0.12, 0.12, 0.12))?;
    println!("nodes after inserts: {}", tree.node_count());
    println!("closest(a) = {:?}", tree.closest("a")?);
    println!("closest(b) = {:?}", tree.closest("b")?);

    // Move "a" across the cube; it leaves its leaf and the empty branch is pruned.
    let a = tree.update("a", a, Point3D::new(0.8, 0.85, 0.9))?;
    let leaf = tree.node(a).expect("update returns a live node");
    println!(
        "a now lives at depth {} coord {:?}, region {:?}",
        leaf.depth(),
        leaf.coord(),
        leaf.region()
    );
    println!("closest(b) = {:?}", tree.closest("b")?);

    // Grid lookup reaches the same leaf.
    let c = leaf.coord();
    println!("locate({}, {}, {}, 2) = {:?}", c.x, c.y, c.z, tree.locate(c.x, c.y, c.z, 2));

    // Out-of-bounds moves are rejected without touching the tree.
    match tree.update("a", a, Point3D::new(1.5, 0.0, 0.0)) {
        Err(e) => println!("rejected: {e}"),
        Ok(_) => unreachable!(),
    }

    // Querying a point that is not itself tracked.
    println!(
        "nearest to (0.0, 0.0, 0.0) = {:?}",
        tree.nearest_to_point(Point3D::new(0.0, 0.0, 0.0))
    );

    tree.remove("a", a)?;
    tree.verify()?;
    println!("after removing a: {} objects, {} nodes", tree.len(), tree.node_count());
    Ok(())
}
