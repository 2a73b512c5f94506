// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`Octree`](crate::Octree) operations.

use crate::node::NodeId;

/// Errors reported by [`Octree`](crate::Octree) operations.
///
/// Every fallible mutation checks its preconditions before touching the tree, so
/// an `Err` always leaves the tree exactly as it was.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OctreeError {
    /// The position lies outside the tree's region.
    #[error("position lies outside the octree region")]
    OutOfBounds,

    /// The object is not tracked by this tree.
    #[error("object is not tracked by this octree")]
    UnknownObject,

    /// The node handle is not the object's current owning node.
    #[error("node handle is not the object's owning node")]
    StaleNode,

    /// [`Octree::verify`](crate::Octree::verify) found a node whose containment
    /// set disagrees with the tracked positions.
    #[error("containment mismatch at node {node:?}")]
    Inconsistent {
        /// The first node found to be inconsistent.
        node: NodeId,
    },
}
