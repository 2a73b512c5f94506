// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_octree --heading-base-level=0

//! Understory Octree: a sparse 3D octree for tracking moving points.
//!
//! Understory Octree indexes a fixed 3D region and keeps one position per tracked
//! object, answering nearest-neighbor queries without comparing every pair.
//!
//! - Insert, update, and remove objects by caller-provided keys.
//! - Moves are incremental: an object is evicted upward only as far as the first
//!   node that still contains its new position, then descends from there.
//! - Nodes subdivide lazily into octants when they first gain an object, and are
//!   pruned back when they empty.
//! - [`Octree::closest`] finds the nearest other object with a branch-and-bound
//!   search that starts at the object's own leaf.
//! - [`Octree::locate`] addresses nodes directly by their integer grid coordinate.
//!
//! It is generic over the scalar type `T` (`f32`, `f64`, `i64`) and does not depend
//! on any geometry crate. Enable the `glam` feature for conversions from Glam vectors.
//!
//! # Example
//!
//! ```rust
//! use understory_octree::{Aabb3D, Octree, Point3D};
//!
//! // Unit cube, leaves two levels down.
//! let mut tree: Octree<f64, u32> =
//!     Octree::with_max_depth(Aabb3D::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0), 2);
//!
//! let a = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
//! let _b = tree.insert(2, Point3D::new(0.9, 0.9, 0.9)).unwrap();
//! let _c = tree.insert(3, Point3D::new(0.12, 0.12, 0.12)).unwrap();
//! assert_eq!(tree.closest(1).unwrap(), Some(3));
//!
//! // Move object 1 next to object 2. The returned node is the new owner.
//! let a = tree.update(1, a, Point3D::new(0.85, 0.9, 0.9)).unwrap();
//! assert_eq!(tree.closest(2).unwrap(), Some(1));
//!
//! // Positions outside the region are rejected and leave the tree untouched.
//! assert!(tree.update(1, a, Point3D::new(2.0, 0.0, 0.0)).is_err());
//!
//! tree.remove(1, a).unwrap();
//! assert_eq!(tree.closest(2).unwrap(), Some(3));
//! ```
//!
//! ## Boundaries
//!
//! A node contains a point when `min <= p < max` on every axis, except that faces
//! lying on the region's own max faces are inclusive. The eight octants of a node
//! therefore partition it exactly, a point on a split plane always belongs to the
//! upper octant, and every point of the closed region has exactly one leaf.
//!
//! ## Nearest neighbors and ties
//!
//! Squared distances are compared with a small tolerance ([`Scalar::tie_epsilon`]).
//! Every candidate within that tolerance of the nearest distance is treated as
//! equally near and the smallest key wins, so results do not depend on traversal
//! order.
//! [`Octree::closest_brute_force`] applies the same rule with a linear scan and is
//! handy as a reference in tests.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates.
//! Squared distances use widened accumulators (`f32`→`f64`, `i64`→`i128`).
//! Integer squared distances are exact while per-axis differences stay below
//! `2^62` and saturate at `i128::MAX` beyond that.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
#[cfg(feature = "glam")]
mod interop;
mod nearest;
pub mod node;
pub mod octree;
pub mod types;

pub use error::OctreeError;
pub use node::{GridCoord, NodeId, NodeRef};
pub use octree::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, Octree};
pub use types::{Aabb3D, ClosedFaces, Point3D, Scalar};
