// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree nodes: identifiers, grid coordinates, and read-only views.

use alloc::collections::BTreeSet;
use core::fmt::Debug;

use crate::types::{Aabb3D, ClosedFaces, Point3D, Scalar, le};

/// Identifier for a node in the octree.
///
/// This is a small, copyable handle that stays stable while the node exists but
/// becomes invalid when the node is pruned.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - Nodes are allocated when a parent subdivides; a fresh slot starts at generation `1`.
/// - When a node's subtree empties, its children are pruned and their slots freed;
///   any existing `NodeId` that pointed to those slots is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// The node owning a tracked object always holds that object, so it is never pruned
/// while the object stays put. Use [`Octree::is_alive`](crate::Octree::is_alive)
/// to check any other handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Integer position of a node within the grid of its depth level.
///
/// At depth `d` the region is cut into `2^d` cells per axis; the root is `(0, 0, 0)`
/// at depth 0, and a child's coordinate is its parent's doubled plus its octant offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridCoord {
    /// Cell index along x.
    pub x: u32,
    /// Cell index along y.
    pub y: u32,
    /// Cell index along z.
    pub z: u32,
}

impl GridCoord {
    /// Create a grid coordinate.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate of the child in `octant` (bits `x | y << 1 | z << 2`).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Octant offsets are single bits."
    )]
    pub(crate) const fn child(self, octant: usize) -> Self {
        Self {
            x: 2 * self.x + (octant & 1) as u32,
            y: 2 * self.y + ((octant >> 1) & 1) as u32,
            z: 2 * self.z + ((octant >> 2) & 1) as u32,
        }
    }

    /// The octant selected by bit `shift` of each component.
    pub(crate) const fn octant_at(self, shift: u32) -> usize {
        (((self.x >> shift) & 1) | (((self.y >> shift) & 1) << 1) | (((self.z >> shift) & 1) << 2))
            as usize
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T, K> {
    pub(crate) generation: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Option<[NodeId; 8]>,
    pub(crate) region: Aabb3D<T>,
    pub(crate) closed: ClosedFaces,
    pub(crate) depth: u8,
    pub(crate) coord: GridCoord,
    pub(crate) contained: BTreeSet<K>,
}

impl<T: Scalar, K> Node<T, K> {
    pub(crate) fn new(
        generation: u32,
        parent: Option<NodeId>,
        region: Aabb3D<T>,
        closed: ClosedFaces,
        depth: u8,
        coord: GridCoord,
    ) -> Self {
        Self {
            generation,
            parent,
            children: None,
            region,
            closed,
            depth,
            coord,
            contained: BTreeSet::new(),
        }
    }

    /// Half-open containment, consistent with how a parent picks the child octant.
    pub(crate) fn contains(&self, p: Point3D<T>) -> bool {
        self.region.contains_point_half_open(p, self.closed)
    }

    /// The octant of this node that holds `p`, assuming `self.contains(p)`.
    pub(crate) fn octant_for(&self, p: Point3D<T>) -> usize {
        let c = self.region.center();
        usize::from(le(c.x, p.x))
            | (usize::from(le(c.y, p.y)) << 1)
            | (usize::from(le(c.z, p.z)) << 2)
    }

    /// Faces of the child in `octant` that stay closed: only upper halves inherit ours.
    pub(crate) fn child_closed(&self, octant: usize) -> ClosedFaces {
        let mut upper = ClosedFaces::empty();
        upper.set(ClosedFaces::X, octant & 1 != 0);
        upper.set(ClosedFaces::Y, octant & 2 != 0);
        upper.set(ClosedFaces::Z, octant & 4 != 0);
        self.closed & upper
    }
}

/// Read-only view of a live node, returned by [`Octree::node`](crate::Octree::node).
#[derive(Debug)]
pub struct NodeRef<'a, T, K> {
    pub(crate) id: NodeId,
    pub(crate) node: &'a Node<T, K>,
    pub(crate) max_depth: u8,
}

impl<'a, T: Scalar, K: Copy + Ord + Debug> NodeRef<'a, T, K> {
    /// The node's identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The region covered by this node.
    pub fn region(&self) -> Aabb3D<T> {
        self.node.region
    }

    /// Which max faces of [`region`](Self::region) count as inside.
    pub fn closed_faces(&self) -> ClosedFaces {
        self.node.closed
    }

    /// Distance from the root; the root is at depth 0.
    pub fn depth(&self) -> u8 {
        self.node.depth
    }

    /// Grid coordinate of this node at its depth.
    pub fn coord(&self) -> GridCoord {
        self.node.coord
    }

    /// The parent node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.node.parent
    }

    /// The eight children in octant order, if this node is subdivided.
    pub fn children(&self) -> Option<[NodeId; 8]> {
        self.node.children
    }

    /// Whether this node sits at the maximum depth and never subdivides.
    pub fn is_leaf(&self) -> bool {
        self.node.depth >= self.max_depth
    }

    /// Whether `p` falls inside this node under the tree's boundary rules.
    pub fn contains_point(&self, p: Point3D<T>) -> bool {
        self.node.contains(p)
    }

    /// Number of tracked objects anywhere inside this node.
    pub fn len(&self) -> usize {
        self.node.contained.len()
    }

    /// Whether no tracked object lies inside this node.
    pub fn is_empty(&self) -> bool {
        self.node.contained.is_empty()
    }

    /// Whether `object` lies inside this node.
    pub fn contains_object(&self, object: K) -> bool {
        self.node.contained.contains(&object)
    }

    /// Objects inside this node, in key order.
    pub fn objects(&self) -> impl Iterator<Item = K> + 'a {
        self.node.contained.iter().copied()
    }
}
