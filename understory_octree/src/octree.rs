// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: node arena, subdivision, and incremental relocation.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::OctreeError;
use crate::node::{GridCoord, Node, NodeId, NodeRef};
use crate::types::{Aabb3D, ClosedFaces, Point3D, Scalar};

/// Maximum depth used by [`Octree::new`].
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Largest accepted maximum depth; grid coordinates must fit in `u32`.
pub const MAX_DEPTH_LIMIT: u8 = 30;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Entry<T> {
    pub(crate) position: Point3D<T>,
    pub(crate) node: NodeId,
}

/// Sparse octree over a fixed region, tracking one position per object.
///
/// Objects are identified by caller-provided keys. Keys must be stable for the
/// lifetime of the tracked object; their order is used as the deterministic
/// tie-break between equally near neighbors.
///
/// Every tracked object lives in a leaf at [`max_depth`](Self::max_depth), and is a
/// member of that leaf and of each of its ancestors. Nodes are subdivided when they
/// first gain an object and their children are pruned again once they empty.
pub struct Octree<T, K> {
    pub(crate) region: Aabb3D<T>,
    pub(crate) max_depth: u8,
    pub(crate) root: NodeId,
    nodes: Vec<Option<Node<T, K>>>,
    /// Last generation handed out per slot; survives the slot being freed.
    generations: Vec<u32>,
    free_list: Vec<usize>,
    pub(crate) entries: BTreeMap<K, Entry<T>>,
}

impl<T: Debug, K> Debug for Octree<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Octree")
            .field("region", &self.region)
            .field("max_depth", &self.max_depth)
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("objects", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, K: Copy + Ord + Debug> Octree<T, K> {
    /// Create an octree over `region` with [`DEFAULT_MAX_DEPTH`].
    ///
    /// Panics if `region` is inverted on any axis.
    pub fn new(region: Aabb3D<T>) -> Self {
        Self::with_max_depth(region, DEFAULT_MAX_DEPTH)
    }

    /// Create an octree over `region` whose leaves sit at `max_depth`.
    ///
    /// A depth of 0 makes the root the only node. Panics if `region` is inverted on
    /// any axis or `max_depth` exceeds [`MAX_DEPTH_LIMIT`].
    pub fn with_max_depth(region: Aabb3D<T>, max_depth: u8) -> Self {
        assert!(!region.is_empty(), "octree region must not be inverted");
        assert!(
            max_depth <= MAX_DEPTH_LIMIT,
            "octree depth must not exceed {MAX_DEPTH_LIMIT}"
        );
        log::debug!("octree created over {region:?} with max depth {max_depth}");
        let mut tree = Self {
            region,
            max_depth,
            root: NodeId::new(0, 1),
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            entries: BTreeMap::new(),
        };
        tree.root = tree.alloc(None, region, ClosedFaces::all(), 0, GridCoord::default());
        tree
    }

    /// The indexed region.
    pub fn region(&self) -> Aabb3D<T> {
        self.region
    }

    /// Depth of the leaves; fixed at construction.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// The root node, covering the whole region.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of tracked objects.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no objects are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `object` is tracked.
    pub fn contains(&self, object: K) -> bool {
        self.entries.contains_key(&object)
    }

    /// Last known position of `object`.
    pub fn position(&self, object: K) -> Option<Point3D<T>> {
        self.entries.get(&object).map(|e| e.position)
    }

    /// The node currently owning `object`.
    pub fn node_of(&self, object: K) -> Option<NodeId> {
        self.entries.get(&object).map(|e| e.node)
    }

    /// Iterate tracked objects and their positions, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Point3D<T>)> + '_ {
        self.entries.iter().map(|(k, e)| (*k, e.position))
    }

    /// Number of live nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Read-only view of a live node.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T, K>> {
        let node = self.nodes.get(id.idx())?.as_ref()?;
        if node.generation != id.1 {
            return None;
        }
        Some(NodeRef {
            id,
            node,
            max_depth: self.max_depth,
        })
    }

    /// Start tracking `object` at `position`. Returns the owning leaf.
    ///
    /// Inserting an object that is already tracked moves it to `position`, so
    /// repeating an insert with the same position changes nothing.
    pub fn insert(&mut self, object: K, position: Point3D<T>) -> Result<NodeId, OctreeError> {
        if !self.region.contains_point(position) {
            return Err(OctreeError::OutOfBounds);
        }
        let node = match self.node_of(object) {
            Some(current) => self.relocate(current, object, position),
            None => self.insert_at(self.root, object, position),
        };
        self.entries.insert(object, Entry { position, node });
        Ok(node)
    }

    /// Move `object`, currently owned by `node`, to `position`. Returns the new owning leaf.
    ///
    /// When `node` still contains `position` only the stored position changes.
    /// Otherwise the object is evicted from nodes up the tree until one contains
    /// `position`, then descends from there, so the cost is bounded by the depth.
    pub fn update(
        &mut self,
        object: K,
        node: NodeId,
        position: Point3D<T>,
    ) -> Result<NodeId, OctreeError> {
        if !self.region.contains_point(position) {
            return Err(OctreeError::OutOfBounds);
        }
        self.check_owner(object, node)?;
        let owner = if self.node_ref(node).contains(position) {
            node
        } else {
            let owner = self.relocate(node, object, position);
            log::trace!("object {object:?} moved from node {node:?} to {owner:?}");
            owner
        };
        self.entries.insert(
            object,
            Entry {
                position,
                node: owner,
            },
        );
        Ok(owner)
    }

    /// Stop tracking `object`, currently owned by `node`.
    ///
    /// The object is purged from `node` and every ancestor.
    pub fn remove(&mut self, object: K, node: NodeId) -> Result<(), OctreeError> {
        self.check_owner(object, node)?;
        self.evict_upward(node, object);
        self.entries.remove(&object);
        Ok(())
    }

    /// Drop every object and all nodes but an empty root.
    pub fn clear(&mut self) {
        log::debug!("octree cleared ({} objects)", self.entries.len());
        self.nodes.clear();
        self.generations.clear();
        self.free_list.clear();
        self.entries.clear();
        self.root = self.alloc(None, self.region, ClosedFaces::all(), 0, GridCoord::default());
    }

    /// Find the node at grid coordinate `(x, y, z)` of level `depth`.
    ///
    /// At each level the octant is read from the coordinate bit for the remaining
    /// depth difference, so the walk follows a single branch. Returns `None` if
    /// `depth` exceeds [`max_depth`](Self::max_depth), a coordinate is outside
    /// `0..2^depth`, or that branch has not been subdivided.
    pub fn locate(&self, x: u32, y: u32, z: u32, depth: u8) -> Option<NodeId> {
        if depth > self.max_depth {
            return None;
        }
        let extent = 1_u64 << depth;
        if u64::from(x) >= extent || u64::from(y) >= extent || u64::from(z) >= extent {
            return None;
        }
        let target = GridCoord::new(x, y, z);
        let mut id = self.root;
        for level in 0..depth {
            let children = self.node_ref(id).children?;
            id = children[target.octant_at(u32::from(depth - level - 1))];
        }
        debug_assert_eq!(self.node_ref(id).coord, target, "grid walk diverged");
        Some(id)
    }

    /// Find the leaf at grid coordinate `(x, y, z)` of the deepest level.
    pub fn locate_leaf(&self, x: u32, y: u32, z: u32) -> Option<NodeId> {
        self.locate(x, y, z, self.max_depth)
    }

    /// Check every live node's containment set against the tracked positions.
    ///
    /// Each object must be a member of exactly the nodes on its root-to-leaf
    /// path, its entry must name that leaf, non-empty nodes above the leaves must
    /// be subdivided, and empty nodes must not be. Returns the first offending node.
    pub fn verify(&self) -> Result<(), OctreeError> {
        let mut expected: BTreeMap<usize, usize> = BTreeMap::new();
        for (object, entry) in &self.entries {
            let mut id = self.root;
            loop {
                let node = self.node_ref(id);
                if !node.contains(entry.position) || !node.contained.contains(object) {
                    return Err(OctreeError::Inconsistent { node: id });
                }
                *expected.entry(id.idx()).or_default() += 1;
                match node.children {
                    Some(children) => id = children[node.octant_for(entry.position)],
                    None => break,
                }
            }
            if id != entry.node || self.node_ref(id).depth != self.max_depth {
                return Err(OctreeError::Inconsistent { node: entry.node });
            }
        }
        for (idx, slot) in self.nodes.iter().enumerate() {
            let Some(node) = slot else {
                continue;
            };
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            let id = NodeId::new(idx as u32, node.generation);
            let count = expected.get(&idx).copied().unwrap_or(0);
            let subdivided = node.children.is_some();
            let can_subdivide = node.depth < self.max_depth;
            if node.contained.len() != count
                || (node.contained.is_empty() && subdivided)
                || (!node.contained.is_empty() && can_subdivide && !subdivided)
            {
                return Err(OctreeError::Inconsistent { node: id });
            }
        }
        Ok(())
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    pub(crate) fn node_ref(&self, id: NodeId) -> &Node<T, K> {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T, K> {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn check_owner(&self, object: K, node: NodeId) -> Result<(), OctreeError> {
        let entry = self
            .entries
            .get(&object)
            .ok_or(OctreeError::UnknownObject)?;
        if entry.node != node {
            return Err(OctreeError::StaleNode);
        }
        Ok(())
    }

    fn alloc(
        &mut self,
        parent: Option<NodeId>,
        region: Aabb3D<T>,
        closed: ClosedFaces,
        depth: u8,
        coord: GridCoord,
    ) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, parent, region, closed, depth, coord));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes
                .push(Some(Node::new(generation, parent, region, closed, depth, coord)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        NodeId::new(idx as u32, generation)
    }

    /// Children of `id`, creating all eight octants if it has none yet.
    fn subdivide(&mut self, id: NodeId) -> [NodeId; 8] {
        if let Some(children) = self.node_ref(id).children {
            return children;
        }
        let (region, depth, coord) = {
            let n = self.node_ref(id);
            (n.region, n.depth, n.coord)
        };
        let mut children = [id; 8];
        for (octant, child) in children.iter_mut().enumerate() {
            let closed = self.node_ref(id).child_closed(octant);
            *child = self.alloc(
                Some(id),
                region.octant(octant),
                closed,
                depth + 1,
                coord.child(octant),
            );
        }
        self.node_mut(id).children = Some(children);
        log::trace!("subdivided node {id:?} at depth {depth}");
        children
    }

    /// Release the children of `id` if it no longer holds any object.
    fn prune(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        if !node.contained.is_empty() {
            return;
        }
        let Some(children) = node.children.take() else {
            return;
        };
        for child in children {
            self.free_subtree(child);
        }
        log::trace!("pruned children of node {id:?}");
    }

    fn free_subtree(&mut self, id: NodeId) {
        if let Some(children) = self.node_mut(id).children.take() {
            for child in children {
                self.free_subtree(child);
            }
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Add `object` to `start` and descend to the leaf holding `position`.
    ///
    /// `start` must contain `position`. Returns the owning leaf.
    fn insert_at(&mut self, start: NodeId, object: K, position: Point3D<T>) -> NodeId {
        debug_assert!(
            self.node_ref(start).contains(position),
            "descent must start inside the target node"
        );
        let max_depth = self.max_depth;
        let mut id = start;
        loop {
            let node = self.node_mut(id);
            node.contained.insert(object);
            if node.depth >= max_depth {
                return id;
            }
            let octant = node.octant_for(position);
            id = self.subdivide(id)[octant];
        }
    }

    /// Evict `object` upward from `from` until a node contains `position`, then descend.
    fn relocate(&mut self, from: NodeId, object: K, position: Point3D<T>) -> NodeId {
        let mut id = from;
        loop {
            let node = self.node_ref(id);
            // The root holds every in-bounds position, so the climb always ends there.
            let Some(parent) = node.parent else {
                break;
            };
            if node.contains(position) {
                break;
            }
            self.node_mut(id).contained.remove(&object);
            self.prune(id);
            id = parent;
        }
        self.insert_at(id, object, position)
    }

    /// Remove `object` from `from` and every ancestor.
    fn evict_upward(&mut self, from: NodeId, object: K) {
        let mut next = Some(from);
        while let Some(id) = next {
            let node = self.node_mut(id);
            node.contained.remove(&object);
            next = node.parent;
            self.prune(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tree(depth: u8) -> Octree<f64, u32> {
        Octree::with_max_depth(Aabb3D::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0), depth)
    }

    #[test]
    fn insert_descends_to_a_leaf() {
        let mut tree = unit_tree(2);
        let p = Point3D::new(0.1, 0.1, 0.1);
        let leaf = tree.insert(1, p).unwrap();
        let node = tree.node(leaf).unwrap();
        assert_eq!(node.depth(), 2);
        assert!(node.is_leaf());
        assert!(node.contains_point(p));
        assert_eq!(node.coord(), GridCoord::new(0, 0, 0));
        assert_eq!(tree.node_of(1), Some(leaf));
        assert_eq!(tree.position(1), Some(p));
        // Root plus two levels of eight children along the path.
        assert_eq!(tree.node_count(), 1 + 8 + 8);
        tree.verify().unwrap();
    }

    #[test]
    fn insert_is_idempotent() {
        let mut tree = unit_tree(3);
        let p = Point3D::new(0.7, 0.2, 0.4);
        let a = tree.insert(5, p).unwrap();
        let count = tree.node_count();
        let b = tree.insert(5, p).unwrap();
        assert_eq!(a, b);
        assert_eq!(tree.node_count(), count);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root()).unwrap().len(), 1);
        tree.verify().unwrap();
    }

    #[test]
    fn reinsert_elsewhere_moves_the_object() {
        let mut tree = unit_tree(2);
        let a = tree.insert(5, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        let b = tree.insert(5, Point3D::new(0.9, 0.9, 0.9)).unwrap();
        assert_ne!(a, b);
        assert!(!tree.is_alive(a), "emptied branch should be pruned");
        tree.verify().unwrap();
    }

    #[test]
    fn out_of_bounds_is_rejected_without_change() {
        let mut tree = unit_tree(2);
        let leaf = tree.insert(1, Point3D::new(0.5, 0.5, 0.5)).unwrap();
        let count = tree.node_count();
        assert_eq!(
            tree.insert(2, Point3D::new(1.5, 0.5, 0.5)),
            Err(OctreeError::OutOfBounds)
        );
        assert_eq!(
            tree.update(1, leaf, Point3D::new(0.5, -0.1, 0.5)),
            Err(OctreeError::OutOfBounds)
        );
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node_count(), count);
        assert_eq!(tree.position(1), Some(Point3D::new(0.5, 0.5, 0.5)));
        tree.verify().unwrap();
    }

    #[test]
    fn region_max_corner_is_inside() {
        let mut tree = unit_tree(3);
        let leaf = tree.insert(1, Point3D::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(tree.node(leaf).unwrap().coord(), GridCoord::new(7, 7, 7));
        let origin = tree.insert(2, Point3D::new(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(tree.node(origin).unwrap().coord(), GridCoord::new(0, 0, 0));
        tree.verify().unwrap();
    }

    #[test]
    fn split_plane_points_go_to_the_upper_octant() {
        let mut tree = unit_tree(1);
        let leaf = tree.insert(1, Point3D::new(0.5, 0.25, 0.5)).unwrap();
        assert_eq!(tree.node(leaf).unwrap().coord(), GridCoord::new(1, 0, 1));
    }

    #[test]
    fn update_within_leaf_only_moves_position() {
        let mut tree = unit_tree(2);
        let leaf = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        let moved = tree.update(1, leaf, Point3D::new(0.2, 0.2, 0.2)).unwrap();
        assert_eq!(moved, leaf);
        assert_eq!(tree.position(1), Some(Point3D::new(0.2, 0.2, 0.2)));
        tree.verify().unwrap();
    }

    #[test]
    fn update_across_the_tree_relocates() {
        let mut tree = unit_tree(3);
        let leaf = tree.insert(1, Point3D::new(0.05, 0.05, 0.05)).unwrap();
        let _ = tree.insert(2, Point3D::new(0.06, 0.05, 0.05)).unwrap();
        let target = Point3D::new(0.95, 0.5, 0.05);
        let moved = tree.update(1, leaf, target).unwrap();
        assert_ne!(moved, leaf);
        assert!(tree.node(moved).unwrap().contains_point(target));
        assert_eq!(tree.node_of(1), Some(moved));
        // The old leaf still holds object 2 and must survive.
        assert!(tree.is_alive(leaf));
        assert!(!tree.node(leaf).unwrap().contains_object(1));
        tree.verify().unwrap();
    }

    #[test]
    fn update_with_wrong_handle_is_rejected() {
        let mut tree = unit_tree(2);
        let a = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        let b = tree.insert(2, Point3D::new(0.9, 0.9, 0.9)).unwrap();
        assert_eq!(
            tree.update(1, b, Point3D::new(0.5, 0.5, 0.5)),
            Err(OctreeError::StaleNode)
        );
        assert_eq!(
            tree.update(3, a, Point3D::new(0.5, 0.5, 0.5)),
            Err(OctreeError::UnknownObject)
        );
        assert_eq!(tree.remove(2, a), Err(OctreeError::StaleNode));
        assert_eq!(tree.remove(3, a), Err(OctreeError::UnknownObject));
        tree.verify().unwrap();
    }

    #[test]
    fn remove_purges_every_ancestor_and_prunes() {
        let mut tree = unit_tree(3);
        let a = tree.insert(1, Point3D::new(0.1, 0.8, 0.3)).unwrap();
        let b = tree.insert(2, Point3D::new(0.9, 0.2, 0.6)).unwrap();
        tree.remove(1, a).unwrap();
        assert!(!tree.contains(1));
        let mut path = Some(b);
        while let Some(id) = path {
            let node = tree.node(id).unwrap();
            assert!(!node.contains_object(1));
            path = node.parent();
        }
        tree.verify().unwrap();
        tree.remove(2, b).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1, "only the root should remain");
        assert!(tree.node(tree.root()).unwrap().children().is_none());
        tree.verify().unwrap();
    }

    #[test]
    fn pruned_slots_are_reused_with_new_generations() {
        let mut tree = unit_tree(1);
        let a = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        tree.remove(1, a).unwrap();
        assert!(!tree.is_alive(a));
        let b = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        assert!(tree.is_alive(b));
        assert!(tree.node(a).is_none(), "stale ids must not resolve");
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn locate_round_trips_every_node_on_the_path() {
        let mut tree = unit_tree(3);
        let leaf = tree.insert(1, Point3D::new(0.3, 0.6, 0.9)).unwrap();
        let mut next = Some(leaf);
        while let Some(id) = next {
            let node = tree.node(id).unwrap();
            let c = node.coord();
            assert_eq!(tree.locate(c.x, c.y, c.z, node.depth()), Some(id));
            next = node.parent();
        }
        let c = tree.node(leaf).unwrap().coord();
        assert_eq!(tree.locate_leaf(c.x, c.y, c.z), Some(leaf));
    }

    #[test]
    fn locate_rejects_unpopulated_and_out_of_range() {
        let mut tree = unit_tree(2);
        assert_eq!(tree.locate(0, 0, 0, 0), Some(tree.root()));
        assert_eq!(tree.locate(0, 0, 0, 1), None, "root not yet subdivided");
        let _ = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        assert!(tree.locate(1, 1, 1, 1).is_some(), "sibling octants exist");
        assert_eq!(tree.locate(3, 3, 3, 2), None, "branch not subdivided");
        assert_eq!(tree.locate(4, 0, 0, 2), None, "outside the grid");
        assert_eq!(tree.locate(0, 0, 0, 3), None, "deeper than the tree");
    }

    #[test]
    fn zero_depth_tree_keeps_everything_in_the_root() {
        let mut tree = unit_tree(0);
        let a = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        let b = tree.insert(2, Point3D::new(0.9, 0.9, 0.9)).unwrap();
        assert_eq!(a, tree.root());
        assert_eq!(b, tree.root());
        assert_eq!(tree.node_count(), 1);
        tree.verify().unwrap();
    }

    #[test]
    fn clear_resets_to_an_empty_root() {
        let mut tree = unit_tree(2);
        let _ = tree.insert(1, Point3D::new(0.1, 0.1, 0.1)).unwrap();
        let _ = tree.insert(2, Point3D::new(0.9, 0.1, 0.1)).unwrap();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert!(tree.node(tree.root()).unwrap().is_empty());
        tree.verify().unwrap();
    }

    #[test]
    fn integer_regions_split_exactly() {
        let mut tree: Octree<i64, u32> = Octree::with_max_depth(Aabb3D::new(0, 0, 0, 8, 8, 8), 3);
        let leaf = tree.insert(1, Point3D::new(4, 7, 0)).unwrap();
        let node = tree.node(leaf).unwrap();
        assert_eq!(node.coord(), GridCoord::new(4, 7, 0));
        assert_eq!(node.region(), Aabb3D::new(4, 7, 0, 5, 8, 1));
        tree.verify().unwrap();
    }

    #[test]
    #[should_panic(expected = "octree region must not be inverted")]
    fn inverted_region_panics() {
        let _ = Octree::<f32, u32>::new(Aabb3D::new(1.0, 0.0, 0.0, 0.0, 1.0, 1.0));
    }
}
