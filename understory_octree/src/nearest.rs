// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-neighbor search.
//!
//! The search starts from the query's owning leaf and widens one ancestor at a
//! time. At each ancestor the sibling subtrees off the current path are visited
//! nearest box first, and any subtree whose box is farther than the best
//! candidate so far is skipped whole (branch-and-bound). The climb stops once the
//! best candidate is closer than the faces of the subtree already searched.
//!
//! Distances are squared and compared with [`Scalar::tie_epsilon`]; every
//! candidate within that tolerance of the nearest distance is kept as a tied set
//! and the smallest key wins.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::error::OctreeError;
use crate::node::NodeId;
use crate::octree::Octree;
use crate::types::{Point3D, Scalar, ScalarAcc, distance_sq, le, lt};

/// Candidates within the tie tolerance of the nearest distance seen so far.
///
/// `best` is always the true minimum, so the surviving set, and therefore the
/// pick, does not depend on the order candidates are offered in.
#[derive(Debug)]
struct Nearest<T: Scalar, K> {
    best: Option<T::Acc>,
    tied: Vec<(K, T::Acc)>,
}

impl<T: Scalar, K: Copy + Ord> Nearest<T, K> {
    fn new() -> Self {
        Self {
            best: None,
            tied: Vec::new(),
        }
    }

    fn offer(&mut self, object: K, dist: T::Acc) {
        match self.best {
            Some(best) if !lt(dist, best) => {
                if le(dist, best + T::tie_epsilon()) {
                    self.tied.push((object, dist));
                }
            }
            _ => {
                self.best = Some(dist);
                let cutoff = dist + T::tie_epsilon();
                self.tied.retain(|&(_, d)| le(d, cutoff));
                self.tied.push((object, dist));
            }
        }
    }

    /// Whether nothing at `lower_bound` or beyond can still win or tie.
    fn excludes(&self, lower_bound: T::Acc) -> bool {
        self.best
            .is_some_and(|best| lt(best + T::tie_epsilon(), lower_bound))
    }

    fn pick(self) -> Option<K> {
        self.tied.into_iter().map(|(object, _)| object).min()
    }
}

impl<T: Scalar, K: Copy + Ord + Debug> Octree<T, K> {
    /// The tracked object nearest to `object`, other than itself.
    ///
    /// Returns `Ok(None)` when `object` is the only tracked object. Equally near
    /// candidates (within [`Scalar::tie_epsilon`]) resolve to the smallest key.
    pub fn closest(&self, object: K) -> Result<Option<K>, OctreeError> {
        let entry = self
            .entries
            .get(&object)
            .ok_or(OctreeError::UnknownObject)?;
        Ok(self.search(entry.node, entry.position, Some(object)))
    }

    /// The tracked object nearest to `point`.
    ///
    /// `point` may lie outside the region; the search then starts at the root.
    pub fn nearest_to_point(&self, point: Point3D<T>) -> Option<K> {
        let mut id = self.root;
        let mut node = self.node_ref(id);
        if node.contains(point) {
            while let Some(children) = node.children {
                id = children[node.octant_for(point)];
                node = self.node_ref(id);
            }
        }
        self.search(id, point, None)
    }

    /// Linear scan over every tracked object, with the same tie rule as
    /// [`closest`](Self::closest). Useful as a reference when testing.
    pub fn closest_brute_force(&self, object: K) -> Result<Option<K>, OctreeError> {
        let origin = self
            .entries
            .get(&object)
            .ok_or(OctreeError::UnknownObject)?
            .position;
        let mut nearest = Nearest::<T, K>::new();
        for (&other, entry) in &self.entries {
            if other != object {
                nearest.offer(other, distance_sq(origin, entry.position));
            }
        }
        Ok(nearest.pick())
    }

    fn search(&self, start: NodeId, point: Point3D<T>, exclude: Option<K>) -> Option<K> {
        let mut nearest = Nearest::<T, K>::new();
        self.visit(start, point, exclude, &mut nearest);
        let mut searched = start;
        while let Some(parent) = self.node_ref(searched).parent {
            let clearance = self.node_ref(searched).region.interior_clearance_sq(point);
            if nearest.excludes(clearance) {
                break;
            }
            if let Some(children) = self.node_ref(parent).children {
                for (bound, sibling) in self.by_distance(children, point) {
                    if sibling != searched && !nearest.excludes(bound) {
                        self.visit(sibling, point, exclude, &mut nearest);
                    }
                }
            }
            searched = parent;
        }
        nearest.pick()
    }

    fn visit(
        &self,
        id: NodeId,
        point: Point3D<T>,
        exclude: Option<K>,
        nearest: &mut Nearest<T, K>,
    ) {
        let node = self.node_ref(id);
        if node.contained.is_empty() || nearest.excludes(node.region.distance_sq(point)) {
            return;
        }
        match node.children {
            Some(children) => {
                for (bound, child) in self.by_distance(children, point) {
                    if !nearest.excludes(bound) {
                        self.visit(child, point, exclude, nearest);
                    }
                }
            }
            None => {
                for &object in &node.contained {
                    if Some(object) == exclude {
                        continue;
                    }
                    if let Some(entry) = self.entries.get(&object) {
                        nearest.offer(object, distance_sq(point, entry.position));
                    }
                }
            }
        }
    }

    /// `children` paired with their box distance to `point`, nearest first.
    fn by_distance(
        &self,
        children: [NodeId; 8],
        point: Point3D<T>,
    ) -> [(ScalarAcc<T>, NodeId); 8] {
        let mut ordered = children.map(|c| (self.node_ref(c).region.distance_sq(point), c));
        ordered.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        ordered
    }
}
