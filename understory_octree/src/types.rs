// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// A point in 3D space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point3D<T> {
    /// X coordinate
    pub x: T,
    /// Y coordinate
    pub y: T,
    /// Z coordinate
    pub z: T,
}

impl<T> Point3D<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

/// Axis-aligned bounding box in 3D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb3D<T> {
    /// Minimum x
    pub min_x: T,
    /// Minimum y
    pub min_y: T,
    /// Minimum z
    pub min_z: T,
    /// Maximum x
    pub max_x: T,
    /// Maximum y
    pub max_y: T,
    /// Maximum z
    pub max_z: T,
}

bitflags::bitflags! {
    /// Axes on which a box's max face is closed for containment tests.
    ///
    /// Octree nodes contain points with closed-min/open-max semantics so that the
    /// eight octants of a node partition it exactly. Faces lying on the tree's own
    /// max faces are closed, so the tree accepts its full closed region.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClosedFaces: u8 {
        /// Max-x face is closed.
        const X = 0b0000_0001;
        /// Max-y face is closed.
        const Y = 0b0000_0010;
        /// Max-z face is closed.
        const Z = 0b0000_0100;
    }
}

impl<T> Aabb3D<T> {
    /// Create a new AABB from min/max coordinates.
    pub const fn new(min_x: T, min_y: T, min_z: T, max_x: T, max_y: T, max_z: T) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Create a new AABB from its min and max corners.
    pub fn from_corners(min: Point3D<T>, max: Point3D<T>) -> Self {
        Self::new(min.x, min.y, min.z, max.x, max.y, max.z)
    }
}

impl<T: Copy> Aabb3D<T> {
    /// The minimum corner.
    pub fn min(&self) -> Point3D<T> {
        Point3D::new(self.min_x, self.min_y, self.min_z)
    }

    /// The maximum corner.
    pub fn max(&self) -> Point3D<T> {
        Point3D::new(self.max_x, self.max_y, self.max_z)
    }
}

impl<T: Copy + PartialOrd> Aabb3D<T> {
    /// Whether this AABB contains the point, closed on every face.
    pub fn contains_point(&self, p: Point3D<T>) -> bool {
        le(self.min_x, p.x)
            && le(self.min_y, p.y)
            && le(self.min_z, p.z)
            && le(p.x, self.max_x)
            && le(p.y, self.max_y)
            && le(p.z, self.max_z)
    }

    /// Whether this AABB contains the point with closed-min/open-max semantics,
    /// except on the axes listed in `closed`, whose max face is inclusive.
    pub fn contains_point_half_open(&self, p: Point3D<T>, closed: ClosedFaces) -> bool {
        let upper = |v: T, max: T, axis: ClosedFaces| {
            if closed.contains(axis) {
                le(v, max)
            } else {
                lt(v, max)
            }
        };
        le(self.min_x, p.x)
            && le(self.min_y, p.y)
            && le(self.min_z, p.z)
            && upper(p.x, self.max_x, ClosedFaces::X)
            && upper(p.y, self.max_y, ClosedFaces::Y)
            && upper(p.z, self.max_z, ClosedFaces::Z)
    }

    /// Return true if the AABB is inverted on any axis. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y) || lt(self.max_z, self.min_z)
    }

    /// The point of this box closest to `p` (`p` itself when inside).
    pub fn closest_point(&self, p: Point3D<T>) -> Point3D<T> {
        Point3D::new(
            clamp_t(p.x, self.min_x, self.max_x),
            clamp_t(p.y, self.min_y, self.max_y),
            clamp_t(p.z, self.min_z, self.max_z),
        )
    }
}

impl<T: Scalar> Aabb3D<T> {
    /// The center of the box, as used for octant splits.
    pub fn center(&self) -> Point3D<T> {
        Point3D::new(
            T::mid(self.min_x, self.max_x),
            T::mid(self.min_y, self.max_y),
            T::mid(self.min_z, self.max_z),
        )
    }

    /// The octant of this box selected by `octant` (bits `x | y << 1 | z << 2`).
    ///
    /// A set bit selects the upper half on that axis. All octants share the
    /// box's [`center`](Self::center), so they tile the box without gaps.
    pub fn octant(&self, octant: usize) -> Self {
        debug_assert!(octant < 8, "octant index out of range");
        let c = self.center();
        let (min_x, max_x) = if octant & 1 == 0 {
            (self.min_x, c.x)
        } else {
            (c.x, self.max_x)
        };
        let (min_y, max_y) = if octant & 2 == 0 {
            (self.min_y, c.y)
        } else {
            (c.y, self.max_y)
        };
        let (min_z, max_z) = if octant & 4 == 0 {
            (self.min_z, c.z)
        } else {
            (c.z, self.max_z)
        };
        Self::new(min_x, min_y, min_z, max_x, max_y, max_z)
    }

    /// Squared distance from `p` to the closest point of this box. Zero inside.
    pub fn distance_sq(&self, p: Point3D<T>) -> T::Acc {
        distance_sq(p, self.closest_point(p))
    }

    /// Squared distance from an interior point `p` to the nearest face.
    ///
    /// Any point outside the box is at least this far from `p`. Returns zero when
    /// `p` lies outside or on the boundary.
    pub fn interior_clearance_sq(&self, p: Point3D<T>) -> T::Acc {
        if !self.contains_point(p) {
            return T::acc_zero();
        }
        let gaps = [
            T::widen(p.x) - T::widen(self.min_x),
            T::widen(self.max_x) - T::widen(p.x),
            T::widen(p.y) - T::widen(self.min_y),
            T::widen(self.max_y) - T::widen(p.y),
            T::widen(p.z) - T::widen(self.min_z),
            T::widen(self.max_z) - T::widen(p.z),
        ];
        let gap = gaps.into_iter().fold(gaps[0], min_t);
        T::sum_of_squares(gap, T::acc_zero(), T::acc_zero())
    }
}

/// Numeric scalar abstraction for octree coordinates.
///
/// Distances are only ever compared squared, and are accumulated in a widened
/// type (e.g., f32→f64, i64→i128) so that differences and their squares do not
/// overflow or lose precision.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for squared distances.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Midpoint between a and b (used for octant splits).
    fn mid(a: Self, b: Self) -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;

    /// Zero value for the accumulator type.
    fn acc_zero() -> Self::Acc;

    /// Tolerance under which two squared distances count as a tie.
    fn tie_epsilon() -> Self::Acc;

    /// `a² + b² + c²` in the accumulator type.
    ///
    /// Integer accumulators saturate instead of overflowing.
    #[inline]
    fn sum_of_squares(a: Self::Acc, b: Self::Acc, c: Self::Acc) -> Self::Acc {
        a * a + b * b + c * c
    }
}

impl Scalar for f32 {
    type Acc = f64;

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        f64::from(v)
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0.0
    }

    #[inline]
    fn tie_epsilon() -> Self::Acc {
        1e-6
    }
}

impl Scalar for f64 {
    type Acc = Self;

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0.0
    }

    #[inline]
    fn tie_epsilon() -> Self::Acc {
        1e-12
    }
}

impl Scalar for i64 {
    type Acc = i128;

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        i128::from(v)
    }

    #[inline]
    fn acc_zero() -> Self::Acc {
        0
    }

    #[inline]
    fn tie_epsilon() -> Self::Acc {
        0
    }

    /// Axis differences reach `2^64`, so three squares do not fit in `i128`.
    #[inline]
    fn sum_of_squares(a: Self::Acc, b: Self::Acc, c: Self::Acc) -> Self::Acc {
        a.saturating_mul(a)
            .saturating_add(b.saturating_mul(b))
            .saturating_add(c.saturating_mul(c))
    }
}

/// Squared Euclidean distance between two points, in the widened accumulator type.
#[inline]
pub fn distance_sq<T: Scalar>(a: Point3D<T>, b: Point3D<T>) -> T::Acc {
    let dx = T::widen(a.x) - T::widen(b.x);
    let dy = T::widen(a.y) - T::widen(b.y);
    let dz = T::widen(a.z) - T::widen(b.z);
    T::sum_of_squares(dx, dy, dz)
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

fn clamp_t<T: PartialOrd + Copy>(v: T, lo: T, hi: T) -> T {
    min_t(max_t(v, lo), hi)
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
