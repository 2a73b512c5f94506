// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Glam vectors and [`Point3D`].

use glam::{DVec3, I64Vec3, Vec3};

use crate::types::Point3D;

impl From<Vec3> for Point3D<f32> {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3D<f32>> for Vec3 {
    fn from(p: Point3D<f32>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for Point3D<f64> {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3D<f64>> for DVec3 {
    fn from(p: Point3D<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<I64Vec3> for Point3D<i64> {
    fn from(v: I64Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3D<i64>> for I64Vec3 {
    fn from(p: Point3D<i64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
