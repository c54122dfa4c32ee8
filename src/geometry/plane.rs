// SPDX-License-Identifier: MIT
//
// Copyright (c) 2026 The geoprim developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::algebra::Vector3;
use crate::numeric::Real;

/// Infinite plane in point-normal form. The stored normal is always unit
/// length; signed distances are positive on the side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T> {
    point: Vector3<T>,
    normal: Vector3<T>,
}

impl<T: Real> Plane<T> {
    /// `normal` does not need to be unit length; it is normalized here.
    pub fn new(point: Vector3<T>, normal: &Vector3<T>) -> Self {
        Self {
            point,
            normal: normal.normalized_safe(),
        }
    }

    #[inline]
    pub fn point(&self) -> Vector3<T> {
        self.point
    }

    #[inline]
    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    /// Signed distance from `point` to the plane.
    #[inline]
    pub fn distance_to(&self, point: &Vector3<T>) -> T {
        (*point - self.point).dot(&self.normal)
    }

    /// Closest point on the plane.
    pub fn projected_point(&self, point: &Vector3<T>) -> Vector3<T> {
        *point - self.normal * self.distance_to(point)
    }

    /// Reflection of `point` across the plane.
    pub fn mirrored_point(&self, point: &Vector3<T>) -> Vector3<T> {
        *point - self.normal * (self.distance_to(point) * T::two())
    }

    /// Component of `vector` lying in the plane.
    pub fn projected_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        *vector - self.normal * vector.dot(&self.normal)
    }

    /// Reflection of a free vector across the plane.
    pub fn mirrored_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        *vector - self.normal * (vector.dot(&self.normal) * T::two())
    }
}

impl<T: Real> Default for Plane<T> {
    fn default() -> Self {
        Self {
            point: Vector3::zero(),
            normal: Vector3::up(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_distance_follows_normal() {
        let p: Plane<f64> = Plane::new(Vector3::new(0.0, 1.0, 0.0), &Vector3::new(0.0, 2.0, 0.0));
        assert!((p.distance_to(&Vector3::new(5.0, 3.0, -2.0)) - 2.0).abs() < 1e-12);
        assert!((p.distance_to(&Vector3::new(0.0, -1.0, 0.0)) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn mirrored_point_is_symmetric() {
        let p: Plane<f64> = Plane::new(Vector3::zero(), &Vector3::up());
        let m = p.mirrored_point(&Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(m, Vector3::new(1.0, -3.0, 2.0));
    }

    #[test]
    fn projected_vector_is_tangent() {
        let p: Plane<f64> = Plane::new(Vector3::zero(), &Vector3::new(0.0, 0.0, 1.0));
        let v = p.projected_vector(&Vector3::new(1.0, 2.0, 3.0));
        assert!(v.dot(&p.normal()).abs() < 1e-12);
    }
}
