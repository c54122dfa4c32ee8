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

use std::ops::{Index, Mul};

use crate::algebra::{Matrix4, Vector2, Vector3};
use crate::geometry::{Plane, Polygon};
use crate::numeric::Real;

/// Triangle with counter-clockwise winding; the normal follows the
/// right-hand rule over `points[0] -> points[1] -> points[2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T> {
    pub points: [Vector3<T>; 3],
}

impl<T: Real> Triangle<T> {
    #[inline]
    pub fn new(p0: Vector3<T>, p1: Vector3<T>, p2: Vector3<T>) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    pub fn area(&self) -> T {
        let e0 = self.points[1] - self.points[0];
        let e1 = self.points[2] - self.points[0];
        e0.cross(&e1).length() * T::half()
    }

    /// Unit normal; zero for a degenerate triangle.
    pub fn normal(&self) -> Vector3<T> {
        let e0 = self.points[1] - self.points[0];
        let e1 = self.points[2] - self.points[0];
        e0.cross(&e1).normalized_safe()
    }

    pub fn plane(&self) -> Plane<T> {
        Plane::new(self.points[0], &self.normal())
    }

    /// Barycentric weights of `point`, ordered like the vertices. `None`
    /// when the triangle is degenerate. Weights outside [0, 1] mean the
    /// point lies outside the triangle (in its plane).
    pub fn barycentric_coordinates(&self, point: &Vector3<T>) -> Option<Vector3<T>> {
        let v0 = self.points[1] - self.points[0];
        let v1 = self.points[2] - self.points[0];
        let v2 = *point - self.points[0];

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);

        // The determinant scales with the fourth power of edge length, so
        // the degeneracy cutoff must be relative to d00 * d11 or small
        // triangles would be rejected outright. denom / (d00 * d11) is
        // sin^2 of the angle between the edges.
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() <= T::tolerance() * d00 * d11 {
            return None;
        }
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = T::one() - v - w;
        Some(Vector3::new(u, v, w))
    }

    /// Point with the given barycentric weights.
    pub fn point_from_barycentric(&self, weights: &Vector3<T>) -> Vector3<T> {
        self.points[0] * weights.x + self.points[1] * weights.y + self.points[2] * weights.z
    }

    pub fn to_polygon(&self) -> Polygon<T> {
        Polygon::from_points(self.points.to_vec())
    }
}

impl<T: Real> Index<usize> for Triangle<T> {
    type Output = Vector3<T>;
    fn index(&self, i: usize) -> &Vector3<T> {
        &self.points[i]
    }
}

impl<T: Real> Mul<Triangle<T>> for Matrix4<T> {
    type Output = Triangle<T>;
    fn mul(self, t: Triangle<T>) -> Triangle<T> {
        Triangle::new(
            self.transformed_point(&t.points[0]),
            self.transformed_point(&t.points[1]),
            self.transformed_point(&t.points[2]),
        )
    }
}

/// 2D triangle; positive signed area means counter-clockwise winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<T> {
    pub points: [Vector2<T>; 3],
}

impl<T: Real> Triangle2<T> {
    #[inline]
    pub fn new(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> Self {
        Self {
            points: [p0, p1, p2],
        }
    }

    pub fn signed_area(&self) -> T {
        let e0 = self.points[1] - self.points[0];
        let e1 = self.points[2] - self.points[0];
        e0.cross(&e1) * T::half()
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Containment test tolerant of points on the boundary, independent of
    /// winding.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        let sign = |a: &Vector2<T>, b: &Vector2<T>| (*b - *a).cross(&(*point - *a));
        let d0 = sign(&self.points[0], &self.points[1]);
        let d1 = sign(&self.points[1], &self.points[2]);
        let d2 = sign(&self.points[2], &self.points[0]);

        let eps = T::tolerance();
        let has_neg = d0 < -eps || d1 < -eps || d2 < -eps;
        let has_pos = d0 > eps || d1 > eps || d2 > eps;
        !(has_neg && has_pos)
    }
}

impl<T: Real> Index<usize> for Triangle2<T> {
    type Output = Vector2<T>;
    fn index(&self, i: usize) -> &Vector2<T> {
        &self.points[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_right_triangle() -> Triangle<f64> {
        Triangle::new(
            Vector3::zero(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn area_and_normal_of_unit_right_triangle() {
        let t = unit_right_triangle();
        assert!((t.area() - 0.5).abs() < 1e-12);
        assert_eq!(t.normal(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn barycentric_weights_of_edge_midpoint() {
        let t = unit_right_triangle();
        let bc = t
            .barycentric_coordinates(&Vector3::new(0.5, 0.0, 0.0))
            .unwrap();
        assert!((bc - Vector3::new(0.5, 0.5, 0.0)).sq_length() < 1e-12);
        let back = t.point_from_barycentric(&bc);
        assert!((back - Vector3::new(0.5, 0.0, 0.0)).sq_length() < 1e-12);
    }

    #[test]
    fn degenerate_triangle_has_no_barycentric_coordinates() {
        let t = Triangle::new(
            Vector3::zero(),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 2.0, 2.0),
        );
        assert!(t.barycentric_coordinates(&Vector3::zero()).is_none());
    }

    #[test]
    fn small_triangle_still_has_barycentric_coordinates() {
        let t = Triangle::<f64>::new(
            Vector3::zero(),
            Vector3::new(0.05, 0.0, 0.0),
            Vector3::new(0.0, 0.05, 0.0),
        );
        let p = Vector3::new(0.01, 0.01, 0.0);
        let bc = t.barycentric_coordinates(&p).unwrap();
        assert!((bc - Vector3::new(0.6, 0.2, 0.2)).sq_length() < 1e-12);
        assert!((t.point_from_barycentric(&bc) - p).sq_length() < 1e-18);
    }

    #[test]
    fn triangle2_contains_respects_boundary() {
        let t = Triangle2::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(0.0, 2.0),
        );
        assert!(t.contains(&Vector2::new(0.5, 0.5)));
        assert!(t.contains(&Vector2::new(1.0, 0.0)));
        assert!(!t.contains(&Vector2::new(2.0, 2.0)));
    }
}
