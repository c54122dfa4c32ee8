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

use crate::algebra::{Matrix4, Vector3};
use crate::geometry::{Plane, Polygon, Triangle};
use crate::numeric::Real;

/// Planar quadrilateral with counter-clockwise winding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad<T> {
    pub points: [Vector3<T>; 4],
}

impl<T: Real> Quad<T> {
    #[inline]
    pub fn new(p0: Vector3<T>, p1: Vector3<T>, p2: Vector3<T>, p3: Vector3<T>) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Unit normal from the first three vertices; zero when they are
    /// collinear.
    pub fn normal(&self) -> Vector3<T> {
        let e0 = self.points[1] - self.points[0];
        let e1 = self.points[2] - self.points[0];
        e0.cross(&e1).normalized_safe()
    }

    pub fn plane(&self) -> Plane<T> {
        Plane::new(self.points[0], &self.normal())
    }

    /// Fan split from the first vertex.
    pub fn triangles(&self) -> [Triangle<T>; 2] {
        [
            Triangle::new(self.points[0], self.points[1], self.points[2]),
            Triangle::new(self.points[0], self.points[2], self.points[3]),
        ]
    }

    pub fn to_polygon(&self) -> Polygon<T> {
        Polygon::from_points(self.points.to_vec())
    }
}

impl<T: Real> Index<usize> for Quad<T> {
    type Output = Vector3<T>;
    fn index(&self, i: usize) -> &Vector3<T> {
        &self.points[i]
    }
}

impl<T: Real> Mul<Quad<T>> for Matrix4<T> {
    type Output = Quad<T>;
    fn mul(self, q: Quad<T>) -> Quad<T> {
        Quad::new(
            self.transformed_point(&q.points[0]),
            self.transformed_point(&q.points[1]),
            self.transformed_point(&q.points[2]),
            self.transformed_point(&q.points[3]),
        )
    }
}
