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

use crate::algebra::{Axis3, Vector2, Vector3};
use crate::geometry::Plane;
use crate::numeric::Real;

/// Planar polygon as an ordered vertex loop. Queries assume the vertices
/// are coplanar; the winding decides which way the normal points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
    points: Vec<Vector3<T>>,
}

impl<T: Real> Polygon<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Vector3<T>>) -> Self {
        Self { points }
    }

    pub fn add_point(&mut self, point: Vector3<T>) {
        self.points.push(point);
    }

    pub fn add_points(&mut self, points: &[Vector3<T>]) {
        self.points.extend_from_slice(points);
    }

    #[inline]
    pub fn points(&self) -> &[Vector3<T>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unit normal by Newell's method, robust against collinear runs of
    /// vertices. Zero for polygons with fewer than three vertices.
    pub fn normal(&self) -> Vector3<T> {
        let n = self.points.len();
        if n < 3 {
            return Vector3::zero();
        }
        let mut sum = Vector3::zero();
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.cross(&b);
        }
        sum.normalized_safe()
    }

    pub fn plane(&self) -> Plane<T> {
        let anchor = self.points.first().copied().unwrap_or_else(Vector3::zero);
        Plane::new(anchor, &self.normal())
    }

    /// Drops the given axis from every vertex.
    pub fn projected_on_axis(&self, axis: Axis3) -> Polygon2<T> {
        Polygon2::from_points(
            self.points
                .iter()
                .map(|p| p.projected_on_axis(axis))
                .collect(),
        )
    }
}

impl<T: Real> Default for Polygon<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 2D polygon as an ordered vertex loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2<T> {
    points: Vec<Vector2<T>>,
}

impl<T: Real> Polygon2<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        Self { points }
    }

    pub fn add_point(&mut self, point: Vector2<T>) {
        self.points.push(point);
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Even-odd crossing test. Works for concave polygons too.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > point.y) != (pj.y > point.y) {
                let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

impl<T: Real> Default for Polygon2<T> {
    fn default() -> Self {
        Self::new()
    }
}
