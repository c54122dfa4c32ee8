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

use crate::algebra::{Axis3, Matrix4, Vector3};
use crate::geometry::{Contact, Quad, Sphere};
use crate::numeric::{Real, Scalar};

/// Axis-aligned box. The empty box uses an inverted min/max sentinel so
/// that adding points and unions work without a separate emptiness flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox<T> {
    pub min: Vector3<T>,
    pub max: Vector3<T>,
}

// ---------- Construction ----------
impl<T: Scalar> AABox<T> {
    #[inline]
    pub fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
        Self { min, max }
    }

    /// Box containing nothing; absorbing identity for [`AABox::union`].
    pub fn empty() -> Self {
        Self {
            min: Vector3::splat(T::upper_bound()),
            max: Vector3::splat(T::lower_bound()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Smallest box containing all of `points`; empty for an empty slice.
    pub fn from_points(points: &[Vector3<T>]) -> Self {
        let mut aabox = Self::empty();
        for p in points {
            aabox.add_point(p);
        }
        aabox
    }

    pub fn add_point(&mut self, point: &Vector3<T>) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }
}

impl<T: Scalar> Default for AABox<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// ---------- Queries ----------
impl<T: Scalar> AABox<T> {
    #[inline]
    pub fn size(&self) -> Vector3<T> {
        self.max - self.min
    }

    #[inline]
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn depth(&self) -> T {
        self.max.z - self.min.z
    }

    pub fn area(&self) -> T {
        let s = self.size();
        T::two() * (s.x * s.y + s.y * s.z + s.x * s.z)
    }

    pub fn volume(&self) -> T {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Closest point of the box to `point`; `point` itself when inside.
    pub fn closest_point(&self, point: &Vector3<T>) -> Vector3<T> {
        point.clamp(&self.min, &self.max)
    }

    pub fn contains(&self, point: &Vector3<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Overlap test, boundary touching counts.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// The eight corners, low z slab first, then x fastest.
    pub fn points(&self) -> [Vector3<T>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vector3::new(lo.x, lo.y, lo.z),
            Vector3::new(hi.x, lo.y, lo.z),
            Vector3::new(lo.x, hi.y, lo.z),
            Vector3::new(hi.x, hi.y, lo.z),
            Vector3::new(lo.x, lo.y, hi.z),
            Vector3::new(hi.x, lo.y, hi.z),
            Vector3::new(lo.x, hi.y, hi.z),
            Vector3::new(hi.x, hi.y, hi.z),
        ]
    }
}

// ---------- Floating point only ----------
impl<T: Real> AABox<T> {
    pub fn center(&self) -> Vector3<T> {
        (self.min + self.max) * T::half()
    }

    /// Half extents along each axis.
    pub fn extents(&self) -> Vector3<T> {
        self.size() * T::half()
    }

    pub fn diagonal(&self) -> T {
        self.size().length()
    }

    pub fn from_point_and_size(center: Vector3<T>, size: Vector3<T>) -> Self {
        let half = size * T::half();
        Self::new(center - half, center + half)
    }

    /// Smallest box containing the sphere.
    pub fn from_sphere(sphere: &Sphere<T>) -> Self {
        let r = Vector3::splat(sphere.radius);
        Self::new(sphere.center - r, sphere.center + r)
    }

    /// Face of the box on the given side of `axis`, wound counter-clockwise
    /// seen from outside so that its normal points away from the box.
    pub fn quad(&self, axis: Axis3, positive: bool) -> Quad<T> {
        let (lo, hi) = (self.min, self.max);
        match (axis, positive) {
            (Axis3::X, true) => Quad::new(
                Vector3::new(hi.x, lo.y, lo.z),
                Vector3::new(hi.x, hi.y, lo.z),
                Vector3::new(hi.x, hi.y, hi.z),
                Vector3::new(hi.x, lo.y, hi.z),
            ),
            (Axis3::X, false) => Quad::new(
                Vector3::new(lo.x, lo.y, lo.z),
                Vector3::new(lo.x, lo.y, hi.z),
                Vector3::new(lo.x, hi.y, hi.z),
                Vector3::new(lo.x, hi.y, lo.z),
            ),
            (Axis3::Y, true) => Quad::new(
                Vector3::new(lo.x, hi.y, lo.z),
                Vector3::new(lo.x, hi.y, hi.z),
                Vector3::new(hi.x, hi.y, hi.z),
                Vector3::new(hi.x, hi.y, lo.z),
            ),
            (Axis3::Y, false) => Quad::new(
                Vector3::new(lo.x, lo.y, lo.z),
                Vector3::new(hi.x, lo.y, lo.z),
                Vector3::new(hi.x, lo.y, hi.z),
                Vector3::new(lo.x, lo.y, hi.z),
            ),
            (Axis3::Z, true) => Quad::new(
                Vector3::new(lo.x, lo.y, hi.z),
                Vector3::new(hi.x, lo.y, hi.z),
                Vector3::new(hi.x, hi.y, hi.z),
                Vector3::new(lo.x, hi.y, hi.z),
            ),
            (Axis3::Z, false) => Quad::new(
                Vector3::new(lo.x, lo.y, lo.z),
                Vector3::new(lo.x, hi.y, lo.z),
                Vector3::new(hi.x, hi.y, lo.z),
                Vector3::new(hi.x, lo.y, lo.z),
            ),
        }
    }

    /// All six faces: +x, -x, +y, -y, -z, +z.
    pub fn quads(&self) -> [Quad<T>; 6] {
        [
            self.quad(Axis3::X, true),
            self.quad(Axis3::X, false),
            self.quad(Axis3::Y, true),
            self.quad(Axis3::Y, false),
            self.quad(Axis3::Z, false),
            self.quad(Axis3::Z, true),
        ]
    }

    /// Contact point and normal where a sphere touches or penetrates the
    /// box. `None` when they are separated.
    pub fn sphere_contact(&self, sphere: &Sphere<T>) -> Option<Contact<T>> {
        let closest = self.closest_point(&sphere.center);
        if closest.sq_distance(&sphere.center) > sphere.radius * sphere.radius {
            return None;
        }
        Some(Contact {
            point: closest,
            normal: (closest - sphere.center).normalized_safe(),
        })
    }

    /// Axis-aligned bounds of the transformed corners.
    pub fn transformed(&self, transform: &Matrix4<T>) -> Self {
        let mut out = Self::empty();
        for corner in self.points() {
            out.add_point(&transform.transformed_point(&corner));
        }
        out
    }
}
