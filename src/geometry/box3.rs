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

use crate::algebra::{Quaternion, Vector3};
use crate::geometry::{AABox, Quad};
use crate::numeric::Real;

/// Oriented box: an axis-aligned box of half extents `local_extents`
/// rotated by `orientation` about `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3<T> {
    pub center: Vector3<T>,
    pub local_extents: Vector3<T>,
    pub orientation: Quaternion<T>,
}

impl<T: Real> Box3<T> {
    pub fn new(center: Vector3<T>, local_extents: Vector3<T>, orientation: Quaternion<T>) -> Self {
        Self {
            center,
            local_extents,
            orientation,
        }
    }

    /// World-space half extent vector along the box's local x axis.
    pub fn extent_x(&self) -> Vector3<T> {
        self.orientation.rotate(&Vector3::right()) * self.local_extents.x
    }

    pub fn extent_y(&self) -> Vector3<T> {
        self.orientation.rotate(&Vector3::up()) * self.local_extents.y
    }

    pub fn extent_z(&self) -> Vector3<T> {
        self.orientation.rotate(&Vector3::back()) * self.local_extents.z
    }

    /// Containment with tolerance, tested in the box's local frame.
    pub fn contains(&self, point: &Vector3<T>) -> bool {
        let local = self.orientation.inversed().rotate(&(*point - self.center));
        let a = local.abs();
        let eps = T::tolerance();
        a.x <= self.local_extents.x + eps
            && a.y <= self.local_extents.y + eps
            && a.z <= self.local_extents.z + eps
    }

    /// The six faces in world space, normals pointing outward.
    pub fn quads(&self) -> [Quad<T>; 6] {
        let local = AABox::new(-self.local_extents, self.local_extents);
        local.quads().map(|q| {
            let [p0, p1, p2, p3] = q.points;
            let to_world = |p: Vector3<T>| self.center + self.orientation.rotate(&p);
            Quad::new(to_world(p0), to_world(p1), to_world(p2), to_world(p3))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_respects_orientation() {
        // Unit cube rotated 45 degrees around z.
        let b = Box3::new(
            Vector3::zero(),
            Vector3::one(),
            Quaternion::angle_axis(std::f64::consts::FRAC_PI_4, &Vector3::new(0.0, 0.0, 1.0)),
        );
        // A corner of the rotated box lies at sqrt(2) along x.
        assert!(b.contains(&Vector3::new(1.4, 0.0, 0.0)));
        // The unrotated corner (1, 1, 0) is now outside.
        assert!(!b.contains(&Vector3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn quads_wrap_the_world_space_box() {
        let b = Box3::new(
            Vector3::new(5.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 3.0),
            Quaternion::identity(),
        );
        for q in b.quads() {
            let outward = (q[0] - b.center).dot(&q.normal());
            assert!(outward > 0.0);
        }
    }
}
