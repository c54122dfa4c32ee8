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
use crate::geometry::AABox;
use crate::numeric::Real;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<T> {
    pub center: Vector3<T>,
    pub radius: T,
}

impl<T: Real> Sphere<T> {
    #[inline]
    pub fn new(center: Vector3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Smallest sphere containing the box.
    pub fn from_aabox(aabox: &AABox<T>) -> Self {
        Self {
            center: aabox.center(),
            radius: aabox.size().length() * T::half(),
        }
    }

    #[inline]
    pub fn diameter(&self) -> T {
        self.radius * T::two()
    }

    pub fn area(&self) -> T {
        T::from_f64(4.0) * T::PI() * self.radius * self.radius
    }

    pub fn volume(&self) -> T {
        T::from_f64(4.0 / 3.0) * T::PI() * self.radius * self.radius * self.radius
    }

    /// Containment with tolerance, boundary counts as inside.
    pub fn contains(&self, point: &Vector3<T>) -> bool {
        let r = self.radius + T::tolerance();
        self.center.sq_distance(point) <= r * r
    }

    pub fn intersects_sphere(&self, other: &Self) -> bool {
        let r = self.radius + other.radius;
        self.center.sq_distance(&other.center) <= r * r
    }

    /// Overlap test against an axis-aligned box via its closest point.
    pub fn intersects_aabox(&self, aabox: &AABox<T>) -> bool {
        let closest = aabox.closest_point(&self.center);
        closest.sq_distance(&self.center) <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_and_volume_of_unit_sphere() {
        let s = Sphere::new(Vector3::<f64>::zero(), 1.0);
        assert!((s.area() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
        assert!((s.volume() - 4.0 / 3.0 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn aabox_overlap_uses_closest_point() {
        let b = AABox::new(Vector3::new(2.0, -1.0, -1.0), Vector3::new(3.0, 1.0, 1.0));
        assert!(Sphere::new(Vector3::zero(), 2.5).intersects_aabox(&b));
        assert!(!Sphere::new(Vector3::zero(), 1.5).intersects_aabox(&b));
    }

    #[test]
    fn bounding_sphere_contains_box_corners() {
        let b = AABox::new(Vector3::new(-1.0, -2.0, -3.0), Vector3::new(1.0, 2.0, 3.0));
        let s = Sphere::from_aabox(&b);
        for corner in b.points() {
            assert!(s.contains(&corner));
        }
    }
}
