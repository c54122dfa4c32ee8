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

use crate::algebra::{Vector2, Vector3};
use crate::geometry::{Plane, Quad};
use crate::kernel::orientation::{orient2d, orientation_2d, Orientation};
use crate::numeric::Real;

/// Componentwise equality within tolerance. Used to deduplicate computed
/// intersection points, which carry rounding noise.
#[inline]
pub fn nearly_equal<T: Real>(a: &Vector3<T>, b: &Vector3<T>) -> bool {
    let eps = T::tolerance();
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps && (a.z - b.z).abs() <= eps
}

/// Barycentric containment test, boundary counts as inside.
pub fn point_in_triangle_2d<T: Real>(
    point: &Vector2<T>,
    a: &Vector2<T>,
    b: &Vector2<T>,
    c: &Vector2<T>,
) -> bool {
    let d0 = orient2d(a, b, point);
    let d1 = orient2d(b, c, point);
    let d2 = orient2d(c, a, point);

    let eps = T::tolerance();
    let has_neg = d0 < -eps || d1 < -eps || d2 < -eps;
    let has_pos = d0 > eps || d1 > eps || d2 > eps;
    !(has_neg && has_pos)
}

/// Containment in a convex polygon of either winding: the point must not
/// lie strictly on both sides of the edge loop.
pub fn point_in_convex_polygon_2d<T: Real>(point: &Vector2<T>, polygon: &[Vector2<T>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut seen_left = false;
    let mut seen_right = false;
    for i in 0..n {
        match orientation_2d(&polygon[i], &polygon[(i + 1) % n], point) {
            Orientation::Left => seen_left = true,
            Orientation::Right => seen_right = true,
            Orientation::Collinear => {}
        }
        if seen_left && seen_right {
            return false;
        }
    }
    true
}

/// Containment in a convex volume bounded by outward-facing planes.
pub fn point_inside_box_planes<T: Real>(point: &Vector3<T>, faces: &[Plane<T>; 6]) -> bool {
    faces
        .iter()
        .all(|f| f.distance_to(point) <= T::tolerance())
}

/// Same test from the face quads of a box.
pub fn point_inside_box_quads<T: Real>(point: &Vector3<T>, faces: &[Quad<T>; 6]) -> bool {
    faces
        .iter()
        .all(|q| q.plane().distance_to(point) <= T::tolerance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::AABox;

    #[test]
    fn triangle_membership_includes_edges() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(4.0, 0.0);
        let c = Vector2::new(0.0, 4.0);
        assert!(point_in_triangle_2d(&Vector2::new(1.0, 1.0), &a, &b, &c));
        assert!(point_in_triangle_2d(&Vector2::new(2.0, 0.0), &a, &b, &c));
        assert!(!point_in_triangle_2d(&Vector2::new(3.0, 3.0), &a, &b, &c));
    }

    #[test]
    fn convex_polygon_membership_ignores_winding() {
        let ccw = [
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(0.0, 2.0),
        ];
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        let inside = Vector2::new(1.0, 1.0);
        let outside = Vector2::new(3.0, 1.0);
        assert!(point_in_convex_polygon_2d(&inside, &ccw));
        assert!(point_in_convex_polygon_2d(&inside, &cw));
        assert!(!point_in_convex_polygon_2d(&outside, &ccw));
    }

    #[test]
    fn box_face_tests_agree() {
        let b = AABox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let quads = b.quads();
        let planes = quads.map(|q| q.plane());
        for p in [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.5, 0.0, 0.0),
            Vector3::new(0.0, -2.0, 0.0),
        ] {
            assert_eq!(
                point_inside_box_planes(&p, &planes),
                point_inside_box_quads(&p, &quads)
            );
        }
        assert!(point_inside_box_quads(&Vector3::zero(), &quads));
        assert!(!point_inside_box_planes(&Vector3::new(2.0, 0.0, 0.0), &planes));
    }
}
