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
use crate::geometry::{AABox, Plane, Polygon, Quad, Segment, Triangle};
use crate::intersect::segment::{push_unique, segment_polygon_points};
use crate::kernel::point_inside_box_quads;
use crate::numeric::Real;

/// Points where the boundaries of two convex planar polygons meet,
/// including each polygon's vertices inside the other when they are
/// coplanar. Symmetric in its arguments up to ordering.
pub fn polygon_polygon<T: Real>(a: &Polygon<T>, b: &Polygon<T>) -> Vec<Vector3<T>> {
    let mut out = Vec::new();
    collect_edge_hits(a, b, &mut out);
    collect_edge_hits(b, a, &mut out);
    out
}

fn collect_edge_hits<T: Real>(from: &Polygon<T>, onto: &Polygon<T>, out: &mut Vec<Vector3<T>>) {
    let points = from.points();
    let n = points.len();
    for i in 0..n {
        let edge = Segment::new(points[i], points[(i + 1) % n]);
        for p in segment_polygon_points(&edge, onto) {
            push_unique(out, p);
        }
    }
}

/// Intersection points of two triangles; see [`polygon_polygon`].
pub fn triangle_triangle<T: Real>(a: &Triangle<T>, b: &Triangle<T>) -> Vec<Vector3<T>> {
    polygon_polygon(&a.to_polygon(), &b.to_polygon())
}

/// Intersection points of two quads; see [`polygon_polygon`].
pub fn quad_quad<T: Real>(a: &Quad<T>, b: &Quad<T>) -> Vec<Vector3<T>> {
    polygon_polygon(&a.to_polygon(), &b.to_polygon())
}

/// Intersection points of two boxes given as face quads: face-face
/// crossings plus each box's corners inside the other.
pub fn box_box<T: Real>(a_faces: &[Quad<T>; 6], b_faces: &[Quad<T>; 6]) -> Vec<Vector3<T>> {
    let mut out = Vec::new();
    for qa in a_faces {
        for qb in b_faces {
            for p in quad_quad(qa, qb) {
                push_unique(&mut out, p);
            }
        }
    }
    for (faces, other) in [(a_faces, b_faces), (b_faces, a_faces)] {
        for quad in faces {
            for corner in &quad.points {
                if point_inside_box_quads(corner, other) {
                    push_unique(&mut out, *corner);
                }
            }
        }
    }
    out
}

/// Clips a quad against an axis-aligned box (Sutherland-Hodgman against
/// the six face half-spaces). With `only_boundaries` set, keeps just the
/// clipped points lying on the box surface.
pub fn quad_aabox<T: Real>(
    quad: &Quad<T>,
    aabox: &AABox<T>,
    only_boundaries: bool,
) -> Vec<Vector3<T>> {
    let halfspaces = [
        Plane::new(aabox.min, &Vector3::right()),
        Plane::new(aabox.max, &Vector3::left()),
        Plane::new(aabox.min, &Vector3::up()),
        Plane::new(aabox.max, &Vector3::down()),
        Plane::new(aabox.min, &Vector3::back()),
        Plane::new(aabox.max, &Vector3::forward()),
    ];

    let eps = T::tolerance();
    let mut poly: Vec<Vector3<T>> = quad.points.to_vec();
    for plane in &halfspaces {
        if poly.is_empty() {
            break;
        }
        let mut clipped = Vec::with_capacity(poly.len() + 1);
        let n = poly.len();
        for i in 0..n {
            let cur = poly[i];
            let next = poly[(i + 1) % n];
            let d0 = plane.distance_to(&cur);
            let d1 = plane.distance_to(&next);

            if d0 >= -eps {
                push_unique(&mut clipped, cur);
            }
            if (d0 > eps && d1 < -eps) || (d0 < -eps && d1 > eps) {
                let t = d0 / (d0 - d1);
                push_unique(&mut clipped, cur + (next - cur) * t);
            }
        }
        poly = clipped;
    }

    if only_boundaries {
        poly.retain(|p| on_box_surface(p, aabox));
    }
    poly
}

fn on_box_surface<T: Real>(point: &Vector3<T>, aabox: &AABox<T>) -> bool {
    let eps = T::tolerance();
    [
        (point.x, aabox.min.x, aabox.max.x),
        (point.y, aabox.min.y, aabox.max.y),
        (point.z, aabox.min.z, aabox.max.z),
    ]
    .iter()
    .any(|&(v, lo, hi)| (v - lo).abs() <= eps || (v - hi).abs() <= eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::nearly_equal;

    fn contains_point<T: Real>(points: &[Vector3<T>], target: Vector3<T>) -> bool {
        points.iter().any(|p| nearly_equal(p, &target))
    }

    #[test]
    fn crossing_triangles_share_two_points() {
        // One triangle in the xy plane, the other perpendicular through it.
        let a = Triangle::new(
            Vector3::new(-2.0, -1.0, 0.0),
            Vector3::new(2.0, -1.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
        );
        let b = Triangle::new(
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 3.0, 0.0),
        );
        let ab = triangle_triangle(&a, &b);
        assert!(!ab.is_empty());

        // Symmetric as a point set.
        let ba = triangle_triangle(&b, &a);
        assert_eq!(ab.len(), ba.len());
        for p in &ab {
            assert!(ba.iter().any(|q| nearly_equal(p, q)));
        }
    }

    #[test]
    fn disjoint_triangles_share_nothing() {
        let a = Triangle::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let b = Triangle::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(1.0, 0.0, 5.0),
            Vector3::new(0.0, 1.0, 5.0),
        );
        assert!(triangle_triangle(&a, &b).is_empty());
    }

    #[test]
    fn quad_fully_inside_box_survives_clipping() {
        let b = AABox::new(Vector3::splat(-2.0), Vector3::splat(2.0));
        let q = Quad::new(
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(-1.0, 1.0, 0.0),
        );
        let clipped = quad_aabox(&q, &b, false);
        assert_eq!(clipped.len(), 4);
        // Nothing touches the box surface.
        assert!(quad_aabox(&q, &b, true).is_empty());
    }

    #[test]
    fn oversized_quad_clips_to_box_cross_section() {
        let b = AABox::new(Vector3::splat(-1.0), Vector3::splat(1.0));
        let q = Quad::new(
            Vector3::new(-5.0, -5.0, 0.0),
            Vector3::new(5.0, -5.0, 0.0),
            Vector3::new(5.0, 5.0, 0.0),
            Vector3::new(-5.0, 5.0, 0.0),
        );
        let clipped = quad_aabox(&q, &b, false);
        assert_eq!(clipped.len(), 4);
        for corner in [
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(-1.0, 1.0, 0.0),
        ] {
            assert!(contains_point(&clipped, corner));
        }
        // The whole cross-section lies on the box surface.
        assert_eq!(quad_aabox(&q, &b, true).len(), 4);
    }

    #[test]
    fn overlapping_boxes_intersect_in_corner_region() {
        // Two boxes overlapping in one octant.
        let a = AABox::new(Vector3::splat(0.0), Vector3::splat(2.0));
        let b = AABox::new(Vector3::splat(1.0), Vector3::splat(3.0));
        let points = box_box(&a.quads(), &b.quads());
        assert!(!points.is_empty());
        // b's min corner sits inside a.
        assert!(contains_point(&points, Vector3::splat(1.0)));
        // a's max corner sits inside b.
        assert!(contains_point(&points, Vector3::splat(2.0)));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = AABox::new(Vector3::splat(0.0), Vector3::splat(1.0));
        let b = AABox::new(Vector3::splat(5.0), Vector3::splat(6.0));
        assert!(box_box(&a.quads(), &b.quads()).is_empty());
    }
}
