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

use crate::geometry::{Box3, Contact, Plane, Polygon, Segment, Segment2, Triangle};
use crate::intersect::ray::segment2_segment2_params;
use crate::kernel::{nearly_equal, point_in_convex_polygon_2d};
use crate::numeric::Real;

use crate::algebra::Vector3;

/// Crossing point of a segment and a plane. A segment lying in the plane
/// reports its origin.
pub fn segment_plane<T: Real>(segment: &Segment<T>, plane: &Plane<T>) -> Option<Vector3<T>> {
    let d0 = plane.distance_to(&segment.origin);
    let d1 = plane.distance_to(&segment.destiny);
    let eps = T::tolerance();

    if (d0 > eps && d1 > eps) || (d0 < -eps && d1 < -eps) {
        return None;
    }
    let denom = d0 - d1;
    if denom.abs() < eps {
        // Parallel within tolerance; only a coplanar segment touches.
        return (d0.abs() <= eps).then_some(segment.origin);
    }
    let t = d0 / denom;
    Some(segment.origin + (segment.destiny - segment.origin) * t)
}

/// Crossing point of a segment and a triangle.
pub fn segment_triangle<T: Real>(
    segment: &Segment<T>,
    triangle: &Triangle<T>,
) -> Option<Vector3<T>> {
    let point = segment_plane(segment, &triangle.plane())?;
    let bc = triangle.barycentric_coordinates(&point)?;
    let eps = T::tolerance();
    let inside = bc.x >= -eps && bc.y >= -eps && bc.z >= -eps;
    inside.then_some(point)
}

/// Crossing point of a segment and a convex planar polygon.
pub fn segment_polygon<T: Real>(
    segment: &Segment<T>,
    polygon: &Polygon<T>,
) -> Option<Vector3<T>> {
    let point = segment_plane(segment, &polygon.plane())?;
    let axis = polygon.normal().dominant_axis();
    let projected = point.projected_on_axis(axis);
    let outline: Vec<_> = polygon
        .points()
        .iter()
        .map(|p| p.projected_on_axis(axis))
        .collect();
    point_in_convex_polygon_2d(&projected, &outline).then_some(point)
}

/// All points where a segment meets a convex planar polygon. A segment
/// crossing the polygon's plane yields at most one point; a coplanar
/// segment yields its boundary crossings plus any endpoint inside the
/// polygon, deduplicated.
pub fn segment_polygon_points<T: Real>(
    segment: &Segment<T>,
    polygon: &Polygon<T>,
) -> Vec<Vector3<T>> {
    let plane = polygon.plane();
    let d0 = plane.distance_to(&segment.origin);
    let d1 = plane.distance_to(&segment.destiny);
    let eps = T::tolerance();

    let mut out = Vec::new();
    if d0.abs() > eps || d1.abs() > eps {
        if let Some(p) = segment_polygon(segment, polygon) {
            out.push(p);
        }
        return out;
    }

    // Coplanar: work in 2D on the dominant axis of the polygon normal.
    let axis = polygon.normal().dominant_axis();
    let s2 = Segment2::new(
        segment.origin.projected_on_axis(axis),
        segment.destiny.projected_on_axis(axis),
    );
    let outline: Vec<_> = polygon
        .points()
        .iter()
        .map(|p| p.projected_on_axis(axis))
        .collect();

    let n = outline.len();
    for i in 0..n {
        let edge = Segment2::new(outline[i], outline[(i + 1) % n]);
        if let Some((t, _)) = segment2_segment2_params(&s2, &edge) {
            // Back-project through the segment parameter.
            let p = segment.origin + (segment.destiny - segment.origin) * t;
            push_unique(&mut out, p);
        }
    }
    for (p3, p2) in [
        (segment.origin, s2.origin),
        (segment.destiny, s2.destiny),
    ] {
        if point_in_convex_polygon_2d(&p2, &outline) {
            push_unique(&mut out, p3);
        }
    }
    out
}

/// First face of an oriented box hit by the segment, walking from the
/// segment origin. The contact normal is the outward face normal.
pub fn segment_box<T: Real>(segment: &Segment<T>, box3: &Box3<T>) -> Option<Contact<T>> {
    let mut best: Option<(T, Contact<T>)> = None;
    for quad in box3.quads() {
        if let Some(point) = segment_polygon(segment, &quad.to_polygon()) {
            let sq = point.sq_distance(&segment.origin);
            let closer = best.as_ref().map_or(true, |(d, _)| sq < *d);
            if closer {
                best = Some((
                    sq,
                    Contact {
                        point,
                        normal: quad.normal(),
                    },
                ));
            }
        }
    }
    best.map(|(_, contact)| contact)
}

pub(crate) fn push_unique<T: Real>(points: &mut Vec<Vector3<T>>, candidate: Vector3<T>) {
    if !points.iter().any(|p| nearly_equal(p, &candidate)) {
        points.push(candidate);
    }
}
