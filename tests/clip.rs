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

use geoprim::algebra::{Quaternion, Vector3};
use geoprim::geometry::{AABox, Box3, Polygon, Quad, Segment, Triangle};
use geoprim::intersect;
use geoprim::kernel::{nearly_equal, point_inside_box_planes, point_inside_box_quads};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn same_point_set(a: &[Vector3<f64>], b: &[Vector3<f64>]) -> bool {
    a.len() == b.len()
        && a.iter().all(|p| b.iter().any(|q| nearly_equal(p, q)))
}

fn random_vector(rng: &mut StdRng) -> Vector3<f64> {
    Vector3::new(
        rng.random_range(-3.0..3.0),
        rng.random_range(-3.0..3.0),
        rng.random_range(-3.0..3.0),
    )
}

#[test]
fn triangle_triangle_is_symmetric() {
    let a = Triangle::new(
        Vector3::new(-2.0, 0.0, -1.0),
        Vector3::new(2.0, 0.0, -1.0),
        Vector3::new(0.0, 0.0, 2.0),
    );
    let b = Triangle::new(
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 3.0),
    );
    let ab = intersect::triangle_triangle(&a, &b);
    let ba = intersect::triangle_triangle(&b, &a);
    assert!(!ab.is_empty());
    assert!(same_point_set(&ab, &ba));
}

#[test]
fn triangle_triangle_is_symmetric_over_random_pairs() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let a = Triangle::new(
            random_vector(&mut rng),
            random_vector(&mut rng),
            random_vector(&mut rng),
        );
        let b = Triangle::new(
            random_vector(&mut rng),
            random_vector(&mut rng),
            random_vector(&mut rng),
        );
        let ab = intersect::triangle_triangle(&a, &b);
        let ba = intersect::triangle_triangle(&b, &a);
        assert!(same_point_set(&ab, &ba));
    }
}

#[test]
fn coplanar_overlapping_quads_intersect_in_their_plane() {
    let a = Quad::<f64>::new(
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(2.0, 0.0, 1.0),
        Vector3::new(2.0, 2.0, 1.0),
        Vector3::new(0.0, 2.0, 1.0),
    );
    let b = Quad::new(
        Vector3::new(1.0, 1.0, 1.0),
        Vector3::new(3.0, 1.0, 1.0),
        Vector3::new(3.0, 3.0, 1.0),
        Vector3::new(1.0, 3.0, 1.0),
    );
    let points = intersect::quad_quad(&a, &b);
    assert!(!points.is_empty());
    // Every reported point stays in the shared plane.
    for p in &points {
        assert!((p.z - 1.0).abs() < 1e-9);
    }
    // b's min corner lies inside a and must be reported.
    assert!(points
        .iter()
        .any(|p| nearly_equal(p, &Vector3::new(1.0, 1.0, 1.0))));
}

#[test]
fn polygon_polygon_handles_pentagon_against_square() {
    let square = Polygon::from_points(vec![
        Vector3::<f64>::new(-1.0, -1.0, 0.0),
        Vector3::new(1.0, -1.0, 0.0),
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(-1.0, 1.0, 0.0),
    ]);
    // Vertical pentagon poking through the square's plane.
    let pentagon = Polygon::from_points(vec![
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(0.5, 0.0, -1.0),
        Vector3::new(0.7, 0.0, 0.5),
        Vector3::new(0.25, 0.0, 1.0),
        Vector3::new(-0.2, 0.0, 0.5),
    ]);
    let points = intersect::polygon_polygon(&square, &pentagon);
    assert!(!points.is_empty());
    for p in &points {
        // All crossings sit on the square's plane and on the pentagon's.
        assert!(p.z.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }
}

#[test]
fn axis_aligned_oriented_boxes_agree_with_aabox_overlap() {
    let a = AABox::new(Vector3::splat(0.0), Vector3::splat(2.0));
    let b = AABox::new(Vector3::splat(1.0), Vector3::splat(3.0));
    let oriented_a = Box3::new(a.center(), a.extents(), Quaternion::identity());
    let oriented_b = Box3::new(b.center(), b.extents(), Quaternion::identity());

    let points = intersect::box_box(&oriented_a.quads(), &oriented_b.quads());
    assert_eq!(a.overlaps(&b), !points.is_empty());
}

#[test]
fn rotated_box_still_reports_contact() {
    let fixed = Box3::new(Vector3::zero(), Vector3::one(), Quaternion::identity());
    let rotated = Box3::new(
        Vector3::new(2.2, 0.0, 0.0),
        Vector3::one(),
        Quaternion::angle_axis(std::f64::consts::FRAC_PI_4, &Vector3::new(0.0, 0.0, 1.0)),
    );
    // The rotated box's corner reaches sqrt(2) from its center, crossing
    // the fixed box's +x face.
    let points = intersect::box_box(&fixed.quads(), &rotated.quads());
    assert!(!points.is_empty());
    for p in &points {
        assert!(point_inside_box_quads(p, &fixed.quads()) || p.x >= 1.0 - 1e-6);
    }
}

#[test]
fn plane_and_quad_box_membership_agree() {
    let b = Box3::new(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(1.0, 0.5, 2.0),
        Quaternion::angle_axis(0.6, &Vector3::new(1.0, 1.0, 1.0).normalized()),
    );
    let quads = b.quads();
    let planes = [
        quads[0].plane(),
        quads[1].plane(),
        quads[2].plane(),
        quads[3].plane(),
        quads[4].plane(),
        quads[5].plane(),
    ];
    for p in [
        b.center,
        b.center + Vector3::new(5.0, 0.0, 0.0),
        b.center + Vector3::new(0.0, 0.4, 0.0),
        b.center + Vector3::new(0.0, 0.0, -1.9),
        Vector3::zero(),
    ] {
        assert_eq!(
            point_inside_box_planes(&p, &planes),
            point_inside_box_quads(&p, &quads)
        );
        assert_eq!(point_inside_box_quads(&p, &quads), b.contains(&p));
    }
}

#[test]
fn quad_aabox_boundary_filter_keeps_surface_points() {
    let b = AABox::<f64>::new(Vector3::splat(-1.0), Vector3::splat(1.0));
    // A quad crossing the box at an angle.
    let q = Quad::new(
        Vector3::new(-3.0, -3.0, 0.0),
        Vector3::new(3.0, -3.0, 0.0),
        Vector3::new(3.0, 3.0, 0.0),
        Vector3::new(-3.0, 3.0, 0.0),
    );
    let all = intersect::quad_aabox(&q, &b, false);
    let boundary = intersect::quad_aabox(&q, &b, true);
    assert!(!all.is_empty());
    assert!(boundary.len() <= all.len());
    for p in &boundary {
        let on_face = (p.x.abs() - 1.0).abs() < 1e-6
            || (p.y.abs() - 1.0).abs() < 1e-6
            || (p.z.abs() - 1.0).abs() < 1e-6;
        assert!(on_face);
    }
}

#[test]
fn sat_agrees_with_segment_queries() {
    let b = AABox::new(Vector3::splat(-1.0), Vector3::splat(1.0));
    let crossing = Triangle::new(
        Vector3::new(-2.0, 0.5, 0.0),
        Vector3::new(2.0, 0.5, 0.0),
        Vector3::new(0.0, 0.5, 2.0),
    );
    assert!(intersect::aabox_triangle(&b, &crossing));
    // One of the triangle's edges pierces the box's faces.
    let edge = Segment::new(crossing.points[0], crossing.points[1]);
    let oriented = Box3::new(b.center(), b.extents(), Quaternion::identity());
    assert!(intersect::segment_box(&edge, &oriented).is_some());

    let distant = Triangle::new(
        Vector3::new(5.0, 5.0, 5.0),
        Vector3::new(6.0, 5.0, 5.0),
        Vector3::new(5.0, 6.0, 5.0),
    );
    assert!(!intersect::aabox_triangle(&b, &distant));
}
