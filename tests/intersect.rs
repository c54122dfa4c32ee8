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

use geoprim::algebra::{Vector2, Vector3};
use geoprim::geometry::{AABox, Plane, Ray, Ray2, Segment, Segment2, Sphere, Triangle};
use geoprim::intersect;
use geoprim::intersect::{Orientation, PlaneSide};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn head_on_ray_plane_hit() {
    let ray = Ray::<f64>::new(Vector3::new(0.0, 0.0, 5.0), &Vector3::new(0.0, 0.0, -1.0));
    let plane = Plane::new(Vector3::zero(), &Vector3::new(0.0, 0.0, 1.0));
    let hit = intersect::ray_plane(&ray, &plane).unwrap();
    assert!((hit.distance - 5.0).abs() < 1e-12);
    assert!(hit.point.sq_length() < 1e-12);
}

#[test]
fn oblique_ray_plane_distance_exceeds_height() {
    let ray = Ray::<f64>::new(
        Vector3::new(0.0, 4.0, 0.0),
        &Vector3::new(3.0, -4.0, 0.0),
    );
    let plane = Plane::new(Vector3::zero(), &Vector3::up());
    // Direction is normalized, so the distance is along the hypotenuse.
    let hit = intersect::ray_plane(&ray, &plane).unwrap();
    assert!((hit.distance - 5.0).abs() < 1e-9);
    assert!((hit.point - Vector3::new(3.0, 0.0, 0.0)).sq_length() < 1e-9);
}

#[test]
fn parallel_ray_misses_plane() {
    let ray = Ray::<f64>::new(Vector3::new(0.0, 1.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
    let plane = Plane::new(Vector3::zero(), &Vector3::up());
    assert!(intersect::ray_plane_distance(&ray, &plane).is_none());
}

#[test]
fn ray_enters_box_on_x_axis() {
    let aabox = AABox::<f64>::new(Vector3::new(2.0, -1.0, -1.0), Vector3::new(3.0, 1.0, 1.0));
    let ray = Ray::new(Vector3::zero(), &Vector3::new(1.0, 0.0, 0.0));
    let hit = intersect::ray_aabox(&ray, &aabox).unwrap();
    assert!((hit.distance - 2.0).abs() < 1e-12);
}

#[test]
fn ray_sphere_tangent_and_miss() {
    let sphere = Sphere::<f64>::new(Vector3::new(0.0, 1.0, 0.0), 1.0);
    let grazing = Ray::new(Vector3::new(-5.0, 0.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
    let hit = intersect::ray_sphere(&grazing, &sphere).unwrap();
    assert!((hit.point - Vector3::zero()).sq_length() < 1e-9);

    let missing = Ray::new(Vector3::new(-5.0, -1.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
    assert!(intersect::ray_sphere(&missing, &sphere).is_none());
}

#[test]
fn ray_triangle_matches_plane_then_containment() {
    let tri = Triangle::<f64>::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 4.0, 0.0),
    );
    let inside = Ray::new(Vector3::new(1.0, 1.0, 2.0), &Vector3::new(0.0, 0.0, -1.0));
    let hit = intersect::ray_triangle(&inside, &tri).unwrap();
    assert!((hit.distance - 2.0).abs() < 1e-12);

    // Hits the plane but outside the triangle.
    let outside = Ray::new(Vector3::new(3.0, 3.0, 2.0), &Vector3::new(0.0, 0.0, -1.0));
    assert!(intersect::ray_triangle(&outside, &tri).is_none());
}

#[test]
fn barycentric_coordinates_round_trip_under_rays() {
    let tri = Triangle::<f64>::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    );
    let bc = tri
        .barycentric_coordinates(&Vector3::new(0.5, 0.0, 0.0))
        .unwrap();
    assert!((bc - Vector3::new(0.5, 0.5, 0.0)).sq_length() < 1e-12);
    assert!(
        (tri.point_from_barycentric(&bc) - Vector3::new(0.5, 0.0, 0.0)).sq_length() < 1e-12
    );
}

#[test]
fn degenerate_segment_produces_no_direction() {
    let p = Vector3::<f64>::new(2.0, -1.0, 0.5);
    let seg = Segment::new(p, p);
    assert_eq!(seg.length(), 0.0);
    assert_eq!(seg.direction(), Vector3::zero());
}

#[test]
fn ray2_hits_segment_within_bounds_only() {
    let ray = Ray2::<f64>::new(Vector2::zero(), &Vector2::new(1.0, 0.0));
    let crossing = Segment2::new(Vector2::new(2.0, -1.0), Vector2::new(2.0, 1.0));
    let p = intersect::ray2_segment2(&ray, &crossing).unwrap();
    assert!((p - Vector2::new(2.0, 0.0)).sq_length() < 1e-12);

    let above = Segment2::new(Vector2::new(2.0, 1.0), Vector2::new(2.0, 3.0));
    assert!(intersect::ray2_segment2(&ray, &above).is_none());
}

#[test]
fn sphere_projection_lands_on_surface() {
    let sphere = Sphere::<f64>::new(Vector3::new(1.0, 0.0, 0.0), 2.0);
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..20 {
        let p = Vector3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        );
        if (p - sphere.center).sq_length() < 1e-6 {
            continue;
        }
        let on_surface = intersect::point_projected_to_sphere(&p, &sphere);
        assert!((on_surface.distance(&sphere.center) - sphere.radius).abs() < 1e-9);
    }
}

#[test]
fn orientation_predicates_come_with_the_engine() {
    let a = Vector2::<f64>::new(0.0, 0.0);
    let b = Vector2::new(1.0, 0.0);
    assert_eq!(
        intersect::orientation_2d(&a, &b, &Vector2::new(0.5, 1.0)),
        Orientation::Left
    );

    let plane = Plane::<f64>::new(Vector3::zero(), &Vector3::up());
    assert_eq!(
        intersect::orientation_3d(&Vector3::new(0.0, 2.0, 0.0), &plane),
        PlaneSide::Front
    );
}

#[test]
fn random_ray_aabox_hits_match_containment() {
    // Any reported hit point must lie on the box surface (or at the origin
    // for rays starting inside).
    let aabox = AABox::new(Vector3::new(-2.0, -1.0, -3.0), Vector3::new(1.0, 2.0, 0.5));
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..200 {
        let origin = Vector3::new(
            rng.random_range(-6.0..6.0),
            rng.random_range(-6.0..6.0),
            rng.random_range(-6.0..6.0),
        );
        let dir = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if dir.sq_length() < 1e-6 {
            continue;
        }
        let ray = Ray::new(origin, &dir);
        if let Some(hit) = intersect::ray_aabox(&ray, &aabox) {
            assert!(hit.distance >= 0.0);
            let grown = AABox::new(
                aabox.min - Vector3::splat(1e-6),
                aabox.max + Vector3::splat(1e-6),
            );
            assert!(grown.contains(&hit.point));
        }
    }
}
