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
use crate::geometry::{AABox, Plane, Ray, Ray2, Segment2, Sphere, Triangle};
use crate::intersect::RayHit;
use crate::kernel::orient2d;
use crate::numeric::{partial_max, partial_min, Real};

/// Distance along the ray to the plane. `None` when the ray is parallel
/// to the plane or the plane lies behind the origin.
pub fn ray_plane_distance<T: Real>(ray: &Ray<T>, plane: &Plane<T>) -> Option<T> {
    let denom = ray.direction().dot(&plane.normal());
    if denom.abs() < T::tolerance() {
        return None;
    }
    let t = (plane.point() - ray.origin()).dot(&plane.normal()) / denom;
    (t >= T::zero()).then_some(t)
}

pub fn ray_plane<T: Real>(ray: &Ray<T>, plane: &Plane<T>) -> Option<RayHit<T>> {
    ray_plane_distance(ray, plane).map(|t| RayHit {
        distance: t,
        point: ray.point_at(t),
    })
}

/// Nearest hit on the sphere surface. A ray starting inside hits the
/// surface on its way out.
pub fn ray_sphere<T: Real>(ray: &Ray<T>, sphere: &Sphere<T>) -> Option<RayHit<T>> {
    let o = ray.origin() - sphere.center;
    let d = ray.direction();

    let a = d.dot(&d);
    if a < T::tolerance() {
        // Degenerate ray with zero direction.
        return None;
    }
    let b = T::two() * o.dot(&d);
    let c = o.dot(&o) - sphere.radius * sphere.radius;

    let disc = b * b - T::from_f64(4.0) * a * c;
    if disc < T::zero() {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = (-b - sq) / (T::two() * a);
    let t1 = (-b + sq) / (T::two() * a);

    let t = if t0 >= T::zero() {
        t0
    } else if t1 >= T::zero() {
        t1
    } else {
        return None;
    };
    Some(RayHit {
        distance: t,
        point: ray.point_at(t),
    })
}

/// Slab test. Returns the entry hit, or the origin itself when the ray
/// starts inside the box.
pub fn ray_aabox<T: Real>(ray: &Ray<T>, aabox: &AABox<T>) -> Option<RayHit<T>> {
    let o = ray.origin();
    let d = ray.direction();
    let eps = T::tolerance();

    let mut t_min = T::lower_bound();
    let mut t_max = T::upper_bound();

    for i in 0..3 {
        let (oi, di, lo, hi) = match i {
            0 => (o.x, d.x, aabox.min.x, aabox.max.x),
            1 => (o.y, d.y, aabox.min.y, aabox.max.y),
            _ => (o.z, d.z, aabox.min.z, aabox.max.z),
        };
        if di.abs() < eps {
            // Parallel to this slab: the origin must already be within it.
            if oi < lo - eps || oi > hi + eps {
                return None;
            }
            continue;
        }
        let mut t0 = (lo - oi) / di;
        let mut t1 = (hi - oi) / di;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = partial_max(t_min, t0);
        t_max = partial_min(t_max, t1);
    }

    if t_max < partial_max(t_min, T::zero()) {
        return None;
    }
    let t = partial_max(t_min, T::zero());
    Some(RayHit {
        distance: t,
        point: ray.point_at(t),
    })
}

/// Distance along the ray to the triangle, via its supporting plane and
/// barycentric containment.
pub fn ray_triangle_distance<T: Real>(ray: &Ray<T>, triangle: &Triangle<T>) -> Option<T> {
    let t = ray_plane_distance(ray, &triangle.plane())?;
    let point = ray.point_at(t);
    let bc = triangle.barycentric_coordinates(&point)?;
    let eps = T::tolerance();
    let inside = bc.x >= -eps
        && bc.x <= T::one() + eps
        && bc.y >= -eps
        && bc.y <= T::one() + eps
        && bc.z >= -eps
        && bc.z <= T::one() + eps;
    inside.then_some(t)
}

pub fn ray_triangle<T: Real>(ray: &Ray<T>, triangle: &Triangle<T>) -> Option<RayHit<T>> {
    ray_triangle_distance(ray, triangle).map(|t| RayHit {
        distance: t,
        point: ray.point_at(t),
    })
}

/// Closest point of the ray to `point`; never behind the origin.
pub fn ray_closest_point_to<T: Real>(ray: &Ray<T>, point: &Vector3<T>) -> Vector3<T> {
    let t = (*point - ray.origin()).dot(&ray.direction());
    ray.point_at(partial_max(t, T::zero()))
}

/// Closest points between a ray and an infinite line, in that order.
/// When the two are parallel the ray origin is paired with its projection
/// on the line.
pub fn ray_line_closest_points<T: Real>(
    ray: &Ray<T>,
    line_point: &Vector3<T>,
    line_direction: &Vector3<T>,
) -> (Vector3<T>, Vector3<T>) {
    let d1 = ray.direction();
    let d2 = line_direction.normalized_safe();
    let r = ray.origin() - *line_point;

    let b = d1.dot(&d2);
    let c = d1.dot(&r);
    let f = d2.dot(&r);

    // Both directions are unit, so a = e = 1.
    let denom = T::one() - b * b;
    if denom.abs() < T::tolerance() {
        let on_line = *line_point + d2 * f;
        return (ray.origin(), on_line);
    }
    let s = partial_max((b * f - c) / denom, T::zero());
    let t = b * s + f;
    (ray.point_at(s), *line_point + d2 * t)
}

/// Hit point of a 2D ray against a segment.
pub fn ray2_segment2<T: Real>(ray: &Ray2<T>, segment: &Segment2<T>) -> Option<Vector2<T>> {
    let d = ray.direction();
    let e = segment.destiny - segment.origin;
    let denom = d.cross(&e);
    if denom.abs() < T::tolerance() {
        return None;
    }
    let diff = segment.origin - ray.origin();
    let t = diff.cross(&e) / denom;
    let u = diff.cross(&d) / denom;

    let eps = T::tolerance();
    let hit = t >= -eps && u >= -eps && u <= T::one() + eps;
    hit.then(|| ray.point_at(t))
}

/// Segment parameters `(t, u)` at the crossing of two 2D segments, both
/// in [0, 1]. `None` for parallel or non-crossing segments.
pub(crate) fn segment2_segment2_params<T: Real>(
    a: &Segment2<T>,
    b: &Segment2<T>,
) -> Option<(T, T)> {
    let d1 = a.destiny - a.origin;
    let d2 = b.destiny - b.origin;
    let denom = d1.cross(&d2);
    if denom.abs() < T::tolerance() {
        return None;
    }
    let diff = b.origin - a.origin;
    let t = diff.cross(&d2) / denom;
    let u = diff.cross(&d1) / denom;

    let eps = T::tolerance();
    let hit = t >= -eps && t <= T::one() + eps && u >= -eps && u <= T::one() + eps;
    hit.then_some((t, u))
}

/// Crossing point of two 2D segments. Overlapping collinear segments
/// report no single crossing and return `None`.
pub fn segment2_segment2<T: Real>(a: &Segment2<T>, b: &Segment2<T>) -> Option<Vector2<T>> {
    segment2_segment2_params(a, b).map(|(t, _)| a.origin + (a.destiny - a.origin) * t)
}

/// Distance from a point to the infinite line through `a` and `b`.
pub fn point_to_line_distance_2d<T: Real>(
    point: &Vector2<T>,
    a: &Vector2<T>,
    b: &Vector2<T>,
) -> T {
    let len = a.distance(b);
    if len < T::tolerance() {
        return a.distance(point);
    }
    orient2d(a, b, point).abs() / len
}

/// Radial projection of a point onto the sphere surface. The center
/// itself has no direction and maps to itself.
pub fn point_projected_to_sphere<T: Real>(point: &Vector3<T>, sphere: &Sphere<T>) -> Vector3<T> {
    let dir = (*point - sphere.center).normalized_safe();
    sphere.center + dir * sphere.radius
}
