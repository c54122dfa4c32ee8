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

//! Stateless intersection routines. Every function takes shapes by
//! reference and reports misses as `None` or an empty point set rather
//! than through flags or sentinel values.

pub mod clip;
pub mod ray;
pub mod sat;
pub mod segment;

pub use crate::geometry::Contact;
pub use crate::kernel::{orientation_2d, orientation_3d, Orientation, PlaneSide};
pub use clip::{box_box, polygon_polygon, quad_aabox, quad_quad, triangle_triangle};
pub use ray::{
    point_projected_to_sphere, point_to_line_distance_2d, ray2_segment2, ray_aabox,
    ray_closest_point_to, ray_line_closest_points, ray_plane, ray_plane_distance, ray_sphere,
    ray_triangle, ray_triangle_distance, segment2_segment2,
};
pub use sat::aabox_triangle;
pub use segment::{
    segment_box, segment_plane, segment_polygon, segment_polygon_points, segment_triangle,
};

use crate::algebra::Vector3;

/// A ray hit: distance from the ray origin and the hit point itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<T> {
    pub distance: T,
    pub point: Vector3<T>,
}
