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
use crate::geometry::Plane;
use crate::numeric::{Real, Scalar};

/// Side of a directed 2D line a->b.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

/// Side of an oriented plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    Front,
    Behind,
    On,
}

/// Raw orientation determinant of `c` relative to the directed line a->b.
/// Positive means left of the line, i.e. counter-clockwise.
#[inline]
pub fn orient2d<T: Scalar>(a: &Vector2<T>, b: &Vector2<T>, c: &Vector2<T>) -> T {
    (*b - *a).cross(&(*c - *a))
}

/// Classified 2D orientation, with a tolerance band around collinear.
pub fn orientation_2d<T: Real>(a: &Vector2<T>, b: &Vector2<T>, c: &Vector2<T>) -> Orientation {
    let det = orient2d(a, b, c);
    if det > T::tolerance() {
        Orientation::Left
    } else if det < -T::tolerance() {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}

/// Which side of `plane` a point lies on, with a tolerance band around the
/// plane itself.
pub fn orientation_3d<T: Real>(point: &Vector3<T>, plane: &Plane<T>) -> PlaneSide {
    let d = plane.distance_to(point);
    if d > T::tolerance() {
        PlaneSide::Front
    } else if d < -T::tolerance() {
        PlaneSide::Behind
    } else {
        PlaneSide::On
    }
}
