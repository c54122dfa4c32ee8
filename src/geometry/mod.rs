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

//! Shape primitives. Constructors establish the invariants (normalized
//! normals, min <= max boxes) that the query layer relies on.

pub mod aabox;
pub mod box3;
pub mod plane;
pub mod polygon;
pub mod quad;
pub mod ray;
pub mod rect;
pub mod segment;
pub mod sphere;
pub mod triangle;

pub use aabox::AABox;
pub use box3::Box3;
pub use plane::Plane;
pub use polygon::{Polygon, Polygon2};
pub use quad::Quad;
pub use ray::{Ray, Ray2};
pub use rect::{AARect, Rect};
pub use segment::{Segment, Segment2};
pub use sphere::Sphere;
pub use triangle::{Triangle, Triangle2};

use crate::algebra::Vector3;

/// A point of contact on a surface together with the outward normal there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact<T> {
    pub point: Vector3<T>,
    pub normal: Vector3<T>,
}
