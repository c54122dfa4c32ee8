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
use crate::geometry::{AABox, Triangle};
use crate::numeric::{partial_max, partial_min, Real};

/// Separating axis overlap test between an axis-aligned box and a
/// triangle. Thirteen candidate axes: the three box axes, the triangle
/// normal, and the nine edge cross products.
pub fn aabox_triangle<T: Real>(aabox: &AABox<T>, triangle: &Triangle<T>) -> bool {
    let center = aabox.center();
    let extents = aabox.extents();

    // Triangle vertices in the box's local frame.
    let v0 = triangle.points[0] - center;
    let v1 = triangle.points[1] - center;
    let v2 = triangle.points[2] - center;

    let f0 = v1 - v0;
    let f1 = v2 - v1;
    let f2 = v0 - v2;

    // Cross products of the box axes with the triangle edges.
    let cross_axes = [
        Vector3::new(T::zero(), -f0.z, f0.y),
        Vector3::new(T::zero(), -f1.z, f1.y),
        Vector3::new(T::zero(), -f2.z, f2.y),
        Vector3::new(f0.z, T::zero(), -f0.x),
        Vector3::new(f1.z, T::zero(), -f1.x),
        Vector3::new(f2.z, T::zero(), -f2.x),
        Vector3::new(-f0.y, f0.x, T::zero()),
        Vector3::new(-f1.y, f1.x, T::zero()),
        Vector3::new(-f2.y, f2.x, T::zero()),
    ];
    for axis in &cross_axes {
        if separated_on(&v0, &v1, &v2, axis, &extents) {
            return false;
        }
    }

    // Box face normals: plain interval overlap per coordinate.
    let eps = T::tolerance();
    let max3 = |a: T, b: T, c: T| partial_max(partial_max(a, b), c);
    let min3 = |a: T, b: T, c: T| partial_min(partial_min(a, b), c);
    if max3(v0.x, v1.x, v2.x) < -extents.x - eps || min3(v0.x, v1.x, v2.x) > extents.x + eps {
        return false;
    }
    if max3(v0.y, v1.y, v2.y) < -extents.y - eps || min3(v0.y, v1.y, v2.y) > extents.y + eps {
        return false;
    }
    if max3(v0.z, v1.z, v2.z) < -extents.z - eps || min3(v0.z, v1.z, v2.z) > extents.z + eps {
        return false;
    }

    // Triangle supporting plane.
    let normal = f0.cross(&f1);
    !separated_on(&v0, &v1, &v2, &normal, &extents)
}

fn separated_on<T: Real>(
    v0: &Vector3<T>,
    v1: &Vector3<T>,
    v2: &Vector3<T>,
    axis: &Vector3<T>,
    extents: &Vector3<T>,
) -> bool {
    let p0 = v0.dot(axis);
    let p1 = v1.dot(axis);
    let p2 = v2.dot(axis);

    // Projection radius of the box onto the axis.
    let a = axis.abs();
    let r = extents.x * a.x + extents.y * a.y + extents.z * a.z;

    let eps = T::tolerance();
    let lo = partial_min(partial_min(p0, p1), p2);
    let hi = partial_max(partial_max(p0, p1), p2);
    hi < -r - eps || lo > r + eps
}
