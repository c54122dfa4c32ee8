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
use crate::numeric::{Real, Scalar};

/// Directed line segment from `origin` to `destiny`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T> {
    pub origin: Vector3<T>,
    pub destiny: Vector3<T>,
}

impl<T: Scalar> Segment<T> {
    #[inline]
    pub fn new(origin: Vector3<T>, destiny: Vector3<T>) -> Self {
        Self { origin, destiny }
    }

    #[inline]
    pub fn sq_length(&self) -> T {
        self.origin.sq_distance(&self.destiny)
    }

    /// Same endpoints, opposite direction.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::new(self.destiny, self.origin)
    }
}

impl<T: Real> Segment<T> {
    #[inline]
    pub fn length(&self) -> T {
        self.origin.distance(&self.destiny)
    }

    /// Unit direction from origin to destiny; zero for a degenerate segment.
    #[inline]
    pub fn direction(&self) -> Vector3<T> {
        (self.destiny - self.origin).normalized_safe()
    }

    #[inline]
    pub fn midpoint(&self) -> Vector3<T> {
        (self.origin + self.destiny) * T::half()
    }
}

/// 2D counterpart of [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<T> {
    pub origin: Vector2<T>,
    pub destiny: Vector2<T>,
}

impl<T: Scalar> Segment2<T> {
    #[inline]
    pub fn new(origin: Vector2<T>, destiny: Vector2<T>) -> Self {
        Self { origin, destiny }
    }

    #[inline]
    pub fn sq_length(&self) -> T {
        self.origin.sq_distance(&self.destiny)
    }
}

impl<T: Real> Segment2<T> {
    #[inline]
    pub fn length(&self) -> T {
        self.origin.distance(&self.destiny)
    }

    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        (self.destiny - self.origin).normalized_safe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_segment_has_zero_length_and_direction() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let s = Segment::new(p, p);
        assert_eq!(s.length(), 0.0);
        assert_eq!(s.direction(), Vector3::zero());
    }

    #[test]
    fn midpoint_halves_the_segment() {
        let s = Segment::new(Vector3::zero(), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(s.midpoint(), Vector3::new(1.0, 2.0, 3.0));
    }
}
