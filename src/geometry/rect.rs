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

use crate::algebra::Vector2;
use crate::numeric::{Real, Scalar};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AARect<T> {
    pub min: Vector2<T>,
    pub max: Vector2<T>,
}

impl<T: Scalar> AARect<T> {
    #[inline]
    pub fn new(min: Vector2<T>, max: Vector2<T>) -> Self {
        Self { min, max }
    }

    /// Smallest rectangle containing all of `points`.
    pub fn from_points(points: &[Vector2<T>]) -> Self {
        let mut min = Vector2::splat(T::upper_bound());
        let mut max = Vector2::splat(T::lower_bound());
        for p in points {
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    #[inline]
    pub fn size(&self) -> Vector2<T> {
        self.max - self.min
    }

    pub fn contains(&self, point: &Vector2<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Corners in counter-clockwise order starting at `min`.
    pub fn points(&self) -> [Vector2<T>; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }
}

impl<T: Real> AARect<T> {
    /// Normalized device coordinates: (-1, -1) to (1, 1).
    pub fn ndc() -> Self {
        Self {
            min: Vector2::splat(-T::one()),
            max: Vector2::splat(T::one()),
        }
    }

    pub fn center(&self) -> Vector2<T> {
        (self.min + self.max) * T::half()
    }
}

/// Oriented rectangle: `axis` is the unit direction of the local x side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub center: Vector2<T>,
    pub axis: Vector2<T>,
    pub half_size: Vector2<T>,
}

impl<T: Real> Rect<T> {
    /// `axis` does not need to be unit length; it is normalized here.
    pub fn new(center: Vector2<T>, axis: &Vector2<T>, half_size: Vector2<T>) -> Self {
        Self {
            center,
            axis: axis.normalized_safe(),
            half_size,
        }
    }

    /// Corners in counter-clockwise order starting at the local (-x, -y)
    /// corner.
    pub fn points(&self) -> [Vector2<T>; 4] {
        let ax = self.axis * self.half_size.x;
        let ay = self.axis.perpendicular() * self.half_size.y;
        [
            self.center - ax - ay,
            self.center + ax - ay,
            self.center + ax + ay,
            self.center - ax + ay,
        ]
    }

    /// Containment with tolerance, tested by projection on both local axes.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        let d = *point - self.center;
        let eps = T::tolerance();
        d.dot(&self.axis).abs() <= self.half_size.x + eps
            && d.dot(&self.axis.perpendicular()).abs() <= self.half_size.y + eps
    }
}
