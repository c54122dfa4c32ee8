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
use crate::numeric::Real;

/// Half-line with a unit direction, so parameters along the ray are
/// Euclidean distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T> {
    origin: Vector3<T>,
    direction: Vector3<T>,
}

impl<T: Real> Ray<T> {
    /// `direction` does not need to be unit length; it is normalized here.
    pub fn new(origin: Vector3<T>, direction: &Vector3<T>) -> Self {
        Self {
            origin,
            direction: direction.normalized_safe(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vector3<T> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector3<T> {
        self.direction
    }

    /// Point at distance `t` from the origin.
    #[inline]
    pub fn point_at(&self, t: T) -> Vector3<T> {
        self.origin + self.direction * t
    }
}

impl<T: Real> Default for Ray<T> {
    fn default() -> Self {
        Self {
            origin: Vector3::zero(),
            direction: Vector3::forward(),
        }
    }
}

/// 2D counterpart of [`Ray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<T> {
    origin: Vector2<T>,
    direction: Vector2<T>,
}

impl<T: Real> Ray2<T> {
    pub fn new(origin: Vector2<T>, direction: &Vector2<T>) -> Self {
        Self {
            origin,
            direction: direction.normalized_safe(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vector2<T> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.direction
    }

    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        self.origin + self.direction * t
    }
}
