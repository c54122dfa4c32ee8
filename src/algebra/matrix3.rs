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

use std::ops::{Add, Index, Mul, Sub};

use crate::algebra::matrix4::INVERTIBLE_PRECISION;
use crate::algebra::Vector3;
use crate::numeric::Real;

/// 3x3 matrix stored as columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3<T> {
    pub c0: Vector3<T>,
    pub c1: Vector3<T>,
    pub c2: Vector3<T>,
}

impl<T: Real> Matrix3<T> {
    pub fn from_cols(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>) -> Self {
        Self { c0, c1, c2 }
    }

    /// Entries given in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Self::from_cols(
            Vector3::new(m00, m10, m20),
            Vector3::new(m01, m11, m21),
            Vector3::new(m02, m12, m22),
        )
    }

    pub fn identity() -> Self {
        Self::from_cols(Vector3::right(), Vector3::up(), Vector3::back())
    }

    pub fn transposed(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z, self.c1.x, self.c1.y, self.c1.z, self.c2.x,
            self.c2.y, self.c2.z,
        )
    }

    pub fn determinant(&self) -> T {
        self.c0.dot(&self.c1.cross(&self.c2))
    }

    /// Inverse through the adjugate; `None` when the determinant magnitude
    /// is below the invertibility precision.
    pub fn inversed(&self) -> Option<Self> {
        let r0 = self.c1.cross(&self.c2);
        let r1 = self.c2.cross(&self.c0);
        let r2 = self.c0.cross(&self.c1);
        let det = self.c0.dot(&r0);
        if det.abs() < T::from_f64(INVERTIBLE_PRECISION) {
            return None;
        }
        let (r0, r1, r2) = (r0 / det, r1 / det, r2 / det);
        // r0..r2 are the rows of the inverse.
        Some(Self::new(
            r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z,
        ))
    }
}

impl<T: Real> Default for Matrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Index<usize> for Matrix3<T> {
    type Output = Vector3<T>;
    fn index(&self, i: usize) -> &Vector3<T> {
        match i {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            _ => panic!("Matrix3 column out of range: {i}"),
        }
    }
}

impl<T: Real> Mul for Matrix3<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.c0, self * rhs.c1, self * rhs.c2)
    }
}

impl<T: Real> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }
}

impl<T: Real> Add for Matrix3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<T: Real> Sub for Matrix3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}
