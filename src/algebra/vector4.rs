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

use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::algebra::Vector3;
use crate::numeric::{Real, Scalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn splat(a: T) -> Self {
        Self::new(a, a, a, a)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// Homogeneous extension of a 3D vector.
    #[inline]
    pub fn from_vector3(v: &Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn sq_length(&self) -> T {
        self.dot(self)
    }
}

impl<T: Real> Vector4<T> {
    #[inline]
    pub fn length(&self) -> T {
        self.sq_length().sqrt()
    }

    /// Unit vector; see [`Vector4::normalized_safe`] for degenerate input.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    pub fn normalized_safe(&self) -> Self {
        let sq = self.sq_length();
        if sq < T::tolerance() * T::tolerance() {
            Self::zero()
        } else {
            let len = sq.sqrt();
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        }
    }

    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }
}

impl<T: Scalar> Default for Vector4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Index<usize> for Vector4<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of range: {i}"),
        }
    }
}

impl<T: Scalar> Add for Vector4<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<T: Scalar> Sub for Vector4<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<T: Scalar> Mul for Vector4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector4<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<T: Scalar> Neg for Vector4<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> AddAssign for Vector4<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector4<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector4<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
