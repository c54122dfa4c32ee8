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

use crate::numeric::scalar::{partial_max, partial_min};
use crate::numeric::{Real, Scalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector with the same value in both components.
    #[inline]
    pub fn splat(a: T) -> Self {
        Self::new(a, a)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product, the signed doubled area of the parallelogram.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn sq_length(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn sq_distance(&self, other: &Self) -> T {
        (*other - *self).sq_length()
    }

    pub fn abs(&self) -> Self {
        Self::new(
            if self.x < T::zero() { -self.x } else { self.x },
            if self.y < T::zero() { -self.y } else { self.y },
        )
    }

    pub fn min(&self, other: &Self) -> Self {
        Self::new(partial_min(self.x, other.x), partial_min(self.y, other.y))
    }

    pub fn max(&self, other: &Self) -> Self {
        Self::new(partial_max(self.x, other.x), partial_max(self.y, other.y))
    }

    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        self.max(min).min(max)
    }
}

impl<T: Real> Vector2<T> {
    #[inline]
    pub fn length(&self) -> T {
        self.sq_length().sqrt()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        self.sq_distance(other).sqrt()
    }

    /// Unit vector; dividing by a zero length produces non-finite
    /// components. Use [`Vector2::normalized_safe`] when the input may be
    /// degenerate.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    /// Unit vector, or the zero vector for degenerate input.
    pub fn normalized_safe(&self) -> Self {
        let sq = self.sq_length();
        if sq < T::tolerance() * T::tolerance() {
            Self::zero()
        } else {
            let len = sq.sqrt();
            Self::new(self.x / len, self.y / len)
        }
    }

    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    pub fn floor(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    pub fn ceil(&self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }

    pub fn round(&self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn to_degrees(&self) -> Self {
        Self::new(self.x.to_degrees(), self.y.to_degrees())
    }

    pub fn to_radians(&self) -> Self {
        Self::new(self.x.to_radians(), self.y.to_radians())
    }

    /// Reflection across a unit normal.
    pub fn reflected(&self, normal: &Self) -> Self {
        *self - *normal * (self.dot(normal) * T::two())
    }
}

impl<T: Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Index<usize> for Vector2<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {i}"),
        }
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul for Vector2<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Scalar> Div for Vector2<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
