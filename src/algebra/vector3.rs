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

use crate::algebra::{Axis3, Vector2};
use crate::numeric::scalar::{partial_max, partial_min};
use crate::numeric::{Real, Scalar};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// ---------- Constructors and constants ----------
impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector with the same value in all components.
    #[inline]
    pub fn splat(a: T) -> Self {
        Self::new(a, a, a)
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
    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn down() -> Self {
        Self::new(T::zero(), -T::one(), T::zero())
    }

    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero(), T::zero())
    }

    /// Forward points down negative z.
    #[inline]
    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), -T::one())
    }

    #[inline]
    pub fn back() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// All components at the scalar's upper bound; +∞ for floats.
    #[inline]
    pub fn infinity() -> Self {
        Self::splat(T::upper_bound())
    }

    #[inline]
    pub fn neg_infinity() -> Self {
        Self::splat(T::lower_bound())
    }

    pub fn from_axis(axis: Axis3) -> Self {
        match axis {
            Axis3::X => Self::right(),
            Axis3::Y => Self::up(),
            Axis3::Z => Self::back(),
        }
    }
}

// ---------- Componentwise queries (any scalar) ----------
impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
            if self.z < T::zero() { -self.z } else { self.z },
        )
    }

    pub fn min(&self, other: &Self) -> Self {
        Self::new(
            partial_min(self.x, other.x),
            partial_min(self.y, other.y),
            partial_min(self.z, other.z),
        )
    }

    pub fn max(&self, other: &Self) -> Self {
        Self::new(
            partial_max(self.x, other.x),
            partial_max(self.y, other.y),
            partial_max(self.z, other.z),
        )
    }

    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        self.max(min).min(max)
    }

    /// Smallest component.
    pub fn min_component(&self) -> T {
        partial_min(self.x, partial_min(self.y, self.z))
    }

    /// Largest component.
    pub fn max_component(&self) -> T {
        partial_max(self.x, partial_max(self.y, self.z))
    }

    pub fn axis(&self, axis: Axis3) -> T {
        match axis {
            Axis3::X => self.x,
            Axis3::Y => self.y,
            Axis3::Z => self.z,
        }
    }

    /// Axis of the component with the largest magnitude.
    pub fn dominant_axis(&self) -> Axis3 {
        let a = self.abs();
        if a.x >= a.y && a.x >= a.z {
            Axis3::X
        } else if a.y >= a.z {
            Axis3::Y
        } else {
            Axis3::Z
        }
    }

    /// Drops the given axis, keeping the other two in x-then-y-then-z order.
    pub fn projected_on_axis(&self, axis: Axis3) -> Vector2<T> {
        match axis {
            Axis3::X => Vector2::new(self.y, self.z),
            Axis3::Y => Vector2::new(self.x, self.z),
            Axis3::Z => Vector2::new(self.x, self.y),
        }
    }
}

// ---------- Metric operations (floats only) ----------
impl<T: Real> Vector3<T> {
    #[inline]
    pub fn length(&self) -> T {
        self.sq_length().sqrt()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        self.sq_distance(other).sqrt()
    }

    /// Unit vector; dividing by a zero length produces non-finite
    /// components. Use [`Vector3::normalized_safe`] when the input may be
    /// degenerate.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Unit vector, or the zero vector for degenerate input.
    pub fn normalized_safe(&self) -> Self {
        let sq = self.sq_length();
        if sq < T::tolerance() * T::tolerance() {
            Self::zero()
        } else {
            let len = sq.sqrt();
            Self::new(self.x / len, self.y / len, self.z / len)
        }
    }

    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }

    pub fn floor(&self) -> Self {
        Self::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    pub fn ceil(&self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    pub fn round(&self) -> Self {
        Self::new(self.x.round(), self.y.round(), self.z.round())
    }

    pub fn to_degrees(&self) -> Self {
        Self::new(self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees())
    }

    pub fn to_radians(&self) -> Self {
        Self::new(self.x.to_radians(), self.y.to_radians(), self.z.to_radians())
    }

    /// Reflection of `self` as an incident direction around `normal`.
    pub fn reflected(&self, normal: &Self) -> Self {
        let n = normal.normalized_safe();
        *self - n * (T::two() * self.dot(&n))
    }

    /// Projection of this vector onto another.
    pub fn projected_on_vector(&self, other: &Self) -> Self {
        let sq = other.sq_length();
        if sq < T::tolerance() * T::tolerance() {
            Self::zero()
        } else {
            *other * (self.dot(other) / sq)
        }
    }

    /// Projection of this point onto the plane through `plane_point` with
    /// the given normal.
    pub fn projected_on_plane(&self, plane_normal: &Self, plane_point: &Self) -> Self {
        let n = plane_normal.normalized_safe();
        *self - n * n.dot(&(*self - *plane_point))
    }

    /// Scalar coordinate of this point along a (not necessarily unit) axis.
    pub fn projected_on_axis_as_point(&self, axis: &Self) -> T {
        self.dot(&axis.normalized_safe())
    }
}

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {i}"),
        }
    }
}

// ---------- Operators ----------
impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Mul for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl<T: Scalar> Div for Vector3<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
