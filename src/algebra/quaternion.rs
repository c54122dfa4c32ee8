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

use std::ops::{Add, Div, Mul, Neg};

use crate::algebra::{Matrix4, Vector3};
use crate::numeric::Real;

/// Rotation quaternion. Identity is `(0, 0, 0, 1)`; operations that return
/// rotations keep their results unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// Two unit quaternions closer than this in the dot product interpolate
// linearly; the sin(angle) denominator is too small for the spherical form.
const LERP_FALLBACK_MARGIN: f64 = 0.01;

impl<T: Real> Quaternion<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn sq_length(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn length(&self) -> T {
        self.sq_length().sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Unit quaternion, or identity when the input has no usable length.
    pub fn normalized(&self) -> Self {
        let sq = self.sq_length();
        if sq < T::tolerance() * T::tolerance() {
            return Self::identity();
        }
        let len = sq.sqrt();
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Multiplicative inverse: conjugate over squared length, which also
    /// inverts non-unit quaternions. Degenerate input yields identity.
    pub fn inversed(&self) -> Self {
        let sq = self.sq_length();
        if sq < T::tolerance() * T::tolerance() {
            return Self::identity();
        }
        let c = self.conjugated();
        Self::new(c.x / sq, c.y / sq, c.z / sq, c.w / sq)
    }

    /// Rotation of `angle_rads` around `axis`.
    pub fn angle_axis(angle_rads: T, axis: &Vector3<T>) -> Self {
        let half = angle_rads * T::half();
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos()).normalized()
    }

    /// Unit rotation axis and angle in radians. Identity reports the zero
    /// axis with a zero angle.
    pub fn to_axis_angle(&self) -> (Vector3<T>, T) {
        let angle = T::two() * self.w.max(-T::one()).min(T::one()).acos();
        let s = (T::one() - self.w * self.w).max(T::zero()).sqrt();
        if s < T::tolerance() {
            (Vector3::zero(), angle)
        } else {
            (Vector3::new(self.x / s, self.y / s, self.z / s), angle)
        }
    }

    /// Shortest rotation taking `from` onto `to`. Anti-parallel input picks
    /// an arbitrary axis orthogonal to `from` and rotates 180 degrees.
    pub fn from_to(from: &Vector3<T>, to: &Vector3<T>) -> Self {
        let v0 = from.normalized_safe();
        let v1 = to.normalized_safe();
        let d = v0.dot(&v1);

        if d >= T::one() - T::tolerance() {
            return Self::identity();
        }
        if d <= -T::one() + T::tolerance() {
            let mut axis = Vector3::right().cross(&v0);
            if axis.sq_length() < T::tolerance() {
                axis = Vector3::up().cross(&v0);
            }
            let axis = axis.normalized_safe();
            return Self::new(axis.x, axis.y, axis.z, T::zero()).normalized();
        }

        let s = ((T::one() + d) * T::two()).sqrt();
        let c = v0.cross(&v1) / s;
        Self::new(c.x, c.y, c.z, s * T::half()).normalized()
    }

    /// Rotation whose forward axis points along `forward`. Returns identity
    /// when `forward` and `up` are nearly parallel.
    pub fn look_direction(forward: &Vector3<T>, up: &Vector3<T>) -> Self {
        let f = forward.normalized_safe();
        let u = up.normalized_safe();

        let margin = T::from_f64(0.99);
        if f.dot(&u) >= margin || f.dot(&-u) >= margin {
            return Self::identity();
        }
        // The look-at matrix at the origin is a pure rotation, so its
        // transpose is its inverse.
        Matrix4::look_at(&Vector3::zero(), &f, &u)
            .transposed()
            .to_quaternion()
    }

    /// Spherical interpolation along the shortest arc; the result is unit
    /// length for unit inputs.
    pub fn slerp(&self, to: &Self, t: T) -> Self {
        let mut cos_theta = self.dot(to);
        let mut to = *to;

        // A negative dot product would interpolate the long way around the
        // sphere; flipping one endpoint keeps the short arc.
        if cos_theta < T::zero() {
            to = -to;
            cos_theta = -cos_theta;
        }
        Self::interpolate(self, &to, t, cos_theta)
    }

    /// Interpolation without the shortest-arc flip; otherwise the same
    /// near-parallel policy as [`Quaternion::slerp`].
    pub fn lerp(&self, to: &Self, t: T) -> Self {
        let cos_theta = self.dot(to);
        Self::interpolate(self, to, t, cos_theta)
    }

    fn interpolate(from: &Self, to: &Self, t: T, cos_theta: T) -> Self {
        if cos_theta > T::one() - T::from_f64(LERP_FALLBACK_MARGIN) {
            Self::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
                from.z + (to.z - from.z) * t,
                from.w + (to.w - from.w) * t,
            )
            .normalized()
        } else {
            let angle = cos_theta.max(-T::one()).min(T::one()).acos();
            let sin_angle = angle.sin();
            let w0 = ((T::one() - t) * angle).sin() / sin_angle;
            let w1 = (t * angle).sin() / sin_angle;
            Self::new(
                from.x * w0 + to.x * w1,
                from.y * w0 + to.y * w1,
                from.z * w0 + to.z * w1,
                from.w * w0 + to.w * w1,
            )
        }
    }

    /// Rotates a vector: `q v q⁻¹`, expanded to two cross products.
    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        let q = Vector3::new(self.x, self.y, self.z);
        let uv = q.cross(v);
        let uuv = q.cross(&uv);
        *v + (uv * self.w + uuv) * T::two()
    }

    pub fn pitch(&self) -> T {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        (T::two() * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z)
    }

    pub fn yaw(&self) -> T {
        let (x, z, w, y) = (self.x, self.z, self.w, self.y);
        (-T::two() * (x * z - w * y)).max(-T::one()).min(T::one()).asin()
    }

    pub fn roll(&self) -> T {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        (T::two() * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z)
    }

    /// Euler angles (pitch, yaw, roll) in radians.
    pub fn euler_angles(&self) -> Vector3<T> {
        Vector3::new(self.pitch(), self.yaw(), self.roll())
    }

    pub fn from_euler_rads(euler: &Vector3<T>) -> Self {
        let qx = Self::angle_axis(euler.x, &Vector3::right());
        let qy = Self::angle_axis(euler.y, &Vector3::up());
        let qz = Self::angle_axis(euler.z, &Vector3::forward());
        (qz * qy * qx).normalized()
    }
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

/// Hamilton product.
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (p, q) = (self, rhs);
        Self::new(
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y + p.y * q.w + p.z * q.x - p.x * q.z,
            p.w * q.z + p.z * q.w + p.x * q.y - p.y * q.x,
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
        )
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T: Real> Div<T> for Quaternion<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<T: Real> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.rotate(&rhs)
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rotating_by_identity_is_a_no_op() {
        let q: Quaternion<f64> = Quaternion::identity();
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(q.rotate(&v), v);
    }

    #[test]
    fn quarter_turn_around_z() {
        let q = Quaternion::angle_axis(std::f64::consts::FRAC_PI_2, &Vector3::back());
        let v = q.rotate(&Vector3::new(1.0, 0.0, 0.0));
        assert!(close(v.x, 0.0) && close(v.y, 1.0) && close(v.z, 0.0));
    }

    #[test]
    fn from_to_handles_anti_parallel_vectors() {
        let from = Vector3::new(1.0, 0.0, 0.0);
        let to = Vector3::new(-1.0, 0.0, 0.0);
        let q = Quaternion::from_to(&from, &to);
        let rotated = q.rotate(&from);
        assert!(rotated.distance(&to) < 1e-6);
        assert!(close(q.length(), 1.0));
    }

    #[test]
    fn inversed_cancels_non_unit_input() {
        let q = Quaternion::angle_axis(0.7, &Vector3::new(0.0, 1.0, 0.0)) * 3.0;
        let p = q.inversed() * q;
        assert!(close(p.x, 0.0) && close(p.y, 0.0) && close(p.z, 0.0) && close(p.w, 1.0));
    }
}
