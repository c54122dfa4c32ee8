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

use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::algebra::{Matrix3, Quaternion, Vector3, Vector4};
use crate::numeric::Real;

/// Determinant magnitude below which a matrix is reported non-invertible.
pub const INVERTIBLE_PRECISION: f64 = 1e-8;

/// 4x4 matrix stored as columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4<T> {
    pub c0: Vector4<T>,
    pub c1: Vector4<T>,
    pub c2: Vector4<T>,
    pub c3: Vector4<T>,
}

// ---------- Construction ----------
impl<T: Real> Matrix4<T> {
    pub fn from_cols(c0: Vector4<T>, c1: Vector4<T>, c2: Vector4<T>, c3: Vector4<T>) -> Self {
        Self { c0, c1, c2, c3 }
    }

    /// Entries given in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self::from_cols(
            Vector4::new(m00, m10, m20, m30),
            Vector4::new(m01, m11, m21, m31),
            Vector4::new(m02, m12, m22, m32),
            Vector4::new(m03, m13, m23, m33),
        )
    }

    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new(
            l, o, o, o,
            o, l, o, o,
            o, o, l, o,
            o, o, o, l,
        )
    }

    /// Upper-left 3x3 block.
    pub fn basis(&self) -> Matrix3<T> {
        Matrix3::from_cols(self.c0.xyz(), self.c1.xyz(), self.c2.xyz())
    }

    pub fn translate(v: &Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.c3 = Vector4::from_vector3(v, T::one());
        m
    }

    pub fn scaling(v: &Vector3<T>) -> Self {
        let o = T::zero();
        Self::new(
            v.x, o, o, o,
            o, v.y, o, o,
            o, o, v.z, o,
            o, o, o, T::one(),
        )
    }

    /// Rotation matrix of a unit quaternion.
    pub fn rotate(q: &Quaternion<T>) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let two = T::two();
        let (o, l) = (T::zero(), T::one());
        Self::from_cols(
            Vector4::new(
                l - two * (y * y + z * z),
                two * (x * y + w * z),
                two * (x * z - w * y),
                o,
            ),
            Vector4::new(
                two * (x * y - w * z),
                l - two * (x * x + z * z),
                two * (y * z + w * x),
                o,
            ),
            Vector4::new(
                two * (x * z + w * y),
                two * (y * z - w * x),
                l - two * (x * x + y * y),
                o,
            ),
            Vector4::new(o, o, o, l),
        )
    }

    /// Composes translation, rotation and scale directly, without matrix
    /// products.
    pub fn transform_matrix(
        position: &Vector3<T>,
        rotation: &Quaternion<T>,
        scale: &Vector3<T>,
    ) -> Self {
        let mut m = Self::rotate(rotation);
        m.c0 = m.c0 * scale.x;
        m.c1 = m.c1 * scale.y;
        m.c2 = m.c2 * scale.z;
        m.c3 = Vector4::from_vector3(position, T::one());
        m
    }

    /// Inverse of [`Matrix4::transform_matrix`] composed directly; cheaper
    /// and numerically safer than the general inverse for TRS matrices.
    /// Zero scale components are a caller obligation.
    pub fn transform_matrix_inverse(
        position: &Vector3<T>,
        rotation: &Quaternion<T>,
        scale: &Vector3<T>,
    ) -> Self {
        let mut m = Self::rotate(&rotation.conjugated());
        // Scale the rows: S⁻¹ applied from the left.
        for c in [&mut m.c0, &mut m.c1, &mut m.c2] {
            c.x = c.x / scale.x;
            c.y = c.y / scale.y;
            c.z = c.z / scale.z;
        }
        let t = m.transformed_vector(&-*position);
        m.c3 = Vector4::from_vector3(&t, T::one());
        m
    }

    /// Right-handed view matrix looking from `eye` toward `focus`.
    pub fn look_at(eye: &Vector3<T>, focus: &Vector3<T>, up: &Vector3<T>) -> Self {
        let f = (*focus - *eye).normalized_safe();
        let s = f.cross(up).normalized_safe();
        let u = s.cross(&f);
        let o = T::zero();
        Self::from_cols(
            Vector4::new(s.x, u.x, -f.x, o),
            Vector4::new(s.y, u.y, -f.y, o),
            Vector4::new(s.z, u.z, -f.z, o),
            Vector4::new(-s.dot(eye), -u.dot(eye), f.dot(eye), T::one()),
        )
    }

    /// Right-handed perspective projection with [-1, 1] clip depth.
    pub fn perspective(fov_y_rads: T, aspect: T, z_near: T, z_far: T) -> Self {
        let tan_half = (fov_y_rads * T::half()).tan();
        let o = T::zero();
        Self::from_cols(
            Vector4::new(T::one() / (aspect * tan_half), o, o, o),
            Vector4::new(o, T::one() / tan_half, o, o),
            Vector4::new(o, o, -(z_far + z_near) / (z_far - z_near), -T::one()),
            Vector4::new(o, o, -(T::two() * z_far * z_near) / (z_far - z_near), o),
        )
    }

    pub fn ortho(left: T, right: T, bottom: T, top: T, z_near: T, z_far: T) -> Self {
        let o = T::zero();
        let two = T::two();
        Self::from_cols(
            Vector4::new(two / (right - left), o, o, o),
            Vector4::new(o, two / (top - bottom), o, o),
            Vector4::new(o, o, -two / (z_far - z_near), o),
            Vector4::new(
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                -(z_far + z_near) / (z_far - z_near),
                T::one(),
            ),
        )
    }
}

// ---------- Queries ----------
impl<T: Real> Matrix4<T> {
    pub fn transposed(&self) -> Self {
        Self::new(
            self.c0.x, self.c0.y, self.c0.z, self.c0.w,
            self.c1.x, self.c1.y, self.c1.z, self.c1.w,
            self.c2.x, self.c2.y, self.c2.z, self.c2.w,
            self.c3.x, self.c3.y, self.c3.z, self.c3.w,
        )
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let cols = [self.c0, self.c1, self.c2, self.c3];
        let minor = |skip: usize| -> Matrix3<T> {
            let kept: Vec<Vector3<T>> = cols
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, c)| Vector3::new(c.y, c.z, c.w))
                .collect();
            Matrix3::from_cols(kept[0], kept[1], kept[2])
        };
        let mut det = T::zero();
        let mut sign = T::one();
        for (i, col) in cols.iter().enumerate() {
            det = det + sign * col.x * minor(i).determinant();
            sign = -sign;
        }
        det
    }

    /// Cofactor-based inverse with the default invertibility precision.
    pub fn inversed(&self) -> Option<Self> {
        self.inversed_with_precision(T::from_f64(INVERTIBLE_PRECISION))
    }

    /// Cofactor-based inverse. `None` when the determinant magnitude falls
    /// below `precision`, instead of returning garbage components.
    pub fn inversed_with_precision(&self, precision: T) -> Option<Self> {
        let (m0, m1, m2, m3) = (self.c0, self.c1, self.c2, self.c3);

        let coef00 = m2.z * m3.w - m3.z * m2.w;
        let coef02 = m1.z * m3.w - m3.z * m1.w;
        let coef03 = m1.z * m2.w - m2.z * m1.w;
        let coef04 = m2.y * m3.w - m3.y * m2.w;
        let coef06 = m1.y * m3.w - m3.y * m1.w;
        let coef07 = m1.y * m2.w - m2.y * m1.w;
        let coef08 = m2.y * m3.z - m3.y * m2.z;
        let coef10 = m1.y * m3.z - m3.y * m1.z;
        let coef11 = m1.y * m2.z - m2.y * m1.z;
        let coef12 = m2.x * m3.w - m3.x * m2.w;
        let coef14 = m1.x * m3.w - m3.x * m1.w;
        let coef15 = m1.x * m2.w - m2.x * m1.w;
        let coef16 = m2.x * m3.z - m3.x * m2.z;
        let coef18 = m1.x * m3.z - m3.x * m1.z;
        let coef19 = m1.x * m2.z - m2.x * m1.z;
        let coef20 = m2.x * m3.y - m3.x * m2.y;
        let coef22 = m1.x * m3.y - m3.x * m1.y;
        let coef23 = m1.x * m2.y - m2.x * m1.y;

        let fac0 = Vector4::new(coef00, coef00, coef02, coef03);
        let fac1 = Vector4::new(coef04, coef04, coef06, coef07);
        let fac2 = Vector4::new(coef08, coef08, coef10, coef11);
        let fac3 = Vector4::new(coef12, coef12, coef14, coef15);
        let fac4 = Vector4::new(coef16, coef16, coef18, coef19);
        let fac5 = Vector4::new(coef20, coef20, coef22, coef23);

        let vec0 = Vector4::new(m1.x, m0.x, m0.x, m0.x);
        let vec1 = Vector4::new(m1.y, m0.y, m0.y, m0.y);
        let vec2 = Vector4::new(m1.z, m0.z, m0.z, m0.z);
        let vec3 = Vector4::new(m1.w, m0.w, m0.w, m0.w);

        let inv0 = vec1 * fac0 - vec2 * fac1 + vec3 * fac2;
        let inv1 = vec0 * fac0 - vec2 * fac3 + vec3 * fac4;
        let inv2 = vec0 * fac1 - vec1 * fac3 + vec3 * fac5;
        let inv3 = vec0 * fac2 - vec1 * fac4 + vec2 * fac5;

        let (o, l) = (-T::one(), T::one());
        let sign_a = Vector4::new(l, o, l, o);
        let sign_b = Vector4::new(o, l, o, l);
        let inverse = Self::from_cols(
            inv0 * sign_a,
            inv1 * sign_b,
            inv2 * sign_a,
            inv3 * sign_b,
        );

        let row0 = Vector4::new(inverse.c0.x, inverse.c1.x, inverse.c2.x, inverse.c3.x);
        let det = m0.dot(&row0);
        if det.abs() < precision {
            return None;
        }
        Some(Self::from_cols(
            inverse.c0 / det,
            inverse.c1 / det,
            inverse.c2 / det,
            inverse.c3 / det,
        ))
    }

    /// Applies the full transform to a point (homogeneous w = 1).
    pub fn transformed_point(&self, point: &Vector3<T>) -> Vector3<T> {
        (*self * Vector4::from_vector3(point, T::one())).xyz()
    }

    /// Applies only the linear part to a direction (homogeneous w = 0).
    pub fn transformed_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        (*self * Vector4::from_vector3(vector, T::zero())).xyz()
    }

    pub fn translation(&self) -> Vector3<T> {
        self.c3.xyz()
    }

    pub fn scale(&self) -> Vector3<T> {
        Vector3::new(
            self.c0.xyz().length(),
            self.c1.xyz().length(),
            self.c2.xyz().length(),
        )
    }

    /// Rotation component, extracted after dividing out the scale.
    pub fn rotation(&self) -> Quaternion<T> {
        let s = self.scale();
        let rot = Self::from_cols(
            self.c0 / s.x,
            self.c1 / s.y,
            self.c2 / s.z,
            Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
        );
        rot.to_quaternion()
    }

    /// Quaternion of an orthonormal rotation matrix (Shepperd's method).
    pub fn to_quaternion(&self) -> Quaternion<T> {
        let (m00, m01, m02) = (self.c0.x, self.c1.x, self.c2.x);
        let (m10, m11, m12) = (self.c0.y, self.c1.y, self.c2.y);
        let (m20, m21, m22) = (self.c0.z, self.c1.z, self.c2.z);

        let trace = m00 + m11 + m22;
        let quarter = T::from_f64(0.25);

        let q = if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * T::two();
            Quaternion::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, s * quarter)
        } else if m00 > m11 && m00 > m22 {
            let s = (T::one() + m00 - m11 - m22).sqrt() * T::two();
            Quaternion::new(s * quarter, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (T::one() + m11 - m00 - m22).sqrt() * T::two();
            Quaternion::new((m01 + m10) / s, s * quarter, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (T::one() + m22 - m00 - m11).sqrt() * T::two();
            Quaternion::new((m02 + m20) / s, (m12 + m21) / s, s * quarter, (m10 - m01) / s)
        };
        q.normalized()
    }
}

impl<T: Real> Default for Matrix4<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> Index<usize> for Matrix4<T> {
    type Output = Vector4<T>;
    fn index(&self, i: usize) -> &Vector4<T> {
        match i {
            0 => &self.c0,
            1 => &self.c1,
            2 => &self.c2,
            3 => &self.c3,
            _ => panic!("Matrix4 column out of range: {i}"),
        }
    }
}

impl<T: Real> Mul for Matrix4<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.c0, self * rhs.c1, self * rhs.c2, self * rhs.c3)
    }
}

impl<T: Real> Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;
    fn mul(self, v: Vector4<T>) -> Vector4<T> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3 * v.w
    }
}

impl<T: Real> Add for Matrix4<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(
            self.c0 + rhs.c0,
            self.c1 + rhs.c1,
            self.c2 + rhs.c2,
            self.c3 + rhs.c3,
        )
    }
}

impl<T: Real> Sub for Matrix4<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(
            self.c0 - rhs.c0,
            self.c1 - rhs.c1,
            self.c2 - rhs.c2,
            self.c3 - rhs.c3,
        )
    }
}

impl<T: Real> Neg for Matrix4<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_cols(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}
