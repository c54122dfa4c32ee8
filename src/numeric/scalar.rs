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

use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

use num_traits::{Float, FloatConst, Num, NumCast};

/// Component scalar of every algebraic and geometric type in the crate.
///
/// Satisfied by the machine floats and by the signed integers; integer
/// instantiations only reach the subset of the crate that needs no square
/// root or trigonometry (axis-aligned boxes and rects, componentwise vector
/// arithmetic).
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Num
    + NumCast
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Greatest representable value; positive infinity for floats.
    ///
    /// This is what makes the "empty" sentinel of an axis-aligned box
    /// representable for integer scalars as well.
    fn upper_bound() -> Self;

    /// Least representable value; negative infinity for floats.
    fn lower_bound() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }
}

/// Scalar with square root and trigonometry, the parametrization of every
/// solver in the intersection engine.
pub trait Real: Scalar + Float + FloatConst {
    /// Epsilon band used by every tolerance-sensitive comparison in the
    /// crate. Nothing in the engine compares against floating-point zero.
    fn tolerance() -> Self;

    /// Converts an `f64` constant into the scalar type.
    fn from_f64(x: f64) -> Self {
        <Self as NumCast>::from(x).expect("constant not representable in scalar type")
    }

    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl Scalar for f32 {
    fn upper_bound() -> Self {
        f32::INFINITY
    }
    fn lower_bound() -> Self {
        f32::NEG_INFINITY
    }
}

impl Scalar for f64 {
    fn upper_bound() -> Self {
        f64::INFINITY
    }
    fn lower_bound() -> Self {
        f64::NEG_INFINITY
    }
}

impl Scalar for i32 {
    fn upper_bound() -> Self {
        i32::MAX
    }
    fn lower_bound() -> Self {
        i32::MIN
    }
}

impl Scalar for i64 {
    fn upper_bound() -> Self {
        i64::MAX
    }
    fn lower_bound() -> Self {
        i64::MIN
    }
}

impl Real for f32 {
    fn tolerance() -> Self {
        1e-5
    }
}

impl Real for f64 {
    fn tolerance() -> Self {
        1e-5
    }
}

#[inline(always)]
pub(crate) fn partial_min<T: Scalar>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline(always)]
pub(crate) fn partial_max<T: Scalar>(a: T, b: T) -> T {
    if b > a { b } else { a }
}
