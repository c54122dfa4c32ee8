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

//! Generic geometric primitives and a pairwise intersection engine.
//!
//! The crate is layered bottom-up: [`numeric`] defines the scalar
//! abstraction, [`algebra`] the vector/matrix/quaternion types built on it,
//! [`geometry`] the shape primitives, [`kernel`] the orientation and
//! containment predicates, and [`intersect`] the stateless intersection
//! engine that consumes all of them. No layer reaches upward.
//!
//! Every query is a pure function over value types: "no intersection" is an
//! expected outcome reported as `None` or an empty point set, never an
//! error. Numeric degeneracy (parallel ray and plane, zero-area triangle,
//! singular matrix) is detected through the tolerance in
//! [`numeric::Real::tolerance`] and reported the same way.

pub mod algebra;
pub mod geometry;
pub mod intersect;
pub mod kernel;
pub mod numeric;
