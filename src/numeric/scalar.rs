// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
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

use num_traits::Float;

/// Floating-point kernel for all geometric computation in the crate.
///
/// The operator assembly is a plain numerical batch job; no exact arithmetic
/// is needed, only ordinary IEEE floats with a documented degeneracy
/// threshold.
pub trait Scalar: Float + Default + Debug + Send + Sync + 'static {
    fn from_f64(v: f64) -> Self;

    /// Threshold below which lengths and ring areas are treated as
    /// degenerate.
    fn tolerance() -> Self {
        Self::from_f64(1e-10)
    }
}

impl Scalar for f64 {
    fn from_f64(v: f64) -> f64 {
        v
    }
}

impl Scalar for f32 {
    fn from_f64(v: f64) -> f32 {
        v as f32
    }
}
