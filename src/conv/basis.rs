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

use crate::numeric::scalar::Scalar;

/// Number of monomials in the cubic bivariate basis.
pub const BASIS_TERMS: usize = 10;

// Exponent pairs (x, y) in fixed term order:
// (0,0) (0,1) (1,0) (0,2) (1,1) (2,0) (0,3) (1,2) (2,1) (3,0)
const X_EXPONENTS: [i32; BASIS_TERMS] = [0, 0, 1, 0, 1, 2, 0, 1, 2, 3];
const Y_EXPONENTS: [i32; BASIS_TERMS] = [0, 1, 0, 2, 1, 0, 3, 2, 1, 0];

/// Evaluates monomial `term` at (x, y).
pub fn cubic_term<T: Scalar>(term: usize, x: T, y: T) -> T {
    x.powi(X_EXPONENTS[term]) * y.powi(Y_EXPONENTS[term])
}

/// All 10 monomials at (x, y) in term order.
pub fn cubic_row<T: Scalar>(x: T, y: T) -> [T; BASIS_TERMS] {
    std::array::from_fn(|term| cubic_term(term, x, y))
}
