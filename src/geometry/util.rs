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

use crate::{
    geometry::{vector_2::Vector2, vector_3::Vector3},
    numeric::scalar::Scalar,
};

/// Area of the 3D triangle (a, b, c): half the cross-product length.
pub fn triangle_area_3d<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>, c: &Vector3<T>) -> T {
    let half = T::from_f64(0.5);
    (*b - *a).cross(&(*c - *a)).length() * half
}

/// Unsigned area of the 2D triangle (v0, v1, v2).
pub fn triangle_area_2d<T: Scalar>(v0: &Vector2<T>, v1: &Vector2<T>, v2: &Vector2<T>) -> T {
    let half = T::from_f64(0.5);
    (*v1 - *v0).perp_dot(&(*v2 - *v0)).abs() * half
}
