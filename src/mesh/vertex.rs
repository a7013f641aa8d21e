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

use crate::{geometry::vector_3::Vector3, numeric::scalar::Scalar};

#[derive(Clone, Debug)]
pub struct Vertex<T: Scalar> {
    pub position: Vector3<T>,
    /// Unit normal; supplied by the caller or recomputed area-weighted.
    pub normal: Vector3<T>,
    /// An outgoing half-edge, `None` for isolated vertices.
    pub half_edge: Option<usize>,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(position: Vector3<T>, normal: Vector3<T>) -> Self {
        Self {
            position,
            normal,
            half_edge: None,
        }
    }
}
