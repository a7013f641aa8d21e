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
    geometry::{util::triangle_area_2d, vector_2::Vector2},
    numeric::scalar::Scalar,
};

/// Number of points in the fixed rule.
pub const QUADRATURE_POINTS: usize = 6;

// 6-point symmetric Dunavant rule on the unit right triangle, exact for
// polynomials of degree <= 4.
const POS_BLEND: [[f64; 2]; QUADRATURE_POINTS] = [
    [0.10810301816807, 0.445948490915965],
    [0.445948490915965, 0.445948490915965],
    [0.445948490915965, 0.10810301816807],
    [0.816847572980459, 0.091576213509771],
    [0.091576213509771, 0.091576213509771],
    [0.091576213509771, 0.816847572980459],
];

const POINT_WEIGHTS: [f64; QUADRATURE_POINTS] = [
    0.223381589678011,
    0.223381589678011,
    0.223381589678011,
    0.109951743655322,
    0.109951743655322,
    0.109951743655322,
];

const BARY_WEIGHTS: [[f64; 3]; QUADRATURE_POINTS] = [
    [0.445948490915965, 0.10810301816807, 0.445948490915965],
    [0.10810301816807, 0.445948490915965, 0.445948490915965],
    [0.445948490915965, 0.445948490915965, 0.10810301816807],
    [0.09157621350977004, 0.816847572980459, 0.09157621350977101],
    [0.8168475729804581, 0.09157621350977101, 0.09157621350977101],
    [0.09157621350977004, 0.09157621350977101, 0.816847572980459],
];

/// One quadrature sample on a concrete 2D triangle.
#[derive(Debug, Clone, Copy)]
pub struct QuadraturePoint<T: Scalar> {
    /// Rule weight scaled by the triangle's area.
    pub weight: T,
    pub position: Vector2<T>,
    /// Barycentric weights of `position` with respect to (v0, v1, v2).
    pub bary: [T; 3],
}

/// Instantiates the degree-4 rule on the triangle (v0, v1, v2).
pub fn degree4_rule<T: Scalar>(
    v0: Vector2<T>,
    v1: Vector2<T>,
    v2: Vector2<T>,
) -> [QuadraturePoint<T>; QUADRATURE_POINTS] {
    let area = triangle_area_2d(&v0, &v1, &v2);
    let e01 = v1 - v0;
    let e02 = v2 - v0;

    std::array::from_fn(|i| QuadraturePoint {
        weight: T::from_f64(POINT_WEIGHTS[i]) * area,
        position: v0 + e01.scale(T::from_f64(POS_BLEND[i][0])) + e02.scale(T::from_f64(POS_BLEND[i][1])),
        bary: [
            T::from_f64(BARY_WEIGHTS[i][0]),
            T::from_f64(BARY_WEIGHTS[i][1]),
            T::from_f64(BARY_WEIGHTS[i][2]),
        ],
    })
}
