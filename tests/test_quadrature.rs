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

use rand::Rng;
use tangent_param::conv::basis::{BASIS_TERMS, cubic_row, cubic_term};
use tangent_param::conv::quadrature::{QUADRATURE_POINTS, degree4_rule};
use tangent_param::geometry::Vector2;
use tangent_param::geometry::util::triangle_area_2d;

fn random_triangle(rng: &mut impl Rng) -> [Vector2<f64>; 3] {
    std::array::from_fn(|_| {
        Vector2::new(rng.random_range(-2.0..2.0), rng.random_range(-2.0..2.0))
    })
}

#[test]
fn bary_weights_sum_to_one() {
    let rule = degree4_rule(
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 1.0),
    );
    for point in &rule {
        let sum: f64 = point.bary.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

#[test]
fn weights_sum_to_triangle_area() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let [v0, v1, v2] = random_triangle(&mut rng);
        let area = triangle_area_2d(&v0, &v1, &v2);
        let rule = degree4_rule(v0, v1, v2);
        let sum: f64 = rule.iter().map(|p| p.weight).sum();
        assert!(
            (sum - area).abs() < 1e-12 * (1.0 + area),
            "weight sum {sum} vs area {area}"
        );
    }
}

#[test]
fn positions_match_barycentric_blend() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let [v0, v1, v2] = random_triangle(&mut rng);
        let rule = degree4_rule(v0, v1, v2);
        for point in &rule {
            let blend = v0.scale(point.bary[0]) + v1.scale(point.bary[1]) + v2.scale(point.bary[2]);
            assert!((blend.x - point.position.x).abs() < 1e-12);
            assert!((blend.y - point.position.y).abs() < 1e-12);
        }
    }
}

#[test]
fn rule_is_exact_for_cubic_monomials() {
    // On the unit right triangle, the integral of x^p y^q is
    // p! q! / (p + q + 2)!.
    fn factorial(n: u32) -> f64 {
        (1..=n).map(|k| k as f64).product()
    }
    let exponents: [(u32, u32); BASIS_TERMS] = [
        (0, 0),
        (0, 1),
        (1, 0),
        (0, 2),
        (1, 1),
        (2, 0),
        (0, 3),
        (1, 2),
        (2, 1),
        (3, 0),
    ];

    let rule = degree4_rule(
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.0, 1.0),
    );
    assert_eq!(rule.len(), QUADRATURE_POINTS);

    for (term, &(p, q)) in exponents.iter().enumerate() {
        let exact = factorial(p) * factorial(q) / factorial(p + q + 2);
        let approx: f64 = rule
            .iter()
            .map(|pt| cubic_term(term, pt.position.x, pt.position.y) * pt.weight)
            .sum();
        assert!(
            (approx - exact).abs() < 1e-14,
            "term {term}: {approx} vs {exact}"
        );
    }
}

#[test]
fn cubic_row_matches_individual_terms() {
    let row = cubic_row(0.7, -0.3);
    for (term, &val) in row.iter().enumerate() {
        assert_eq!(val, cubic_term(term, 0.7, -0.3));
    }
    // Spot-check the fixed exponent order.
    assert_eq!(row[0], 1.0);
    assert_eq!(row[1], -0.3);
    assert_eq!(row[2], 0.7);
    assert!((row[9] - 0.7f64.powi(3)).abs() < 1e-15);
}
