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

use crate::{error::Error, geometry::vector_3::Vector3, mesh::core::Mesh, numeric::scalar::Scalar};

/// Per-vertex ordered fans of unit tangent axes, uniform in length across
/// all vertices.
#[derive(Debug, Clone)]
pub struct AxisField<T: Scalar> {
    axes: Vec<Vec<Vector3<T>>>,
    axis_num: usize,
}

impl<T: Scalar> AxisField<T> {
    /// Validates that the field is non-empty and uniform with at least one
    /// axis per vertex.
    pub fn new(axes: Vec<Vec<Vector3<T>>>) -> Result<Self, Error> {
        let axis_num = axes.first().map(|a| a.len()).unwrap_or(0);
        if axis_num == 0 {
            return Err(Error::EmptyAxisSet);
        }
        for (vertex, fan) in axes.iter().enumerate() {
            if fan.len() != axis_num {
                return Err(Error::RaggedAxisSet {
                    vertex,
                    expected: axis_num,
                    found: fan.len(),
                });
            }
        }
        Ok(Self { axes, axis_num })
    }

    /// Evenly spaced tangent fans derived from the mesh's vertex normals:
    /// axis `k` is axis 0 rotated by `k * 2π / axis_num` in the tangent
    /// plane. Vertices with a zero normal get zero axes.
    pub fn from_normals(mesh: &Mesh<T>, axis_num: usize) -> Result<Self, Error> {
        if axis_num == 0 {
            return Err(Error::EmptyAxisSet);
        }
        let tau = T::from_f64(std::f64::consts::TAU);
        let mut axes = Vec::with_capacity(mesh.vertices.len());
        for v in &mesh.vertices {
            let n = v.normal;
            // Seed direction: cross with the cardinal axis least aligned
            // with the normal.
            let seed = if n.x.abs() <= n.y.abs() && n.x.abs() <= n.z.abs() {
                Vector3::new(T::one(), T::zero(), T::zero())
            } else if n.y.abs() <= n.z.abs() {
                Vector3::new(T::zero(), T::one(), T::zero())
            } else {
                Vector3::new(T::zero(), T::zero(), T::one())
            };
            let t0 = n.cross(&seed).robust_normalized();
            let t1 = n.cross(&t0);

            let mut fan = Vec::with_capacity(axis_num);
            for k in 0..axis_num {
                let angle = tau * T::from_f64(k as f64) / T::from_f64(axis_num as f64);
                fan.push(t0.scale(angle.cos()) + t1.scale(angle.sin()));
            }
            axes.push(fan);
        }
        Ok(Self { axes, axis_num })
    }

    pub fn axis_num(&self) -> usize {
        self.axis_num
    }

    pub fn vertex_count(&self) -> usize {
        self.axes.len()
    }

    /// The axis fan of vertex `v`.
    pub fn get(&self, v: usize) -> &[Vector3<T>] {
        &self.axes[v]
    }

    pub fn axis(&self, v: usize, a: usize) -> Vector3<T> {
        self.axes[v][a]
    }
}

/// Reconciles a discrete axis index between two adjacent vertices' frames:
/// axis `k` at the first vertex corresponds to axis `(k + offset) % axis_num`
/// at the second. The returned offset lies in `[0, axis_num)`.
pub trait AxisAlignment<T: Scalar>: Sync {
    fn axis_offset(
        &self,
        normal_a: &Vector3<T>,
        normal_b: &Vector3<T>,
        axis_num: usize,
        axes_a: &[Vector3<T>],
        axes_b: &[Vector3<T>],
    ) -> usize;
}

impl<T, F> AxisAlignment<T> for F
where
    T: Scalar,
    F: Fn(&Vector3<T>, &Vector3<T>, usize, &[Vector3<T>], &[Vector3<T>]) -> usize + Sync,
{
    fn axis_offset(
        &self,
        normal_a: &Vector3<T>,
        normal_b: &Vector3<T>,
        axis_num: usize,
        axes_a: &[Vector3<T>],
        axes_b: &[Vector3<T>],
    ) -> usize {
        self(normal_a, normal_b, axis_num, axes_a, axes_b)
    }
}

/// Offset 0 everywhere: axis `k` means the same slot at every vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityAlignment;

impl<T: Scalar> AxisAlignment<T> for IdentityAlignment {
    fn axis_offset(
        &self,
        _normal_a: &Vector3<T>,
        _normal_b: &Vector3<T>,
        _axis_num: usize,
        _axes_a: &[Vector3<T>],
        _axes_b: &[Vector3<T>],
    ) -> usize {
        0
    }
}

/// Projects axis 0 of the first vertex into the second vertex's tangent
/// plane and picks the nearest axis of the second fan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionAlignment;

impl<T: Scalar> AxisAlignment<T> for ProjectionAlignment {
    fn axis_offset(
        &self,
        _normal_a: &Vector3<T>,
        normal_b: &Vector3<T>,
        axis_num: usize,
        axes_a: &[Vector3<T>],
        axes_b: &[Vector3<T>],
    ) -> usize {
        let a0 = axes_a[0];
        let transported = (a0 - normal_b.scale(a0.dot(normal_b))).robust_normalized();

        let mut best = 0;
        let mut best_dot = T::neg_infinity();
        for (k, axis) in axes_b.iter().enumerate().take(axis_num) {
            let d = transported.dot(axis);
            if d > best_dot {
                best_dot = d;
                best = k;
            }
        }
        best
    }
}
