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

//! Debug-overlay data extraction: reconstructs quadrature sample positions
//! around a marked vertex from the assembled operators. Read-only consumer;
//! produces point pairs for a renderer to draw, draws nothing itself.

use crate::{
    conv::{ConvOperators, basis::BASIS_TERMS, quadrature::QUADRATURE_POINTS},
    error::Error,
    geometry::vector_3::Vector3,
    mesh::core::Mesh,
    numeric::scalar::Scalar,
};

// Fixed probe polynomial used to lift samples off the surface.
const SAMPLING_COEFF: [f64; BASIS_TERMS] = [
    0.0, 1.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0,
];

/// One reconstructed quadrature sample around the marked vertex.
#[derive(Debug, Clone, Copy)]
pub struct OverlayPoint<T: Scalar> {
    /// Sample position, a barycentric blend of the scatter entries'
    /// vertices.
    pub sample: Vector3<T>,
    /// Sample offset along the face normal by the probe polynomial response
    /// scaled with the vertex's reduction value.
    pub lifted: Vector3<T>,
}

/// Reconstructs the overlay for `marked` on the given axis: one point pair
/// per quadrature sample of every incident face corner.
pub fn sample_overlay<T: Scalar>(
    mesh: &Mesh<T>,
    ops: &ConvOperators<T>,
    marked: usize,
    axis: usize,
) -> Result<Vec<OverlayPoint<T>>, Error> {
    if marked >= mesh.vertices.len() {
        return Err(Error::VertexOutOfRange {
            vertex: marked,
            count: mesh.vertices.len(),
        });
    }
    let axis_num = ops.axis_num();
    if axis >= axis_num {
        return Err(Error::AxisOutOfRange { axis, axis_num });
    }

    // Reduction value for the marked vertex, located by integer-dividing the
    // entry row by axis_num. Degenerate vertices have no entries; keep the
    // negative fallback so the overlay still shows sample positions.
    let mut reduce_val = -T::one();
    for entry in ops.reduce.iter() {
        if entry.row / axis_num == marked {
            reduce_val = entry.val;
            break;
        }
    }
    if reduce_val < T::zero() {
        log::warn!("vertex {marked} not found in the reduction operator");
    }

    let mut out = Vec::new();
    for face in mesh.faces_around_vertex(marked) {
        let corner = mesh.face_corner(face, marked)?;
        let face_normal = mesh.face_normal(face);

        for q in 0..QUADRATURE_POINTS {
            let offset = ops.sample_offset(face, corner, axis, q);

            let mut sample = Vector3::zero();
            for i in 0..3 {
                let entry = ops.scatter.entries()[offset * 3 + i];
                let vertex = entry.col / axis_num;
                sample = sample + mesh.vertices[vertex].position.scale(entry.val);
            }

            let mut response = T::zero();
            for term in 0..BASIS_TERMS {
                response = response + T::from_f64(SAMPLING_COEFF[term]) * ops.d_fw[offset][term];
            }
            response = response * reduce_val;

            out.push(OverlayPoint {
                sample,
                lifted: sample + face_normal.scale(response),
            });
        }
    }

    Ok(out)
}
