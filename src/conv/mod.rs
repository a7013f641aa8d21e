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

//! Assembly of the tangent-plane polynomial convolution operators.
//!
//! Two composed stages over an immutable mesh + axis-field snapshot:
//!
//! 1. **Vertex-ring aggregation** (sequential): per-vertex 1-ring reference
//!    scales and the reduction operator.
//! 2. **Face-corner sampling** (parallel over faces): per (face, corner,
//!    axis) local 2D frames, quadrature, scatter entries and the dense
//!    basis / patch-input tables.
//!
//! All output rows live at offsets that are pure functions of
//! (face, corner, axis, quadrature index); faces write disjoint pre-sized
//! ranges, so the second stage needs no locking.

pub mod basis;
pub mod overlay;
pub mod quadrature;

use rayon::prelude::*;

use crate::{
    axis::{AxisAlignment, AxisField},
    error::Error,
    geometry::{vector_2::Vector2, vector_3::Vector3},
    mesh::core::Mesh,
    numeric::scalar::Scalar,
    sparse::coo::{CooEntry, CooList},
};

use basis::BASIS_TERMS;
use quadrature::QUADRATURE_POINTS;

/// Assembly options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvOptions {
    /// Append the relative-height feature as a 4th patch-input column.
    pub use_patch_height: bool,
}

/// The assembled operators.
///
/// Row/column layout, shared with downstream consumers:
/// - sample offset = `((face*3 + corner)*axis_num + axis)*6 + q`
/// - vertex-axis slot = `vertex*axis_num + axis`
/// - face-corner-axis slot = `(face*3 + corner)*axis_num + axis`
#[derive(Debug, Clone)]
pub struct ConvOperators<T: Scalar> {
    /// Scatter operator: sample offset row, vertex-axis slot column,
    /// barycentric weight value. Three entries per sample.
    pub scatter: CooList<T>,
    /// Reduction operator: vertex-axis slot row, face-corner-axis slot
    /// column, membership weight 1. Rows of degenerate vertices are absent.
    pub reduce: CooList<T>,
    /// Quadrature-weighted cubic basis values, one row per sample.
    pub d_fw: Vec<[T; BASIS_TERMS]>,
    /// Per-vertex 1-ring reference scales (1 for degenerate rings).
    pub ring_scale: Vec<T>,

    d_patchinput: Vec<T>,
    patch_dim: usize,
    axis_num: usize,
}

impl<T: Scalar> ConvOperators<T> {
    /// Runs the full precomputation.
    pub fn build<A: AxisAlignment<T>>(
        mesh: &Mesh<T>,
        axes: &AxisField<T>,
        alignment: &A,
        options: ConvOptions,
    ) -> Result<Self, Error> {
        if axes.vertex_count() != mesh.vertices.len() {
            return Err(Error::AxisCountMismatch {
                axes: axes.vertex_count(),
                vertices: mesh.vertices.len(),
            });
        }

        let axis_num = axes.axis_num();
        let face_num = mesh.faces.len();
        let rows_per_face = 3 * axis_num * QUADRATURE_POINTS;
        let sample_num = face_num * rows_per_face;
        let patch_dim = if options.use_patch_height { 4 } else { 3 };

        let (ring_scale, reduce) = aggregate_vertex_rings(mesh, axis_num)?;

        let mut scatter = CooList::with_len(sample_num * 3);
        let mut d_fw = vec![[T::zero(); BASIS_TERMS]; sample_num];
        let mut d_patchinput = vec![T::zero(); sample_num * patch_dim];

        scatter
            .as_mut_slice()
            .par_chunks_mut(rows_per_face * 3)
            .zip(d_fw.par_chunks_mut(rows_per_face))
            .zip(d_patchinput.par_chunks_mut(rows_per_face * patch_dim))
            .enumerate()
            .try_for_each(|(face, ((scatter_chunk, fw_chunk), patch_chunk))| {
                sample_face(
                    mesh,
                    axes,
                    alignment,
                    &ring_scale,
                    face,
                    patch_dim,
                    options.use_patch_height,
                    scatter_chunk,
                    fw_chunk,
                    patch_chunk,
                )
            })?;

        Ok(Self {
            scatter,
            reduce,
            d_fw,
            ring_scale,
            d_patchinput,
            patch_dim,
            axis_num,
        })
    }

    pub fn axis_num(&self) -> usize {
        self.axis_num
    }

    /// Number of quadrature sample rows.
    pub fn sample_count(&self) -> usize {
        self.d_fw.len()
    }

    /// Patch-input columns: 3, or 4 with the height feature.
    pub fn patch_dim(&self) -> usize {
        self.patch_dim
    }

    /// Flattened row index of a quadrature sample.
    pub fn sample_offset(&self, face: usize, corner: usize, axis: usize, q: usize) -> usize {
        ((face * 3 + corner) * self.axis_num + axis) * QUADRATURE_POINTS + q
    }

    /// Patch-input feature row of a sample.
    pub fn patch_row(&self, sample: usize) -> &[T] {
        &self.d_patchinput[sample * self.patch_dim..(sample + 1) * self.patch_dim]
    }
}

/// Stage 1: per-vertex ring scales and the reduction operator.
///
/// A ring whose area sum is non-finite or below tolerance marks a degenerate
/// neighborhood: the scale stays 1 and the vertex emits no reduction
/// entries. This is a documented skip, not an error.
fn aggregate_vertex_rings<T: Scalar>(
    mesh: &Mesh<T>,
    axis_num: usize,
) -> Result<(Vec<T>, CooList<T>), Error> {
    let mut ring_scale = vec![T::one(); mesh.vertices.len()];
    let mut reduce = CooList::new();

    for v in 0..mesh.vertices.len() {
        let ring = mesh.faces_around_vertex(v);
        if ring.is_empty() {
            continue;
        }

        let mut area = T::zero();
        for &f in &ring {
            area = area + mesh.face_area(f);
        }
        if !area.is_finite() || area < T::tolerance() {
            continue;
        }
        ring_scale[v] = area.sqrt();

        for axis in 0..axis_num {
            for &f in &ring {
                let corner = mesh.face_corner(f, v)?;
                reduce.push(CooEntry::new(
                    v * axis_num + axis,
                    (f * 3 + corner) * axis_num + axis,
                    T::one(),
                ));
            }
        }
    }

    Ok((ring_scale, reduce))
}

/// Stage 2 body: all samples of one face, written into that face's disjoint
/// chunk of each output table.
#[allow(clippy::too_many_arguments)]
fn sample_face<T: Scalar, A: AxisAlignment<T>>(
    mesh: &Mesh<T>,
    axes: &AxisField<T>,
    alignment: &A,
    ring_scale: &[T],
    face: usize,
    patch_dim: usize,
    use_patch_height: bool,
    scatter_chunk: &mut [CooEntry<T>],
    fw_chunk: &mut [[T; BASIS_TERMS]],
    patch_chunk: &mut [T],
) -> Result<(), Error> {
    let axis_num = axes.axis_num();
    let rows_per_face = 3 * axis_num * QUADRATURE_POINTS;

    let vts = mesh.face_vertices(face);
    let pts = [
        mesh.vertices[vts[0]].position,
        mesh.vertices[vts[1]].position,
        mesh.vertices[vts[2]].position,
    ];

    for corner in 0..3 {
        let fv = vts[corner];
        let fv_pos = pts[corner];
        let fv_normal = mesh.vertices[fv].normal;
        let scale = ring_scale[fv];

        let edge01 = pts[(corner + 1) % 3] - fv_pos;
        let edge02 = pts[(corner + 2) % 3] - fv_pos;

        // Rotational offset mapping the current vertex's axis index into
        // each incident vertex's own frame; 0 for the corner vertex itself.
        let mut axis_offset = [0usize; 3];
        for i in 1..3 {
            let other = vts[(corner + i) % 3];
            axis_offset[i] = alignment.axis_offset(
                &fv_normal,
                &mesh.vertices[other].normal,
                axis_num,
                axes.get(fv),
                axes.get(other),
            );
        }

        for axis in 0..axis_num {
            let frame_x = axes.axis(fv, axis);
            let frame_y = fv_normal.cross(&frame_x);

            // Flatten the face into the frame: project each edge, renormalize
            // the projected direction, restore the 3D edge length, divide by
            // the ring reference scale.
            let flatten = |edge: Vector3<T>| -> Vector2<T> {
                Vector2::new(edge.dot(&frame_x), edge.dot(&frame_y))
                    .robust_normalized()
                    .scale(edge.length() / scale)
            };
            let pts_2d = [Vector2::zero(), flatten(edge01), flatten(edge02)];

            let rule = quadrature::degree4_rule(pts_2d[0], pts_2d[1], pts_2d[2]);

            // Patch-input features are per incident vertex, blended per
            // sample below.
            let mut local_nml = [[T::zero(); 3]; 3];
            let mut local_hgt = [T::zero(); 3];
            for i in 0..3 {
                let other = vts[(corner + i) % 3];
                let normal = mesh.vertices[other].normal;
                local_nml[i] = [
                    normal.dot(&fv_normal),
                    normal.dot(&frame_x),
                    normal.dot(&frame_y),
                ];
                local_hgt[i] = (mesh.vertices[other].position - fv_pos).dot(&fv_normal) / scale;
            }

            for (q, point) in rule.iter().enumerate() {
                let local = (corner * axis_num + axis) * QUADRATURE_POINTS + q;
                let row = face * rows_per_face + local;

                for i in 0..3 {
                    let col = vts[(corner + i) % 3] * axis_num + (axis + axis_offset[i]) % axis_num;
                    scatter_chunk[local * 3 + i] = CooEntry::new(row, col, point.bary[i]);
                }

                let threshold = T::from_f64(1e2);
                for term in 0..BASIS_TERMS {
                    let val = basis::cubic_term(term, point.position.x, point.position.y)
                        * point.weight;
                    if val.abs() > threshold {
                        log::warn!(
                            "large basis value {val:?} at face {face} corner {corner} axis {axis} term {term}"
                        );
                    }
                    fw_chunk[local][term] = val;
                }

                let mut nml = [T::zero(); 3];
                let mut hgt = T::zero();
                for i in 0..3 {
                    for c in 0..3 {
                        nml[c] = nml[c] + point.bary[i] * local_nml[i][c];
                    }
                    hgt = hgt + point.bary[i] * local_hgt[i];
                }
                let patch = &mut patch_chunk[local * patch_dim..(local + 1) * patch_dim];
                patch[..3].copy_from_slice(&nml);
                if use_patch_height {
                    patch[3] = hgt;
                }
            }
        }
    }

    Ok(())
}
