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

use thiserror::Error;

/// Failures in operator assembly and mesh queries.
///
/// Numerical degeneracy (zero-area rings, elongated local triangles) is never
/// an error; it is tolerated with documented defaults and diagnostic logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A corner lookup was asked for a vertex that does not belong to the
    /// face's corner cycle.
    #[error("vertex {vertex} is not incident to face {face}")]
    VertexNotInFace { vertex: usize, face: usize },

    /// The axis field contains no vertices, or a vertex with zero axes.
    #[error("axis field is empty")]
    EmptyAxisSet,

    /// A vertex carries a different number of axes than the rest of the field.
    #[error("vertex {vertex} has {found} axes, expected {expected}")]
    RaggedAxisSet {
        vertex: usize,
        expected: usize,
        found: usize,
    },

    /// The axis field and the mesh disagree on the number of vertices.
    #[error("axis field covers {axes} vertices but mesh has {vertices}")]
    AxisCountMismatch { axes: usize, vertices: usize },

    /// A vertex id outside the mesh's vertex arena.
    #[error("vertex {vertex} out of range ({count} vertices)")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// An axis index outside `[0, axis_num)`.
    #[error("axis {axis} out of range ({axis_num} axes)")]
    AxisOutOfRange { axis: usize, axis_num: usize },

    /// Normal count handed to the mesh does not match its vertex count.
    #[error("got {normals} normals for {vertices} vertices")]
    NormalCountMismatch { normals: usize, vertices: usize },
}
