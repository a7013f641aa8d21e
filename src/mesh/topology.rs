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

use smallvec::SmallVec;

use crate::{
    error::Error,
    geometry::{util::triangle_area_3d, vector_3::Vector3},
    mesh::core::Mesh,
    numeric::scalar::Scalar,
};

impl<T: Scalar> Mesh<T> {
    /// Tail vertex of a half-edge.
    pub fn source(&self, he: usize) -> usize {
        self.half_edges[self.half_edges[he].prev].vertex
    }

    /// Head vertex of a half-edge.
    pub fn target(&self, he: usize) -> usize {
        self.half_edges[he].vertex
    }

    /// The three corner vertices of face `f` in cycle order.
    #[inline]
    pub fn face_vertices(&self, f: usize) -> [usize; 3] {
        let he0 = self.faces[f].half_edge;
        let he1 = self.half_edges[he0].next;
        debug_assert_eq!(self.half_edges[self.half_edges[he1].next].next, he0);

        let a = self.half_edges[self.half_edges[he0].prev].vertex; // tail of he0
        let b = self.half_edges[he0].vertex;
        let c = self.half_edges[he1].vertex;
        [a, b, c]
    }

    /// The half-edges bounding face `f` in cycle order.
    pub fn face_half_edges(&self, f: usize) -> SmallVec<[usize; 3]> {
        let mut result = SmallVec::new();
        let start = self.faces[f].half_edge;
        let mut h = start;
        loop {
            result.push(h);
            h = self.half_edges[h].next;
            if h == start {
                break;
            }
        }
        result
    }

    /// Corner index (0, 1 or 2) of `vertex` within face `face`.
    ///
    /// Non-incident vertices are a hard error rather than a sentinel; the
    /// corner index feeds directly into operator offsets.
    pub fn face_corner(&self, face: usize, vertex: usize) -> Result<usize, Error> {
        self.face_vertices(face)
            .iter()
            .position(|&v| v == vertex)
            .ok_or(Error::VertexNotInFace { vertex, face })
    }

    /// All outgoing half-edges of `v` in CCW order, empty for isolated
    /// vertices. Traversal is capped so malformed connectivity cannot loop
    /// forever.
    pub fn outgoing_half_edges(&self, v: usize) -> Vec<usize> {
        let Some(start) = self.vertices[v].half_edge else {
            return Vec::new();
        };
        let mut result = Vec::new();
        let mut h = start;
        loop {
            result.push(h);
            let t = self.half_edges[h].twin;
            h = self.half_edges[t].next;
            if h == start {
                break;
            }
            if result.len() > self.half_edges.len() {
                log::warn!("ring traversal around vertex {v} did not close");
                break;
            }
        }
        result
    }

    /// Faces incident to `v`, one per interior wedge, in CCW order.
    pub fn faces_around_vertex(&self, v: usize) -> SmallVec<[usize; 8]> {
        let mut result = SmallVec::new();
        for he in self.outgoing_half_edges(v) {
            if let Some(f) = self.half_edges[he].face {
                result.push(f);
            }
        }
        result
    }

    /// Sum of the 3D areas of all triangles incident to `v`.
    pub fn one_ring_area(&self, v: usize) -> T {
        let mut area = T::zero();
        for f in self.faces_around_vertex(v) {
            area = area + self.face_area(f);
        }
        area
    }

    pub fn face_area(&self, f: usize) -> T {
        let [a, b, c] = self.face_vertices(f);
        triangle_area_3d(
            &self.vertices[a].position,
            &self.vertices[b].position,
            &self.vertices[c].position,
        )
    }

    /// Unit face normal; the zero vector for degenerate faces.
    pub fn face_normal(&self, f: usize) -> Vector3<T> {
        let [a, b, c] = self.face_vertices(f);
        let pa = self.vertices[a].position;
        let edge1 = self.vertices[b].position - pa;
        let edge2 = self.vertices[c].position - pa;
        edge1.cross(&edge2).robust_normalized()
    }

    /// True if `v` has an outgoing border half-edge.
    pub fn is_boundary_vertex(&self, v: usize) -> bool {
        self.outgoing_half_edges(v)
            .into_iter()
            .any(|he| self.half_edges[he].face.is_none())
    }
}
