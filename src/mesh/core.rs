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

use std::collections::HashMap;

use crate::{
    error::Error,
    geometry::vector_3::Vector3,
    mesh::{face::Face, half_edge::HalfEdge, vertex::Vertex},
    numeric::scalar::Scalar,
};

/// Arena half-edge mesh: flat vertex/edge/face storage with integer
/// cross-references. Border half-edges carry `face == None`; `twin` is an
/// involution. Each face's edge cycle has exactly 3 edges.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub half_edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,

    /// Directed edge (from, to) -> half-edge index.
    pub edge_map: HashMap<(usize, usize), usize>,
}

impl<T: Scalar> Default for Mesh<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Mesh<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            half_edges: Vec::new(),
            faces: Vec::new(),
            edge_map: HashMap::new(),
        }
    }

    /// Builds a mesh from a triangle soup, wires boundary loops and computes
    /// area-weighted vertex normals.
    pub fn from_triangles(positions: &[Vector3<T>], triangles: &[[usize; 3]]) -> Self {
        let mut mesh = Self::new();
        for &p in positions {
            mesh.add_vertex(p, Vector3::zero());
        }
        for t in triangles {
            mesh.add_triangle(t[0], t[1], t[2]);
        }
        mesh.build_boundary_loops();
        mesh.compute_vertex_normals();
        mesh
    }

    pub fn add_vertex(&mut self, position: Vector3<T>, normal: Vector3<T>) -> usize {
        self.vertices.push(Vertex::new(position, normal));
        self.vertices.len() - 1
    }

    /// Adds a triangle face given three vertex indices in CCW order.
    /// Border (outside) half-edges have `face = None`. Returns the new face
    /// index.
    pub fn add_triangle(&mut self, v0: usize, v1: usize, v2: usize) -> usize {
        let edge_vertices = [(v0, v1), (v1, v2), (v2, v0)];

        let face_idx = self.faces.len();
        self.faces.push(Face::new(usize::MAX));

        let mut edge_indices = [usize::MAX; 3];

        for (i, &(from, to)) in edge_vertices.iter().enumerate() {
            if let Some(&he) = self.edge_map.get(&(from, to)) {
                // Directed edge exists as a free border ghost: claim it.
                debug_assert!(
                    self.half_edges[he].face.is_none(),
                    "add_triangle: non-manifold edge ({}, {})",
                    from,
                    to
                );
                self.half_edges[he].face = Some(face_idx);
                edge_indices[i] = he;
            } else {
                // Fresh interior half-edge plus its border ghost twin.
                let he = self.half_edges.len();
                let twin = he + 1;

                let mut interior = HalfEdge::new(to);
                interior.face = Some(face_idx);
                interior.twin = twin;
                self.half_edges.push(interior);

                let mut ghost = HalfEdge::new(from);
                ghost.twin = he;
                self.half_edges.push(ghost);

                self.edge_map.insert((from, to), he);
                self.edge_map.insert((to, from), twin);
                edge_indices[i] = he;
            }
        }

        // Wire the 3-edge face cycle.
        for i in 0..3 {
            let e = edge_indices[i];
            self.half_edges[e].next = edge_indices[(i + 1) % 3];
            self.half_edges[e].prev = edge_indices[(i + 2) % 3];
        }
        self.faces[face_idx].half_edge = edge_indices[0];

        // Anchor each corner vertex to one of its outgoing half-edges.
        for (i, &(from, _)) in edge_vertices.iter().enumerate() {
            self.vertices[from].half_edge.get_or_insert(edge_indices[i]);
        }

        face_idx
    }

    /// Wires `next`/`prev` of border half-edges so that `twin -> next` ring
    /// traversal terminates on open meshes. Call once after the last
    /// `add_triangle`.
    pub fn build_boundary_loops(&mut self) {
        let m = self.half_edges.len();

        let borders: Vec<usize> = (0..m)
            .filter(|&i| self.half_edges[i].face.is_none())
            .collect();

        // For each border b ending at vertex v, rotate through the interior
        // wedges around v until the next border spoke leaving v appears.
        let mut next_of = vec![usize::MAX; m];
        for &b in &borders {
            // twin(b) leaves the head vertex of b.
            let mut t = self.half_edges[b].twin;
            let mut steps = 0usize;
            let b_next = loop {
                let prev_t = self.half_edges[t].prev;
                let cand = self.half_edges[prev_t].twin;
                if self.half_edges[cand].face.is_none() {
                    break cand;
                }
                t = cand;

                steps += 1;
                if steps > m {
                    log::warn!("boundary loop wiring did not close at half-edge {b}");
                    break b;
                }
            };
            next_of[b] = b_next;
        }

        for &b in &borders {
            let nb = next_of[b];
            self.half_edges[b].next = nb;
            self.half_edges[nb].prev = b;
        }
    }

    /// Replaces all vertex normals. Counts must match.
    pub fn set_normals(&mut self, normals: &[Vector3<T>]) -> Result<(), Error> {
        if normals.len() != self.vertices.len() {
            return Err(Error::NormalCountMismatch {
                normals: normals.len(),
                vertices: self.vertices.len(),
            });
        }
        for (v, &n) in self.vertices.iter_mut().zip(normals) {
            v.normal = n;
        }
        Ok(())
    }

    /// Area-weighted vertex normals from incident face normals. Vertices
    /// with a degenerate neighborhood keep a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        let mut accum = vec![Vector3::<T>::zero(); self.vertices.len()];
        for f in 0..self.faces.len() {
            let [a, b, c] = self.face_vertices(f);
            let pa = self.vertices[a].position;
            let n = (self.vertices[b].position - pa).cross(&(self.vertices[c].position - pa));
            accum[a] = accum[a] + n;
            accum[b] = accum[b] + n;
            accum[c] = accum[c] + n;
        }
        for (v, n) in self.vertices.iter_mut().zip(accum) {
            v.normal = n.robust_normalized();
        }
    }
}
