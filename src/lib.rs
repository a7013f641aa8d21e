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

//! Precomputation of tangent-plane polynomial convolution operators over
//! triangle meshes.
//!
//! Given a half-edge mesh with per-vertex unit normals and an ordered fan of
//! tangent axes per vertex, this crate assembles in one pass:
//!
//! - a sparse *scatter* operator mapping vertex-axis slots to per-face-corner
//!   quadrature samples (barycentric weights),
//! - a sparse *reduction* operator aggregating face-corner samples back onto
//!   vertex-axis slots,
//! - a dense table of quadrature-weighted cubic polynomial basis values, and
//! - a dense table of local patch-input features (relative normal, optional
//!   relative height).
//!
//! The assembled operators feed a downstream polynomial-fitting step; this
//! crate only performs the geometric precomputation.

pub mod axis;
pub mod conv;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod numeric;
pub mod sparse;

pub use axis::{AxisAlignment, AxisField, IdentityAlignment, ProjectionAlignment};
pub use conv::{ConvOperators, ConvOptions};
pub use error::Error;
pub use mesh::Mesh;
