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

use crate::numeric::scalar::Scalar;

/// One non-zero of a sparse linear operator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CooEntry<T: Scalar> {
    pub row: usize,
    pub col: usize,
    pub val: T,
}

impl<T: Scalar> CooEntry<T> {
    pub fn new(row: usize, col: usize, val: T) -> Self {
        Self { row, col, val }
    }
}

/// Structured COO entry container.
///
/// Consumers that want the flat interleaved index / value layout get it
/// generated once at the boundary via [`index_pairs`](Self::index_pairs) and
/// [`values`](Self::values); it is never maintained alongside the entries.
#[derive(Debug, Clone, Default)]
pub struct CooList<T: Scalar> {
    entries: Vec<CooEntry<T>>,
}

impl<T: Scalar> CooList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A list of `n` default entries, for pre-sized disjoint parallel fill.
    pub fn with_len(n: usize) -> Self {
        Self {
            entries: vec![CooEntry::default(); n],
        }
    }

    pub fn push(&mut self, entry: CooEntry<T>) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CooEntry<T>] {
        &self.entries
    }

    pub fn as_mut_slice(&mut self) -> &mut [CooEntry<T>] {
        &mut self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CooEntry<T>> {
        self.entries.iter()
    }

    /// Interleaved (row, col) pairs, in entry order.
    pub fn index_pairs(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.entries.len() * 2);
        for e in &self.entries {
            out.push(e.row);
            out.push(e.col);
        }
        out
    }

    /// Entry values, in entry order.
    pub fn values(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.val).collect()
    }
}
