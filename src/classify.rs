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

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
    arrangement::{Arrangement, HalfedgeHandle, VertexHandle},
    geometry::Line2,
    zone::Feature,
};

/// Deduplicated zone features that coincide with the query line.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    vertices: HashSet<VertexHandle>,
    edges: HashSet<HalfedgeHandle>,
    coincident_edges: HashSet<HalfedgeHandle>,
}

impl Classification {
    /// Vertices counted on their own, after endpoints of coincident edges
    /// have been removed.
    pub fn vertices(&self) -> &HashSet<VertexHandle> {
        &self.vertices
    }

    /// Canonical half-edges of every counted edge.
    pub fn edges(&self) -> &HashSet<HalfedgeHandle> {
        &self.edges
    }

    /// Counted edges whose both endpoints lie on the line.
    pub fn coincident_edges(&self) -> &HashSet<HalfedgeHandle> {
        &self.coincident_edges
    }

    pub fn count(&self) -> usize {
        self.vertices.len() + self.edges.len()
    }
}

/// Turns a zone into counted vertex and edge sets.
///
/// A vertex counts if its point lies on `curve`. An edge counts once no
/// matter which of its half-edges the zone reports. An edge with both
/// endpoints on `curve` overlaps it: the edge counts, its endpoints do not.
/// The result does not depend on the order of `features`.
pub fn classify(arr: &Arrangement, features: &[Feature], curve: &Line2) -> Classification {
    let mut out = Classification::default();

    for feature in features {
        match *feature {
            Feature::Vertex(v) => {
                if curve.has_on(arr.point(v)) {
                    out.vertices.insert(v);
                }
            }
            Feature::Edge(h) => {
                let canon = arr.canonical(h);
                if out.edges.insert(canon) {
                    let on_source = curve.has_on(arr.point(arr.source(canon)));
                    let on_target = curve.has_on(arr.point(arr.target(canon)));
                    if on_source && on_target {
                        trace!("edge {:?} coincides with the query line", canon);
                        out.coincident_edges.insert(canon);
                    }
                }
            }
        }
    }

    for &e in &out.coincident_edges {
        out.vertices.remove(&arr.source(e));
        out.vertices.remove(&arr.target(e));
    }

    debug!(
        "classified {} vertices, {} edges ({} coincident)",
        out.vertices.len(),
        out.edges.len(),
        out.coincident_edges.len()
    );
    out
}
