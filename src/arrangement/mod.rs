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

//! Planar arrangement of line segments stored as a doubly-connected edge list.
//!
//! Vertices, half-edges and faces live in index arenas. Half-edges are
//! allocated in twin pairs `(2k, 2k + 1)`, the even one running left to
//! right. Nothing is ever removed, so handles stay valid for the lifetime of
//! the arrangement.

pub mod build;
pub mod face;
pub mod half_edge;
pub mod vertex;

pub use half_edge::Direction;

use crate::geometry::{Point2, Segment2, SegmentIntersection, segment_segment_intersection};
use crate::kernel::is_point_in_segment_interior;
use face::Face;
use half_edge::HalfEdge;
use vertex::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfedgeHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceHandle(pub usize);

#[derive(Debug, Clone)]
pub struct Arrangement {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) faces: Vec<Face>,
}

impl Arrangement {
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.half_edges.len() / 2
    }

    pub fn number_of_halfedges(&self) -> usize {
        self.half_edges.len()
    }

    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertices in xy order of their points.
    pub fn vertices(&self) -> impl Iterator<Item = VertexHandle> + '_ {
        (0..self.vertices.len()).map(VertexHandle)
    }

    /// One left-to-right half-edge per edge.
    pub fn edges(&self) -> impl Iterator<Item = HalfedgeHandle> + '_ {
        (0..self.half_edges.len()).step_by(2).map(HalfedgeHandle)
    }

    pub fn faces(&self) -> impl Iterator<Item = FaceHandle> + '_ {
        (0..self.faces.len()).map(FaceHandle)
    }

    pub fn unbounded_face(&self) -> FaceHandle {
        FaceHandle(0)
    }

    pub fn point(&self, v: VertexHandle) -> &Point2 {
        &self.vertices[v.0].point
    }

    /// Exact lookup; vertices are stored sorted, so this is a binary search.
    pub fn find_vertex(&self, p: &Point2) -> Option<VertexHandle> {
        self.vertices
            .binary_search_by(|v| v.point.cmp(p))
            .ok()
            .map(VertexHandle)
    }

    pub fn source(&self, h: HalfedgeHandle) -> VertexHandle {
        self.target(self.twin(h))
    }

    pub fn target(&self, h: HalfedgeHandle) -> VertexHandle {
        VertexHandle(self.half_edges[h.0].vertex)
    }

    pub fn twin(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        HalfedgeHandle(self.half_edges[h.0].twin)
    }

    pub fn next(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        HalfedgeHandle(self.half_edges[h.0].next)
    }

    pub fn prev(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        HalfedgeHandle(self.half_edges[h.0].prev)
    }

    /// Face lying to the left of `h`.
    pub fn face(&self, h: HalfedgeHandle) -> FaceHandle {
        FaceHandle(self.half_edges[h.0].face)
    }

    pub fn direction(&self, h: HalfedgeHandle) -> Direction {
        self.half_edges[h.0].direction
    }

    /// The left-to-right half-edge of the pair `{h, twin(h)}`.
    pub fn canonical(&self, h: HalfedgeHandle) -> HalfedgeHandle {
        match self.direction(h) {
            Direction::LeftToRight => h,
            Direction::RightToLeft => self.twin(h),
        }
    }

    pub fn segment(&self, h: HalfedgeHandle) -> Segment2 {
        Segment2::new(self.point(self.source(h)), self.point(self.target(h)))
    }

    /// Outgoing half-edges of `v` in counter-clockwise order.
    pub fn outgoing(&self, v: VertexHandle) -> Vec<HalfedgeHandle> {
        let first = HalfedgeHandle(self.vertices[v.0].half_edge);
        let mut out = vec![first];
        let mut e = self.twin(self.prev(first));
        while e != first && out.len() <= self.half_edges.len() {
            out.push(e);
            e = self.twin(self.prev(e));
        }
        out
    }

    pub fn degree(&self, v: VertexHandle) -> usize {
        self.outgoing(v).len()
    }

    /// Half-edges of the boundary cycle containing `h`, starting at `h`.
    pub fn ccb(&self, h: HalfedgeHandle) -> Vec<HalfedgeHandle> {
        let mut out = vec![h];
        let mut e = self.next(h);
        while e != h && out.len() <= self.half_edges.len() {
            out.push(e);
            e = self.next(e);
        }
        out
    }

    pub fn is_unbounded(&self, f: FaceHandle) -> bool {
        self.faces[f.0].is_unbounded()
    }

    pub fn outer_ccb(&self, f: FaceHandle) -> Option<HalfedgeHandle> {
        self.faces[f.0].outer_ccb.map(HalfedgeHandle)
    }

    pub fn inner_ccbs(&self, f: FaceHandle) -> Vec<HalfedgeHandle> {
        self.faces[f.0]
            .inner_ccbs
            .iter()
            .copied()
            .map(HalfedgeHandle)
            .collect()
    }

    /// Structural self-check of the DCEL and of the non-overlap invariant.
    pub fn is_valid(&self) -> bool {
        let m = self.half_edges.len();
        if m % 2 != 0 {
            return false;
        }

        if self.vertices.windows(2).any(|w| w[0].point >= w[1].point) {
            return false;
        }

        for (i, he) in self.half_edges.iter().enumerate() {
            let h = HalfedgeHandle(i);
            if he.twin >= m || he.next >= m || he.prev >= m || he.vertex >= self.vertices.len() {
                return false;
            }
            if he.twin == i || self.half_edges[he.twin].twin != i {
                return false;
            }
            if self.prev(self.next(h)) != h || self.next(self.prev(h)) != h {
                return false;
            }
            if self.source(self.next(h)) != self.target(h) {
                return false;
            }
            if he.face >= self.faces.len() || self.face(self.next(h)) != self.face(h) {
                return false;
            }
            let left_to_right = self.point(self.source(h)) < self.point(self.target(h));
            if left_to_right != (he.direction == Direction::LeftToRight) {
                return false;
            }
        }

        for v in &self.vertices {
            if v.half_edge >= m {
                return false;
            }
        }

        let edges: Vec<Segment2> = self.edges().map(|h| self.segment(h)).collect();
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                match segment_segment_intersection(&edges[i], &edges[j]) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        if is_point_in_segment_interior(&p, &edges[i])
                            || is_point_in_segment_interior(&p, &edges[j])
                        {
                            return false;
                        }
                    }
                    SegmentIntersection::Overlapping(_) => return false,
                }
            }
        }

        true
    }
}
