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

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::{
    arrangement::{Arrangement, Direction, face::Face, half_edge::HalfEdge, vertex::Vertex},
    geometry::{CanonicalEdge, Point2, Segment2, SegmentIntersection, segment_segment_intersection},
    numeric::ExactRational,
};

impl Arrangement {
    /// Aggregated insertion of `segments`.
    ///
    /// Every crossing, touching point and overlap between input segments is
    /// computed exactly and the segments are split there, so the resulting
    /// edges meet only at shared endpoints. Overlapping pieces collapse into a
    /// single edge. Zero-length segments contribute nothing.
    pub fn build(segments: &[Segment2]) -> Self {
        let pieces = split_segments(segments);

        // Number vertices in xy order so lookups can binary-search.
        let points: BTreeSet<&Point2> = pieces.iter().flat_map(|e| [&e.a, &e.b]).collect();
        let index_of: BTreeMap<&Point2, usize> =
            points.iter().enumerate().map(|(i, p)| (*p, i)).collect();

        let mut arr = Arrangement {
            vertices: points.iter().map(|p| Vertex::new((*p).clone())).collect(),
            half_edges: Vec::with_capacity(pieces.len() * 2),
            faces: vec![Face::unbounded()],
        };

        for piece in &pieces {
            arr.push_edge(index_of[&piece.a], index_of[&piece.b]);
        }

        arr.link_rotations();
        arr.assign_faces();

        debug!(
            "arrangement of {} segments: {} vertices, {} edges, {} faces",
            segments.len(),
            arr.number_of_vertices(),
            arr.number_of_edges(),
            arr.number_of_faces()
        );
        debug_assert!(arr.is_valid(), "arrangement failed its self-check");

        arr
    }

    /// Appends the twin pair for the edge `u -> v`, where `u` precedes `v` in
    /// xy order.
    fn push_edge(&mut self, u: usize, v: usize) {
        let forward = self.half_edges.len();
        let backward = forward + 1;
        self.half_edges
            .push(HalfEdge::new(v, backward, Direction::LeftToRight));
        self.half_edges
            .push(HalfEdge::new(u, forward, Direction::RightToLeft));
    }

    /// Sorts the outgoing half-edges of every vertex counter-clockwise and
    /// links `next`/`prev` so each face lies to the left of its boundary.
    fn link_rotations(&mut self) {
        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); self.vertices.len()];
        for (h, he) in self.half_edges.iter().enumerate() {
            let source = self.half_edges[he.twin].vertex;
            outgoing[source].push(h);
        }

        for (v, spokes) in outgoing.iter_mut().enumerate() {
            let origin = &self.vertices[v].point;
            spokes.sort_by(|&e1, &e2| {
                let d1 = origin.vector_to(&self.vertices[self.half_edges[e1].vertex].point);
                let d2 = origin.vector_to(&self.vertices[self.half_edges[e2].vertex].point);
                d1.angle_cmp(&d2)
            });
        }

        for (v, spokes) in outgoing.iter().enumerate() {
            let k = spokes.len();
            if k == 0 {
                continue;
            }
            self.vertices[v].half_edge = spokes[0];

            // The incoming twin of spoke i continues along the clockwise
            // neighbour of spoke i.
            for i in 0..k {
                let incoming = self.half_edges[spokes[i]].twin;
                let next = spokes[(i + k - 1) % k];
                self.half_edges[incoming].next = next;
                self.half_edges[next].prev = incoming;
            }
            trace!("vertex {} has degree {}", v, k);
        }
    }

    /// Walks every `next` cycle once. A cycle with positive signed area is
    /// the outer boundary of a new bounded face; the others are holes of the
    /// unbounded face.
    fn assign_faces(&mut self) {
        let m = self.half_edges.len();
        let mut visited = vec![false; m];

        for start in 0..m {
            if visited[start] {
                continue;
            }

            let mut cycle = Vec::new();
            let mut h = start;
            while !visited[h] {
                visited[h] = true;
                cycle.push(h);
                h = self.half_edges[h].next;
            }

            let face = if self.cycle_area2(&cycle).is_positive() {
                self.faces.push(Face::bounded(start));
                self.faces.len() - 1
            } else {
                self.faces[0].inner_ccbs.push(start);
                0
            };

            for h in cycle {
                self.half_edges[h].face = face;
            }
        }
    }

    /// Twice the signed area enclosed by a half-edge cycle.
    fn cycle_area2(&self, cycle: &[usize]) -> ExactRational {
        let mut area = ExactRational::default();
        for &h in cycle {
            let p = &self.vertices[self.half_edges[self.half_edges[h].twin].vertex].point;
            let q = &self.vertices[self.half_edges[h].vertex].point;
            area += &(&(&p.x * &q.y) - &(&p.y * &q.x));
        }
        area
    }
}

/// Splits every segment at all points where it meets another one and returns
/// the distinct pieces.
fn split_segments(segments: &[Segment2]) -> BTreeSet<CanonicalEdge> {
    let live: Vec<&Segment2> = segments.iter().filter(|s| !s.is_degenerate()).collect();

    let mut cuts: Vec<Vec<Point2>> = live.iter().map(|s| vec![s.a.clone(), s.b.clone()]).collect();

    for i in 0..live.len() {
        for j in (i + 1)..live.len() {
            match segment_segment_intersection(live[i], live[j]) {
                SegmentIntersection::None => {}
                SegmentIntersection::Point(p) => {
                    cuts[i].push(p.clone());
                    cuts[j].push(p);
                }
                SegmentIntersection::Overlapping(overlap) => {
                    trace!("segments {} and {} overlap on {:?}", i, j, overlap);
                    for k in [i, j] {
                        cuts[k].push(overlap.a.clone());
                        cuts[k].push(overlap.b.clone());
                    }
                }
            }
        }
    }

    let mut pieces = BTreeSet::new();
    for mut points in cuts {
        // Points on one segment are collinear, so xy order is order along it.
        points.sort();
        points.dedup();
        for w in points.windows(2) {
            pieces.insert(CanonicalEdge::new(&w[0], &w[1]));
        }
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::{FaceHandle, VertexHandle};

    fn seg(ax: i32, ay: i32, bx: i32, by: i32) -> Segment2 {
        Segment2::new(&Point2::new(ax, ay), &Point2::new(bx, by))
    }

    #[test]
    fn crossing_segments_are_split() {
        let arr = Arrangement::build(&[seg(0, 0, 2, 2), seg(0, 2, 2, 0)]);
        assert_eq!(arr.number_of_vertices(), 5);
        assert_eq!(arr.number_of_edges(), 4);
        assert_eq!(arr.number_of_faces(), 1);
        let center = arr.find_vertex(&Point2::new(1, 1)).unwrap();
        assert_eq!(arr.degree(center), 4);
        assert!(arr.is_valid());
    }

    #[test]
    fn overlapping_segments_merge() {
        let arr = Arrangement::build(&[seg(0, 0, 3, 0), seg(1, 0, 5, 0)]);
        // 0 - 1 - 3 - 5
        assert_eq!(arr.number_of_vertices(), 4);
        assert_eq!(arr.number_of_edges(), 3);
        assert!(arr.is_valid());
    }

    #[test]
    fn degenerate_segment_is_skipped() {
        let arr = Arrangement::build(&[seg(1, 1, 1, 1), seg(0, 0, 1, 0)]);
        assert_eq!(arr.number_of_vertices(), 2);
        assert_eq!(arr.number_of_edges(), 1);
    }

    #[test]
    fn triangle_has_one_bounded_face() {
        let arr = Arrangement::build(&[seg(0, 0, 4, 0), seg(4, 0, 0, 3), seg(0, 3, 0, 0)]);
        assert_eq!(arr.number_of_faces(), 2);
        assert!(arr.is_unbounded(arr.unbounded_face()));
        assert_eq!(arr.inner_ccbs(FaceHandle(0)).len(), 1);

        let bounded = FaceHandle(1);
        let outer = arr.outer_ccb(bounded).unwrap();
        assert_eq!(arr.ccb(outer).len(), 3);
        for h in arr.ccb(outer) {
            assert_eq!(arr.face(h), bounded);
            assert_eq!(arr.face(arr.twin(h)), FaceHandle(0));
        }
    }

    #[test]
    fn cycle_area_sign_matches_winding() {
        let arr = Arrangement::build(&[seg(0, 0, 2, 0), seg(2, 0, 2, 2), seg(2, 2, 0, 0)]);
        let bounded = arr.outer_ccb(FaceHandle(1)).unwrap();
        let cycle: Vec<usize> = arr.ccb(bounded).iter().map(|h| h.0).collect();
        assert_eq!(arr.cycle_area2(&cycle), ExactRational::from(4));
    }

    #[test]
    fn vertices_are_sorted() {
        let arr = Arrangement::build(&[seg(5, 5, -1, 3), seg(-1, 3, 0, 9)]);
        let points: Vec<&Point2> = arr.vertices().map(|v| arr.point(v)).collect();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(arr.find_vertex(&Point2::new(0, 9)), Some(VertexHandle(1)));
        assert_eq!(arr.find_vertex(&Point2::new(7, 7)), None);
    }
}
