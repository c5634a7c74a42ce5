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

//! Zone of a line in an existing arrangement.
//!
//! The zone is computed as a read-only query: the line is never inserted, so
//! points where it crosses an edge are not turned into vertices.

use log::{debug, trace};

use crate::{
    arrangement::{Arrangement, HalfedgeHandle, VertexHandle},
    config::CrossingPolicy,
    geometry::{Line2, LineIntersection, line_segment_intersection},
    kernel::is_point_in_segment_interior,
    numeric::ExactRational,
};

/// An arrangement feature touched by the query line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Vertex(VertexHandle),
    Edge(HalfedgeHandle),
}

/// Features of `arr` that `curve` passes through or along, ordered by where
/// the curve first meets them.
///
/// - every vertex lying on the curve;
/// - every edge lying along the curve, as the half-edge pointing the same way
///   as the curve;
/// - with [`CrossingPolicy::ReportEdges`], every edge the curve crosses at an
///   interior point.
///
/// A crossing through an edge endpoint is reported only as that vertex.
/// Features meeting the curve at the same point are listed vertex first, then
/// by handle.
pub fn zone(arr: &Arrangement, curve: &Line2, policy: CrossingPolicy) -> Vec<Feature> {
    let mut hits: Vec<(ExactRational, u8, usize, Feature)> = Vec::new();

    for v in arr.vertices() {
        let p = arr.point(v);
        if curve.has_on(p) {
            hits.push((curve.parameter(p), 0, v.0, Feature::Vertex(v)));
        }
    }

    let heading = curve.direction();
    for h in arr.edges() {
        let seg = arr.segment(h);
        match line_segment_intersection(curve, &seg) {
            LineIntersection::Overlapping => {
                let along = if heading.dot(&seg.direction()).is_positive() {
                    h
                } else {
                    arr.twin(h)
                };
                let entry = curve.parameter(arr.point(arr.source(along)));
                trace!("edge {:?} lies along the query line", along);
                hits.push((entry, 1, along.0, Feature::Edge(along)));
            }
            LineIntersection::Point(p) if is_point_in_segment_interior(&p, &seg) => {
                if policy == CrossingPolicy::ReportEdges {
                    trace!("edge {:?} crossed at {}", h, p);
                    hits.push((curve.parameter(&p), 1, h.0, Feature::Edge(h)));
                }
            }
            LineIntersection::Point(_) | LineIntersection::None => {}
        }
    }

    hits.sort_by(|a, b| (&a.0, a.1, a.2).cmp(&(&b.0, b.1, b.2)));
    debug!("zone contains {} features", hits.len());

    hits.into_iter().map(|(_, _, _, feature)| feature).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point2, Segment2};

    fn polygon(points: &[(i32, i32)]) -> Arrangement {
        let n = points.len();
        let segments: Vec<Segment2> = (0..n)
            .map(|i| {
                let (ax, ay) = points[i];
                let (bx, by) = points[(i + 1) % n];
                Segment2::new(&Point2::new(ax, ay), &Point2::new(bx, by))
            })
            .collect();
        Arrangement::build(&segments)
    }

    #[test]
    fn square_corners_are_vertices() {
        let arr = polygon(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        let features = zone(&arr, &Line2::diagonal(), CrossingPolicy::Ignore);
        let expected = vec![
            Feature::Vertex(arr.find_vertex(&Point2::new(0, 0)).unwrap()),
            Feature::Vertex(arr.find_vertex(&Point2::new(2, 2)).unwrap()),
        ];
        assert_eq!(features, expected);
    }

    #[test]
    fn overlapping_edge_follows_the_line() {
        let arr = polygon(&[(3, 3), (1, 1), (2, 0)]);
        let features = zone(&arr, &Line2::diagonal(), CrossingPolicy::Ignore);
        assert_eq!(features.len(), 3);

        let low = arr.find_vertex(&Point2::new(1, 1)).unwrap();
        let high = arr.find_vertex(&Point2::new(3, 3)).unwrap();
        assert_eq!(features[0], Feature::Vertex(low));
        assert_eq!(features[2], Feature::Vertex(high));
        match features[1] {
            Feature::Edge(h) => {
                assert_eq!(arr.source(h), low);
                assert_eq!(arr.target(h), high);
            }
            other => panic!("expected an edge, got {:?}", other),
        }
    }

    #[test]
    fn interior_crossings_depend_on_policy() {
        // Edges (0,1)-(1,0) and (2,0)-(2,3) are crossed away from any vertex.
        let arr = polygon(&[(0, 1), (1, 0), (2, 0), (2, 3)]);
        assert!(zone(&arr, &Line2::diagonal(), CrossingPolicy::Ignore).is_empty());

        let crossed = zone(&arr, &Line2::diagonal(), CrossingPolicy::ReportEdges);
        assert_eq!(crossed.len(), 2);
        assert!(crossed.iter().all(|f| matches!(f, Feature::Edge(_))));
    }

    #[test]
    fn zone_does_not_touch_the_arrangement() {
        let arr = polygon(&[(0, 1), (1, 0), (2, 0), (2, 3)]);
        let before = (arr.number_of_vertices(), arr.number_of_edges());
        let _ = zone(&arr, &Line2::diagonal(), CrossingPolicy::ReportEdges);
        assert_eq!(before, (arr.number_of_vertices(), arr.number_of_edges()));
    }
}
