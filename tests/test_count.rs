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

use polygon_intersections::{
    CountConfig, CrossingPolicy, Error, Line2, Point2, Polygon, PolygonDefect, classify_polygon,
    count_intersections_with_diag, count_intersections_with_diag_config,
    count_intersections_with_line,
};

#[test]
fn triangle_away_from_diagonal() {
    let n = count_intersections_with_diag(&[(1.0, 0.0), (3.0, 0.0), (3.0, 1.0)]).unwrap();
    assert_eq!(n, 0);
}

#[test]
fn single_vertex_on_diagonal() {
    // (1,1) touches the diagonal; the polygon stays below it otherwise.
    let n = count_intersections_with_diag(&[(1.0, 1.0), (4.0, 0.0), (4.0, 2.0)]).unwrap();
    assert_eq!(n, 1);
}

#[test]
fn single_edge_along_diagonal() {
    let n = count_intersections_with_diag(&[(0.0, 0.0), (3.0, 3.0), (3.0, 0.0)]).unwrap();
    assert_eq!(n, 1);
}

#[test]
fn square_through_two_corners() {
    let n = count_intersections_with_diag(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)])
        .unwrap();
    assert_eq!(n, 2);
}

#[test]
fn collinear_triangle_on_diagonal() {
    // The closing edge overlaps the other two and is split by (1,1): two edges remain.
    let n = count_intersections_with_diag(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
    assert_eq!(n, 2);
}

#[test]
fn edge_along_diagonal_plus_separate_vertex() {
    // Edge (0,0)-(2,2) on the diagonal, and vertex (4,4) touching it elsewhere.
    let n = count_intersections_with_diag(&[
        (0.0, 0.0),
        (2.0, 2.0),
        (3.0, 2.0),
        (4.0, 4.0),
        (5.0, 0.0),
    ])
    .unwrap();
    assert_eq!(n, 2);
}

#[test]
fn edges_crossing_each_other_on_diagonal() {
    // (0,2)-(2,0) and (3,1)-(-1,1) cross at (1,1); the arrangement adds it as a vertex.
    let vertices = [(0.0, 2.0), (2.0, 0.0), (3.0, 1.0), (-1.0, 1.0)];
    assert_eq!(count_intersections_with_diag(&vertices).unwrap(), 1);

    let config = CountConfig::default().with_crossing_policy(CrossingPolicy::ReportEdges);
    assert_eq!(
        count_intersections_with_diag_config(&vertices, &config).unwrap(),
        1
    );

    let polygon = Polygon::from_f64_pairs(&vertices).unwrap();
    let c = classify_polygon(&polygon, &Line2::diagonal(), &CountConfig::default());
    assert_eq!(c.vertices().len(), 1);
    assert!(c.edges().is_empty());
}

#[test]
fn boundary_doubling_back_along_diagonal() {
    // (3,3)-(1,1) runs back over (0,0)-(3,3); the overlap merges into two edges.
    let vertices = [(0.0, 0.0), (3.0, 3.0), (1.0, 1.0), (2.0, 0.0)];
    assert_eq!(count_intersections_with_diag(&vertices).unwrap(), 2);

    let polygon = Polygon::from_f64_pairs(&vertices).unwrap();
    let c = classify_polygon(&polygon, &Line2::diagonal(), &CountConfig::default());
    assert_eq!(c.coincident_edges().len(), 2);
    assert!(c.vertices().is_empty());
}

#[test]
fn interior_crossings_are_ignored_by_default() {
    let vertices = [(0.0, 1.0), (1.0, 0.0), (2.0, 0.0), (2.0, 3.0)];
    assert_eq!(count_intersections_with_diag(&vertices).unwrap(), 0);

    let config = CountConfig::default().with_crossing_policy(CrossingPolicy::ReportEdges);
    assert_eq!(
        count_intersections_with_diag_config(&vertices, &config).unwrap(),
        2
    );
}

#[test]
fn near_diagonal_vertex_is_not_on_it() {
    let n = count_intersections_with_diag(&[(0.1, 0.1), (1.0, 0.0), (0.3, 0.30000000000000004)])
        .unwrap();
    // Only (0.1, 0.1) has exactly equal coordinates.
    assert_eq!(n, 1);
}

#[test]
fn other_lines() {
    let x_axis = Line2::new(0.into(), 1.into(), 0.into()).unwrap();
    let n = count_intersections_with_line(
        &[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)],
        &x_axis,
        &CountConfig::default(),
    )
    .unwrap();
    assert_eq!(n, 1);

    let horizontal = Line2::through(&Point2::new(0, 0), &Point2::new(4, 0)).unwrap();
    let m = count_intersections_with_line(
        &[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)],
        &horizontal,
        &CountConfig::default(),
    )
    .unwrap();
    assert_eq!(m, n);
}

#[test]
fn two_vertices_are_rejected() {
    let err = count_intersections_with_diag(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidPolygon(PolygonDefect::TooFewVertices(2))
    ));
}

#[test]
fn duplicate_consecutive_vertices_are_rejected() {
    let err = count_intersections_with_diag(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 3.0)])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidPolygon(PolygonDefect::ZeroLengthEdge { .. })
    ));
}

#[test]
fn nan_is_rejected() {
    let err = count_intersections_with_diag(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 3.0)])
        .unwrap_err();
    assert!(matches!(err, Error::UnrepresentableCoordinate { vertex: 1, .. }));
}
