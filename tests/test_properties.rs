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
    Arrangement, CountConfig, CrossingPolicy, Feature, Line2, Polygon, classify,
    classify_polygon, count_intersections_with_diag, zone,
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Random vertex list on a small integer grid, so vertices land on the
/// diagonal and edges overlap it often. Consecutive duplicates are dropped.
fn random_vertices(rng: &mut StdRng) -> Vec<(f64, f64)> {
    loop {
        let n = rng.random_range(3..9);
        let mut vertices: Vec<(f64, f64)> = Vec::with_capacity(n);
        for _ in 0..n {
            let p = (
                rng.random_range(-3..=3) as f64,
                rng.random_range(-3..=3) as f64,
            );
            if vertices.last() != Some(&p) {
                vertices.push(p);
            }
        }
        if vertices.len() >= 3 && vertices.first() != vertices.last() {
            return vertices;
        }
    }
}

#[test]
fn feature_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let diag = Line2::diagonal();

    for _ in 0..200 {
        let polygon = Polygon::from_f64_pairs(&random_vertices(&mut rng)).unwrap();
        let arr = Arrangement::build(&polygon.edges());
        let mut features = zone(&arr, &diag, CrossingPolicy::ReportEdges);
        let expected = classify(&arr, &features, &diag).count();

        for _ in 0..5 {
            features.shuffle(&mut rng);
            assert_eq!(classify(&arr, &features, &diag).count(), expected);
        }
    }
}

#[test]
fn twin_swaps_do_not_matter() {
    let mut rng = StdRng::seed_from_u64(42);
    let diag = Line2::diagonal();

    for _ in 0..100 {
        let polygon = Polygon::from_f64_pairs(&random_vertices(&mut rng)).unwrap();
        let arr = Arrangement::build(&polygon.edges());
        let features = zone(&arr, &diag, CrossingPolicy::ReportEdges);
        let expected = classify(&arr, &features, &diag).count();

        let flipped: Vec<Feature> = features
            .iter()
            .map(|f| match *f {
                Feature::Edge(h) if rng.random_bool(0.5) => Feature::Edge(arr.twin(h)),
                other => other,
            })
            .collect();
        assert_eq!(classify(&arr, &flipped, &diag).count(), expected);
    }
}

#[test]
fn winding_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(7);
    let diag = Line2::diagonal();
    let configs = [
        CountConfig::default(),
        CountConfig::default().with_crossing_policy(CrossingPolicy::ReportEdges),
    ];

    for _ in 0..200 {
        let polygon = Polygon::from_f64_pairs(&random_vertices(&mut rng)).unwrap();
        let reversed = polygon.reversed();

        for config in &configs {
            assert_eq!(
                classify_polygon(&polygon, &diag, config).count(),
                classify_polygon(&reversed, &diag, config).count()
            );
        }
    }
}

#[test]
fn starting_vertex_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let vertices = random_vertices(&mut rng);
        let expected = count_intersections_with_diag(&vertices).unwrap();
        let mut rotated = vertices.clone();
        rotated.rotate_left(rng.random_range(1..vertices.len()));
        assert_eq!(count_intersections_with_diag(&rotated).unwrap(), expected);
    }
}

#[test]
fn random_arrangements_are_valid() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..100 {
        let polygon = Polygon::from_f64_pairs(&random_vertices(&mut rng)).unwrap();
        let arr = Arrangement::build(&polygon.edges());
        assert!(arr.is_valid());
    }
}
