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

//! Counts the features of a polygon boundary that coincide with the diagonal
//! `y = x`.
//!
//! Coordinates are lifted to exact rationals on input. The polygon's edges
//! are inserted into a planar arrangement, the zone of the diagonal is
//! computed without inserting it, and the touched vertices and edges are
//! deduplicated: an edge lying along the diagonal counts once and its two
//! endpoints are not counted separately.
//!
//! ```
//! let n = polygon_intersections::count_intersections_with_diag(&[
//!     (0.0, 0.0),
//!     (0.0, 2.0),
//!     (2.0, 2.0),
//!     (2.0, 0.0),
//! ])?;
//! assert_eq!(n, 2);
//! # Ok::<(), polygon_intersections::Error>(())
//! ```

pub mod arrangement;
pub mod classify;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod numeric;
pub mod polygon;
pub mod zone;

use std::path::Path;

use log::debug;

pub use arrangement::{Arrangement, FaceHandle, HalfedgeHandle, VertexHandle};
pub use classify::{Classification, classify};
pub use config::{CountConfig, CrossingPolicy};
pub use error::{Error, PolygonDefect, Result};
pub use geometry::{Line2, Point2, Segment2};
pub use polygon::Polygon;
pub use zone::{Feature, zone};

/// Number of distinct polygon vertices and edges lying on `y = x`, with the
/// default [`CountConfig`].
pub fn count_intersections_with_diag(vertices: &[(f64, f64)]) -> Result<usize> {
    count_intersections_with_diag_config(vertices, &CountConfig::default())
}

pub fn count_intersections_with_diag_config(
    vertices: &[(f64, f64)],
    config: &CountConfig,
) -> Result<usize> {
    count_intersections_with_line(vertices, &Line2::diagonal(), config)
}

/// Same count against an arbitrary line.
pub fn count_intersections_with_line(
    vertices: &[(f64, f64)],
    line: &Line2,
    config: &CountConfig,
) -> Result<usize> {
    let polygon = Polygon::from_f64_pairs(vertices)?;
    Ok(classify_polygon(&polygon, line, config).count())
}

/// Runs the full pipeline on an already validated polygon and returns the
/// classification rather than just its size.
pub fn classify_polygon(polygon: &Polygon, line: &Line2, config: &CountConfig) -> Classification {
    let arr = Arrangement::build(&polygon.edges());
    let features = zone(&arr, line, config.crossing_policy);
    let classification = classify(&arr, &features, line);
    debug!(
        "polygon with {} vertices: count {}",
        polygon.len(),
        classification.count()
    );
    classification
}

/// Loads a vertex list written as `x,y` lines and counts it against `y = x`.
pub fn count_intersections_in_file<P: AsRef<Path>>(path: P) -> Result<usize> {
    let vertices = io::read_vertex_list(path)?;
    count_intersections_with_diag(&vertices)
}
