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

use log::trace;

use crate::error::{Error, PolygonDefect, Result};
use crate::geometry::{Point2, Segment2};
use crate::numeric::ExactRational;

/// Closed polygon boundary with exact vertices. The closing edge from the
/// last vertex back to the first is implicit.
///
/// Construction only checks what the arrangement needs: at least three
/// vertices and no zero-length edge. Simplicity is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    pub fn from_f64_pairs(coords: &[(f64, f64)]) -> Result<Self> {
        check_vertex_count(coords.len())?;

        let vertices = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| lift_vertex(i, x, y))
            .collect::<Result<Vec<_>>>()?;

        Self::from_points(vertices)
    }

    pub fn from_points(vertices: Vec<Point2>) -> Result<Self> {
        check_vertex_count(vertices.len())?;

        let n = vertices.len();
        for from in 0..n {
            let to = (from + 1) % n;
            if vertices[from] == vertices[to] {
                return Err(PolygonDefect::ZeroLengthEdge { from, to }.into());
            }
        }

        trace!("accepted polygon with {} vertices", n);
        Ok(Polygon { vertices })
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges in input order, closing edge last.
    pub fn edges(&self) -> Vec<Segment2> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment2::new(&self.vertices[i], &self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Same boundary with the opposite winding.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Polygon { vertices }
    }
}

fn check_vertex_count(n: usize) -> Result<()> {
    if n < 3 {
        return Err(PolygonDefect::TooFewVertices(n).into());
    }
    Ok(())
}

fn lift_vertex(index: usize, x: f64, y: f64) -> Result<Point2> {
    let lift = |value: f64| {
        ExactRational::try_from_f64(value).ok_or(Error::UnrepresentableCoordinate {
            vertex: index,
            value,
        })
    };
    Ok(Point2::new(lift(x)?, lift(y)?))
}
