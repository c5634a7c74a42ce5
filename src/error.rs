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

use thiserror::Error;

/// Top-level error type for the intersection counter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(#[from] PolygonDefect),

    #[error("coordinate {value} of vertex {vertex} has no exact representation")]
    UnrepresentableCoordinate { vertex: usize, value: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `x,y`, found {content:?}")]
    Parse { line: usize, content: String },
}

/// Reasons a vertex list does not describe a usable polygon boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonDefect {
    #[error("expected at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("vertices {from} and {to} coincide, producing a zero-length edge")]
    ZeroLengthEdge { from: usize, to: usize },
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
