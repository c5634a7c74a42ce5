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

use crate::geometry::{Point2, Vector2};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment2 {
    pub a: Point2,
    pub b: Point2,
}

impl Segment2 {
    pub fn new(a: &Point2, b: &Point2) -> Self {
        Self {
            a: a.clone(),
            b: b.clone(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Endpoint that comes first in xy order.
    pub fn min(&self) -> &Point2 {
        if self.a <= self.b { &self.a } else { &self.b }
    }

    pub fn max(&self) -> &Point2 {
        if self.a <= self.b { &self.b } else { &self.a }
    }

    pub fn direction(&self) -> Vector2 {
        self.a.vector_to(&self.b)
    }
}
