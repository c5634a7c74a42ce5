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

use num_traits::{One, Zero};

use crate::geometry::{Point2, Vector2};
use crate::kernel::Sign;
use crate::numeric::ExactRational;

/// Unbounded line `a·x + b·y + c = 0`.
///
/// The positive side is the one `(a, b)` points to; the line is directed
/// along `(−b, a)`, so the positive side lies to its right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line2 {
    pub a: ExactRational,
    pub b: ExactRational,
    pub c: ExactRational,
}

impl Line2 {
    /// Returns `None` when `a` and `b` are both zero.
    pub fn new(a: ExactRational, b: ExactRational, c: ExactRational) -> Option<Self> {
        if a.is_zero() && b.is_zero() {
            return None;
        }
        Some(Line2 { a, b, c })
    }

    /// `x − y = 0`, directed towards increasing x.
    pub fn diagonal() -> Self {
        Line2 {
            a: ExactRational::one(),
            b: -ExactRational::one(),
            c: ExactRational::zero(),
        }
    }

    /// Line through `p` and `q`, directed from `p` to `q`.
    pub fn through(p: &Point2, q: &Point2) -> Option<Self> {
        let a = &q.y - &p.y;
        let b = &p.x - &q.x;
        let c = &(&q.x * &p.y) - &(&q.y * &p.x);
        Line2::new(a, b, c)
    }

    /// `a·x + b·y + c` at `p`.
    pub(crate) fn evaluate(&self, p: &Point2) -> ExactRational {
        &(&(&self.a * &p.x) + &(&self.b * &p.y)) + &self.c
    }

    pub fn oriented_side(&self, p: &Point2) -> Sign {
        Sign::of(self.evaluate(p).cmp_zero())
    }

    pub fn has_on(&self, p: &Point2) -> bool {
        self.evaluate(p).is_zero()
    }

    pub fn direction(&self) -> Vector2 {
        Vector2::new(-&self.b, self.a.clone())
    }

    /// Monotone coordinate of `p` along the line's direction. Only meaningful
    /// for comparing points that lie on the line.
    pub fn parameter(&self, p: &Point2) -> ExactRational {
        self.direction().dot(&Vector2::new(p.x.clone(), p.y.clone()))
    }
}
