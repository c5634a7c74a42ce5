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

use std::cmp::Ordering;

use num_traits::Zero;

use crate::numeric::ExactRational;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector2 {
    pub x: ExactRational,
    pub y: ExactRational,
}

impl Vector2 {
    pub fn new(x: ExactRational, y: ExactRational) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Vector2) -> ExactRational {
        &(&self.x * &other.x) + &(&self.y * &other.y)
    }

    pub fn cross(&self, other: &Vector2) -> ExactRational {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Upper half-plane including the positive x axis: angle in `[0, π)`.
    fn in_upper_half(&self) -> bool {
        self.y.is_positive() || (self.y.is_zero() && self.x.is_positive())
    }

    /// Compares polar angles in `[0, 2π)` measured counter-clockwise from the
    /// positive x axis. Exact; parallel vectors with the same heading compare
    /// equal.
    pub fn angle_cmp(&self, other: &Vector2) -> Ordering {
        match (self.in_upper_half(), other.in_upper_half()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => other.cross(self).cmp_zero(),
        }
    }
}
