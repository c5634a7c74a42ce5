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

use std::fmt;
use std::ops::Sub;

use crate::geometry::Vector2;
use crate::numeric::ExactRational;

/// Exact planar point. The derived ordering is lexicographic on `(x, y)`,
/// which is the "xy order" used to orient edges and break ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2 {
    pub x: ExactRational,
    pub y: ExactRational,
}

impl Point2 {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<ExactRational>,
        Y: Into<ExactRational>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Exact lift of a pair of doubles; `None` if either is not finite.
    pub fn try_from_f64(x: f64, y: f64) -> Option<Self> {
        Some(Self {
            x: ExactRational::try_from_f64(x)?,
            y: ExactRational::try_from_f64(y)?,
        })
    }

    pub fn vector_to(&self, other: &Point2) -> Vector2 {
        Vector2::new(&other.x - &self.x, &other.y - &self.y)
    }
}

impl<'a, 'b> Sub<&'b Point2> for &'a Point2 {
    type Output = Vector2;
    fn sub(self, rhs: &'b Point2) -> Vector2 {
        rhs.vector_to(self)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_order_is_lexicographic() {
        let a = Point2::new(0, 5);
        let b = Point2::new(1, -5);
        let c = Point2::new(1, 0);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(Point2::new(2, 3), Point2::new(2, 3));
    }

    #[test]
    fn lift_from_doubles() {
        let p = Point2::try_from_f64(0.25, -3.0).unwrap();
        assert_eq!(p, Point2::new(ExactRational::from_num_den(1, 4), -3));
        assert!(Point2::try_from_f64(f64::NAN, 0.0).is_none());
    }
}
