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

use crate::geometry::Point2;

/// Exact sign of a determinant or of a point against an oriented line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn of(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// True for a strict sign change, e.g. the endpoints of a segment that
    /// properly crosses a line.
    pub fn opposes(self, other: Sign) -> bool {
        matches!(
            (self, other),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        )
    }
}

/// Returns:
/// - Positive if counter-clockwise
/// - Negative if clockwise
/// - Zero if collinear
pub fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> Sign {
    let det = &(&(&b.x - &a.x) * &(&c.y - &a.y)) - &(&(&b.y - &a.y) * &(&c.x - &a.x));
    Sign::of(det.cmp_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_test() {
        let a = Point2::new(0, 0);
        let b = Point2::new(1, 0);
        let c = Point2::new(0, 1);

        assert_eq!(orient2d(&a, &b, &c), Sign::Positive);
        assert_eq!(orient2d(&a, &c, &b), Sign::Negative);
    }

    #[test]
    fn collinear_is_exactly_zero() {
        let a = Point2::try_from_f64(0.1, 0.1).unwrap();
        let b = Point2::try_from_f64(0.2, 0.2).unwrap();
        let c = Point2::try_from_f64(0.3, 0.3).unwrap();
        assert_eq!(orient2d(&a, &b, &c), Sign::Zero);

        let d = Point2::try_from_f64(0.3, 0.30000000000000004).unwrap();
        assert_eq!(orient2d(&a, &b, &d), Sign::Positive);
    }

    #[test]
    fn opposing_signs() {
        assert!(Sign::Positive.opposes(Sign::Negative));
        assert!(!Sign::Positive.opposes(Sign::Zero));
        assert!(!Sign::Negative.opposes(Sign::Negative));
    }
}
