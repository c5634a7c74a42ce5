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

use crate::{
    geometry::{Line2, Point2, Segment2},
    kernel::{Sign, orient2d},
    numeric::ExactRational,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentIntersection {
    None,
    Point(Point2),
    Overlapping(Segment2),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineIntersection {
    None,
    Point(Point2),
    /// The whole segment lies on the line.
    Overlapping,
}

/// Exact intersection of two closed segments. An overlap is returned with
/// its endpoints in xy order.
pub fn segment_segment_intersection(seg1: &Segment2, seg2: &Segment2) -> SegmentIntersection {
    let a = &seg1.a;
    let b = &seg1.b;
    let c = &seg2.a;
    let d = &seg2.b;

    let o1 = orient2d(a, b, c);
    let o2 = orient2d(a, b, d);
    let o3 = orient2d(c, d, a);
    let o4 = orient2d(c, d, b);

    if o1.is_zero() && o2.is_zero() && o3.is_zero() && o4.is_zero() {
        return collinear_overlap(seg1, seg2);
    }

    let separated = |p: Sign, q: Sign| p == q && !p.is_zero();
    if separated(o1, o2) || separated(o3, o4) {
        return SegmentIntersection::None;
    }

    // Touching configurations: the shared point is an endpoint.
    if o1.is_zero() {
        return SegmentIntersection::Point(c.clone());
    }
    if o2.is_zero() {
        return SegmentIntersection::Point(d.clone());
    }
    if o3.is_zero() {
        return SegmentIntersection::Point(a.clone());
    }
    if o4.is_zero() {
        return SegmentIntersection::Point(b.clone());
    }

    // Proper crossing: a + t (b - a) with t = ((c - a) x (d - c)) / ((b - a) x (d - c)).
    let ab = a.vector_to(b);
    let cd = c.vector_to(d);
    let ac = a.vector_to(c);
    let t = &ac.cross(&cd) / &ab.cross(&cd);
    SegmentIntersection::Point(point_at(a, b, &t))
}

fn collinear_overlap(seg1: &Segment2, seg2: &Segment2) -> SegmentIntersection {
    let lo = std::cmp::max(seg1.min(), seg2.min());
    let hi = std::cmp::min(seg1.max(), seg2.max());

    if lo > hi {
        SegmentIntersection::None
    } else if lo == hi {
        SegmentIntersection::Point(lo.clone())
    } else {
        SegmentIntersection::Overlapping(Segment2::new(lo, hi))
    }
}

/// Exact intersection of an unbounded line with a closed segment.
pub fn line_segment_intersection(line: &Line2, seg: &Segment2) -> LineIntersection {
    let sa = line.oriented_side(&seg.a);
    let sb = line.oriented_side(&seg.b);

    match (sa, sb) {
        (Sign::Zero, Sign::Zero) => LineIntersection::Overlapping,
        (Sign::Zero, _) => LineIntersection::Point(seg.a.clone()),
        (_, Sign::Zero) => LineIntersection::Point(seg.b.clone()),
        _ if sa.opposes(sb) => {
            let fa = line.evaluate(&seg.a);
            let fb = line.evaluate(&seg.b);
            let t = &fa / &(&fa - &fb);
            LineIntersection::Point(point_at(&seg.a, &seg.b, &t))
        }
        _ => LineIntersection::None,
    }
}

fn point_at(a: &Point2, b: &Point2, t: &ExactRational) -> Point2 {
    let x = &a.x + &(t * &(&b.x - &a.x));
    let y = &a.y + &(t * &(&b.y - &a.y));
    Point2 { x, y }
}
