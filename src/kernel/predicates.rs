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

use crate::geometry::{Point2, Segment2};
use crate::kernel::orientation::{Sign, orient2d};

pub fn are_collinear(a: &Point2, b: &Point2, c: &Point2) -> bool {
    orient2d(a, b, c) == Sign::Zero
}

/// Closed-segment containment: endpoints count as on the segment.
pub fn is_point_on_segment(p: &Point2, seg: &Segment2) -> bool {
    if !are_collinear(&seg.a, &seg.b, p) {
        return false;
    }
    in_range(&seg.a.x, &seg.b.x, &p.x) && in_range(&seg.a.y, &seg.b.y, &p.y)
}

/// Strictly between the endpoints of the segment, endpoints excluded.
pub fn is_point_in_segment_interior(p: &Point2, seg: &Segment2) -> bool {
    p != &seg.a && p != &seg.b && is_point_on_segment(p, seg)
}

fn in_range<T: PartialOrd>(a: &T, b: &T, v: &T) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    v >= lo && v <= hi
}
