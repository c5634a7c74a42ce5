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

/// What the zone reports for an edge that the query line crosses at an
/// interior point (neither overlapping it nor passing through a vertex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingPolicy {
    /// Interior crossings produce no feature; only vertices on the line and
    /// edges lying along it are reported.
    #[default]
    Ignore,
    /// Interior crossings are reported as the crossed edge.
    ReportEdges,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountConfig {
    pub crossing_policy: CrossingPolicy,
}

impl CountConfig {
    pub fn with_crossing_policy(mut self, policy: CrossingPolicy) -> Self {
        self.crossing_policy = policy;
        self
    }
}
