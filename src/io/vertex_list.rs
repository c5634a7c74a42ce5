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

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::error::{Error, Result};

/// Read a polygon vertex list.
/// Format:
///   x,y      one vertex per line, in boundary order
///   # ...    comment, ignored
/// Blank lines are skipped and whitespace around numbers is allowed.
pub fn read_vertex_list<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>> {
    let file = File::open(path)?;
    parse_vertex_list(BufReader::new(file))
}

pub fn parse_vertex_list<R: BufRead>(reader: R) -> Result<Vec<(f64, f64)>> {
    let mut vertices = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }

        let parse_error = || Error::Parse {
            line: i + 1,
            content: line.clone(),
        };

        let mut fields = trimmed.split(',');
        let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(parse_error());
        };
        let x: f64 = x.trim().parse().map_err(|_| parse_error())?;
        let y: f64 = y.trim().parse().map_err(|_| parse_error())?;
        vertices.push((x, y));
    }

    debug!("read {} vertices", vertices.len());
    Ok(vertices)
}

/// Write vertices in the format accepted by [`read_vertex_list`].
pub fn write_vertex_list<P: AsRef<Path>>(path: P, vertices: &[(f64, f64)]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for (x, y) in vertices {
        // `{:?}` keeps enough digits to round-trip every double.
        writeln!(out, "{:?},{:?}", x, y)?;
    }
    out.flush()?;
    Ok(())
}
