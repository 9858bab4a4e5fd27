// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path representation.
//!
//! The encoder produces the shortest path data it can for a chain of
//! [`Segment`]s: a single absolute `M`, then relative commands only, with
//! `h`/`v` for axis-aligned lines and no separators beyond those the grammar
//! needs.

use alloc::string::{String, ToString};

use crate::common::round_to_precision;
use crate::{Point, Segment};

/// Encode a segment chain as SVG path data.
///
/// Coordinates are rounded to `precision` decimal digits; from 16 digits on
/// they are written unrounded. When `closed` is true the path ends with a
/// curve back to the first segment (unless that join is straight) and `z`.
///
/// # Examples
///
/// ```
/// use bezfit::{segments_to_svg, Point, Segment};
///
/// let segments = [
///     Segment::new(Point::new(0.0, 0.0)),
///     Segment::new(Point::new(10.0, 0.0)),
///     Segment::new(Point::new(10.0, 10.0)),
/// ];
/// assert_eq!(segments_to_svg(&segments, false, 5), "M0,0h10v10");
/// assert_eq!(segments_to_svg(&segments, true, 5), "M0,0h10v10z");
/// ```
pub fn segments_to_svg(segments: &[Segment], closed: bool, precision: u32) -> String {
    let Some(first) = segments.first() else {
        return String::new();
    };
    let mut encoder = SvgEncoder::new(first, precision);
    for segment in &segments[1..] {
        encoder.segment(segment, false);
    }
    if closed {
        // Close the path by drawing the first segment again; a straight
        // closing line is implied by `z`.
        encoder.segment(first, true);
        encoder.result.push('z');
    }
    encoder.result
}

/// Running state of the encoder.
struct SvgEncoder {
    result: String,
    precision: u32,
    /// The previous anchor.
    prev: Point,
    /// The previous anchor's outgoing control point.
    out: Point,
}

impl SvgEncoder {
    fn new(first: &Segment, precision: u32) -> SvgEncoder {
        let mut encoder = SvgEncoder {
            result: String::new(),
            precision,
            prev: first.point,
            out: first.control_out(),
        };
        encoder.result.push('M');
        encoder.push_pair(first.point.x, first.point.y);
        encoder
    }

    fn segment(&mut self, segment: &Segment, skip_line: bool) {
        let cur = segment.point;
        let control_in = segment.control_in();
        if control_in == cur && self.out == self.prev {
            let dx = cur.x - self.prev.x;
            let dy = cur.y - self.prev.y;
            // Zero-length lines draw nothing.
            if !skip_line && !(dx == 0.0 && dy == 0.0) {
                if dx == 0.0 {
                    self.result.push('v');
                    self.push_number(dy);
                } else if dy == 0.0 {
                    self.result.push('h');
                    self.push_number(dx);
                } else {
                    self.result.push('l');
                    self.push_pair(dx, dy);
                }
            }
        } else {
            self.result.push('c');
            self.push_pair(self.out.x - self.prev.x, self.out.y - self.prev.y);
            self.result.push(' ');
            self.push_pair(control_in.x - self.prev.x, control_in.y - self.prev.y);
            self.result.push(' ');
            self.push_pair(cur.x - self.prev.x, cur.y - self.prev.y);
        }
        self.prev = cur;
        self.out = segment.control_out();
    }

    fn push_pair(&mut self, x: f64, y: f64) {
        self.push_number(x);
        self.result.push(',');
        self.push_number(y);
    }

    fn push_number(&mut self, value: f64) {
        self.result
            .push_str(&format_number(round_to_precision(value, self.precision)));
    }
}

/// Format a number in its shortest form, without a trailing `.0`.
///
/// Negative zero is written as `0`.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
