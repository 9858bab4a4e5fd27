// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments: anchor points with optional Bézier handles.

use alloc::vec::Vec;

use crate::{CubicBez, Point, Vec2};

/// One anchor point of a fitted path.
///
/// The handles are offsets relative to [`point`](Segment::point). A missing
/// handle means the control point coincides with the anchor, so two adjacent
/// segments without handles are joined by a straight line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The on-curve anchor point.
    pub point: Point,
    /// Offset from the anchor to the incoming control point.
    pub handle_in: Option<Vec2>,
    /// Offset from the anchor to the outgoing control point.
    pub handle_out: Option<Vec2>,
}

impl Segment {
    /// Create a segment at `point` with no handles.
    #[inline]
    pub const fn new(point: Point) -> Segment {
        Segment {
            point,
            handle_in: None,
            handle_out: None,
        }
    }

    /// Create a segment at `point` with an incoming handle.
    #[inline]
    pub const fn with_handle_in(point: Point, handle_in: Vec2) -> Segment {
        Segment {
            point,
            handle_in: Some(handle_in),
            handle_out: None,
        }
    }

    /// Absolute position of the incoming control point.
    ///
    /// This is the anchor itself when there is no incoming handle.
    #[inline]
    pub fn control_in(&self) -> Point {
        self.point + self.handle_in.unwrap_or(Vec2::ZERO)
    }

    /// Absolute position of the outgoing control point.
    ///
    /// This is the anchor itself when there is no outgoing handle.
    #[inline]
    pub fn control_out(&self) -> Point {
        self.point + self.handle_out.unwrap_or(Vec2::ZERO)
    }
}

/// Append a fitted cubic to a segment chain.
///
/// The last segment's outgoing handle is set from the cubic's first control
/// point, and a new segment is pushed at the cubic's end point carrying the
/// incoming handle. The cubic is expected to start at the last segment.
pub(crate) fn push_curve(segments: &mut Vec<Segment>, c: CubicBez) {
    if let Some(prev) = segments.last_mut() {
        prev.handle_out = Some(c.p1 - c.p0);
    }
    segments.push(Segment::with_handle_in(c.p3, c.p2 - c.p3));
}

/// Iterate over the cubic Béziers joining consecutive segments.
///
/// When `closed` is true, a final cubic joins the last segment back to the
/// first one. Straight joins come out as cubics with control points on the
/// anchors.
pub fn segments_to_cubics(
    segments: &[Segment],
    closed: bool,
) -> impl Iterator<Item = CubicBez> + '_ {
    let closing = match (closed, segments.first(), segments.last()) {
        (true, Some(first), Some(last)) if segments.len() > 1 => Some((*last, *first)),
        _ => None,
    };
    segments
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(closing)
        .map(|(from, to)| CubicBez::new(from.point, from.control_out(), to.control_in(), to.point))
}
