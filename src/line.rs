// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::param_curve::de_casteljau;
use crate::{ParamCurve, Point};

/// A single line.
///
/// In this crate a line mostly shows up as the second derivative of a cubic
/// Bézier, where its endpoints are vectors rather than positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        de_casteljau(&[self.p0, self.p1], t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}
