// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::param_curve::de_casteljau;
use crate::{ParamCurve, ParamCurveDeriv, Point, QuadBez};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The control polygon as an array.
    #[inline]
    pub fn points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

impl ParamCurve for CubicBez {
    /// Evaluate the curve with de Casteljau's algorithm.
    #[inline]
    fn eval(&self, t: f64) -> Point {
        de_casteljau(&self.points(), t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveDeriv for CubicBez {
    type DerivResult = QuadBez;

    #[inline]
    fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }
}
