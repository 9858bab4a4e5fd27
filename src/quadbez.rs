// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::param_curve::de_casteljau;
use crate::{Line, ParamCurve, ParamCurveDeriv, Point};

/// A single quadratic Bézier segment.
///
/// Paths produced by this crate never contain quadratic segments; this type
/// exists as the derivative of a [`CubicBez`](crate::CubicBez).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        de_casteljau(&[self.p0, self.p1, self.p2], t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveDeriv for QuadBez {
    type DerivResult = Line;

    #[inline]
    fn deriv(&self) -> Line {
        Line::new(
            (2.0 * (self.p1 - self.p0)).to_point(),
            (2.0 * (self.p2 - self.p1)).to_point(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParamCurve, ParamCurveDeriv, Point, QuadBez};

    #[test]
    fn quadbez_deriv() {
        // y = x^2
        let q = QuadBez::new((0.0, 0.0), (0.5, 0.0), (1.0, 1.0));
        let deriv = q.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = q.eval(t);
            let p1 = q.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t).to_vec2();
            assert!((d - d_approx).hypot() < delta * 2.0);
        }
    }

    #[test]
    fn quadbez_endpoints() {
        let q = QuadBez::new((1.0, 1.0), (2.0, 3.0), (4.0, 1.0));
        assert_eq!(q.start(), Point::new(1.0, 1.0));
        assert_eq!(q.end(), Point::new(4.0, 1.0));
        assert_eq!(q.eval(0.5), Point::new(2.25, 2.0));
    }
}
