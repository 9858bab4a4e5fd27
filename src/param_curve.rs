// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use arrayvec::ArrayVec;

use crate::Point;

/// The highest degree supported by [`de_casteljau`].
const MAX_DEGREE: usize = 3;

/// A curve parametrized by a scalar.
///
/// If the result is interpreted as a point, this represents a curve.
/// But the result can be interpreted as a vector as well, which is how the
/// derivative curves (hodographs) are used.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A differentiable parametrized curve.
pub trait ParamCurveDeriv {
    /// The parametric curve obtained by taking the derivative of this one.
    type DerivResult: ParamCurve;

    /// The derivative of the curve.
    ///
    /// Note that the type of the return value is somewhat inaccurate, as
    /// the derivative of a curve (mapping of param to point) is a mapping
    /// of param to vector. We choose to accept this rather than have a
    /// more complex type scheme.
    fn deriv(&self) -> Self::DerivResult;
}

/// Evaluate a Bézier control polygon at `t` by repeated linear interpolation.
///
/// The degree is one less than the number of control points. Each round
/// interpolates every adjacent pair and drops the last entry, until a single
/// point remains.
///
/// # Panics
///
/// Panics if `ctrl` is empty or holds more than four points.
pub(crate) fn de_casteljau(ctrl: &[Point], t: f64) -> Point {
    assert!(
        !ctrl.is_empty() && ctrl.len() <= MAX_DEGREE + 1,
        "control polygon must have between 1 and 4 points"
    );
    let mut tmp: ArrayVec<Point, { MAX_DEGREE + 1 }> = ctrl.iter().copied().collect();
    let degree = ctrl.len() - 1;
    for i in 1..=degree {
        for j in 0..=degree - i {
            tmp[j] = tmp[j].lerp(tmp[j + 1], t);
        }
    }
    tmp[0]
}
