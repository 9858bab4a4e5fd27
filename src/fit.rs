// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting of cubic Bézier paths to digitized points.
//!
//! This is the algorithm from "An Algorithm for Automatically Fitting
//! Digitized Curves" by Philip J. Schneider (Graphics Gems, 1990), with the
//! modifications made by Jürg Lehni for Paper.js:
//!
//! - the error budget is a squared distance, compared directly against the
//!   squared deviation of each sample point,
//! - re-parameterization is abandoned as soon as an iteration fails to
//!   improve on the previous one,
//! - a fit is only accepted when the Newton-Raphson step has kept the
//!   parameters in order.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::common::is_machine_zero;
#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::segment::push_curve;
use crate::{CubicBez, ParamCurve, ParamCurveDeriv, Point, Segment, Vec2};

/// Threshold for treating the least-squares system as singular.
const EPSILON: f64 = 1e-12;

/// Bound under which the Newton-Raphson denominator counts as zero.
const MACHINE_EPSILON: f64 = 1.12e-16;

/// Number of generate/re-parameterize rounds before splitting.
///
/// Five, not four: the rounds are numbered `0..=4`.
const MAX_ITERATIONS: usize = 5;

/// Chord parameters for one fit range; most ranges are short.
type Params = SmallVec<[f64; 32]>;

/// Fit a sequence of cubic Bézier segments through `points`.
///
/// `tolerance` is the largest squared distance any point may have from the
/// fitted curve at its assigned parameter. Larger values give fewer segments.
///
/// When `closed` is true the fit wraps around from the last point to the
/// first, so the seam is as smooth as the rest of the path. The returned
/// segments never include the duplicated points used for that.
///
/// The result is empty only for empty input.
///
/// # Examples
///
/// ```
/// use bezfit::{fit_to_segments, Point};
///
/// let points: Vec<Point> = (0..=20)
///     .map(|i| {
///         let th = i as f64 * core::f64::consts::FRAC_PI_2 / 20.0;
///         Point::new(100.0 * th.cos(), 100.0 * th.sin())
///     })
///     .collect();
/// let segments = fit_to_segments(&points, false, 2.5);
/// // A quarter circle needs a single cubic.
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].point, points[0]);
/// assert_eq!(segments[1].point, points[20]);
/// ```
pub fn fit_to_segments(points: &[Point], closed: bool, tolerance: f64) -> Vec<Segment> {
    match points.len() {
        0 => return Vec::new(),
        1 => return alloc::vec![Segment::new(points[0])],
        _ => (),
    }
    // Duplicate the neighbours across the seam of a closed path, so that
    // both ends of the fit see the points beyond them.
    let mut working = Vec::with_capacity(points.len() + 2);
    if closed {
        working.push(points[points.len() - 1]);
    }
    working.extend_from_slice(points);
    if closed {
        working.push(points[0]);
    }
    let fitter = Fitter {
        points: &working,
        tolerance,
    };
    let len = working.len();
    // To support reducing paths with multiple points in the same place
    // to one segment.
    let mut segments = alloc::vec![Segment::new(working[0])];
    fitter.fit_cubic(
        &mut segments,
        0,
        len - 1,
        working[1] - working[0],
        working[len - 2] - working[len - 1],
    );
    if closed {
        if segments.len() <= 2 {
            // The whole loop collapsed into one cubic between the synthetic
            // duplicates; nothing would remain once they are removed.
            log::trace!("closed fit collapsed to a single cubic");
            return alloc::vec![Segment::new(points[0])];
        }
        segments.pop();
        segments.remove(0);
    }
    segments
}

/// The maximum error found by [`Fitter::find_max_error`].
#[derive(Clone, Copy, Debug)]
struct MaxError {
    /// Squared distance of the worst point.
    error: f64,
    /// Index of the worst point.
    index: usize,
}

/// The input points and error budget shared by the recursive fit.
struct Fitter<'a> {
    points: &'a [Point],
    tolerance: f64,
}

impl Fitter<'_> {
    /// Fit a Bézier curve to the points in `first..=last`, appending the
    /// result to `segments`.
    fn fit_cubic(
        &self,
        segments: &mut Vec<Segment>,
        first: usize,
        last: usize,
        tan1: Vec2,
        tan2: Vec2,
    ) {
        // Use heuristic if region only has two points in it.
        if last - first == 1 {
            let pt1 = self.points[first];
            let pt2 = self.points[last];
            let dist = pt1.distance(pt2) / 3.0;
            push_curve(
                segments,
                CubicBez::new(
                    pt1,
                    pt1 + tan1.normalize_to(dist),
                    pt2 + tan2.normalize_to(dist),
                    pt2,
                ),
            );
            return;
        }
        let mut u_prime = self.chord_length_parameterize(first, last);
        let mut max_error = self.tolerance.max(self.tolerance * self.tolerance);
        let mut split = first + (last - first + 1) / 2;
        let mut parameters_in_order = true;
        for _ in 0..MAX_ITERATIONS {
            let curve = self.generate_bezier(first, last, &u_prime, tan1, tan2);
            let max = self.find_max_error(first, last, &curve, &u_prime);
            if max.error < self.tolerance && parameters_in_order {
                push_curve(segments, curve);
                return;
            }
            split = max.index;
            // If the error is not too large, try re-parameterization and
            // iteration.
            if max.error >= max_error {
                break;
            }
            parameters_in_order = self.reparameterize(first, last, &mut u_prime, &curve);
            max_error = max.error;
        }
        // Fitting failed; split at the max error point and fit recursively.
        log::trace!("splitting fit range {first}..={last} at {split}");
        let tan_center = self.points[split - 1] - self.points[split + 1];
        self.fit_cubic(segments, first, split, tan1, tan_center);
        self.fit_cubic(segments, split, last, -tan_center, tan2);
    }

    /// Use the least-squares method to find Bézier control points for the
    /// points in `first..=last`, given their parameters and end tangents.
    fn generate_bezier(
        &self,
        first: usize,
        last: usize,
        u_prime: &[f64],
        tan1: Vec2,
        tan2: Vec2,
    ) -> CubicBez {
        let pt1 = self.points[first];
        let pt2 = self.points[last];
        let mut c = [[0.0, 0.0], [0.0, 0.0]];
        let mut x = [0.0, 0.0];

        for (&u, &point) in u_prime.iter().zip(&self.points[first..=last]) {
            let t = 1.0 - u;
            let b = 3.0 * u * t;
            let b0 = t * t * t;
            let b1 = b * t;
            let b2 = b * u;
            let b3 = u * u * u;
            let a1 = tan1.normalize_to(b1);
            let a2 = tan2.normalize_to(b2);
            let tmp = point.to_vec2() - pt1.to_vec2() * (b0 + b1) - pt2.to_vec2() * (b2 + b3);
            c[0][0] += a1.dot(a1);
            c[0][1] += a1.dot(a2);
            c[1][0] = c[0][1];
            c[1][1] += a2.dot(a2);
            x[0] += a1.dot(tmp);
            x[1] += a2.dot(tmp);
        }

        let det_c0_c1 = c[0][0] * c[1][1] - c[1][0] * c[0][1];
        let (mut alpha1, mut alpha2) = if det_c0_c1.abs() > EPSILON {
            // Cramer's rule.
            let det_c0_x = c[0][0] * x[1] - c[1][0] * x[0];
            let det_x_c1 = x[0] * c[1][1] - x[1] * c[0][1];
            (det_x_c1 / det_c0_c1, det_c0_x / det_c0_c1)
        } else {
            // Under-determined; assume alpha1 == alpha2.
            let c0 = c[0][0] + c[0][1];
            let c1 = c[1][0] + c[1][1];
            let alpha = if c0.abs() > EPSILON {
                x[0] / c0
            } else if c1.abs() > EPSILON {
                x[1] / c1
            } else {
                0.0
            };
            (alpha, alpha)
        };

        // A negative alpha leads to crossed handles, and a zero one to
        // coincident control points that break the next root find. Both
        // fall back to the Wu/Barsky heuristic.
        let seg_length = pt2.distance(pt1);
        let eps = EPSILON * seg_length;
        let mut handles = None;
        if alpha1 < eps || alpha2 < eps {
            log::trace!("degenerate least-squares fit over {first}..={last}");
            alpha1 = seg_length / 3.0;
            alpha2 = alpha1;
        } else {
            // The control points must stay in order when projected onto the
            // chord through pt1 and pt2.
            let line = pt2 - pt1;
            let handle1 = tan1.normalize_to(alpha1);
            let handle2 = tan2.normalize_to(alpha2);
            if handle1.dot(line) - handle2.dot(line) > seg_length * seg_length {
                log::trace!("crossed handles over {first}..={last}");
                alpha1 = seg_length / 3.0;
                alpha2 = alpha1;
            } else {
                handles = Some((handle1, handle2));
            }
        }
        let (handle1, handle2) =
            handles.unwrap_or_else(|| (tan1.normalize_to(alpha1), tan2.normalize_to(alpha2)));

        // The end points stay exactly on the first and last data points.
        CubicBez::new(pt1, pt1 + handle1, pt2 + handle2, pt2)
    }

    /// Try to find a better parameterization of `first..=last` on `curve`.
    ///
    /// Returns `false` if the new parameters are no longer increasing, in
    /// which case the points would be fitted in the wrong order.
    fn reparameterize(&self, first: usize, last: usize, u: &mut [f64], curve: &CubicBez) -> bool {
        for (ui, &point) in u.iter_mut().zip(&self.points[first..=last]) {
            *ui = find_root(curve, point, *ui);
        }
        !u.windows(2).any(|w| w[1] <= w[0])
    }

    /// Assign parameter values to the points in `first..=last` using the
    /// relative distances between them.
    fn chord_length_parameterize(&self, first: usize, last: usize) -> Params {
        let mut u = Params::with_capacity(last - first + 1);
        u.push(0.0);
        for i in first + 1..=last {
            let prev = u[i - first - 1];
            u.push(prev + self.points[i].distance(self.points[i - 1]));
        }
        let total = u[last - first];
        for ui in &mut u[1..] {
            *ui /= total;
        }
        u
    }

    /// Find the maximum squared distance of the interior points of
    /// `first..=last` to the fitted curve.
    ///
    /// Ties go to the later point.
    fn find_max_error(&self, first: usize, last: usize, curve: &CubicBez, u: &[f64]) -> MaxError {
        let mut max = MaxError {
            error: 0.0,
            index: first + (last - first + 1) / 2,
        };
        for i in first + 1..last {
            let dist = curve.eval(u[i - first]).distance_squared(self.points[i]);
            if dist >= max.error {
                max = MaxError {
                    error: dist,
                    index: i,
                };
            }
        }
        max
    }
}

/// Use one Newton-Raphson step to find a better parameter for `point` on
/// `curve`, starting from `u`.
fn find_root(curve: &CubicBez, point: Point, u: f64) -> f64 {
    let curve1 = curve.deriv();
    let curve2 = curve1.deriv();
    let pt = curve.eval(u);
    let pt1 = curve1.eval(u).to_vec2();
    let pt2 = curve2.eval(u).to_vec2();
    let diff = pt - point;
    let df = pt1.dot(pt1) + diff.dot(pt2);
    // u = u - f(u) / f'(u)
    if is_machine_zero(df, MACHINE_EPSILON) {
        u
    } else {
        u - diff.dot(pt1) / df
    }
}
