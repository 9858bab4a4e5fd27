// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simplification of sampled points to SVG path data.
//!
//! This is the entry point that ties the crate together: points come in as
//! any type convertible to [`Point`], are checked, fitted with
//! [`fit_to_segments`] and encoded with [`segments_to_svg`].
//!
//! ```
//! use bezfit::simplify::{simplify_svg_path, SimplifyOptions};
//!
//! let points = [[0.0, 0.0], [10.0, 0.0]];
//! let options = SimplifyOptions::default().precision(2);
//! assert_eq!(simplify_svg_path(points, &options).unwrap(), "M0,0c3.33,0 6.67,0 10,0");
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{fit_to_segments, segments_to_svg, Point};

/// Options for simplifying points to a path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimplifyOptions {
    /// Whether the points describe a closed loop.
    closed: bool,
    /// The largest squared distance allowed between a point and the path.
    tolerance: f64,
    /// Decimal digits kept in the output.
    precision: u32,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        SimplifyOptions {
            closed: false,
            tolerance: 2.5,
            precision: 5,
        }
    }
}

impl SimplifyOptions {
    /// Treat the points as a closed loop.
    ///
    /// The fit then continues smoothly across the seam between the last and
    /// the first point, and the path ends with `z`.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Set the error budget, as a squared distance.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the number of decimal digits written for each coordinate.
    ///
    /// From 16 on, coordinates are written unrounded.
    #[must_use]
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Check that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`SimplifyError::InvalidTolerance`] if the tolerance is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), SimplifyError> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            Ok(())
        } else {
            Err(SimplifyError::InvalidTolerance(self.tolerance))
        }
    }
}

/// A point as it may arrive from outside the crate.
///
/// Hosts commonly supply points either as `[x, y]` pairs or as records with
/// named `x` and `y` fields. With the `serde` feature both forms deserialize
/// into this type, so a list of either can be read without knowing the shape
/// in advance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PointInput {
    /// A coordinate pair.
    Pair([f64; 2]),
    /// A record with named coordinates.
    Named {
        /// The x coordinate.
        x: f64,
        /// The y coordinate.
        y: f64,
    },
}

impl From<PointInput> for Point {
    #[inline]
    fn from(p: PointInput) -> Point {
        match p {
            PointInput::Pair(pair) => Point::from(pair),
            PointInput::Named { x, y } => Point::new(x, y),
        }
    }
}

/// An error which can be returned when simplifying points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimplifyError {
    /// The tolerance was negative or not finite.
    InvalidTolerance(f64),
    /// A point had a coordinate which was NaN or infinite.
    NonFinitePoint {
        /// Position of the offending point in the input.
        index: usize,
    },
}

impl fmt::Display for SimplifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimplifyError::InvalidTolerance(tolerance) => {
                write!(f, "Invalid argument: tolerance {tolerance} is not a non-negative number")
            }
            SimplifyError::NonFinitePoint { index } => {
                write!(f, "Invalid argument: point {index} is not finite")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimplifyError {}

/// Simplify a sequence of points into compact SVG path data.
///
/// The points may be given in any form convertible to [`Point`], such as
/// `(f64, f64)`, `[f64; 2]` or [`PointInput`]. An empty sequence gives an
/// empty string.
///
/// # Errors
///
/// Returns [`SimplifyError`] if the options are invalid (see
/// [`SimplifyOptions::validate`]) or if any point is not finite.
pub fn simplify_svg_path<I>(points: I, options: &SimplifyOptions) -> Result<String, SimplifyError>
where
    I: IntoIterator,
    I::Item: Into<Point>,
{
    options.validate()?;
    let points: Vec<Point> = points.into_iter().map(Into::into).collect();
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(SimplifyError::NonFinitePoint { index });
    }
    if points.is_empty() {
        return Ok(String::new());
    }
    let segments = fit_to_segments(&points, options.closed, options.tolerance);
    log::debug!(
        "simplified {} points to {} segments (closed: {}, tolerance: {})",
        points.len(),
        segments.len(),
        options.closed,
        options.tolerance
    );
    Ok(segments_to_svg(&segments, options.closed, options.precision))
}
