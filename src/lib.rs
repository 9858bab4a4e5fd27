// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting cubic Bézier paths to sampled points.
//!
//! The bezfit library turns a dense sequence of 2D points, such as the
//! samples of a pen stroke or a traced outline, into a short sequence of
//! cubic Bézier segments that stays within a given error of every point, and
//! writes the result as compact SVG path data.
//!
//! There are two stages, usable on their own:
//!
//! - [`fit_to_segments`] fits the points and returns a chain of [`Segment`]s,
//!   anchor points with optional incoming and outgoing handles.
//! - [`segments_to_svg`] encodes such a chain as path data using relative
//!   commands, `h`/`v` shortcuts and rounding to a chosen precision.
//!
//! [`simplify_svg_path`] runs both after checking its arguments.
//!
//! # Examples
//!
//! ```
//! use bezfit::{simplify_svg_path, SimplifyOptions};
//!
//! let points: Vec<(f64, f64)> = (0..=40)
//!     .map(|i| {
//!         let x = i as f64 * 5.0;
//!         (x, 30.0 * (x / 40.0).sin())
//!     })
//!     .collect();
//! let options = SimplifyOptions::default().tolerance(1.0).precision(1);
//! let path = simplify_svg_path(points, &options).unwrap();
//! assert!(path.starts_with("M0,0c"));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! The `serde` feature allows reading points in either `[x, y]` or
//! `{"x": .., "y": ..}` form through [`PointInput`], along with
//! serialization of the geometry types and [`SimplifyOptions`].
//!
//! [`libm`]: https://docs.rs/libm

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        reason = "tests compare values that are computed exactly"
    )
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezfit requires either the `std` or `libm` feature");

extern crate alloc;

pub mod common;
mod cubicbez;
mod fit;
mod line;
mod param_curve;
mod point;
mod quadbez;
mod segment;
pub mod simplify;
mod svg;
mod vec2;

pub use crate::cubicbez::*;
pub use crate::fit::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::segment::*;
pub use crate::simplify::{simplify_svg_path, PointInput, SimplifyError, SimplifyOptions};
pub use crate::svg::*;
pub use crate::vec2::*;
