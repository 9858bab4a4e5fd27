// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector.

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::Point;

/// A 2D vector.
///
/// This is intended primarily for a vector in the mathematical sense: the
/// offset between two points, a tangent direction, or a Bézier handle
/// relative to its anchor.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Vec2 {
    /// The vector (0, 0).
    pub const ZERO: Vec2 = Vec2::new(0., 0.);

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Convert this vector into a `Point`.
    #[inline]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Magnitude of vector.
    ///
    /// This is `sqrt(x² + y²)` rather than `f64::hypot`; the fitting code
    /// relies on the exact roundoff of that expression.
    #[inline]
    pub fn hypot(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Magnitude squared of vector.
    #[inline]
    pub fn hypot2(self) -> f64 {
        self.dot(self)
    }

    /// Returns a vector with the same direction as `self` and the given
    /// magnitude.
    ///
    /// Unlike a plain division by [`hypot`](Vec2::hypot), a vector with zero
    /// magnitude is scaled as if its magnitude were infinite, so the result is
    /// the zero vector rather than `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bezfit::Vec2;
    /// assert_eq!(Vec2::new(3.0, 4.0).normalize_to(10.0), Vec2::new(6.0, 8.0));
    /// assert_eq!(Vec2::ZERO.normalize_to(10.0), Vec2::ZERO);
    /// ```
    #[inline]
    pub fn normalize_to(self, length: f64) -> Vec2 {
        let hypot = self.hypot();
        // NaN also takes the infinite denominator.
        let denom = if hypot == 0.0 || hypot.is_nan() {
            f64::INFINITY
        } else {
            hypot
        };
        self * (length / denom)
    }

    /// Is this vector finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from(v: (f64, f64)) -> Vec2 {
        Vec2 { x: v.0, y: v.1 }
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline]
    fn from(v: Vec2) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: f64) -> Vec2 {
        Vec2 {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, other: Vec2) -> Vec2 {
        other * self
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Vec2> for mint::Vector2<f64> {
    #[inline]
    fn from(p: Vec2) -> mint::Vector2<f64> {
        mint::Vector2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Vec2 {
    #[inline]
    fn from(p: mint::Vector2<f64>) -> Vec2 {
        Vec2 { x: p.x, y: p.y }
    }
}
