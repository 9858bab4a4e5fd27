// Copyright 2025 the Bezfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("bezfit requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn powi(self, n: i32) -> Self => pow;
    fn round(self) -> Self => round;
    fn sqrt(self) -> Self => sqrt;
}

/// Is `value` within machine precision of zero?
///
/// The bound is slightly wider than `f64::EPSILON / 2`, so that values which
/// only differ from zero by accumulated roundoff are caught.
#[inline]
pub(crate) fn is_machine_zero(value: f64, machine_epsilon: f64) -> bool {
    value >= -machine_epsilon && value <= machine_epsilon
}

/// Round `value` to `precision` decimal digits.
///
/// At 16 digits or more this is the identity, since `f64` does not carry
/// that many significant decimal digits anyway.
#[inline]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if precision >= 16 {
        return value;
    }
    let multiplier = 10.0_f64.powi(precision as i32);
    (value * multiplier).round() / multiplier
}
