//! Numbers and numerics.

#![allow(clippy::cast_lossless)]

use num_traits as nt;
use std::{fmt, ops::Neg};

/// The scalar kinds a vector can be generic over: signed integers of width
/// 8, 16, 32 and 64 bits, and IEEE 754 binary32/binary64 floating point.
///
/// Conversions to and from floating point are plain `as` casts. Converting a
/// float to an integer kind thus truncates toward zero, saturates at the
/// bounds of the integer kind and maps NaN to zero.
///
/// The `wrapping_*` operations wrap around at the bounds of integer kinds and
/// are the plain IEEE operations for floating point kinds.
pub trait Number:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + nt::Num
    + Neg<Output = Self>
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;

    /// Whether this is a floating point kind.
    const IS_FLOAT: bool;

    /// Converts the value to `f64`.
    fn to_f64(self) -> f64;

    /// Converts the value to `f32`.
    fn to_f32(self) -> f32;

    /// Converts the given `f64` to this kind.
    fn from_f64(value: f64) -> Self;

    /// Converts the given `f32` to this kind.
    fn from_f32(value: f32) -> Self;

    /// Converts the value to `i64`.
    fn to_i64(self) -> i64;

    /// Converts the value to `i32`.
    fn to_i32(self) -> i32;

    /// Whether the value is NaN. Always `false` for integer kinds.
    fn is_nan(self) -> bool;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Divides the value by `rhs`. For integer kinds, `MIN / -1` wraps to
    /// `MIN` and division by zero panics, like the `/` operator.
    fn wrapping_div(self, rhs: Self) -> Self;

    fn wrapping_neg(self) -> Self;

    /// The absolute value. For integer kinds the absolute value of `MIN`
    /// wraps to `MIN`.
    fn wrapping_abs(self) -> Self;
}

macro_rules! impl_number_conversions {
    ($t:ty) => {
        #[inline]
        fn to_f64(self) -> f64 {
            self as f64
        }

        #[inline]
        fn to_f32(self) -> f32 {
            self as f32
        }

        #[inline]
        fn from_f64(value: f64) -> Self {
            value as $t
        }

        #[inline]
        fn from_f32(value: f32) -> Self {
            value as $t
        }

        #[inline]
        fn to_i64(self) -> i64 {
            self as i64
        }

        #[inline]
        fn to_i32(self) -> i32 {
            self as i32
        }
    };
}

macro_rules! impl_integer_number {
    ($t:ty) => {
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const NEG_ONE: Self = -1;
            const IS_FLOAT: bool = false;

            impl_number_conversions!($t);

            #[inline]
            fn is_nan(self) -> bool {
                false
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                nt::WrappingAdd::wrapping_add(&self, &rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                nt::WrappingSub::wrapping_sub(&self, &rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                nt::WrappingMul::wrapping_mul(&self, &rhs)
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                nt::WrappingNeg::wrapping_neg(&self)
            }

            #[inline]
            fn wrapping_abs(self) -> Self {
                <$t>::wrapping_abs(self)
            }
        }
    };
}

macro_rules! impl_float_number {
    ($t:ty) => {
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const IS_FLOAT: bool = true;

            impl_number_conversions!($t);

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                -self
            }

            #[inline]
            fn wrapping_abs(self) -> Self {
                <$t>::abs(self)
            }
        }
    };
}

impl_integer_number!(i8);
impl_integer_number!(i16);
impl_integer_number!(i32);
impl_integer_number!(i64);
impl_float_number!(f32);
impl_float_number!(f64);
