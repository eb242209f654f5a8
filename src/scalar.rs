//! Rounding, clamping and comparison of scalars of any [`Number`] kind.
//!
//! Rounding leaves integer kinds untouched.

use crate::num::Number;

/// Rounds to the nearest whole number, with halfway cases rounded away from
/// zero.
#[inline]
pub fn round<T: Number>(value: T) -> T {
    if T::IS_FLOAT {
        T::from_f64(value.to_f64().round())
    } else {
        value
    }
}

/// Rounds toward negative infinity.
#[inline]
pub fn floor<T: Number>(value: T) -> T {
    if T::IS_FLOAT {
        T::from_f64(value.to_f64().floor())
    } else {
        value
    }
}

/// Rounds toward positive infinity.
#[inline]
pub fn ceil<T: Number>(value: T) -> T {
    if T::IS_FLOAT {
        T::from_f64(value.to_f64().ceil())
    } else {
        value
    }
}

/// Restricts `value` to the range `[lower, upper]`.
///
/// The lower bound is applied before the upper bound, so the result is
/// `upper` whenever `lower > upper`. Unlike [`f64::clamp`] this never panics.
#[inline]
pub fn clamp<T: Number>(value: T, lower: T, upper: T) -> T {
    min(max(value, lower), upper)
}

/// Returns the smaller of the two values, or NaN if either is NaN.
#[inline]
pub fn min<T: Number>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        return nan_of(a, b);
    }
    if b < a { b } else { a }
}

/// Returns the larger of the two values, or NaN if either is NaN.
#[inline]
pub fn max<T: Number>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        return nan_of(a, b);
    }
    if b > a { b } else { a }
}

#[inline]
fn nan_of<T: Number>(a: T, b: T) -> T {
    if a.is_nan() { a } else { b }
}
