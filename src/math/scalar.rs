//! Scalar helpers shared by every primitive.
//!
//! All functions are total. Comparisons use [`Real::eps`], so `equal` is a
//! neighbourhood predicate and not an equivalence relation.

use super::Real;

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad<T: Real>(degrees: T) -> T {
    degrees * T::pi() / nalgebra::convert(180.0)
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg<T: Real>(radians: T) -> T {
    radians * nalgebra::convert(180.0) / T::pi()
}

/// Returns the smaller of `a` and `b` (`b` when they compare equal).
#[must_use]
pub fn min<T: Real>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b` (`b` when they compare equal).
#[must_use]
pub fn max<T: Real>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `x` into `[lo, hi]` as `min(max(x, lo), hi)`.
#[must_use]
pub fn clamp<T: Real>(x: T, lo: T, hi: T) -> T {
    min(max(x, lo), hi)
}

/// Linear interpolation `a + t * (b - a)`. `t` is not clamped.
#[must_use]
pub fn lerp<T: Real>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// Absolute value.
#[must_use]
pub fn abs<T: Real>(x: T) -> T {
    if x < T::zero() {
        -x
    } else {
        x
    }
}

/// `x * x`.
#[must_use]
pub fn sqr<T: Real>(x: T) -> T {
    x * x
}

/// Two-valued sign: `-1` for negative input, `+1` otherwise (zero included).
#[must_use]
pub fn sign<T: Real>(x: T) -> T {
    if x < T::zero() {
        -T::one()
    } else {
        T::one()
    }
}

/// Tolerant equality: `|a - b| < eps`.
#[must_use]
pub fn equal<T: Real>(a: T, b: T) -> bool {
    abs(a - b) < T::eps()
}

/// Tolerant inequality: `|a - b| > eps`.
///
/// Not the negation of [`equal`]: a difference of exactly `eps` is neither.
#[must_use]
pub fn not_equal<T: Real>(a: T, b: T) -> bool {
    abs(a - b) > T::eps()
}
