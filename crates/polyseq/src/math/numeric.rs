//! Numeric helpers shared by the differencing stages.
//!
//! Sums, averages, fixed-place rounding and factorials, all generic over
//! `Float`. The empty-slice average is defined as zero so that a sequence
//! differenced down to nothing never produces a division by zero.

// External dependencies
use num_traits::Float;

/// Decimal places kept when rounding extracted coefficients.
pub const ROUNDING_PLACES: i32 = 11;

/// Sum of `values`, accumulated left to right.
#[inline]
pub fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Arithmetic mean of `values`; zero for an empty slice.
#[inline]
pub fn average<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let n = T::from(values.len()).unwrap_or(T::one());
    sum(values) / n
}

/// Round `x` half-up to `places` decimal places.
pub fn round_places<T: Float>(x: T, places: i32) -> T {
    let ten = T::from(10.0).unwrap_or(T::one());
    let half = T::from(0.5).unwrap_or(T::zero());
    let scale = ten.powi(places);
    (x * scale + half).floor() / scale
}

/// `n!` as a float.
pub fn factorial<T: Float>(n: usize) -> T {
    (2..=n).fold(T::one(), |acc, k| acc * T::from(k).unwrap_or(T::one()))
}

