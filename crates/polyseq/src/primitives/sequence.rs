//! Sequence utilities.
//!
//! ## Purpose
//!
//! This module provides the sequence-level building blocks: generating a
//! sequence from a function of the index, taking forward differences, and
//! comparing two sequences that may have different lengths.
//!
//! ## Key concepts
//!
//! * **Sequence**: Values of a polynomial sampled at inputs `0, 1, 2, ...`.
//! * **Forward difference**: `d[i] = s[i + 1] - s[i]`, one element shorter.
//! * **Padded comparison**: The shorter sequence is extended by evaluating
//!   its own term mapping at the missing indices before comparing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::terms::{TermMap, index_to_float};

/// Number of values produced by [`generate_default`].
pub const DEFAULT_GENERATE_LEN: usize = 10;

// ============================================================================
// Generation
// ============================================================================

/// Generate `n` values by applying `f` to the indices `0..n`.
pub fn generate<T, F>(f: F, n: usize) -> Vec<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    (0..n).map(|i| f(index_to_float(i))).collect()
}

/// Generate [`DEFAULT_GENERATE_LEN`] values by applying `f` to `0..10`.
pub fn generate_default<T, F>(f: F) -> Vec<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    generate(f, DEFAULT_GENERATE_LEN)
}

// ============================================================================
// Differencing
// ============================================================================

/// Consecutive forward differences of `values`.
///
/// Sequences with fewer than two elements yield an empty result.
pub fn forward_differences<T: Float>(values: &[T]) -> Vec<T> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

// ============================================================================
// Comparison
// ============================================================================

/// Exact element-wise comparison of two sequences.
///
/// When the lengths differ, the shorter side is padded by evaluating its own
/// term mapping at the missing indices.
pub fn sequences_match<T: Float>(
    lhs: &[T],
    lhs_terms: &TermMap<T>,
    rhs: &[T],
    rhs_terms: &TermMap<T>,
) -> bool {
    let n = lhs.len().max(rhs.len());
    (0..n).all(|i| value_at(lhs, lhs_terms, i) == value_at(rhs, rhs_terms, i))
}

#[inline]
fn value_at<T: Float>(values: &[T], terms: &TermMap<T>, i: usize) -> T {
    match values.get(i) {
        Some(&v) => v,
        None => terms.evaluate(index_to_float(i)),
    }
}
