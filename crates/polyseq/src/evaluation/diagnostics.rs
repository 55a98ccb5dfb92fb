//! Fit quality metrics.
//!
//! ## Purpose
//!
//! This module summarizes how well a term mapping reproduces the sequence it
//! was inferred from. A converged fit has all-zero residuals; anything else
//! indicates that the correction rounds ran out.
//!
//! ## Key concepts
//!
//! * **Residual**: `original[i] - fitted[i]`.
//! * **Max absolute residual**: Worst single-point error.
//! * **RMSE**: `sqrt(mean(residual^2))`.
//! * **Exact**: Every residual is exactly zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::numeric::average;

// ============================================================================
// Diagnostics
// ============================================================================

/// Reconstruction quality of a fitted polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDiagnostics<T> {
    /// Largest absolute residual.
    pub max_abs_residual: T,

    /// Root mean squared residual.
    pub rmse: T,

    /// Whether every residual is exactly zero.
    pub exact: bool,
}

impl<T: Float> FitDiagnostics<T> {
    /// Compute diagnostics from original and fitted values.
    pub fn compute(original: &[T], fitted: &[T]) -> Self {
        let residuals = residuals(original, fitted);

        let max_abs_residual = residuals
            .iter()
            .fold(T::zero(), |acc, &r| acc.max(r.abs()));

        let squared: Vec<T> = residuals.iter().map(|&r| r * r).collect();
        let rmse = average(&squared).sqrt();

        Self {
            max_abs_residual,
            rmse,
            exact: residuals.iter().all(|&r| r == T::zero()),
        }
    }
}

/// Element-wise `original - fitted`.
pub fn residuals<T: Float>(original: &[T], fitted: &[T]) -> Vec<T> {
    original
        .iter()
        .zip(fitted.iter())
        .map(|(&o, &f)| o - f)
        .collect()
}

impl<T: Float + Display> Display for FitDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  Max |residual|: {}", self.max_abs_residual)?;
        writeln!(f, "  RMSE:           {}", self.rmse)?;
        writeln!(f, "  Exact:          {}", self.exact)
    }
}
