//! Input validation for sequence analysis.
//!
//! ## Purpose
//!
//! This module validates the input sequence and the analysis configuration
//! before any differencing takes place.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Minimum length**: A forward difference needs at least 2 values.
//! * **Finite Checks**: NaN or infinite values would poison every average.
//! * **Parameter Bounds**: Tolerance > 0, at least one iteration, a usable symbol.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyseqError;

/// Minimum sequence length accepted by `analyze()`.
pub const MIN_SEQUENCE_LEN: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sequences and analysis configuration.
///
/// All methods return `Result<(), PolyseqError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate a sequence for analysis.
    pub fn validate_sequence<T: Float>(values: &[T]) -> Result<(), PolyseqError> {
        // Check 1: Enough values to take a difference
        if values.len() < MIN_SEQUENCE_LEN {
            return Err(PolyseqError::TooFewPoints {
                got: values.len(),
                min: MIN_SEQUENCE_LEN,
            });
        }

        // Check 2: All values finite
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PolyseqError::InvalidNumericValue(format!(
                "values[{}]={}",
                i,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), PolyseqError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(PolyseqError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), PolyseqError> {
        if max_iterations == 0 {
            return Err(PolyseqError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the variable symbol used for rendering.
    pub fn validate_variable(symbol: &str) -> Result<(), PolyseqError> {
        if symbol.is_empty() || symbol.chars().any(char::is_whitespace) {
            return Err(PolyseqError::InvalidVariable(symbol.to_string()));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PolyseqError> {
        if let Some(param) = duplicate_param {
            return Err(PolyseqError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
