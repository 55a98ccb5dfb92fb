//! Error types for sequence analysis.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while inferring a
//! polynomial from a sequence: input validation, configuration constraints,
//! and the safety caps that guard the differencing loops.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, limits, stages).
//! * **Deferred**: Builder problems are recorded and reported by `analyze()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Too few values, non-finite values.
//! 2. **Parameter validation**: Tolerance, iteration cap, variable symbol.
//! 3. **Safety aborts**: The differencing loops exceeded the iteration cap.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Iteration Stage
// ============================================================================

/// Loop that exhausted its iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationStage {
    /// Repeated differencing while searching for the degree of the top term.
    DegreeDiscovery,

    /// Term extraction passes over the shrinking residual.
    TermExtraction,
}

impl Display for IterationStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DegreeDiscovery => write!(f, "degree discovery"),
            Self::TermExtraction => write!(f, "term extraction"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sequence analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyseqError {
    /// The sequence is shorter than the minimum needed to take a difference.
    TooFewPoints {
        /// Number of values provided.
        got: usize,
        /// Minimum required values.
        min: usize,
    },

    /// A differencing loop ran past the configured cap without converging.
    ///
    /// The input is not well-approximated by a bounded-degree polynomial
    /// within the configured tolerance.
    IterationLimitExceeded {
        /// Loop that gave up.
        stage: IterationStage,
        /// Configured iteration cap.
        limit: usize,
    },

    /// Input sequence contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Iteration cap must allow at least one iteration.
    InvalidMaxIterations(usize),

    /// Variable symbol must be non-empty and free of whitespace.
    InvalidVariable(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PolyseqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::TooFewPoints { got, min } => {
                write!(f, "Sequence must contain at least {min} numbers (got {got})")
            }
            Self::IterationLimitExceeded { stage, limit } => {
                write!(
                    f,
                    "Maximum iterations reached! No solutions found. ({stage} exceeded {limit} iterations)"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidMaxIterations(iter) => {
                write!(f, "Invalid max_iterations: {iter} (must be at least 1)")
            }
            Self::InvalidVariable(symbol) => {
                write!(
                    f,
                    "Invalid variable: {symbol:?} (must be non-empty without whitespace)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PolyseqError {}
