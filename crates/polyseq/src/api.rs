//! High-level API for polynomial inference.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder that owns the sequence, collects configuration, and runs
//! the analysis.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Per-instance**: Every builder carries its own configuration.
//! * **Validated**: Parameters are validated when `.analyze()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SequenceBuilder`] via `Sequence::new(values)`.
//! 2. Chain configuration methods (`.tolerance()`, `.max_iterations()`, `.variable()`).
//! 3. Call `.analyze()` to obtain a [`SequenceFit`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::SequenceFit;
pub use crate::evaluation::diagnostics::FitDiagnostics;
pub use crate::evaluation::render::PolynomialFormatter;
pub use crate::primitives::errors::{IterationStage, PolyseqError};
pub use crate::primitives::sequence::{generate, generate_default};
pub use crate::primitives::terms::TermMap;

/// Default symbol used when rendering polynomials.
pub const DEFAULT_VARIABLE: &str = "x";

/// Fluent builder for configuring and running sequence analysis.
#[derive(Debug, Clone)]
pub struct SequenceBuilder<T> {
    /// Sequence values at inputs `0..n`.
    pub values: Vec<T>,

    /// Tolerance for degree discovery and term extraction.
    pub tolerance: Option<T>,

    /// Cap on differencing iterations.
    pub max_iterations: Option<usize>,

    /// Symbol used in the rendered polynomial.
    pub variable: Option<String>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> SequenceBuilder<T> {
    /// Create a builder for `values` with default settings.
    pub fn new(values: impl Into<Vec<T>>) -> Self {
        Self {
            values: values.into(),
            tolerance: None,
            max_iterations: None,
            variable: None,
            duplicate_param: None,
        }
    }

    /// Set the tolerance (default `1e-3`).
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the iteration cap for the differencing loops (default `1000`).
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the symbol used when rendering the polynomial (default `"x"`).
    pub fn variable(mut self, symbol: impl Into<String>) -> Self {
        if self.variable.is_some() {
            self.duplicate_param = Some("variable");
        }
        self.variable = Some(symbol.into());
        self
    }

    /// Infer the generating polynomial.
    ///
    /// # Errors
    ///
    /// * [`PolyseqError::TooFewPoints`] if fewer than 2 values were given.
    /// * [`PolyseqError::IterationLimitExceeded`] if no bounded-degree
    ///   polynomial fits within the tolerance.
    /// * Configuration errors for invalid or duplicated settings.
    pub fn analyze(self) -> Result<SequenceFit<T>, PolyseqError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let variable = self
            .variable
            .unwrap_or_else(|| DEFAULT_VARIABLE.to_string());
        Validator::validate_variable(&variable)?;

        let mut config = FitConfig::default();
        if let Some(tol) = self.tolerance {
            config.tolerance = tol;
        }
        if let Some(max_iter) = self.max_iterations {
            config.max_iterations = max_iter;
        }

        let output = FitExecutor::analyze(&self.values, &config)?;
        Ok(SequenceFit::from_output(self.values, variable, config, output))
    }
}
