//! Execution engine for sequence analysis.
//!
//! ## Purpose
//!
//! This module orchestrates a complete fit: it validates the sequence, runs
//! the differencer, hands its terms to the corrector, and trims the result.
//!
//! ## Design notes
//!
//! * Configuration is carried per call in [`FitConfig`]; there is no
//!   process-wide state, so independent fits never interact.
//! * The corrector reuses the fit's own tolerance and iteration cap when it
//!   differences residuals.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Returned terms are trimmed: the top stored coefficient is non-zero.
//! * Errors from either stage propagate unchanged.
//!
//! ## Non-goals
//!
//! * This module does not render or format results.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::corrector::{Corrector, MAX_CORRECTION_ROUNDS};
use crate::algorithms::differencer::Differencer;
use crate::engine::validator::Validator;
use crate::primitives::errors::PolyseqError;
use crate::primitives::terms::TermMap;

/// Default slope/residual tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Default cap on differencing iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig<T> {
    /// Tolerance for degree discovery and term extraction.
    pub tolerance: T,

    /// Cap on differencing and extraction iterations.
    pub max_iterations: usize,

    /// Cap on correction rounds.
    pub max_rounds: usize,
}

impl<T: Float> Default for FitConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_rounds: MAX_CORRECTION_ROUNDS,
        }
    }
}

/// Output from a fit.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Final, trimmed terms.
    pub terms: TermMap<T>,

    /// Extraction passes taken by the initial differencing run.
    pub passes: usize,

    /// Correction rounds applied.
    pub rounds: usize,

    /// Whether the terms reproduce the sequence exactly.
    pub converged: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for sequence analysis.
pub struct FitExecutor;

impl FitExecutor {
    /// Validate `values` and `config`, then run the full pipeline.
    pub fn analyze<T: Float>(
        values: &[T],
        config: &FitConfig<T>,
    ) -> Result<ExecutorOutput<T>, PolyseqError> {
        Validator::validate_sequence(values)?;
        Validator::validate_tolerance(config.tolerance)?;
        Validator::validate_max_iterations(config.max_iterations)?;

        Self::run_with_config(values, config)
    }

    /// Run differencing followed by correction on an already validated sequence.
    pub fn run_with_config<T: Float>(
        values: &[T],
        config: &FitConfig<T>,
    ) -> Result<ExecutorOutput<T>, PolyseqError> {
        let differencer = Differencer::new(config.tolerance, config.max_iterations);
        let extracted = differencer.run(values)?;

        let corrected = Corrector::new(differencer)
            .max_rounds(config.max_rounds)
            .run(values, extracted.terms)?;

        let mut terms = corrected.terms;
        terms.trim();

        Ok(ExecutorOutput {
            terms,
            passes: extracted.passes,
            rounds: corrected.rounds,
            converged: corrected.converged,
        })
    }
}
