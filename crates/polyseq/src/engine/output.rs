//! Output types for sequence analysis.
//!
//! ## Purpose
//!
//! This module defines [`SequenceFit`], the result of analyzing a sequence.
//! It owns the sequence and the inferred terms, and answers every query the
//! caller can make afterwards: rendering, evaluation, extrapolation and
//! re-analysis.
//!
//! ## Design notes
//!
//! * **Data-driven evaluator**: `to_function` returns a closure folding over
//!   a copy of the term mapping; nothing is compiled from text.
//! * **Self-contained**: The resolved configuration travels with the result,
//!   so `analyze` can be re-run without the original builder.
//! * **Ergonomics**: Implements `Display` for a human-readable report.
//!
//! ## Invariants
//!
//! * `terms` is trimmed.
//! * `diagnostics` describe `terms` against `sequence` as of the last analysis.
//!
//! ## Non-goals
//!
//! * This module does not perform the reconstruction itself.

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
use core::fmt::{Display, Formatter, LowerExp, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorOutput, FitConfig, FitExecutor};
use crate::evaluation::diagnostics::FitDiagnostics;
use crate::evaluation::render::PolynomialFormatter;
use crate::primitives::errors::PolyseqError;
use crate::primitives::sequence::sequences_match;
use crate::primitives::terms::{TermMap, index_to_float};

// ============================================================================
// Result Structure
// ============================================================================

/// Analyzed sequence together with its inferred polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceFit<T> {
    /// Sequence values at inputs `0..n`.
    pub sequence: Vec<T>,

    /// Inferred degree → coefficient mapping.
    pub terms: TermMap<T>,

    /// Symbol used when rendering the polynomial.
    pub variable: String,

    /// Configuration the fit was produced with.
    pub config: FitConfig<T>,

    /// Extraction passes taken by the initial differencing run.
    pub passes_used: usize,

    /// Correction rounds applied.
    pub rounds_used: usize,

    /// Whether the terms reproduce the sequence exactly.
    pub converged: bool,

    /// Reconstruction quality metrics.
    pub diagnostics: FitDiagnostics<T>,
}

impl<T: Float> SequenceFit<T> {
    /// Assemble a fit from executor output.
    pub(crate) fn from_output(
        sequence: Vec<T>,
        variable: String,
        config: FitConfig<T>,
        output: ExecutorOutput<T>,
    ) -> Self {
        let fitted = output.terms.calculate(sequence.len());
        let diagnostics = FitDiagnostics::compute(&sequence, &fitted);

        Self {
            sequence,
            terms: output.terms,
            variable,
            config,
            passes_used: output.passes,
            rounds_used: output.rounds,
            converged: output.converged,
            diagnostics,
        }
    }

    /// Re-run the analysis on the stored sequence with the stored configuration.
    ///
    /// Analyzing the same sequence again yields the same terms.
    pub fn analyze(self) -> core::result::Result<Self, PolyseqError> {
        let output = FitExecutor::analyze(&self.sequence, &self.config)?;
        Ok(Self::from_output(
            self.sequence,
            self.variable,
            self.config,
            output,
        ))
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// The stored sequence (including any values appended by [`next`](Self::next)).
    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    /// The inferred term mapping.
    pub fn terms(&self) -> &TermMap<T> {
        &self.terms
    }

    /// Degree of the inferred polynomial; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.terms.degree()
    }

    /// Evaluate the inferred polynomial at `x`.
    pub fn at(&self, x: T) -> T {
        self.terms.evaluate(x)
    }

    /// Standalone evaluator equivalent to [`at`](Self::at).
    pub fn to_function(&self) -> impl Fn(T) -> T + use<T> {
        let terms = self.terms.clone();
        move |x| terms.evaluate(x)
    }

    /// Value at the position just past the stored sequence.
    ///
    /// With `append`, the value is pushed onto the stored sequence.
    pub fn next(&mut self, append: bool) -> T {
        let value = self.at(index_to_float(self.sequence.len()));
        if append {
            self.sequence.push(value);
        }
        value
    }

    /// Evaluate the inferred polynomial at inputs `0..n`.
    pub fn calculate(&self, n: usize) -> Vec<T> {
        self.terms.calculate(n)
    }

    /// Whether two fits describe the same sequence.
    ///
    /// The shorter sequence is extended with its own polynomial before the
    /// element-wise comparison.
    pub fn matches(&self, other: &Self) -> bool {
        sequences_match(&self.sequence, &self.terms, &other.sequence, &other.terms)
    }
}

impl<T: Float + Display + LowerExp> SequenceFit<T> {
    /// Display adapter for the inferred polynomial.
    pub fn polynomial(&self) -> PolynomialFormatter<'_, T> {
        PolynomialFormatter::new(&self.terms, &self.variable)
    }

    /// Canonical string form of the inferred polynomial, e.g. `5x^7+2x^2+1`.
    pub fn to_polynomial_string(&self) -> String {
        self.polynomial().to_string()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + LowerExp> Display for SequenceFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.sequence.len())?;
        match self.degree() {
            Some(d) => writeln!(f, "  Degree:      {}", d)?,
            None => writeln!(f, "  Degree:      none")?,
        }
        writeln!(f, "  Passes:      {}", self.passes_used)?;
        writeln!(f, "  Corrections: {}", self.rounds_used)?;
        writeln!(f, "  Converged:   {}", self.converged)?;
        writeln!(f)?;

        writeln!(f, "Polynomial:")?;
        writeln!(f, "  {}", self.polynomial())?;
        writeln!(f)?;

        writeln!(f, "{}", self.diagnostics)?;

        writeln!(f, "Sequence:")?;
        writeln!(
            f,
            "{:>8} {:>14} {:>14} {:>14}",
            "N", "Original", "Fitted", "Residual"
        )?;
        writeln!(f, "{:-<width$}", "", width = 53)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.sequence.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            let original = self.sequence[idx];
            let fitted = self.at(index_to_float(idx));
            writeln!(
                f,
                "{:>8} {:>14.6} {:>14.6} {:>14.6}",
                idx,
                original,
                fitted,
                original - fitted
            )?;
        }

        Ok(())
    }
}
