//! Iterative correction of extracted terms.
//!
//! ## Purpose
//!
//! The differencer rounds every coefficient and subtracts shifted term
//! contributions, so its output rarely reproduces the input exactly. This
//! module closes the gap: it evaluates the current terms, runs the
//! differencer on the residual, and adds the resulting correction back in.
//!
//! ## Design notes
//!
//! * **Bounded**: At most `max_rounds` rounds (50 by default).
//! * **Best effort**: Exhausting the rounds is not an error; the last terms
//!   are returned with `converged = false`.
//! * **Dense combination**: Holes are filled before the first round so that
//!   additions are defined for every degree up to the top.
//!
//! ## Invariants
//!
//! * The reconstructed sequence always has the original's length.
//! * Convergence means exact element-wise equality.
//!
//! ## Non-goals
//!
//! * This module does not trim the returned terms (handled by the executor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::differencer::Differencer;
use crate::primitives::errors::PolyseqError;
use crate::primitives::sequence::sequences_match;
use crate::primitives::terms::TermMap;

/// Upper bound on correction rounds.
pub const MAX_CORRECTION_ROUNDS: usize = 50;

// ============================================================================
// Output
// ============================================================================

/// Result of a correction run.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectorOutput<T> {
    /// Corrected terms (hole-filled, not trimmed).
    pub terms: TermMap<T>,

    /// Number of corrections applied.
    pub rounds: usize,

    /// Whether the terms reproduce the original sequence exactly.
    pub converged: bool,
}

// ============================================================================
// Corrector
// ============================================================================

/// Residual-driven term corrector.
#[derive(Debug, Clone, Copy)]
pub struct Corrector<T> {
    /// Differencer applied to each residual.
    pub differencer: Differencer<T>,

    /// Maximum number of correction rounds.
    pub max_rounds: usize,
}

impl<T: Float> Corrector<T> {
    /// Create a corrector with the default round cap.
    pub fn new(differencer: Differencer<T>) -> Self {
        Self {
            differencer,
            max_rounds: MAX_CORRECTION_ROUNDS,
        }
    }

    /// Set the round cap.
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Correct `terms` until they reproduce `original` or the rounds run out.
    pub fn run(
        &self,
        original: &[T],
        terms: TermMap<T>,
    ) -> Result<CorrectorOutput<T>, PolyseqError> {
        let n = original.len();
        let mut current = terms;
        current.fill_holes();

        for round in 0..self.max_rounds {
            let reconstructed = current.calculate(n);
            if sequences_match(original, &current, &reconstructed, &current) {
                return Ok(CorrectorOutput {
                    terms: current,
                    rounds: round,
                    converged: true,
                });
            }

            let delta: Vec<T> = original
                .iter()
                .zip(reconstructed.iter())
                .map(|(&o, &r)| o - r)
                .collect();

            let correction = self.differencer.run(&delta)?.terms;
            current = current.add(&correction);
        }

        let reconstructed = current.calculate(n);
        let converged = sequences_match(original, &current, &reconstructed, &current);

        Ok(CorrectorOutput {
            terms: current,
            rounds: self.max_rounds,
            converged,
        })
    }
}
