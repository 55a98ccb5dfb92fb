//! Term extraction by repeated finite differencing.
//!
//! ## Purpose
//!
//! This module recovers candidate polynomial terms from a sequence, one
//! degree per pass, highest degree first.
//!
//! ## Design notes
//!
//! * **Degree discovery**: The working sequence is differenced until the
//!   average of its differences is small relative to its own average. The
//!   number of differencing steps taken, minus one, is the degree.
//! * **Coefficient**: The average of the flattened level divided by `degree!`,
//!   rounded to 11 decimal places to keep float noise out of later slope tests.
//! * **Residual**: The term's contribution `c * (i + 1)^degree` is subtracted
//!   from the pass sequence; the residual seeds the next pass.
//! * **Termination**: Passes continue while the flattened level average is at
//!   least the tolerance, or negative.
//!
//! ## Invariants
//!
//! * The input has at least 2 values (checked by the validator).
//! * Tolerance is positive and finite.
//! * Neither loop runs more than `max_iterations + 1` times.
//!
//! ## Non-goals
//!
//! * This module does not correct rounding drift (see `corrector`).
//! * This module does not validate its input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::numeric::{ROUNDING_PLACES, average, factorial, round_places};
use crate::primitives::errors::{IterationStage, PolyseqError};
use crate::primitives::sequence::forward_differences;
use crate::primitives::terms::{TermMap, index_to_float};

// ============================================================================
// Output
// ============================================================================

/// Level at which repeated differencing flattened out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatLevel<T> {
    /// Degree of the isolated term.
    pub degree: usize,

    /// Average of the sequence at the flattened level.
    pub average: T,

    /// Length of the sequence at the flattened level.
    pub len: usize,
}

/// Result of a differencing run.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferencerOutput<T> {
    /// Extracted terms.
    pub terms: TermMap<T>,

    /// Number of extraction passes performed.
    pub passes: usize,
}

// ============================================================================
// Differencer
// ============================================================================

/// Finite-difference term extractor.
#[derive(Debug, Clone, Copy)]
pub struct Differencer<T> {
    /// Slope threshold for degree discovery and residual threshold for extraction.
    pub tolerance: T,

    /// Cap on both the differencing and the extraction loops.
    pub max_iterations: usize,
}

impl<T: Float> Differencer<T> {
    /// Create a differencer with the given tolerance and iteration cap.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Extract a term mapping from `sequence`.
    pub fn run(&self, sequence: &[T]) -> Result<DifferencerOutput<T>, PolyseqError> {
        let mut terms = TermMap::new();
        let mut pass_sequence = sequence.to_vec();
        let mut passes = 0;

        loop {
            let level = self.discover_degree(&pass_sequence)?;

            let coefficient = round_places(
                level.average / factorial::<T>(level.degree),
                ROUNDING_PLACES,
            );

            // A negative level may hide further terms below this one.
            let negative = level.average < T::zero();

            pass_sequence =
                remove_term(&pass_sequence[..level.len], coefficient, level.degree);

            if coefficient != T::zero() {
                terms.insert(level.degree, coefficient);
            }

            passes += 1;
            if passes > self.max_iterations {
                return Err(PolyseqError::IterationLimitExceeded {
                    stage: IterationStage::TermExtraction,
                    limit: self.max_iterations,
                });
            }

            if !(level.average >= self.tolerance || negative) {
                break;
            }
        }

        Ok(DifferencerOutput { terms, passes })
    }

    /// Difference `sequence` until its slope falls below the tolerance.
    ///
    /// A NaN slope (zero over zero) also ends the search.
    pub fn discover_degree(&self, sequence: &[T]) -> Result<FlatLevel<T>, PolyseqError> {
        let mut working = sequence.to_vec();
        let mut iterations = 0;

        loop {
            let len = working.len();
            let diffs = forward_differences(&working);
            let level_average = average(&working);
            let slope = average(&diffs) / level_average;
            working = diffs;

            if iterations > self.max_iterations {
                return Err(PolyseqError::IterationLimitExceeded {
                    stage: IterationStage::DegreeDiscovery,
                    limit: self.max_iterations,
                });
            }
            iterations += 1;

            if !(slope >= self.tolerance) {
                return Ok(FlatLevel {
                    degree: iterations - 1,
                    average: level_average,
                    len,
                });
            }
        }
    }
}

/// Subtract `coefficient * (i + 1)^degree` from each element.
fn remove_term<T: Float>(values: &[T], coefficient: T, degree: usize) -> Vec<T> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| v - coefficient * index_to_float::<T>(i + 1).powi(degree as i32))
        .collect()
}
