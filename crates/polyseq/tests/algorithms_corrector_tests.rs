#![cfg(feature = "dev")]
//! Tests for residual-driven correction.
//!
//! ## Test Organization
//!
//! 1. **Convergence** - Rounds needed for known polynomials
//! 2. **Round Cap** - Best-effort output when rounds run out
//! 3. **Error Propagation** - Differencer failures on residuals

use polyseq::internals::algorithms::corrector::{Corrector, MAX_CORRECTION_ROUNDS};
use polyseq::internals::algorithms::differencer::Differencer;
use polyseq::internals::primitives::errors::{IterationStage, PolyseqError};
use polyseq::internals::primitives::sequence::generate;
use polyseq::internals::primitives::terms::TermMap;

fn corrector() -> Corrector<f64> {
    Corrector::new(Differencer::new(1e-3, 1000))
}

fn extract(values: &[f64]) -> TermMap<f64> {
    Differencer::new(1e-3, 1000).run(values).unwrap().terms
}

// ============================================================================
// Convergence Tests
// ============================================================================

/// Test that already-exact terms need no rounds.
#[test]
fn test_exact_terms_zero_rounds() {
    let values = generate(|_| 3.0, 10);
    let output = corrector().run(&values, extract(&values)).unwrap();

    assert!(output.converged);
    assert_eq!(output.rounds, 0);
    assert_eq!(output.terms.to_dense(), vec![3.0]);
}

/// Test that one round repairs the shifted constant of identity.
#[test]
fn test_identity_one_round() {
    let values = generate(|x: f64| x, 10);
    let output = corrector().run(&values, extract(&values)).unwrap();

    assert!(output.converged);
    assert_eq!(output.rounds, 1);
    assert_eq!(output.terms.to_dense(), vec![0.0, 1.0]);
}

/// Test the cubic example converges in three rounds.
#[test]
fn test_cubic_three_rounds() {
    let values = generate(|x: f64| x.powi(3) - x * x, 10);
    let output = corrector().run(&values, extract(&values)).unwrap();

    assert!(output.converged);
    assert_eq!(output.rounds, 3);
    assert_eq!(output.terms.to_dense(), vec![0.0, 0.0, -1.0, 1.0]);
}

/// Test correction with only two values.
#[test]
fn test_two_values() {
    let values = [1.0, 3.0];
    let output = corrector().run(&values, extract(&values)).unwrap();

    assert!(output.converged);
    assert_eq!(output.rounds, 1);
    assert_eq!(output.terms.to_dense(), vec![1.0, 2.0]);
}

/// Test that holes are filled before correction.
#[test]
fn test_holes_filled() {
    let values = generate(|x: f64| x * x * x, 6);
    let mut terms = TermMap::new();
    terms.insert(3, 1.0);

    let output = corrector().run(&values, terms).unwrap();

    assert!(output.converged);
    assert_eq!(output.rounds, 0);
    assert_eq!(output.terms.len(), 4);
}

// ============================================================================
// Round Cap Tests
// ============================================================================

/// Test that exhausting the rounds is not an error.
#[test]
fn test_zero_round_cap() {
    let values = generate(|x: f64| x, 10);
    let output = corrector()
        .max_rounds(0)
        .run(&values, extract(&values))
        .unwrap();

    assert!(!output.converged);
    assert_eq!(output.rounds, 0);
    assert_eq!(output.terms.to_dense(), vec![-1.0, 1.0]);
}

/// Test that an irrational polynomial returns best-effort terms.
#[test]
fn test_irrational_best_effort() {
    let sqrt2 = core::f64::consts::SQRT_2;
    let pi = core::f64::consts::PI;
    let values = generate(|x: f64| sqrt2 * x + pi, 10);

    let output = corrector().run(&values, extract(&values)).unwrap();

    assert!(!output.converged);
    assert_eq!(output.rounds, MAX_CORRECTION_ROUNDS);
    assert!((output.terms.coefficient(1) - sqrt2).abs() < 1e-9);
    assert!((output.terms.coefficient(0) - pi).abs() < 1e-9);
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

/// Test that a failing residual analysis surfaces its error.
#[test]
fn test_residual_error_propagates() {
    // Terms far from the sequence leave an exponential residual.
    let values = generate(|x: f64| x.exp(), 10);
    let err = Corrector::new(Differencer::new(1e-3, 10))
        .run(&values, TermMap::new())
        .unwrap_err();

    assert!(matches!(
        err,
        PolyseqError::IterationLimitExceeded {
            stage: IterationStage::TermExtraction,
            ..
        }
    ));
}
