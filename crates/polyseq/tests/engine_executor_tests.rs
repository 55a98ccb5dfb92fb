#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! ## Test Organization
//!
//! 1. **Configuration** - Defaults
//! 2. **Pipeline** - Trimmed terms, passes, rounds
//! 3. **Validation** - Rejected inputs never reach the algorithms

use polyseq::internals::algorithms::corrector::MAX_CORRECTION_ROUNDS;
use polyseq::internals::engine::executor::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, FitConfig, FitExecutor,
};
use polyseq::internals::primitives::errors::PolyseqError;
use polyseq::internals::primitives::sequence::generate;

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test default configuration values.
#[test]
fn test_default_config() {
    let config: FitConfig<f64> = FitConfig::default();

    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(config.tolerance, 1e-3);
    assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    assert_eq!(config.max_iterations, 1000);
    assert_eq!(config.max_rounds, MAX_CORRECTION_ROUNDS);
    assert_eq!(config.max_rounds, 50);
}

// ============================================================================
// Pipeline Tests
// ============================================================================

/// Test that the executor trims zero top terms but keeps lower holes.
#[test]
fn test_cubic_pipeline() {
    let values = generate(|x: f64| x.powi(3) - x * x, 10);
    let output = FitExecutor::analyze(&values, &FitConfig::default()).unwrap();

    assert_eq!(output.terms.degree(), Some(3));
    assert_eq!(output.terms.coefficient(3), 1.0);
    assert_eq!(output.terms.coefficient(2), -1.0);
    assert_eq!(output.terms.coefficient(1), 0.0);
    assert_eq!(output.terms.coefficient(0), 0.0);
    assert_eq!(output.passes, 5);
    assert_eq!(output.rounds, 3);
    assert!(output.converged);
}

/// Test that the zero sequence yields an empty mapping.
#[test]
fn test_zero_pipeline() {
    let output = FitExecutor::analyze(&[0.0f64; 10], &FitConfig::default()).unwrap();

    assert!(output.terms.is_empty());
    assert_eq!(output.rounds, 0);
    assert!(output.converged);
}

/// Test that run_with_config honours a custom round cap.
#[test]
fn test_round_cap_respected() {
    let values = generate(|x: f64| x.powi(3) - x * x, 10);
    let config = FitConfig {
        max_rounds: 1,
        ..FitConfig::default()
    };
    let output = FitExecutor::run_with_config(&values, &config).unwrap();

    assert_eq!(output.rounds, 1);
    assert!(!output.converged);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that validation runs before the pipeline.
#[test]
fn test_analyze_validates() {
    let err = FitExecutor::analyze(&[1.0f64], &FitConfig::default()).unwrap_err();
    assert_eq!(err, PolyseqError::TooFewPoints { got: 1, min: 2 });

    let config = FitConfig {
        tolerance: 0.0,
        ..FitConfig::default()
    };
    let err = FitExecutor::analyze(&[1.0f64, 2.0], &config).unwrap_err();
    assert_eq!(err, PolyseqError::InvalidTolerance(0.0));

    let config = FitConfig {
        max_iterations: 0,
        ..FitConfig::<f64>::default()
    };
    let err = FitExecutor::analyze(&[1.0f64, 2.0], &config).unwrap_err();
    assert_eq!(err, PolyseqError::InvalidMaxIterations(0));
}
