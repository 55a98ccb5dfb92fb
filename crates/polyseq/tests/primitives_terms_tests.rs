#![cfg(feature = "dev")]
//! Tests for the sparse term mapping.
//!
//! These tests verify the `TermMap` operations used by both reconstruction
//! stages:
//! - Sparse lookup with zero defaults
//! - Hole filling and trimming
//! - Term-wise addition
//! - Polynomial evaluation
//!
//! ## Test Organization
//!
//! 1. **Lookup** - Coefficients, degree, dense conversion
//! 2. **Normalization** - fill_holes, trim
//! 3. **Arithmetic** - add
//! 4. **Evaluation** - evaluate, calculate

use approx::assert_relative_eq;

use polyseq::internals::primitives::terms::TermMap;

// ============================================================================
// Lookup Tests
// ============================================================================

/// Test that absent degrees read as zero.
#[test]
fn test_absent_degree_is_zero() {
    let mut terms = TermMap::new();
    terms.insert(3, 2.0f64);

    assert_eq!(terms.coefficient(3), 2.0);
    assert_eq!(terms.coefficient(0), 0.0);
    assert_eq!(terms.coefficient(7), 0.0);
    assert!(!terms.contains(0));
}

/// Test degree of empty and populated mappings.
#[test]
fn test_degree() {
    let empty: TermMap<f64> = TermMap::new();
    assert_eq!(empty.degree(), None);
    assert!(empty.is_empty());

    let terms = TermMap::from_coefficients(&[1.0f64, 0.0, 4.0]);
    assert_eq!(terms.degree(), Some(2));
    assert_eq!(terms.len(), 3);
}

/// Test that insert replaces an existing coefficient.
#[test]
fn test_insert_replaces() {
    let mut terms = TermMap::new();
    terms.insert(1, 5.0f64);
    terms.insert(1, -2.0);

    assert_eq!(terms.coefficient(1), -2.0);
    assert_eq!(terms.len(), 1);
}

/// Test iteration order is ascending by degree.
#[test]
fn test_iter_ascending() {
    let mut terms = TermMap::new();
    terms.insert(4, 1.0f64);
    terms.insert(0, 2.0);
    terms.insert(2, 3.0);

    let degrees: Vec<usize> = terms.iter().map(|(d, _)| d).collect();
    assert_eq!(degrees, vec![0, 2, 4]);
}

// ============================================================================
// Normalization Tests
// ============================================================================

/// Test hole filling materializes zeros below the top degree.
#[test]
fn test_fill_holes() {
    let mut terms = TermMap::new();
    terms.insert(3, 1.0f64);
    terms.insert(1, 2.0);
    terms.fill_holes();

    assert!(terms.contains(0));
    assert!(terms.contains(2));
    assert_eq!(terms.to_dense(), vec![0.0, 2.0, 0.0, 1.0]);
}

/// Test trimming drops only top zero coefficients.
#[test]
fn test_trim() {
    let mut terms = TermMap::from_coefficients(&[0.0f64, 1.0, 0.0, 0.0]);
    terms.trim();

    assert_eq!(terms.degree(), Some(1));
    // Lower zeros are kept
    assert!(terms.contains(0));
}

/// Test trimming an all-zero mapping empties it.
#[test]
fn test_trim_all_zero() {
    let mut terms = TermMap::from_coefficients(&[0.0f64, 0.0]);
    terms.trim();

    assert!(terms.is_empty());
}

// ============================================================================
// Arithmetic Tests
// ============================================================================

/// Test addition of mappings with different top degrees and holes.
#[test]
fn test_add_dense_result() {
    let mut a = TermMap::new();
    a.insert(0, 1.0f64);
    a.insert(3, 2.0);

    let mut b = TermMap::new();
    b.insert(1, -1.0f64);

    let sum = a.add(&b);
    assert_eq!(sum.to_dense(), vec![1.0, -1.0, 0.0, 2.0]);
    assert_eq!(sum.len(), 4);
}

/// Test addition with an empty mapping.
#[test]
fn test_add_empty() {
    let a = TermMap::from_coefficients(&[1.0f64, 2.0]);
    let empty = TermMap::new();

    assert_eq!(a.add(&empty).to_dense(), vec![1.0, 2.0]);
    assert_eq!(empty.add(&a).to_dense(), vec![1.0, 2.0]);
    assert!(empty.add(&TermMap::<f64>::new()).is_empty());
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test evaluation of a sparse polynomial.
#[test]
fn test_evaluate() {
    // 5x^7 + 2x^2 + 1
    let mut terms = TermMap::new();
    terms.insert(7, 5.0f64);
    terms.insert(2, 2.0);
    terms.insert(0, 1.0);

    assert_eq!(terms.evaluate(0.0), 1.0);
    assert_eq!(terms.evaluate(1.0), 8.0);
    assert_eq!(terms.evaluate(2.0), 649.0);
    assert_relative_eq!(terms.evaluate(0.5), 5.0 / 128.0 + 0.5 + 1.0, epsilon = 1e-12);
}

/// Test evaluation of the empty mapping.
#[test]
fn test_evaluate_zero_polynomial() {
    let terms: TermMap<f64> = TermMap::new();
    assert_eq!(terms.evaluate(3.0), 0.0);
}

/// Test calculate produces values at 0..n.
#[test]
fn test_calculate() {
    let terms = TermMap::from_coefficients(&[0.75f64, 0.5]);
    assert_eq!(terms.calculate(4), vec![0.75, 1.25, 1.75, 2.25]);
    assert!(terms.calculate(0).is_empty());
}

/// Test f32 support.
#[test]
fn test_f32_evaluate() {
    let terms = TermMap::from_coefficients(&[1.0f32, 0.0, 1.0]);
    assert_eq!(terms.evaluate(3.0), 10.0);
}
