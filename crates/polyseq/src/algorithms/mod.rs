//! Layer 3: Algorithms
//!
//! This layer implements the two reconstruction stages: finite-difference
//! term extraction and residual-driven correction. It is orchestrated by the
//! engine layer.

// Term extraction by repeated finite differencing.
pub mod differencer;

// Iterative correction of rounding drift.
pub mod corrector;
