//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and utility functions
//! used throughout the crate. It has zero internal dependencies outside itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Sparse degree → coefficient mapping.
pub mod terms;

/// Sequence generation, differencing and comparison.
pub mod sequence;
