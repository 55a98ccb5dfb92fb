//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit by coordinating validation, the two
//! reconstruction stages, and result assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for sequence analysis.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sequence analysis.
pub mod output;
