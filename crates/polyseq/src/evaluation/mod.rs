//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing of a finished fit:
//! - Canonical polynomial rendering
//! - Reconstruction diagnostics
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial string rendering.
pub mod render;

/// Residual-based fit metrics.
pub mod diagnostics;
