//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric helpers used by the differencing
//! stages: summation, averaging, fixed-place rounding and factorials.
//!
//! These are reusable building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sum, average, rounding and factorial.
pub mod numeric;
