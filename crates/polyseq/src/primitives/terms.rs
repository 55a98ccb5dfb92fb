//! Sparse term mapping for polynomials.
//!
//! ## Purpose
//!
//! This module provides [`TermMap`], the degree → coefficient representation
//! that the differencing and correction stages build up, and that every
//! query on a fitted sequence reads from.
//!
//! ## Design notes
//!
//! * **Sparse**: Backed by an ordered map; absent degrees contribute zero.
//! * **Ordered**: Iteration is always in ascending degree order, which fixes
//!   the floating-point summation order used by evaluation.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Holes**: Degrees below the top that have no entry.
//! * **Filling**: Holes are materialized as explicit zeros before combination.
//! * **Trimming**: Zero coefficients at the top are dropped before results
//!   are handed out.
//!
//! ## Invariants
//!
//! * Keys are polynomial degrees (exponents of the input variable).
//! * `coefficient(d)` is zero for any degree without an entry.
//! * After `trim`, the highest stored coefficient is non-zero (or the map is empty).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Term Map
// ============================================================================

/// Sparse mapping from polynomial degree to coefficient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermMap<T> {
    terms: BTreeMap<usize, T>,
}

impl<T: Float> TermMap<T> {
    /// Create an empty term mapping (the zero polynomial).
    pub fn new() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Build a term mapping from dense coefficients, where index = degree.
    ///
    /// Zero entries are kept, so the result is dense up to `coefficients.len() - 1`.
    pub fn from_coefficients(coefficients: &[T]) -> Self {
        Self {
            terms: coefficients.iter().copied().enumerate().collect(),
        }
    }

    /// Set the coefficient for `degree`, replacing any previous entry.
    pub fn insert(&mut self, degree: usize, coefficient: T) {
        self.terms.insert(degree, coefficient);
    }

    /// Coefficient of `degree`, or zero when the degree has no entry.
    #[inline]
    pub fn coefficient(&self, degree: usize) -> T {
        self.terms.get(&degree).copied().unwrap_or_else(T::zero)
    }

    /// Whether an entry (possibly zero) is stored for `degree`.
    pub fn contains(&self, degree: usize) -> bool {
        self.terms.contains_key(&degree)
    }

    /// Highest stored degree, if any.
    pub fn degree(&self) -> Option<usize> {
        self.terms.keys().next_back().copied()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over stored `(degree, coefficient)` pairs in ascending degree order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, T)> + '_ {
        self.terms.iter().map(|(&d, &c)| (d, c))
    }

    /// Dense coefficients up to the highest stored degree (index = degree).
    pub fn to_dense(&self) -> Vec<T> {
        match self.degree() {
            Some(top) => (0..=top).map(|d| self.coefficient(d)).collect(),
            None => Vec::new(),
        }
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Insert explicit zeros for every missing degree below the top.
    pub fn fill_holes(&mut self) {
        if let Some(top) = self.degree() {
            for d in 0..top {
                self.terms.entry(d).or_insert_with(T::zero);
            }
        }
    }

    /// Drop zero coefficients from the top until a non-zero one is reached.
    pub fn trim(&mut self) {
        while let Some(entry) = self.terms.last_entry() {
            if *entry.get() != T::zero() {
                break;
            }
            entry.remove();
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Term-wise sum of two mappings.
    ///
    /// Both operands are treated as dense up to their own top degree; the
    /// result is dense up to the larger of the two.
    pub fn add(&self, other: &Self) -> Self {
        let top = match (self.degree(), other.degree()) {
            (Some(a), Some(b)) => a.max(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => return Self::new(),
        };

        let mut sum = Self::new();
        for d in 0..=top {
            sum.insert(d, self.coefficient(d) + other.coefficient(d));
        }
        sum
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the polynomial at `x`.
    ///
    /// Terms are summed in ascending degree order; zero coefficients are
    /// skipped and the constant term contributes its coefficient directly.
    pub fn evaluate(&self, x: T) -> T {
        self.terms
            .iter()
            .filter(|&(_, &c)| c != T::zero())
            .fold(T::zero(), |acc, (&d, &c)| {
                if d == 0 {
                    acc + c
                } else {
                    acc + c * x.powi(d as i32)
                }
            })
    }

    /// Evaluate the polynomial at inputs `0..n`.
    pub fn calculate(&self, n: usize) -> Vec<T> {
        (0..n).map(|i| self.evaluate(index_to_float(i))).collect()
    }
}

/// Convert a sequence index to the float type.
#[inline]
pub(crate) fn index_to_float<T: Float>(i: usize) -> T {
    T::from(i).unwrap_or_else(T::nan)
}
