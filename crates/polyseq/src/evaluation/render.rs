//! Canonical string rendering of a term mapping.
//!
//! ## Purpose
//!
//! This module turns a [`TermMap`] into the compact textual form used for
//! output comparisons, e.g. `5x^7+2x^2+1` or `x^3-x^2`.
//!
//! ## Key concepts
//!
//! * Terms are written from the highest stored degree down.
//! * Zero coefficients are omitted entirely.
//! * The constant term has no variable; degree 1 has no exponent.
//! * A coefficient of exactly `1` is elided; exactly `-1` becomes a bare `-`.
//! * Every positive term other than the leading one carries an explicit `+`.
//! * The empty mapping renders as `0`.
//! * Coefficients use the shortest round-trip digits. Magnitudes below `1e-6`
//!   or from `1e21` up switch to exponent form with a signed exponent
//!   (`1e-7`, `-2.5e-8`, `1e+21`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::fmt::{Display, Formatter, LowerExp, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::terms::TermMap;

/// Display adapter rendering a term mapping in canonical form.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialFormatter<'a, T> {
    terms: &'a TermMap<T>,
    variable: &'a str,
}

impl<'a, T> PolynomialFormatter<'a, T> {
    /// Render `terms` using `variable` as the input symbol.
    pub fn new(terms: &'a TermMap<T>, variable: &'a str) -> Self {
        Self { terms, variable }
    }
}

impl<T: Float + Display + LowerExp> Display for PolynomialFormatter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // Untrimmed mappings may carry zeros above the first written term.
        let mut leading = true;

        for (degree, coefficient) in self.terms.iter().rev() {
            if coefficient == T::zero() {
                continue;
            }

            if degree == 0 {
                if !leading && coefficient > T::zero() {
                    write!(f, "+")?;
                }
                fmt_coefficient(f, coefficient)?;
                leading = false;
                continue;
            }

            if coefficient == T::one() {
                if !leading {
                    write!(f, "+")?;
                }
            } else if coefficient == -T::one() {
                write!(f, "-")?;
            } else {
                if !leading && coefficient > T::zero() {
                    write!(f, "+")?;
                }
                fmt_coefficient(f, coefficient)?;
            }

            write!(f, "{}", self.variable)?;
            if degree > 1 {
                write!(f, "^{degree}")?;
            }
            leading = false;
        }

        if leading {
            write!(f, "0")?;
        }

        Ok(())
    }
}

/// Write a non-zero coefficient, in exponent form outside `[1e-6, 1e21)`.
fn fmt_coefficient<T: Float + Display + LowerExp>(f: &mut Formatter<'_>, c: T) -> Result {
    let magnitude = c.abs();
    let lower = T::from(1e-6).unwrap_or_else(T::min_positive_value);
    let upper = T::from(1e21).unwrap_or_else(T::max_value);
    if magnitude >= lower && magnitude < upper {
        return write!(f, "{c}");
    }

    let scientific = format!("{c:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => write!(f, "{scientific}"),
    }
}
