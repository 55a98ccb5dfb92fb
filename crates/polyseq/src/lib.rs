//! # polyseq: polynomial inference for numeric sequences
//!
//! Given the values of an unknown polynomial at the inputs `0, 1, 2, …`,
//! `polyseq` recovers the polynomial's coefficients.
//!
//! ## How it works
//!
//! Inference runs in two stages:
//!
//! 1. **Differencing**: The sequence is repeatedly replaced by its forward
//!    differences until it flattens out. The number of steps reveals the degree
//!    of the leading term, and the flattened average (divided by `degree!`)
//!    gives its coefficient. The term is removed and the search repeats on
//!    what is left.
//! 2. **Correction**: The extracted polynomial is evaluated, the residual
//!    against the original sequence is differenced in turn, and the correction
//!    is added back. This repeats until the sequence is reproduced exactly, for
//!    at most 50 rounds.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyseq::prelude::*;
//!
//! let values = generate(|x: f64| 5.0 * x.powi(7) + 2.0 * x.powi(2) + 1.0, 10);
//!
//! let fit = Sequence::new(values).analyze()?;
//!
//! assert_eq!(fit.to_polynomial_string(), "5x^7+2x^2+1");
//! assert_eq!(fit.at(10.0), 50_000_201.0);
//! # Result::<(), PolyseqError>::Ok(())
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use polyseq::prelude::*;
//!
//! let fit = Sequence::new(vec![0.75, 1.25, 1.75, 2.25, 2.75])
//!     .tolerance(1e-4)       // Slope threshold for degree discovery
//!     .max_iterations(200)   // Safety cap for the differencing loops
//!     .variable("n")         // Symbol used when rendering
//!     .analyze()?;
//!
//! assert_eq!(fit.to_polynomial_string(), "0.5n+0.75");
//! # Result::<(), PolyseqError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `analyze` returns a `Result<SequenceFit<T>, PolyseqError>`.
//!
//! - **`Ok(SequenceFit<T>)`**: The inferred terms plus the sequence they came from.
//! - **`Err(PolyseqError)`**: Too few values, a non-polynomial sequence, or an
//!   invalid configuration.
//!
//! ```rust
//! use polyseq::prelude::*;
//!
//! let values = generate(|x: f64| x.exp(), 10);
//!
//! match Sequence::new(values).analyze() {
//!     Ok(fit) => println!("Polynomial: {}", fit.polynomial()),
//!     Err(e) => eprintln!("Analysis failed: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyseq = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure numeric helpers.
mod math;

// Layer 3: Algorithms - differencing and correction.
mod algorithms;

// Layer 4: Evaluation - rendering and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and validation.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        FitDiagnostics, IterationStage, PolyseqError, PolynomialFormatter,
        SequenceBuilder as Sequence, SequenceFit, TermMap, generate, generate_default,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
