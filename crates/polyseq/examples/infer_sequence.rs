//! polyseq Sequence Inference Examples
//!
//! This example demonstrates the main features of `polyseq`:
//! - Inferring a polynomial from generated values
//! - Custom tolerance, iteration cap, and variable symbol
//! - Extrapolating the next value
//! - Comparing sequences of different lengths
//! - Handling non-polynomial input

use polyseq::prelude::*;

fn main() -> Result<(), PolyseqError> {
    println!("{}", "=".repeat(80));
    println!("polyseq Sequence Inference Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_inference()?;
    example_2_configuration()?;
    example_3_extrapolation()?;
    example_4_comparison()?;
    example_5_non_polynomial();

    Ok(())
}

/// Example 1: Basic Inference
/// Recovers a sparse polynomial from ten values
fn example_1_basic_inference() -> Result<(), PolyseqError> {
    println!("Example 1: Basic Inference");
    println!("{}", "-".repeat(80));

    let values = generate(|x: f64| 5.0 * x.powi(7) + 2.0 * x.powi(2) + 1.0, 10);
    let fit = Sequence::new(values).analyze()?;

    println!("Inferred: {}", fit.polynomial());
    println!("Value at 10: {}", fit.at(10.0));
    println!("Result summary:\n{}", fit);

    println!();
    Ok(())
}

/// Example 2: Configuration
/// Tighter tolerance, smaller iteration cap, and a different symbol
fn example_2_configuration() -> Result<(), PolyseqError> {
    println!("Example 2: Configuration");
    println!("{}", "-".repeat(80));

    let fit = Sequence::new(vec![0.75, 1.25, 1.75, 2.25, 2.75])
        .tolerance(1e-4)
        .max_iterations(200)
        .variable("n")
        .analyze()?;

    println!("Inferred: {}", fit.polynomial());
    println!(
        "Passes: {}, corrections: {}, converged: {}",
        fit.passes_used, fit.rounds_used, fit.converged
    );

    println!();
    Ok(())
}

/// Example 3: Extrapolation
/// Peeks at and appends the values that follow the sequence
fn example_3_extrapolation() -> Result<(), PolyseqError> {
    println!("Example 3: Extrapolation");
    println!("{}", "-".repeat(80));

    let mut fit = Sequence::new(generate_default(|x: f64| x.powi(3) - x.powi(2))).analyze()?;
    println!("Inferred: {}", fit.polynomial());
    println!("Next (peek): {}", fit.next(false));

    for _ in 0..3 {
        fit.next(true);
    }
    println!("Extended sequence: {:?}", fit.sequence());

    let f = fit.to_function();
    println!("f(-2) = {}", f(-2.0));

    println!();
    Ok(())
}

/// Example 4: Comparison
/// Sequences of different lengths match when they share a polynomial
fn example_4_comparison() -> Result<(), PolyseqError> {
    println!("Example 4: Comparison");
    println!("{}", "-".repeat(80));

    let short = Sequence::new(vec![0.0, 1.0, 4.0]).analyze()?;
    let long = Sequence::new(generate(|x: f64| x * x, 10)).analyze()?;
    let other = Sequence::new(generate(|x: f64| x * x + 1.0, 10)).analyze()?;

    println!("{} matches {}: {}", short.polynomial(), long.polynomial(), short.matches(&long));
    println!("{} matches {}: {}", long.polynomial(), other.polynomial(), long.matches(&other));

    println!();
    Ok(())
}

/// Example 5: Non-polynomial Input
/// Sequences with no polynomial form exhaust the iteration cap
fn example_5_non_polynomial() {
    println!("Example 5: Non-polynomial Input");
    println!("{}", "-".repeat(80));

    match Sequence::new(generate(|x: f64| x.exp(), 10)).analyze() {
        Ok(fit) => println!("Unexpected fit: {}", fit.polynomial()),
        Err(e) => println!("Analysis failed: {}", e),
    }

    println!();
}
