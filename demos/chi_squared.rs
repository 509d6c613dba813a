//! # Chi-Squared Goodness of Fit
//!
//! Compares observed counts against expected counts and reports the
//! statistic, its upper-tail p-value and the degrees of freedom used.
//!
//! Run with: `cargo run --example chi_squared`

use pietras_stats::chisquared;
use pietras_stats::hypothesis::{ChiSquaredTest, DegreesOfFreedom};

fn main() {
    println!("=== Chi-Squared Goodness of Fit ===\n");

    fair_die();
    fitted_parameter();
    rejected_input();
}

/// Default degrees of freedom: k - 1
fn fair_die() {
    println!("--- Fair Die ---\n");

    let observed = [16.0, 18.0, 16.0, 14.0, 12.0, 24.0];
    let expected = [100.0 / 6.0; 6];

    let result = chisquared(&observed, &expected).expect("valid counts");

    println!("X² = {:.3}", result.statistic);
    println!("df = {}", result.df);
    println!("p  = {:.4}", result.p_value);
    println!("significant at 5%: {}", result.is_significant(0.05));
    println!();
}

/// Expected counts built from a fitted parameter lose one more degree of freedom
fn fitted_parameter() {
    println!("--- Fitted Parameter ---\n");

    let observed = [12.0, 25.0, 31.0, 20.0, 12.0];
    let expected = [10.0, 24.0, 32.0, 24.0, 10.0];

    let result = ChiSquaredTest::new()
        .degrees_of_freedom(DegreesOfFreedom::Explicit(observed.len() - 2))
        .test(&observed, &expected)
        .expect("valid counts");

    println!("(X², p, df) = {:?}", result.as_tuple());
    println!();
}

/// Invalid input is reported, not turned into NaN
fn rejected_input() {
    println!("--- Rejected Input ---\n");

    match chisquared(&[5.0, 5.0, 5.0], &[5.0, 0.0, 5.0]) {
        Ok(result) => println!("unexpected result: {:?}", result),
        Err(e) => println!("error: {}", e),
    }
}
