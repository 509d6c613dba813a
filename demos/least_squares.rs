//! # Straight-Line Least Squares
//!
//! Fits `y = m·x + b` and reports the slope and intercept together with
//! their standard errors, derived from the unbiased residual variance.
//!
//! ## Key Features
//! - Tuple entry point `(m, b, se_m, se_b)`
//! - Full result with covariance, residuals and R²
//! - t-statistics, p-values and confidence intervals
//! - Stable for offset predictors such as Julian dates
//!
//! Run with: `cargo run --example least_squares`

use pietras_stats::linear_least_squares;
use pietras_stats::solvers::{LinearLeastSquares, Regressor};

fn main() {
    println!("=== Straight-Line Least Squares ===\n");

    tuple_fit();
    full_result();
    julian_dates();
}

/// The four-number summary
fn tuple_fit() {
    println!("--- Slope and Intercept ---\n");

    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 5.1, 6.9];

    let (m, b, se_m, se_b) = linear_least_squares(&x, &y).expect("fit should succeed");

    println!("m = {:.4} ± {:.4}", m, se_m);
    println!("b = {:.4} ± {:.4}", b, se_b);
    println!();
}

/// Inference statistics and predictions
fn full_result() {
    println!("--- Inference ---\n");

    let x: Vec<f64> = (0..12).map(|i| i as f64).collect();
    let noise = [0.3, -0.2, 0.5, -0.4, 0.1, 0.0, -0.3, 0.4, -0.1, 0.2, -0.5, 0.2];
    let y: Vec<f64> = x
        .iter()
        .zip(noise)
        .map(|(&xi, e)| 1.5 + 0.8 * xi + e)
        .collect();

    let fit = LinearLeastSquares::builder()
        .confidence_level(0.99)
        .build()
        .fit(&x, &y)
        .expect("fit should succeed");

    println!("n          = {}", fit.n_observations);
    println!("R²         = {:.4}", fit.r_squared);
    println!("adj R²     = {:.4}", fit.adj_r_squared);
    println!("RMSE       = {:.4}", fit.rmse);

    if let (Some(t), Some(p), Some((lo, hi))) = (
        fit.slope_t_statistic,
        fit.slope_p_value,
        fit.slope_conf_interval,
    ) {
        println!("slope t    = {:.3} (p = {:.2e})", t, p);
        println!("slope 99%  = [{:.4}, {:.4}]", lo, hi);
    }

    let preds = fit.predict(&[12.0, 15.0]);
    println!("predictions at x = 12, 15: {:.3?}", preds);
    println!();
}

/// Large offsets in x
fn julian_dates() {
    println!("--- Julian Dates ---\n");

    let x = [2450000.5, 2450001.5, 2450002.5, 2450003.5, 2450004.5];
    let y = [10.2, 10.9, 11.4, 12.2, 12.8];

    let fit = LinearLeastSquares::default()
        .fit(&x, &y)
        .expect("fit should succeed");

    println!("slope     = {:.4} ± {:.4} per day", fit.slope, fit.slope_std_error);
    println!("intercept = {:.1} ± {:.1}", fit.intercept, fit.intercept_std_error);
    println!("residuals = {:.3?}", fit.residuals.iter().collect::<Vec<_>>());
}
