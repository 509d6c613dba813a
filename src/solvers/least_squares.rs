//! Straight-line least squares with standard errors.

use crate::core::{LeastSquaresOptions, LeastSquaresOptionsBuilder, LinearFit};
use crate::inference::{compute_xtx_inverse, CoefficientInference};
use crate::solvers::traits::{RegressionError, Regressor};
use crate::utils::{center_and_scale, column, design_matrix, first_non_finite, is_constant};
use faer::{Col, Mat};

/// Minimum sample size: the residual variance divides by `n - 2`.
const MIN_OBSERVATIONS: usize = 3;

/// Fit `y = m·x + b` and return `(m, b, se_m, se_b)`.
///
/// Uses the default options; see [`LinearLeastSquares`] for the full result.
///
/// # Example
///
/// ```rust
/// use pietras_stats::linear_least_squares;
///
/// let (m, b, se_m, se_b) =
///     linear_least_squares(&[0.0, 1.0, 2.0, 3.0], &[3.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((m - 2.0).abs() < 1e-10);
/// assert!((b - 3.0).abs() < 1e-10);
/// assert!(se_m < 1e-6 && se_b < 1e-6);
/// ```
pub fn linear_least_squares(x: &[f64], y: &[f64]) -> Result<(f64, f64, f64, f64), RegressionError> {
    LinearLeastSquares::default()
        .fit(x, y)
        .map(|fit| fit.as_tuple())
}

/// Ordinary least squares for a single predictor with intercept.
///
/// Solves the normal equations `β = (XᵗX)⁻¹ Xᵗy` over the design matrix
/// `[x, 1]`, then derives the parameter covariance `σ² (XᵗX)⁻¹` from the
/// unbiased residual variance `σ² = Σe² / (n - 2)`. The system is solved on
/// centered and scaled x and mapped back, which gives the same estimates
/// while staying accurate for large offsets such as Julian dates.
///
/// # Example
///
/// ```rust
/// use pietras_stats::solvers::{LinearLeastSquares, Regressor};
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.2, 2.8, 3.6, 4.5, 5.1];
///
/// let fit = LinearLeastSquares::builder()
///     .confidence_level(0.99)
///     .build()
///     .fit(&x, &y)?;
///
/// println!("slope = {} ± {}", fit.slope, fit.slope_std_error);
/// println!("R² = {}", fit.r_squared);
/// assert!((fit.slope - 0.75).abs() < 1e-10);
/// # Ok::<(), pietras_stats::RegressionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearLeastSquares {
    options: LeastSquaresOptions,
}

impl LinearLeastSquares {
    /// Create a new estimator with the given options.
    pub fn new(options: LeastSquaresOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the estimator.
    pub fn builder() -> LinearLeastSquaresBuilder {
        LinearLeastSquaresBuilder::default()
    }

    /// Get the options used by this estimator.
    pub fn options(&self) -> &LeastSquaresOptions {
        &self.options
    }

    fn validate(&self, x: &[f64], y: &[f64]) -> Result<(), RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::DimensionMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if x.len() < MIN_OBSERVATIONS {
            return Err(RegressionError::InsufficientObservations {
                needed: MIN_OBSERVATIONS,
                got: x.len(),
            });
        }

        if let Some(index) = first_non_finite(x) {
            return Err(RegressionError::NonFiniteInput { field: "x", index });
        }
        if let Some(index) = first_non_finite(y) {
            return Err(RegressionError::NonFiniteInput { field: "y", index });
        }

        self.options.validate()?;

        if is_constant(x, self.options.rank_tolerance) {
            return Err(RegressionError::ConstantPredictor);
        }

        Ok(())
    }

    /// Fill in t-statistics, p-values and confidence intervals.
    fn compute_inference(&self, fit: &mut LinearFit) {
        let df = fit.residual_df() as f64;
        let level = self.options.confidence_level;

        let t_slope = CoefficientInference::t_statistic(fit.slope, fit.slope_std_error);
        let t_int = CoefficientInference::t_statistic(fit.intercept, fit.intercept_std_error);

        fit.slope_t_statistic = Some(t_slope);
        fit.intercept_t_statistic = Some(t_int);
        fit.slope_p_value = Some(CoefficientInference::p_value(t_slope, df));
        fit.intercept_p_value = Some(CoefficientInference::p_value(t_int, df));
        fit.slope_conf_interval = Some(CoefficientInference::confidence_interval(
            fit.slope,
            fit.slope_std_error,
            df,
            level,
        ));
        fit.intercept_conf_interval = Some(CoefficientInference::confidence_interval(
            fit.intercept,
            fit.intercept_std_error,
            df,
            level,
        ));
    }
}

impl Regressor for LinearLeastSquares {
    type Fitted = LinearFit;

    fn fit(&self, x: &[f64], y: &[f64]) -> Result<LinearFit, RegressionError> {
        self.validate(x, y)?;

        let n = x.len();

        // Solve on u = (x - x̄) / s so XᵗX stays well conditioned whatever
        // the offset or units of x, then map back to y = m·x + b.
        let (scaled, x_mean, x_scale) = center_and_scale(x);
        let design = design_matrix(&scaled);
        let response = column(y);

        // β = (XᵗX)⁻¹ Xᵗy
        let xtx_inverse = compute_xtx_inverse(&design, self.options.rank_tolerance)
            .ok_or(RegressionError::SingularMatrix)?;
        let xty = design.transpose() * &response;
        let beta = &xtx_inverse * &xty;

        let mut fitted_values = Col::zeros(n);
        let mut residuals = Col::zeros(n);
        for i in 0..n {
            let pred = beta[0] * scaled[i] + beta[1];
            fitted_values[i] = pred;
            residuals[i] = y[i] - pred;
        }

        // [m, b]ᵗ = T [β0, β1]ᵗ
        let transform = Mat::from_fn(2, 2, |i, j| match (i, j) {
            (0, 0) => 1.0 / x_scale,
            (0, 1) => 0.0,
            (1, 0) => -x_mean / x_scale,
            _ => 1.0,
        });
        let slope = beta[0] / x_scale;
        let intercept = beta[1] - slope * x_mean;

        let rss: f64 = residuals.iter().map(|&r| r.powi(2)).sum();
        let df_resid = (n - 2) as f64;
        let residual_variance = rss / df_resid;

        let covariance = CoefficientInference::reparameterize(
            &CoefficientInference::covariance(&xtx_inverse, residual_variance),
            &transform,
        );
        let std_errors = CoefficientInference::standard_errors(&covariance);

        let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let r_squared = if tss > 0.0 {
            (1.0 - rss / tss).clamp(0.0, 1.0)
        } else if rss < 1e-10 {
            1.0
        } else {
            0.0
        };
        let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_resid;

        let mut fit = LinearFit {
            slope,
            intercept,
            slope_std_error: std_errors[0],
            intercept_std_error: std_errors[1],
            covariance,
            residuals,
            fitted_values,
            n_observations: n,
            rss,
            residual_variance,
            rmse: residual_variance.sqrt(),
            r_squared,
            adj_r_squared,
            slope_t_statistic: None,
            intercept_t_statistic: None,
            slope_p_value: None,
            intercept_p_value: None,
            slope_conf_interval: None,
            intercept_conf_interval: None,
            confidence_level: self.options.confidence_level,
        };

        if self.options.compute_inference {
            self.compute_inference(&mut fit);
        }

        log::debug!(
            "least squares fit: n={} m={} b={} se_m={} se_b={}",
            n,
            fit.slope,
            fit.intercept,
            fit.slope_std_error,
            fit.intercept_std_error
        );

        Ok(fit)
    }
}

/// Builder for `LinearLeastSquares`.
#[derive(Debug, Clone, Default)]
pub struct LinearLeastSquaresBuilder {
    builder: LeastSquaresOptionsBuilder,
}

impl LinearLeastSquaresBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compute inference statistics.
    pub fn compute_inference(mut self, compute: bool) -> Self {
        self.builder = self.builder.compute_inference(compute);
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the relative rank tolerance.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Build the estimator. Options are validated when `fit` runs.
    pub fn build(self) -> LinearLeastSquares {
        LinearLeastSquares::new(self.builder.build_unchecked())
    }
}
