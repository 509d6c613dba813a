//! Result structures for the least-squares fit and the chi-squared test.

use faer::{Col, Mat};

/// Complete result from a straight-line least-squares fit `y = m·x + b`.
///
/// Slope, intercept and their standard errors are always present. The
/// t-statistics, p-values and confidence intervals are only populated when
/// the fit was run with `compute_inference` enabled.
#[derive(Debug, Clone)]
pub struct LinearFit {
    // ========== Core Results ==========
    /// Slope `m`.
    pub slope: f64,

    /// Intercept `b`.
    pub intercept: f64,

    /// Standard error of the slope, `sqrt(C[0,0])`.
    pub slope_std_error: f64,

    /// Standard error of the intercept, `sqrt(C[1,1])`.
    pub intercept_std_error: f64,

    /// Parameter covariance matrix `σ² (XᵗX)⁻¹`, ordered `[slope, intercept]`.
    pub covariance: Mat<f64>,

    /// Residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Fitted values `m·x + b` on the training data.
    pub fitted_values: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    // ========== Fit Statistics ==========
    /// Residual sum of squares.
    pub rss: f64,

    /// Unbiased residual variance `rss / (n - 2)`.
    pub residual_variance: f64,

    /// Root of the residual variance.
    pub rmse: f64,

    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Adjusted R².
    pub adj_r_squared: f64,

    // ========== Inference Statistics (Optional) ==========
    /// t-statistic for the slope.
    pub slope_t_statistic: Option<f64>,

    /// t-statistic for the intercept.
    pub intercept_t_statistic: Option<f64>,

    /// Two-sided p-value for the slope.
    pub slope_p_value: Option<f64>,

    /// Two-sided p-value for the intercept.
    pub intercept_p_value: Option<f64>,

    /// Slope confidence interval (lower, upper).
    pub slope_conf_interval: Option<(f64, f64)>,

    /// Intercept confidence interval (lower, upper).
    pub intercept_conf_interval: Option<(f64, f64)>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,
}

impl LinearFit {
    /// The classic `(m, b, se_m, se_b)` tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (
            self.slope,
            self.intercept,
            self.slope_std_error,
            self.intercept_std_error,
        )
    }

    /// Residual degrees of freedom (n - 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }

    /// Evaluate the fitted line at new x values.
    pub fn predict(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&xi| self.slope * xi + self.intercept).collect()
    }

    /// Returns true if inference statistics were computed.
    pub fn has_inference(&self) -> bool {
        self.slope_t_statistic.is_some()
    }
}

/// Result of a chi-squared goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquaredResult {
    /// The statistic `Σ (O - E)² / E`.
    pub statistic: f64,
    /// Upper-tail probability of the statistic.
    pub p_value: f64,
    /// Degrees of freedom the p-value was evaluated at.
    pub df: usize,
}

impl ChiSquaredResult {
    /// The `(X2, p-value)` pair.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.statistic, self.p_value)
    }

    /// Whether the null hypothesis is rejected at significance level `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
