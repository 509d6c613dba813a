//! Coefficient inference calculations.

use crate::utils::qr_inverse;
use faer::Mat;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Compute `(XᵗX)⁻¹` for a design matrix.
///
/// Returns `None` if XᵗX is singular at the given tolerance.
pub fn compute_xtx_inverse(x: &Mat<f64>, tolerance: f64) -> Option<Mat<f64>> {
    let xtx = x.transpose() * x;
    qr_inverse(&xtx, tolerance)
}

/// Computes inference statistics for regression parameters.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Parameter covariance matrix.
    ///
    /// C = σ² (XᵗX)⁻¹
    pub fn covariance(xtx_inverse: &Mat<f64>, residual_variance: f64) -> Mat<f64> {
        Mat::from_fn(xtx_inverse.nrows(), xtx_inverse.ncols(), |i, j| {
            residual_variance * xtx_inverse[(i, j)]
        })
    }

    /// Covariance of `T β` given the covariance of `β`.
    ///
    /// C' = T C Tᵗ
    pub fn reparameterize(covariance: &Mat<f64>, transform: &Mat<f64>) -> Mat<f64> {
        let rows = transform.nrows();
        let inner = transform.ncols();

        Mat::from_fn(rows, rows, |i, j| {
            let mut sum = 0.0;
            for k in 0..inner {
                for l in 0..inner {
                    sum += transform[(i, k)] * covariance[(k, l)] * transform[(j, l)];
                }
            }
            sum
        })
    }

    /// Standard errors from the diagonal of a covariance matrix.
    ///
    /// SE_j = sqrt(C_jj); negative variances from rounding give NaN.
    pub fn standard_errors(covariance: &Mat<f64>) -> Vec<f64> {
        (0..covariance.nrows())
            .map(|j| {
                let var = covariance[(j, j)];
                if var >= 0.0 {
                    var.sqrt()
                } else {
                    f64::NAN
                }
            })
            .collect()
    }

    /// t = β / SE(β)
    pub fn t_statistic(estimate: f64, std_error: f64) -> f64 {
        if std_error.is_nan() || std_error == 0.0 {
            f64::NAN
        } else {
            estimate / std_error
        }
    }

    /// Two-tailed p-value from a t-statistic.
    ///
    /// p = 2 * P(T > |t|) where T ~ t(df)
    pub fn p_value(t_statistic: f64, df: f64) -> f64 {
        if df <= 0.0 || t_statistic.is_nan() {
            return f64::NAN;
        }
        StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| 2.0 * (1.0 - d.cdf(t_statistic.abs())))
    }

    /// Confidence interval for a single parameter.
    ///
    /// CI = β ± t_{α/2, df} * SE(β)
    pub fn confidence_interval(
        estimate: f64,
        std_error: f64,
        df: f64,
        confidence_level: f64,
    ) -> (f64, f64) {
        if df <= 0.0 || std_error.is_nan() {
            return (f64::NAN, f64::NAN);
        }

        let alpha = 1.0 - confidence_level;
        let t_crit = StudentsT::new(0.0, 1.0, df)
            .map_or(f64::NAN, |d| d.inverse_cdf(1.0 - alpha / 2.0));
        let margin = t_crit * std_error;

        (estimate - margin, estimate + margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::design_matrix;

    #[test]
    fn test_t_statistic() {
        assert!((CoefficientInference::t_statistic(2.0, 0.5) - 4.0).abs() < 1e-10);
        assert!(CoefficientInference::t_statistic(2.0, 0.0).is_nan());
    }

    #[test]
    fn test_p_value_bounds() {
        for t in [0.0, 0.5, 1.0, 3.0, -2.0] {
            let p = CoefficientInference::p_value(t, 10.0);
            assert!((0.0..=1.0).contains(&p));
        }
        assert!((CoefficientInference::p_value(0.0, 10.0) - 1.0).abs() < 1e-10);
        assert!(CoefficientInference::p_value(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_confidence_interval_symmetric() {
        let (lo, hi) = CoefficientInference::confidence_interval(1.0, 0.5, 20.0, 0.95);
        assert!(lo < 1.0 && hi > 1.0);
        assert!(((1.0 - lo) - (hi - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_reparameterize_shift() {
        // b = β1 - 2 β0 with independent unit-variance β0, β1: Var(b) = 5, Cov(m, b) = -2
        let cov = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
        let t = Mat::from_fn(2, 2, |i, j| match (i, j) {
            (0, 0) => 1.0,
            (0, 1) => 0.0,
            (1, 0) => -2.0,
            _ => 1.0,
        });
        let out = CoefficientInference::reparameterize(&cov, &t);
        assert!((out[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((out[(0, 1)] + 2.0).abs() < 1e-12);
        assert!((out[(1, 0)] + 2.0).abs() < 1e-12);
        assert!((out[(1, 1)] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_xtx_inverse_and_covariance() {
        // x = [0, 1, 2]: XᵗX = [[5, 3], [3, 3]], det = 6
        let x = design_matrix(&[0.0, 1.0, 2.0]);
        let inv = compute_xtx_inverse(&x, 1e-10).expect("invertible");
        assert!((inv[(0, 0)] - 0.5).abs() < 1e-10);
        assert!((inv[(0, 1)] + 0.5).abs() < 1e-10);
        assert!((inv[(1, 1)] - 5.0 / 6.0).abs() < 1e-10);

        let cov = CoefficientInference::covariance(&inv, 2.0);
        let identity = Mat::from_fn(2, 2, |i, j| if i == j { 1.0 } else { 0.0 });
        let same = CoefficientInference::reparameterize(&cov, &identity);
        assert!((same[(0, 1)] - cov[(0, 1)]).abs() < 1e-12);

        let se = CoefficientInference::standard_errors(&cov);
        assert!((se[0] - 1.0).abs() < 1e-10);
        assert!((se[1] - (5.0f64 / 3.0).sqrt()).abs() < 1e-10);
    }
}
