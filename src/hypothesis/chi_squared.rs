//! Chi-squared goodness-of-fit test.

use crate::core::ChiSquaredResult;
use crate::utils::first_rejected;
use statrs::distribution::{ChiSquared, ContinuousCDF};
use thiserror::Error;

/// Errors that can occur during a chi-squared test.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChiSquaredError {
    #[error("length mismatch: observed has {observed} elements but expected has {expected}")]
    LengthMismatch { observed: usize, expected: usize },

    #[error("insufficient categories: need at least 2, got {0}")]
    InsufficientCategories(usize),

    #[error("expected frequency at index {index} must be positive and finite, got {value}")]
    InvalidExpected { index: usize, value: f64 },

    #[error("observed frequency at index {index} must be non-negative and finite, got {value}")]
    InvalidObserved { index: usize, value: f64 },

    #[error("degrees of freedom must be at least 1")]
    InvalidDegreesOfFreedom,
}

/// Degrees of freedom used for the p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegreesOfFreedom {
    /// Number of categories minus one.
    #[default]
    Categories,

    /// A caller-supplied value, e.g. when parameters of the expected
    /// distribution were estimated from the data.
    Explicit(usize),
}

impl DegreesOfFreedom {
    /// Resolve to a concrete value for `n_categories` categories.
    pub fn resolve(self, n_categories: usize) -> usize {
        match self {
            DegreesOfFreedom::Categories => n_categories.saturating_sub(1),
            DegreesOfFreedom::Explicit(df) => df,
        }
    }
}

/// Compute `Σ (O - E)² / E` and its upper-tail p-value with `len - 1`
/// degrees of freedom.
///
/// # Example
///
/// ```rust
/// use pietras_stats::chisquared;
///
/// let result = chisquared(&[10.0, 10.0], &[10.0, 10.0]).unwrap();
/// assert_eq!(result.as_tuple(), (0.0, 1.0));
/// ```
pub fn chisquared(observed: &[f64], expected: &[f64]) -> Result<ChiSquaredResult, ChiSquaredError> {
    ChiSquaredTest::default().test(observed, expected)
}

/// A configurable chi-squared goodness-of-fit test.
///
/// ```rust
/// use pietras_stats::hypothesis::{ChiSquaredTest, DegreesOfFreedom};
///
/// let observed = [12.0, 25.0, 31.0, 20.0, 12.0];
/// let expected = [10.0, 24.0, 32.0, 24.0, 10.0];
///
/// // One parameter of the expected distribution was fitted: df = k - 2
/// let result = ChiSquaredTest::new()
///     .degrees_of_freedom(DegreesOfFreedom::Explicit(observed.len() - 2))
///     .test(&observed, &expected)?;
/// assert_eq!(result.df, 3);
/// assert!(result.p_value > 0.05);
/// # Ok::<(), pietras_stats::ChiSquaredError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChiSquaredTest {
    df: DegreesOfFreedom,
}

impl ChiSquaredTest {
    /// Create a test using `len - 1` degrees of freedom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the degrees of freedom.
    pub fn degrees_of_freedom(mut self, df: DegreesOfFreedom) -> Self {
        self.df = df;
        self
    }

    /// Run the test.
    pub fn test(
        &self,
        observed: &[f64],
        expected: &[f64],
    ) -> Result<ChiSquaredResult, ChiSquaredError> {
        if observed.len() != expected.len() {
            return Err(ChiSquaredError::LengthMismatch {
                observed: observed.len(),
                expected: expected.len(),
            });
        }

        let n = observed.len();
        if n < 2 {
            return Err(ChiSquaredError::InsufficientCategories(n));
        }

        if let Some((index, value)) = first_rejected(expected, |e| e > 0.0 && e.is_finite()) {
            return Err(ChiSquaredError::InvalidExpected { index, value });
        }
        if let Some((index, value)) = first_rejected(observed, |o| o >= 0.0 && o.is_finite()) {
            return Err(ChiSquaredError::InvalidObserved { index, value });
        }

        let df = self.df.resolve(n);
        if df == 0 {
            return Err(ChiSquaredError::InvalidDegreesOfFreedom);
        }

        let statistic: f64 = observed
            .iter()
            .zip(expected)
            .map(|(&o, &e)| (o - e).powi(2) / e)
            .sum();

        let p_value = ChiSquared::new(df as f64)
            .map_or(f64::NAN, |d| (1.0 - d.cdf(statistic)).clamp(0.0, 1.0));

        log::debug!("chi-squared: X2={} df={} p={}", statistic, df, p_value);

        Ok(ChiSquaredResult {
            statistic,
            p_value,
            df,
        })
    }
}
