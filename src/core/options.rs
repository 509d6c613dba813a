//! Least-squares options and configuration.

use thiserror::Error;

/// Configuration options for the linear least-squares fit.
#[derive(Debug, Clone)]
pub struct LeastSquaresOptions {
    /// Whether to compute t-statistics, p-values and confidence intervals (default: true).
    ///
    /// Standard errors are always computed; they are part of the core result.
    pub compute_inference: bool,
    /// Confidence level for confidence intervals (default: 0.95).
    pub confidence_level: f64,
    /// Relative tolerance: a QR diagonal entry below `rank_tolerance` times the
    /// largest one is treated as zero, and x is considered constant when its
    /// spread is below `rank_tolerance * max|x|`.
    pub rank_tolerance: f64,
}

impl Default for LeastSquaresOptions {
    fn default() -> Self {
        Self {
            compute_inference: true,
            confidence_level: 0.95,
            rank_tolerance: 1e-10,
        }
    }
}

/// Errors that can occur when validating options.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("rank_tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

impl LeastSquaresOptions {
    /// Create a new builder for least-squares options.
    pub fn builder() -> LeastSquaresOptionsBuilder {
        LeastSquaresOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        if !(self.rank_tolerance > 0.0 && self.rank_tolerance.is_finite()) {
            return Err(OptionsError::InvalidTolerance(self.rank_tolerance));
        }
        Ok(())
    }
}

/// Builder for `LeastSquaresOptions`.
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresOptionsBuilder {
    options: LeastSquaresOptions,
}

impl LeastSquaresOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to compute inference statistics.
    pub fn compute_inference(mut self, compute: bool) -> Self {
        self.options.compute_inference = compute;
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Set the relative rank tolerance.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<LeastSquaresOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> LeastSquaresOptions {
        self.options
    }
}
