//! Core traits for regression estimators.

use crate::core::LinearFit;
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegressionError {
    #[error("dimension mismatch: x has {x_len} elements but y has {y_len} elements")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("non-finite value at index {index} of {field}")]
    NonFiniteInput { field: &'static str, index: usize },

    #[error("predictor x is constant; slope is not identifiable")]
    ConstantPredictor,

    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// A regression estimator that can be fit to paired samples.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Predictor values
    /// * `y` - Response values, same length as `x`
    fn fit(&self, x: &[f64], y: &[f64]) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model that can make predictions.
pub trait FittedRegressor {
    /// Make predictions on new data.
    fn predict(&self, x: &[f64]) -> Vec<f64>;
}

impl FittedRegressor for LinearFit {
    fn predict(&self, x: &[f64]) -> Vec<f64> {
        LinearFit::predict(self, x)
    }
}
