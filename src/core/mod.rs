//! Core types shared by the estimators and tests.

mod correlation;
mod options;
mod result;

pub use correlation::{CorrelationMode, CrossCorrelation};
pub use options::{LeastSquaresOptions, LeastSquaresOptionsBuilder, OptionsError};
pub use result::{ChiSquaredResult, LinearFit};
