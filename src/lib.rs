//! Small statistical utilities: chi-squared goodness-of-fit, straight-line
//! least squares with standard errors, and circular cross-correlation.
//!
//! Every entry point is a pure function over borrowed slices and reports bad
//! input through a typed error rather than NaN or an empty result.
//!
//! # Example
//!
//! ```rust
//! use pietras_stats::prelude::*;
//!
//! // Goodness of fit
//! let observed = [18.0, 22.0, 20.0, 40.0];
//! let expected = [20.0, 20.0, 20.0, 40.0];
//! let chi = chisquared(&observed, &expected)?;
//! println!("X2 = {}, p = {}", chi.statistic, chi.p_value);
//!
//! // Straight-line fit with standard errors
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [1.0, 3.0, 5.1, 6.9];
//! let (m, b, se_m, se_b) = linear_least_squares(&x, &y)?;
//! println!("m = {m} ± {se_m}, b = {b} ± {se_b}");
//!
//! // Full result with inference statistics
//! let fit = LinearLeastSquares::builder()
//!     .confidence_level(0.99)
//!     .build()
//!     .fit(&x, &y)?;
//! println!("R² = {}", fit.r_squared);
//!
//! // Circular cross-correlation
//! let fref = [0.0, 1.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0];
//! let cc = compute_crosscor(&fref, &fref, CorrelationMode::Spectral)?;
//! assert_eq!(cc.peak_shift(), Some(0));
//! # Ok::<(), pietras_stats::Error>(())
//! ```

pub mod core;
pub mod hypothesis;
pub mod inference;
pub mod signal;
pub mod solvers;
pub mod utils;

use thiserror::Error;

/// Any error produced by this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    ChiSquared(#[from] ChiSquaredError),

    #[error(transparent)]
    CrossCorrelation(#[from] CrossCorrelationError),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Result type for operations returning the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        ChiSquaredResult, CorrelationMode, CrossCorrelation, LeastSquaresOptions,
        LeastSquaresOptionsBuilder, LinearFit, OptionsError,
    };
    pub use crate::hypothesis::{chisquared, ChiSquaredError, ChiSquaredTest, DegreesOfFreedom};
    pub use crate::signal::{compute_crosscor, spectral_crosscor, CrossCorrelationError};
    pub use crate::solvers::{
        linear_least_squares, FittedRegressor, LinearLeastSquares, LinearLeastSquaresBuilder,
        RegressionError, Regressor,
    };
    pub use crate::Error;
}

pub use crate::core::{
    ChiSquaredResult, CorrelationMode, CrossCorrelation, LeastSquaresOptions, LinearFit,
    OptionsError,
};
pub use crate::hypothesis::{chisquared, ChiSquaredError, ChiSquaredTest, DegreesOfFreedom};
pub use crate::signal::{compute_crosscor, spectral_crosscor, CrossCorrelationError};
pub use crate::solvers::{linear_least_squares, LinearLeastSquares, RegressionError, Regressor};
