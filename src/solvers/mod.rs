//! Regression solvers.

mod least_squares;
mod traits;

pub use least_squares::{linear_least_squares, LinearLeastSquares, LinearLeastSquaresBuilder};
pub use traits::{FittedRegressor, RegressionError, Regressor};
