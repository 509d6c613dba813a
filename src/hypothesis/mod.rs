//! Hypothesis tests.

mod chi_squared;

pub use chi_squared::{chisquared, ChiSquaredError, ChiSquaredTest, DegreesOfFreedom};
