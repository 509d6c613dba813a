//! Signal correlation.

mod cross_correlation;

pub use cross_correlation::{compute_crosscor, spectral_crosscor, CrossCorrelationError};
