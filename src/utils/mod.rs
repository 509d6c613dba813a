//! Shared helpers.

mod matrix;
mod validation;

pub use matrix::{center_and_scale, column, design_matrix, is_constant, qr_inverse};
pub use validation::{first_non_finite, first_rejected};
