//! Matrix utility functions.

use faer::{Col, Mat};

/// Build the `[x, 1]` design matrix for `y = m·x + b`.
pub fn design_matrix(x: &[f64]) -> Mat<f64> {
    Mat::from_fn(x.len(), 2, |i, j| if j == 0 { x[i] } else { 1.0 })
}

/// Copy a slice into a column vector.
pub fn column(values: &[f64]) -> Col<f64> {
    Col::from_fn(values.len(), |i| values[i])
}

/// Detect whether a sequence is constant.
///
/// The spread `max - min` is compared against `tolerance * max|v|`, so the
/// check does not depend on the units of the data.
pub fn is_constant(values: &[f64], tolerance: f64) -> bool {
    if values.is_empty() {
        return true;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_abs = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));

    max - min <= tolerance * max_abs
}

/// Center on the mean and scale into `[-1, 1]`.
///
/// Returns `(scaled, mean, scale)` with `values[i] = scaled[i] * scale + mean`.
/// The caller must have ruled out constant input.
pub fn center_and_scale(values: &[f64]) -> (Vec<f64>, f64, f64) {
    let n = values.len();
    let mean: f64 = values.iter().sum::<f64>() / n as f64;
    let scale = values.iter().fold(0.0f64, |acc, &v| acc.max((v - mean).abs()));

    let scaled = values.iter().map(|&v| (v - mean) / scale).collect();

    (scaled, mean, scale)
}

/// Invert a square matrix using QR decomposition.
///
/// Returns `None` when a diagonal entry of R falls below `tolerance` times
/// the largest diagonal entry.
pub fn qr_inverse(matrix: &Mat<f64>, tolerance: f64) -> Option<Mat<f64>> {
    let n = matrix.nrows();

    let qr = matrix.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    let largest = (0..n).fold(0.0f64, |acc, i| acc.max(r[(i, i)].abs()));
    if largest == 0.0 || largest.is_nan() {
        return None;
    }
    for i in 0..n {
        let diag = r[(i, i)].abs();
        if diag.is_nan() || diag < tolerance * largest {
            return None;
        }
    }

    // Solve R * X = Q' column by column
    let mut inv = Mat::zeros(n, n);
    let qt = q.transpose();

    for col in 0..n {
        for i in (0..n).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..n {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }

    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_matrix_layout() {
        let x = design_matrix(&[1.0, 2.0, 3.0]);
        assert_eq!(x.nrows(), 3);
        assert_eq!(x.ncols(), 2);
        for i in 0..3 {
            assert!((x[(i, 0)] - (i + 1) as f64).abs() < 1e-12);
            assert!((x[(i, 1)] - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&[5.0, 5.0, 5.0], 1e-10));
        assert!(!is_constant(&[5.0, 5.0, 5.1], 1e-10));
        assert!(is_constant(&[], 1e-10));
    }

    #[test]
    fn test_is_constant_with_tolerance() {
        let values = [1.0, 1.000001, 1.0];
        assert!(!is_constant(&values, 1e-10));
        assert!(is_constant(&values, 1e-5));
    }

    #[test]
    fn test_is_constant_is_scale_free() {
        let tiny = [0.0, 1e-11, 2e-11, 3e-11];
        let offset = [2450000.0, 2450001.0, 2450002.0, 2450003.0];
        assert!(!is_constant(&tiny, 1e-10));
        assert!(!is_constant(&offset, 1e-10));
        assert!(is_constant(&[0.0, 0.0, 0.0], 1e-10));
    }

    #[test]
    fn test_center_and_scale() {
        let (scaled, mean, scale) = center_and_scale(&[2.0, 4.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((scale - 4.0).abs() < 1e-12);
        assert!((scaled[0] + 0.75).abs() < 1e-12);
        assert!((scaled[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_qr_inverse_relative_tolerance() {
        // Invertible but badly scaled: diag(1e-20, 1)
        let mut m = Mat::zeros(2, 2);
        m[(0, 0)] = 1e-20;
        m[(1, 1)] = 1.0;
        assert!(qr_inverse(&m, 1e-10).is_none());

        m[(0, 0)] = 1e-5;
        let inv = qr_inverse(&m, 1e-10).expect("well within tolerance");
        assert!((inv[(0, 0)] - 1e5).abs() < 1e-5);
    }

    #[test]
    fn test_qr_inverse_2x2() {
        // [[4, 7], [2, 6]]^-1 = [[0.6, -0.7], [-0.2, 0.4]]
        let mut m = Mat::zeros(2, 2);
        m[(0, 0)] = 4.0;
        m[(0, 1)] = 7.0;
        m[(1, 0)] = 2.0;
        m[(1, 1)] = 6.0;

        let inv = qr_inverse(&m, 1e-10).expect("matrix is invertible");
        assert!((inv[(0, 0)] - 0.6).abs() < 1e-10);
        assert!((inv[(0, 1)] + 0.7).abs() < 1e-10);
        assert!((inv[(1, 0)] + 0.2).abs() < 1e-10);
        assert!((inv[(1, 1)] - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_qr_inverse_singular() {
        let m = Mat::from_fn(2, 2, |_, _| 1.0);
        assert!(qr_inverse(&m, 1e-10).is_none());
    }
}
