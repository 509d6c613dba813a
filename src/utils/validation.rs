//! Input checks shared by the estimators.

/// Index of the first NaN or infinite value, if any.
pub fn first_non_finite(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}

/// Index and value of the first entry failing `accept`.
pub fn first_rejected(values: &[f64], accept: impl Fn(f64) -> bool) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, v)| !accept(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_finite() {
        assert_eq!(first_non_finite(&[1.0, 2.0]), None);
        assert_eq!(first_non_finite(&[1.0, f64::NAN, f64::INFINITY]), Some(1));
    }

    #[test]
    fn test_first_rejected() {
        let values = [1.0, 0.0, -1.0];
        assert_eq!(first_rejected(&values, |v| v > 0.0), Some((1, 0.0)));
        assert_eq!(first_rejected(&values, |v| v >= -1.0), None);
    }
}
