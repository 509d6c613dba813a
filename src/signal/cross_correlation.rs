//! Circular cross-correlation.
//!
//! Both modes use the same shift convention:
//!
//! ```text
//! c[s] = Σ_j fref[j] · ftest[(j - s) mod n]
//! ```
//!
//! `Spectral` evaluates it as `IFFT(FFT(fref) · conj(FFT(ftest)))` in
//! O(n log n); `Physical` sums every cyclic shift directly in O(n²). Prefer
//! `Physical` only for short inputs or when exact real arithmetic matters.

use crate::core::{CorrelationMode, CrossCorrelation};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use thiserror::Error;

/// Errors that can occur when correlating two sequences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrossCorrelationError {
    #[error("length mismatch: fref has {fref} elements but ftest has {ftest}")]
    LengthMismatch { fref: usize, ftest: usize },

    #[error("cannot correlate empty sequences")]
    EmptyInput,
}

/// Cross-correlate two real sequences of equal length.
///
/// # Example
///
/// ```rust
/// use pietras_stats::{compute_crosscor, CorrelationMode};
///
/// let signal = [0.0, 1.0, 2.0, 1.0, 0.0, 0.0];
/// let cc = compute_crosscor(&signal, &signal, CorrelationMode::Spectral).unwrap();
/// assert_eq!(cc.peak_shift(), Some(0));
/// ```
pub fn compute_crosscor(
    fref: &[f64],
    ftest: &[f64],
    mode: CorrelationMode,
) -> Result<CrossCorrelation, CrossCorrelationError> {
    check_lengths(fref.len(), ftest.len())?;

    match mode {
        CorrelationMode::Spectral => {
            let fref: Vec<Complex<f64>> = fref.iter().map(|&v| Complex::new(v, 0.0)).collect();
            let ftest: Vec<Complex<f64>> = ftest.iter().map(|&v| Complex::new(v, 0.0)).collect();
            Ok(CrossCorrelation::Spectral(spectral(fref, ftest)))
        }
        CorrelationMode::Physical => Ok(CrossCorrelation::Physical(physical(fref, ftest))),
    }
}

/// Spectral cross-correlation of two complex sequences of equal length.
pub fn spectral_crosscor(
    fref: &[Complex<f64>],
    ftest: &[Complex<f64>],
) -> Result<Vec<Complex<f64>>, CrossCorrelationError> {
    check_lengths(fref.len(), ftest.len())?;
    Ok(spectral(fref.to_vec(), ftest.to_vec()))
}

fn check_lengths(fref: usize, ftest: usize) -> Result<(), CrossCorrelationError> {
    if fref != ftest {
        log::warn!(
            "cross-correlation inputs must be the same length: fref={} ftest={}",
            fref,
            ftest
        );
        return Err(CrossCorrelationError::LengthMismatch { fref, ftest });
    }
    if fref == 0 {
        return Err(CrossCorrelationError::EmptyInput);
    }
    Ok(())
}

fn spectral(mut fref: Vec<Complex<f64>>, mut ftest: Vec<Complex<f64>>) -> Vec<Complex<f64>> {
    let n = fref.len();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut fref);
    fft.process(&mut ftest);

    // Cross-power spectrum: FFT(fref) * conj(FFT(ftest))
    for (a, b) in fref.iter_mut().zip(ftest.iter()) {
        *a *= b.conj();
    }

    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut fref);

    // rustfft leaves the inverse unnormalized
    let scale = 1.0 / n as f64;
    for value in fref.iter_mut() {
        *value *= scale;
    }

    fref
}

fn physical(fref: &[f64], ftest: &[f64]) -> Vec<f64> {
    let n = fref.len();
    (0..n)
        .map(|shift| {
            fref.iter()
                .enumerate()
                .map(|(j, &r)| r * ftest[(j + n - shift) % n])
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_by_hand() {
        // c[0] = 1*4 + 2*5 + 3*6 = 32
        // c[1] = 1*6 + 2*4 + 3*5 = 29
        // c[2] = 1*5 + 2*6 + 3*4 = 29
        let c = physical(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_eq!(c, vec![32.0, 29.0, 29.0]);
    }

    #[test]
    fn test_spectral_matches_physical_small() {
        let fref = [1.0, 2.0, 3.0];
        let ftest = [4.0, 5.0, 6.0];
        let cc = compute_crosscor(&fref, &ftest, CorrelationMode::Spectral).unwrap();
        let expected = [32.0, 29.0, 29.0];
        for (value, want) in cc.real_part().iter().zip(expected) {
            assert!((value - want).abs() < 1e-10);
        }
    }

    #[test]
    fn test_single_element() {
        let cc = compute_crosscor(&[3.0], &[2.0], CorrelationMode::Physical).unwrap();
        assert_eq!(cc, CrossCorrelation::Physical(vec![6.0]));
    }

    #[test]
    fn test_length_mismatch() {
        let result = compute_crosscor(&[1.0, 2.0], &[1.0], CorrelationMode::Spectral);
        assert_eq!(
            result,
            Err(CrossCorrelationError::LengthMismatch { fref: 2, ftest: 1 })
        );
    }

    #[test]
    fn test_empty_input() {
        let result = compute_crosscor(&[], &[], CorrelationMode::Physical);
        assert_eq!(result, Err(CrossCorrelationError::EmptyInput));
    }
}
