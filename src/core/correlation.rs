//! Cross-correlation mode and output types.

use rustfft::num_complex::Complex;

/// How a cross-correlation is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrelationMode {
    /// `IFFT(FFT(fref) · conj(FFT(ftest)))`, O(n log n), complex output.
    #[default]
    Spectral,

    /// Explicit sum over every cyclic shift of `ftest`, O(n²), real output.
    Physical,
}

/// A circular cross-correlation, one value per shift `0..n`.
#[derive(Debug, Clone, PartialEq)]
pub enum CrossCorrelation {
    /// Output of the spectral path. Generally complex even for real inputs,
    /// with imaginary parts at rounding level.
    Spectral(Vec<Complex<f64>>),

    /// Output of the physical path.
    Physical(Vec<f64>),
}

impl CrossCorrelation {
    /// The mode that produced this result.
    pub fn mode(&self) -> CorrelationMode {
        match self {
            CrossCorrelation::Spectral(_) => CorrelationMode::Spectral,
            CrossCorrelation::Physical(_) => CorrelationMode::Physical,
        }
    }

    /// Number of shifts.
    pub fn len(&self) -> usize {
        match self {
            CrossCorrelation::Spectral(values) => values.len(),
            CrossCorrelation::Physical(values) => values.len(),
        }
    }

    /// Returns true if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Real part of each value.
    pub fn real_part(&self) -> Vec<f64> {
        match self {
            CrossCorrelation::Spectral(values) => values.iter().map(|c| c.re).collect(),
            CrossCorrelation::Physical(values) => values.clone(),
        }
    }

    /// Magnitude of each value.
    pub fn magnitudes(&self) -> Vec<f64> {
        match self {
            CrossCorrelation::Spectral(values) => values.iter().map(|c| c.norm()).collect(),
            CrossCorrelation::Physical(values) => values.iter().map(|v| v.abs()).collect(),
        }
    }

    /// Shift with the largest magnitude. The first one wins on ties; NaN values are skipped.
    pub fn peak_shift(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (shift, magnitude) in self.magnitudes().into_iter().enumerate() {
            if magnitude.is_nan() {
                continue;
            }
            match best {
                Some((_, current)) if magnitude <= current => {}
                _ => best = Some((shift, magnitude)),
            }
        }
        best.map(|(shift, _)| shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_spectral() {
        assert_eq!(CorrelationMode::default(), CorrelationMode::Spectral);
    }

    #[test]
    fn test_peak_shift_first_wins() {
        let cc = CrossCorrelation::Physical(vec![1.0, -3.0, 3.0, 2.0]);
        assert_eq!(cc.peak_shift(), Some(1));
        assert_eq!(cc.mode(), CorrelationMode::Physical);
    }

    #[test]
    fn test_spectral_helpers() {
        let cc = CrossCorrelation::Spectral(vec![Complex::new(3.0, 4.0), Complex::new(1.0, 0.0)]);
        assert_eq!(cc.len(), 2);
        assert_eq!(cc.real_part(), vec![3.0, 1.0]);
        assert!((cc.magnitudes()[0] - 5.0).abs() < 1e-12);
        assert_eq!(cc.peak_shift(), Some(0));
    }

    #[test]
    fn test_empty_has_no_peak() {
        let cc = CrossCorrelation::Physical(Vec::new());
        assert!(cc.is_empty());
        assert_eq!(cc.peak_shift(), None);
    }
}
