//! Frequency-axis mapping and spectrum presentation.
//!
//! Bin `k` of an `N`-point transform taken at sampling step `Δ` sits at the
//! physical frequency `k / (Δ · N)`, in cycles per unit of `Δ`. For real
//! input only bins `0..N/2` carry independent information.
//!
//! Engines return raw sums. Dividing by `N` happens in [`spectrum_rows`], at
//! presentation time, so comparisons against raw engine output must undo it.

use alloc::vec::Vec;

use crate::fft::FftError;
use crate::num::{Complex, Float};

/// Physical frequency of bin `k` for an `n`-point transform with step `step`.
///
/// `k == 0` (the DC bin) maps to `0`.
pub fn bin_frequency<T: Float>(k: usize, n: usize, step: T) -> T {
    T::from_f64(k as f64) / (step * T::from_f64(n as f64))
}

fn check_step<T: Float>(step: T) -> Result<(), FftError> {
    if !step.is_finite() || step <= T::zero() {
        return Err(FftError::InvalidValue);
    }
    Ok(())
}

/// Frequencies of bins `0..n/2`.
pub fn frequency_axis<T: Float>(n: usize, step: T) -> Result<Vec<T>, FftError> {
    if n == 0 {
        return Err(FftError::InvalidLength { len: 0 });
    }
    check_step(step)?;
    Ok((0..n / 2).map(|k| bin_frequency(k, n, step)).collect())
}

/// One line of a presented spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumRow<T: Float> {
    pub frequency: T,
    /// Time-domain sample with the same index as the bin.
    pub sample: Complex<T>,
    /// Spectrum value divided by `N`.
    pub bin: Complex<T>,
}

/// Pair the non-DC half-spectrum with its frequencies, normalizing bins by `N`.
///
/// Rows are produced for `k` in `1..N/2`; the DC bin is skipped.
pub fn spectrum_rows<T: Float>(
    input: &[Complex<T>],
    spectrum: &[Complex<T>],
    step: T,
) -> Result<Vec<SpectrumRow<T>>, FftError> {
    if input.len() != spectrum.len() {
        return Err(FftError::MismatchedLengths);
    }
    let n = spectrum.len();
    let axis = frequency_axis(n, step)?;
    let scale = T::one() / T::from_f64(n as f64);
    Ok(axis
        .into_iter()
        .enumerate()
        .skip(1)
        .map(|(k, frequency)| SpectrumRow {
            frequency,
            sample: input[k],
            bin: spectrum[k].scale(scale),
        })
        .collect())
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn test_axis_values() {
        let axis = frequency_axis(8, 0.5f64).unwrap();
        assert_eq!(axis.len(), 4);
        assert_eq!(axis[0], 0.0);
        assert!((axis[1] - 0.25).abs() < 1e-15);
        assert!((axis[3] - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_axis_rejects_bad_step() {
        assert_eq!(frequency_axis(8, 0.0f64), Err(FftError::InvalidValue));
        assert_eq!(frequency_axis(8, -1.0f64), Err(FftError::InvalidValue));
        assert_eq!(frequency_axis(8, f64::NAN), Err(FftError::InvalidValue));
        assert_eq!(
            frequency_axis(0, 1.0f64),
            Err(FftError::InvalidLength { len: 0 })
        );
    }

    #[test]
    fn test_rows_skip_dc_and_scale() {
        let input = vec![Complex64::from_real(1.0); 4];
        let spectrum = vec![
            Complex64::new(4.0, 0.0),
            Complex64::new(2.0, -2.0),
            Complex64::new(8.0, 0.0),
            Complex64::new(2.0, 2.0),
        ];
        let rows = spectrum_rows(&input, &spectrum, 1.0).unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].frequency - 0.25).abs() < 1e-15);
        assert_eq!(rows[0].bin, Complex64::new(0.5, -0.5));
        assert_eq!(rows[0].sample, Complex64::from_real(1.0));
    }

    #[test]
    fn test_rows_mismatched() {
        let input = vec![Complex64::zero(); 4];
        let spectrum = vec![Complex64::zero(); 8];
        assert_eq!(
            spectrum_rows(&input, &spectrum, 1.0),
            Err(FftError::MismatchedLengths)
        );
    }
}
