// End-to-end: normalize, transform, then map bins to frequencies.
use dftkit::freq::{bin_frequency, frequency_axis, spectrum_rows};
use dftkit::{normalize, Algorithm, Complex64, FftError, RoundSize};
use std::f64::consts::PI;

#[test]
fn bin_zero_maps_to_dc() {
    assert_eq!(bin_frequency(0, 16, 0.5f64), 0.0);
    assert!((bin_frequency(4, 16, 0.5f64) - 0.5).abs() < 1e-15);
}

#[test]
fn axis_covers_half_spectrum() {
    let axis = frequency_axis(16, 1.0f64).unwrap();
    assert_eq!(axis.len(), 8);
    for (k, f) in axis.iter().enumerate() {
        assert!((f - k as f64 / 16.0).abs() < 1e-15);
    }
    assert_eq!(frequency_axis(16, 0.0f64), Err(FftError::InvalidValue));
}

// A cosine at 4 cycles per 32 samples, cut from 40 down to 32, peaks at
// bin 4 with half amplitude.
#[test]
fn cosine_peak_lands_on_expected_frequency() {
    let step = 0.01;
    let samples: Vec<Complex64> = (0..40)
        .map(|i| Complex64::from_real((2.0 * PI * 4.0 * i as f64 / 32.0).cos()))
        .collect();
    let normalized = normalize(samples, RoundSize::Up { target: Some(32) });
    assert_eq!(normalized.len(), 32);
    assert!(normalized.diagnostics.is_empty());

    let spectrum = Algorithm::Fast.transform(&normalized.samples).unwrap();
    let rows = spectrum_rows(&normalized.samples, &spectrum, step).unwrap();
    assert_eq!(rows.len(), 15);
    let peak = rows
        .iter()
        .max_by(|a, b| a.bin.norm().partial_cmp(&b.bin.norm()).unwrap())
        .unwrap();
    assert!((peak.frequency - 4.0 / (step * 32.0)).abs() < 1e-9);
    assert!((peak.bin.norm() - 0.5).abs() < 1e-9);
}

// Padding shifts nothing: row k still pairs input sample k with bin k.
#[test]
fn padded_rows_follow_normalized_samples() {
    let samples: Vec<Complex64> = (1..=5).map(|i| Complex64::from_real(i as f64)).collect();
    let normalized = normalize(samples, RoundSize::Up { target: None });
    let spectrum = Algorithm::SingleStage.transform(&normalized.samples).unwrap();
    let rows = spectrum_rows(&normalized.samples, &spectrum, 1.0).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].sample, Complex64::from_real(2.0));
    assert_eq!(rows[2].sample, Complex64::from_real(4.0));
    assert!((rows[0].frequency - 0.125).abs() < 1e-15);
}

#[test]
fn rows_are_index_aligned_with_input() {
    let x: Vec<Complex64> = (0..8).map(|i| Complex64::from_real(i as f64)).collect();
    let spectrum = Algorithm::Discrete.transform(&x).unwrap();
    let rows = spectrum_rows(&x, &spectrum, 1.0).unwrap();
    assert_eq!(rows.len(), 3);
    for (k, row) in rows.iter().enumerate() {
        assert_eq!(row.sample, x[k + 1]);
        assert!((row.bin.re - spectrum[k + 1].re / 8.0).abs() < 1e-15);
        assert!((row.bin.im - spectrum[k + 1].im / 8.0).abs() < 1e-15);
    }
}
