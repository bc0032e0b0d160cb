//! Shared signal generators for the dftkit benchmarks.

use dftkit::Complex64;

/// Two superposed tones, real-valued, `n` samples long.
pub fn two_tone(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let v = (2.0 * std::f64::consts::PI * 5.0 * t).sin()
                + 0.5 * (2.0 * std::f64::consts::PI * 17.0 * t).cos();
            Complex64::from_real(v)
        })
        .collect()
}
