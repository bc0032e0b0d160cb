//! Reference discrete Fourier transform.
//!
//! `y[k] = Σ_j x[j] · exp(-2πi k j / N)` evaluated by direct summation in
//! `O(N²)`. Every accelerated engine in [`crate::fft`] is validated against
//! this one.
//!
//! With the `parallel` feature, [`dft_parallel`] spreads the output bins over
//! the Rayon pool. Each bin only reads the input, so the result is identical
//! to [`dft`].

use alloc::vec::Vec;

use crate::fft::{twiddle, FftError, Transform};
use crate::num::{Complex, Float};

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

/// Minimum number of output bins each worker should own before splitting pays off.
#[cfg(feature = "parallel")]
const PER_CORE_BINS: usize = 256;

/// Run-time override for the parallel threshold. `0` means no override.
#[cfg(feature = "parallel")]
static PARALLEL_DFT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_DFT_THRESHOLD: OnceLock<usize> = OnceLock::new();

#[cfg(feature = "parallel")]
fn parallel_dft_threshold() -> usize {
    let override_thr = PARALLEL_DFT_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return override_thr;
    }
    *PARALLEL_DFT_THRESHOLD.get_or_init(|| {
        std::env::var("DFTKIT_PAR_DFT_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or_else(|| PER_CORE_BINS * num_cpus::get().max(1))
    })
}

#[cfg(feature = "parallel")]
/// Set the minimum transform length at which [`dft_parallel`] uses more than
/// one thread.
///
/// Passing `0` reverts to `DFTKIT_PAR_DFT_THRESHOLD` or the per-core heuristic.
pub fn set_parallel_dft_threshold(threshold: usize) {
    PARALLEL_DFT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

/// Single output bin `k` of the DFT of `input`.
#[inline]
fn dft_bin<T: Float>(input: &[Complex<T>], k: usize) -> Complex<T> {
    let n = input.len();
    input
        .iter()
        .enumerate()
        .fold(Complex::zero(), |acc, (j, &x)| {
            acc.add(x.mul(twiddle((k * j) % n, n)))
        })
}

/// Compute the DFT of `input` into a newly allocated spectrum.
///
/// Any non-zero length is accepted. An empty input returns
/// [`FftError::InvalidLength`].
pub fn dft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::InvalidLength { len: 0 });
    }
    Ok((0..n).map(|k| dft_bin(input, k)).collect())
}

/// Inverse DFT, scaled by `1/N` so that `idft(dft(x)) ≈ x`.
pub fn idft<T: Float>(spectrum: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = spectrum.len();
    if n == 0 {
        return Err(FftError::InvalidLength { len: 0 });
    }
    let conjugated: Vec<Complex<T>> = spectrum.iter().map(|c| c.conj()).collect();
    let scale = T::one() / T::from_f64(n as f64);
    Ok(dft(&conjugated)?
        .into_iter()
        .map(|c| c.conj().scale(scale))
        .collect())
}

/// [`dft`] with the outer bin loop distributed across Rayon workers once the
/// length reaches the parallel threshold.
#[cfg(feature = "parallel")]
pub fn dft_parallel<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::InvalidLength { len: 0 });
    }
    if n < parallel_dft_threshold() {
        return dft(input);
    }
    log::debug!("parallel dft over {} bins", n);
    let mut output = alloc::vec![Complex::zero(); n];
    output
        .par_iter_mut()
        .enumerate()
        .for_each(|(k, slot)| *slot = dft_bin(input, k));
    Ok(output)
}

/// [`Transform`] wrapper over [`dft`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dft;

impl<T: Float> Transform<T> for Dft {
    fn name(&self) -> &'static str {
        "dft"
    }
    fn requires_power_of_two(&self) -> bool {
        false
    }
    fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        dft(input)
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;
    use proptest::prelude::*;

    #[test]
    fn test_dft_impulse() {
        let x = [
            Complex64::new(1.0, 0.0),
            Complex64::zero(),
            Complex64::zero(),
            Complex64::zero(),
        ];
        let y = dft(&x).unwrap();
        for c in &y {
            assert!((c.re - 1.0).abs() < 1e-12);
            assert!(c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_dft_three_point() {
        // [1, 2, 3] -> [6, -1.5 + 0.866i, -1.5 - 0.866i]
        let x = [
            Complex64::from_real(1.0),
            Complex64::from_real(2.0),
            Complex64::from_real(3.0),
        ];
        let y = dft(&x).unwrap();
        let h = 3f64.sqrt() / 2.0;
        assert!((y[0].re - 6.0).abs() < 1e-12);
        assert!((y[1].re + 1.5).abs() < 1e-12 && (y[1].im - h).abs() < 1e-12);
        assert!((y[2].re + 1.5).abs() < 1e-12 && (y[2].im + h).abs() < 1e-12);
    }

    #[test]
    fn test_idft_roundtrip() {
        let x: Vec<Complex64> = (0..12)
            .map(|i| Complex64::new(i as f64, (i * i) as f64 * 0.1))
            .collect();
        let back = idft(&dft(&x).unwrap()).unwrap();
        for (a, b) in x.iter().zip(back.iter()) {
            assert!((a.re - b.re).abs() < 1e-9);
            assert!((a.im - b.im).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dft_empty() {
        let x: [Complex64; 0] = [];
        assert_eq!(dft(&x), Err(FftError::InvalidLength { len: 0 }));
        assert_eq!(idft(&x), Err(FftError::InvalidLength { len: 0 }));
    }

    #[test]
    fn test_input_untouched() {
        let x = vec![Complex64::from_real(2.0); 5];
        let _ = dft(&x).unwrap();
        assert!(x.iter().all(|c| *c == Complex64::from_real(2.0)));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        set_parallel_dft_threshold(1);
        let x: Vec<Complex64> = (0..300)
            .map(|i| Complex64::new((i as f64 * 0.37).sin(), 0.0))
            .collect();
        assert_eq!(dft_parallel(&x).unwrap(), dft(&x).unwrap());
        set_parallel_dft_threshold(0);
    }

    proptest! {
        #[test]
        fn prop_dft_linear(
            n in 1usize..24,
            a in -5.0f64..5.0,
            b in -5.0f64..5.0,
            ref xs in proptest::collection::vec(-100.0f64..100.0, 24),
            ref zs in proptest::collection::vec(-100.0f64..100.0, 24),
        ) {
            let x: Vec<Complex64> = xs.iter().take(n).map(|&v| Complex64::from_real(v)).collect();
            let z: Vec<Complex64> = zs.iter().take(n).map(|&v| Complex64::new(v, -v)).collect();
            let mixed: Vec<Complex64> = x
                .iter()
                .zip(z.iter())
                .map(|(p, q)| p.scale(a).add(q.scale(b)))
                .collect();
            let (fx, fz, fm) = (dft(&x).unwrap(), dft(&z).unwrap(), dft(&mixed).unwrap());
            for k in 0..n {
                let expect = fx[k].scale(a).add(fz[k].scale(b));
                prop_assert!((fm[k].re - expect.re).abs() < 1e-6);
                prop_assert!((fm[k].im - expect.im).abs() < 1e-6);
            }
        }
    }
}
