//! Accelerated Fourier transforms for power-of-two lengths.
//!
//! Two decimation-in-time engines live here:
//!
//! - [`fft`] / [`RadixTwoFft`]: full recursive radix-2
//!   [Cooley–Tukey](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm),
//!   `O(N log N)`. A [`FftPlanner`] caches the twiddle table per length.
//! - [`fft_single_stage`] / [`SingleStageFft`]: a single even/odd split whose
//!   two half-length spectra are summed directly, followed by one butterfly
//!   stage. This is `O(N²)` and exists for parity with the classic
//!   one-level formulation.
//!
//! Both agree with [`crate::dft::dft`] to within floating-point tolerance.
//! [`Algorithm`] selects an engine at run time.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use hashbrown::HashMap;

use crate::dft::Dft;

pub use crate::num::{Complex, Complex32, Complex64, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sequence is empty, or its length is not a power of two where one
    /// is required.
    InvalidLength { len: usize },
    /// Two sequences that must be index-aligned have different lengths.
    MismatchedLengths,
    /// A scalar parameter (such as a sampling step) is non-finite or out of range.
    InvalidValue,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidLength { len: 0 } => write!(f, "input sequence is empty"),
            FftError::InvalidLength { len } => {
                write!(f, "length {} is not a power of two", len)
            }
            FftError::MismatchedLengths => write!(f, "sequence lengths do not match"),
            FftError::InvalidValue => write!(f, "parameter must be finite and positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// `exp(-2πi k / n)`.
///
/// `k` is expected to already be reduced modulo `n`; keeping the angle small
/// avoids the precision loss of evaluating `sin`/`cos` at large arguments.
#[inline]
pub(crate) fn twiddle<T: Float>(k: usize, n: usize) -> Complex<T> {
    let angle = -2.0 * core::f64::consts::PI * (k as f64) / (n as f64);
    Complex::expi(T::from_f64(angle))
}

/// Validate the accelerated-engine precondition and return the length.
fn check_power_of_two<T: Float>(input: &[Complex<T>]) -> Result<usize, FftError> {
    let n = input.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(FftError::InvalidLength { len: n });
    }
    Ok(n)
}

/// Caches twiddle tables keyed by transform length.
///
/// The table for length `n` has `n/2` entries, `exp(-2πi k / n)` for
/// `k = 0..n/2`. Every level of the recursive transform reads from that one
/// table with a stride, so a single entry serves the whole transform.
pub struct FftPlanner<T: Float> {
    cache: HashMap<usize, Arc<[Complex<T>]>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Return the cached twiddle table for `n`, building it on first use.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        if let Some(table) = self.cache.get(&n) {
            return Arc::clone(table);
        }
        log::debug!("building twiddle table for n = {}", n);
        let table: Arc<[Complex<T>]> = (0..n / 2).map(|k| twiddle(k, n)).collect();
        self.cache.insert(n, Arc::clone(&table));
        table
    }

    /// Number of lengths with a cached table.
    pub fn cached_lengths(&self) -> usize {
        self.cache.len()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Recursive radix-2 transform of `input`, returning a new spectrum.
    pub fn fft(&mut self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = check_power_of_two(input)?;
        let twiddles = self.get_twiddles(n);
        let mut output = vec![Complex::zero(); n];
        radix2(input, 0, 1, &twiddles, &mut output);
        Ok(output)
    }
}

/// Transform the strided view `input[start], input[start + stride], ...` of
/// length `output.len()` into `output`.
///
/// `stride * output.len()` always equals the top-level length, so the
/// twiddle `exp(-2πi k / len)` for this level is `twiddles[k * stride]`.
fn radix2<T: Float>(
    input: &[Complex<T>],
    start: usize,
    stride: usize,
    twiddles: &[Complex<T>],
    output: &mut [Complex<T>],
) {
    let len = output.len();
    if len == 1 {
        output[0] = input[start];
        return;
    }
    let half = len / 2;
    let (evens, odds) = output.split_at_mut(half);
    radix2(input, start, stride * 2, twiddles, evens);
    radix2(input, start + stride, stride * 2, twiddles, odds);
    for k in 0..half {
        let t = twiddles[k * stride].mul(odds[k]);
        let e = evens[k];
        evens[k] = e.add(t);
        odds[k] = e.sub(t);
    }
}

/// Recursive radix-2 FFT using a throwaway planner.
///
/// Fails with [`FftError::InvalidLength`] when the input is empty or its
/// length is not a power of two; run [`crate::pow2::normalize`] first.
pub fn fft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    FftPlanner::new().fft(input)
}

/// One decimation level: direct sums over the even and odd halves, then a
/// single butterfly stage.
pub fn fft_single_stage<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let n = check_power_of_two(input)?;
    if n == 1 {
        return Ok(input.to_vec());
    }
    let half = n / 2;
    let mut output = vec![Complex::zero(); n];
    for k in 0..half {
        let mut even = Complex::zero();
        let mut odd = Complex::zero();
        for j in 0..half {
            // exp(-2πi kj / (n/2)), shared by both halves
            let w = twiddle((k * j) % half, half);
            even = even.add(input[2 * j].mul(w));
            odd = odd.add(input[2 * j + 1].mul(w));
        }
        let t = twiddle::<T>(k, n).mul(odd);
        output[k] = even.add(t);
        output[k + half] = even.sub(t);
    }
    Ok(output)
}

/// A transform engine producing a fresh spectrum from a borrowed sample sequence.
pub trait Transform<T: Float> {
    fn name(&self) -> &'static str;
    /// Whether the engine rejects lengths that are not a power of two.
    fn requires_power_of_two(&self) -> bool;
    fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>;
}

/// Recursive radix-2 engine that keeps its planner between calls.
pub struct RadixTwoFft<T: Float> {
    planner: RefCell<FftPlanner<T>>,
}

impl<T: Float> Default for RadixTwoFft<T> {
    fn default() -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
        }
    }
}

impl<T: Float> RadixTwoFft<T> {
    pub fn cached_lengths(&self) -> usize {
        self.planner.borrow().cached_lengths()
    }
}

impl<T: Float> Transform<T> for RadixTwoFft<T> {
    fn name(&self) -> &'static str {
        "radix-2 fft"
    }
    fn requires_power_of_two(&self) -> bool {
        true
    }
    fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.planner.borrow_mut().fft(input)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleStageFft;

impl<T: Float> Transform<T> for SingleStageFft {
    fn name(&self) -> &'static str {
        "single-stage fft"
    }
    fn requires_power_of_two(&self) -> bool {
        true
    }
    fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        fft_single_stage(input)
    }
}

/// Run-time choice of transform engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Reference `O(N²)` DFT; any non-zero length.
    Discrete,
    /// One even/odd split with direct sub-sums; power-of-two lengths.
    SingleStage,
    /// Recursive radix-2 Cooley–Tukey; power-of-two lengths.
    #[default]
    Fast,
}

impl Algorithm {
    pub fn requires_power_of_two(self) -> bool {
        !matches!(self, Algorithm::Discrete)
    }

    /// The engine behind this choice, with a fresh planner for [`Algorithm::Fast`].
    pub fn engine<T: Float>(self) -> Box<dyn Transform<T>> {
        match self {
            Algorithm::Discrete => Box::new(Dft),
            Algorithm::SingleStage => Box::new(SingleStageFft),
            Algorithm::Fast => Box::new(RadixTwoFft::<T>::default()),
        }
    }

    pub fn transform<T: Float>(self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let engine = self.engine::<T>();
        log::debug!("running {} over {} samples", engine.name(), input.len());
        engine.transform(input)
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::dft::dft;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_signal(n: usize, seed: u64) -> Vec<Complex64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Complex64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect()
    }

    fn assert_close(a: &[Complex64], b: &[Complex64], tol: f64) {
        assert_eq!(a.len(), b.len());
        let scale = b.iter().map(|c| c.norm()).fold(1.0, f64::max);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x.re - y.re).abs() <= tol * scale, "re: {} vs {}", x.re, y.re);
            assert!((x.im - y.im).abs() <= tol * scale, "im: {} vs {}", x.im, y.im);
        }
    }

    #[test]
    fn test_engines_match_dft_random() {
        for (seed, &n) in [1usize, 2, 4, 8, 16, 64, 256].iter().enumerate() {
            let x = random_signal(n, seed as u64);
            let reference = dft(&x).unwrap();
            assert_close(&fft(&x).unwrap(), &reference, 1e-9);
            assert_close(&fft_single_stage(&x).unwrap(), &reference, 1e-9);
        }
    }

    #[test]
    fn test_planner_reuses_tables() {
        let mut planner = FftPlanner::<f64>::new();
        let x = random_signal(32, 7);
        let a = planner.fft(&x).unwrap();
        let b = planner.fft(&x).unwrap();
        assert_eq!(planner.cached_lengths(), 1);
        assert_eq!(a, b);
        planner.fft(&random_signal(8, 8)).unwrap();
        assert_eq!(planner.cached_lengths(), 2);
        planner.clear();
        assert_eq!(planner.cached_lengths(), 0);
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let x = random_signal(6, 3);
        assert_eq!(fft(&x), Err(FftError::InvalidLength { len: 6 }));
        assert_eq!(fft_single_stage(&x), Err(FftError::InvalidLength { len: 6 }));
        let empty: [Complex64; 0] = [];
        assert_eq!(fft(&empty), Err(FftError::InvalidLength { len: 0 }));
    }

    #[test]
    fn test_algorithm_dispatch() {
        let x = random_signal(16, 11);
        let reference = dft(&x).unwrap();
        for alg in [Algorithm::Discrete, Algorithm::SingleStage, Algorithm::Fast] {
            assert_close(&alg.transform(&x).unwrap(), &reference, 1e-9);
        }
        assert!(Algorithm::Discrete.transform(&x[..5]).is_ok());
        assert!(Algorithm::Fast.transform(&x[..5]).is_err());
    }

    #[test]
    fn test_algorithm_engines() {
        for alg in [Algorithm::Discrete, Algorithm::SingleStage, Algorithm::Fast] {
            let engine = alg.engine::<f64>();
            assert_eq!(engine.requires_power_of_two(), alg.requires_power_of_two());
        }
        assert_eq!(Algorithm::Discrete.engine::<f64>().name(), "dft");
        assert_eq!(Algorithm::SingleStage.engine::<f64>().name(), "single-stage fft");
        assert_eq!(Algorithm::Fast.engine::<f32>().name(), "radix-2 fft");
    }

    proptest! {
        #[test]
        fn prop_fft_linear(
            log_n in 0u32..7,
            a in -5.0f64..5.0,
            b in -5.0f64..5.0,
            ref xs in proptest::collection::vec(-100.0f64..100.0, 128),
            ref zs in proptest::collection::vec(-100.0f64..100.0, 128),
        ) {
            let n = 1usize << log_n;
            let x: Vec<Complex64> = xs.iter().take(n).map(|&v| Complex64::from_real(v)).collect();
            let z: Vec<Complex64> = zs.iter().take(n).map(|&v| Complex64::new(0.0, v)).collect();
            let mixed: Vec<Complex64> = x
                .iter()
                .zip(z.iter())
                .map(|(p, q)| p.scale(a).add(q.scale(b)))
                .collect();
            type Engine = fn(&[Complex64]) -> Result<Vec<Complex64>, FftError>;
            for engine in [fft::<f64> as Engine, fft_single_stage::<f64>] {
                let fx = engine(&x).unwrap();
                let fz = engine(&z).unwrap();
                let fm = engine(&mixed).unwrap();
                for k in 0..n {
                    let expect = fx[k].scale(a).add(fz[k].scale(b));
                    prop_assert!((fm[k].re - expect.re).abs() < 1e-6);
                    prop_assert!((fm[k].im - expect.im).abs() < 1e-6);
                }
            }
        }
    }
}
