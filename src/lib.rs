//! # dftkit - Fourier transforms of sampled columns
//!
//! Frequency-domain analysis of real-valued sampled signals: a reference
//! discrete Fourier transform, radix-2 fast transforms, power-of-two length
//! normalization and the frequency-axis mapping used to present a spectrum.
//!
//! ## Pipeline
//!
//! ```
//! use dftkit::pow2::{normalize, RoundSize};
//! use dftkit::freq::spectrum_rows;
//! use dftkit::{Algorithm, Complex64};
//!
//! let samples: Vec<Complex64> = (0..12)
//!     .map(|i| Complex64::from_real((i as f64 * 0.5).sin()))
//!     .collect();
//! let normalized = normalize(samples, RoundSize::Up { target: None });
//! assert_eq!(normalized.len(), 16);
//!
//! let spectrum = Algorithm::Fast.transform(&normalized.samples).unwrap();
//! let rows = spectrum_rows(&normalized.samples, &spectrum, 0.1).unwrap();
//! assert_eq!(rows.len(), 7);
//! ```
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and the [`columns`] reader/writer
//! - `parallel`: bin-parallel [`dft::dft_parallel`] on Rayon
//! - `internal-tests`: unit and property tests (pulls in `proptest`, `rand`)
//!
//! ## Algorithms
//!
//! | [`Algorithm`] | Lengths | Work |
//! |---------------|---------|------|
//! | `Discrete` | any `N >= 1` | `O(N²)` |
//! | `SingleStage` | powers of two | `O(N²)`, one butterfly stage |
//! | `Fast` | powers of two | `O(N log N)` |
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Complex values and the float abstraction
pub mod num;

/// Radix-2 fast transforms, the engine trait and run-time algorithm selection
pub mod fft;

/// Reference discrete Fourier transform
pub mod dft;

/// Power-of-two length normalization
pub mod pow2;

/// Frequency axis and spectrum presentation rows
pub mod freq;

/// Centered moving-average smoothing
pub mod smoothing;

/// Column table reading and spectrum writing
#[cfg(feature = "std")]
pub mod columns;

pub use dft::{dft, idft, Dft};
pub use fft::{
    fft, fft_single_stage, Algorithm, FftError, FftPlanner, RadixTwoFft, SingleStageFft,
    Transform,
};
pub use num::{Complex, Complex32, Complex64, Float};
pub use pow2::{normalize, Diagnostic, Normalized, RoundSize};
