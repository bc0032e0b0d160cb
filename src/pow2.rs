//! Power-of-two length normalization.
//!
//! The accelerated engines only accept lengths `2^m`. [`normalize`] brings an
//! arbitrary sample sequence to such a length by truncating and/or appending
//! zero samples according to a [`RoundSize`] policy.
//!
//! Nothing here is fatal. Conditions worth surfacing are returned as
//! [`Diagnostic`]s next to the adjusted samples and also logged at `warn`.

use alloc::vec::Vec;
use core::fmt;

use crate::num::{Complex, Float};

/// How to reach a power-of-two length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundSize {
    /// Truncate to the largest power of two not exceeding the length.
    Down,
    /// Optionally truncate to `target`, then zero-pad up to the next power of two.
    Up { target: Option<usize> },
}

impl Default for RoundSize {
    fn default() -> Self {
        RoundSize::Up { target: None }
    }
}

/// Non-fatal conditions observed while normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The requested target length is not itself a power of two.
    NonPowerOfTwoTarget(usize),
    /// The target was zero or not shorter than the data, so nothing was truncated.
    TargetIgnored { target: usize, len: usize },
    /// Zero samples were appended to reach a power of two.
    ZeroPadded { appended: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NonPowerOfTwoTarget(n) => {
                write!(f, "requested size {} is not a power of 2", n)
            }
            Diagnostic::TargetIgnored { target, len } => write!(
                f,
                "requested size {} is not smaller than the data length {}; not truncating",
                target, len
            ),
            Diagnostic::ZeroPadded { appended } => {
                write!(f, "non-power of 2 length, appended {} zero samples", appended)
            }
        }
    }
}

/// The adjusted sequence together with everything worth reporting about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T: Float> {
    pub samples: Vec<Complex<T>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T: Float> Normalized<T> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

pub fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}

/// Largest power of two `<= n`, or `0` when `n == 0`.
pub fn previous_power_of_two(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1usize << (usize::BITS - 1 - n.leading_zeros())
    }
}

/// Smallest power of two `>= n`. `0` maps to `0`.
pub fn next_power_of_two(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.next_power_of_two()
    }
}

/// Adjust `samples` to a power-of-two length according to `policy`.
///
/// The input vector is consumed; callers must continue with
/// [`Normalized::samples`]. An empty input stays empty under every policy.
pub fn normalize<T: Float>(mut samples: Vec<Complex<T>>, policy: RoundSize) -> Normalized<T> {
    let mut diagnostics = Vec::new();
    match policy {
        RoundSize::Down => {
            samples.truncate(previous_power_of_two(samples.len()));
        }
        RoundSize::Up { target } => {
            if let Some(target) = target {
                if target > 0 && !target.is_power_of_two() {
                    diagnostics.push(Diagnostic::NonPowerOfTwoTarget(target));
                }
                if target > 0 && target < samples.len() {
                    samples.truncate(target);
                } else {
                    diagnostics.push(Diagnostic::TargetIgnored {
                        target,
                        len: samples.len(),
                    });
                }
            }
            let len = samples.len();
            let padded = next_power_of_two(len);
            if padded > len {
                samples.resize(padded, Complex::zero());
                diagnostics.push(Diagnostic::ZeroPadded {
                    appended: padded - len,
                });
            }
        }
    }
    for d in &diagnostics {
        log::warn!("{}", d);
    }
    Normalized {
        samples,
        diagnostics,
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;
    use proptest::prelude::*;

    fn ramp(n: usize) -> Vec<Complex64> {
        (0..n).map(|i| Complex64::from_real(i as f64 + 1.0)).collect()
    }

    #[test]
    fn test_power_helpers() {
        assert_eq!(previous_power_of_two(0), 0);
        assert_eq!(previous_power_of_two(1), 1);
        assert_eq!(previous_power_of_two(1023), 512);
        assert_eq!(previous_power_of_two(1024), 1024);
        assert_eq!(next_power_of_two(0), 0);
        assert_eq!(next_power_of_two(5), 8);
        assert!(is_power_of_two(64));
        assert!(!is_power_of_two(0));
    }

    #[test]
    fn test_down_truncates() {
        let out = normalize(ramp(13), RoundSize::Down);
        assert_eq!(out.samples, ramp(8));
        assert!(out.diagnostics.is_empty());
    }

    #[test]
    fn test_target_truncates_then_pads() {
        let out = normalize(ramp(20), RoundSize::Up { target: Some(6) });
        assert_eq!(out.len(), 8);
        assert_eq!(&out.samples[..6], &ramp(6)[..]);
        assert_eq!(
            out.diagnostics,
            vec![
                Diagnostic::NonPowerOfTwoTarget(6),
                Diagnostic::ZeroPadded { appended: 2 }
            ]
        );
    }

    #[test]
    fn test_target_larger_than_data() {
        let out = normalize(ramp(3), RoundSize::Up { target: Some(16) });
        assert_eq!(out.len(), 4);
        assert_eq!(
            out.diagnostics,
            vec![
                Diagnostic::TargetIgnored { target: 16, len: 3 },
                Diagnostic::ZeroPadded { appended: 1 }
            ]
        );
    }

    #[test]
    fn test_empty_stays_empty() {
        for policy in [
            RoundSize::Down,
            RoundSize::Up { target: None },
            RoundSize::Up { target: Some(4) },
        ] {
            assert!(normalize(Vec::<Complex64>::new(), policy).is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_result_is_power_of_two(len in 1usize..300, target in proptest::option::of(0usize..400)) {
            let out = normalize(ramp(len), RoundSize::Up { target });
            prop_assert!(out.len().is_power_of_two());
            let kept = match target {
                Some(t) if t > 0 && t < len => t,
                _ => len,
            };
            prop_assert_eq!(&out.samples[..kept], &ramp(kept)[..]);
            prop_assert!(out.samples[kept..].iter().all(|c| *c == Complex64::zero()));
        }
    }
}
