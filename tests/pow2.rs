mod common;

use dftkit::pow2::{next_power_of_two, previous_power_of_two};
use dftkit::{normalize, Complex64, Diagnostic, RoundSize};

fn ramp(n: usize) -> Vec<Complex64> {
    (1..=n).map(|i| Complex64::from_real(i as f64)).collect()
}

// Padding a length-5 sequence keeps the data and appends three zeros.
#[test]
fn pads_five_to_eight() {
    let out = normalize(ramp(5), RoundSize::Up { target: None });
    assert_eq!(out.len(), 8);
    assert_eq!(&out.samples[..5], &ramp(5)[..]);
    assert!(out.samples[5..].iter().all(|c| *c == Complex64::zero()));
    assert_eq!(out.diagnostics, vec![Diagnostic::ZeroPadded { appended: 3 }]);
}

#[test]
fn power_of_two_input_is_unchanged() {
    for n in [1, 2, 16, 256] {
        let out = normalize(ramp(n), RoundSize::Up { target: None });
        assert_eq!(out.samples, ramp(n));
        assert!(out.diagnostics.is_empty());
    }
    let out = normalize(ramp(16), RoundSize::Down);
    assert_eq!(out.samples, ramp(16));
}

#[test]
fn round_down_truncates() {
    let out = normalize(ramp(100), RoundSize::Down);
    assert_eq!(out.samples, ramp(64));
    assert!(normalize(Vec::<Complex64>::new(), RoundSize::Down).is_empty());
}

#[test]
fn power_of_two_target_truncates_silently() {
    let out = normalize(ramp(100), RoundSize::Up { target: Some(32) });
    assert_eq!(out.samples, ramp(32));
    assert!(out.diagnostics.is_empty());
}

#[test]
fn odd_target_is_flagged_and_padded() {
    common::init_logging();
    let out = normalize(ramp(100), RoundSize::Up { target: Some(20) });
    assert_eq!(out.len(), 32);
    assert_eq!(&out.samples[..20], &ramp(20)[..]);
    assert_eq!(
        out.diagnostics,
        vec![
            Diagnostic::NonPowerOfTwoTarget(20),
            Diagnostic::ZeroPadded { appended: 12 }
        ]
    );
    assert_eq!(
        out.diagnostics[0].to_string(),
        "requested size 20 is not a power of 2"
    );
}

#[test]
fn oversized_target_is_ignored() {
    let out = normalize(ramp(4), RoundSize::Up { target: Some(64) });
    assert_eq!(out.samples, ramp(4));
    assert_eq!(
        out.diagnostics,
        vec![Diagnostic::TargetIgnored { target: 64, len: 4 }]
    );
}

#[test]
fn power_helpers() {
    assert_eq!(previous_power_of_two(5), 4);
    assert_eq!(previous_power_of_two(0), 0);
    assert_eq!(next_power_of_two(5), 8);
    assert_eq!(next_power_of_two(8), 8);
}
