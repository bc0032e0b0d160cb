#![cfg(feature = "parallel")]

use dftkit::dft::{dft, dft_parallel, set_parallel_dft_threshold};
use dftkit::Complex64;

// Splitting bins across threads must not change a single bit of the result.
#[test]
fn parallel_dft_matches_serial() {
    set_parallel_dft_threshold(1);
    let x: Vec<Complex64> = (0..513)
        .map(|i| Complex64::new((i as f64 * 0.11).sin(), (i as f64 * 0.07).cos()))
        .collect();
    let serial = dft(&x).unwrap();
    let parallel = dft_parallel(&x).unwrap();
    assert_eq!(serial, parallel);
    let again = dft_parallel(&x).unwrap();
    assert_eq!(parallel, again);
    set_parallel_dft_threshold(0);
}

#[test]
fn parallel_dft_rejects_empty() {
    assert!(dft_parallel::<f64>(&[]).is_err());
}
