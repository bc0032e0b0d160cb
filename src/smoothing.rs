//! Centered moving-average smoothing.
//!
//! Each point is replaced by the mean of itself and up to `(points - 1) / 2`
//! neighbours on either side. Near the ends the window is clipped rather than
//! padded, so the first and last points average over fewer samples.

use alloc::vec::Vec;
use core::fmt;

use crate::num::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingError {
    /// The window must contain an odd number of points.
    EvenWindow(usize),
    ZeroWindow,
    /// A table row has no entry at the requested column.
    ColumnOutOfRange { row: usize, column: usize },
}

impl fmt::Display for SmoothingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmoothingError::EvenWindow(points) => {
                write!(f, "smoothing window must be odd, got {}", points)
            }
            SmoothingError::ZeroWindow => write!(f, "smoothing window must not be empty"),
            SmoothingError::ColumnOutOfRange { row, column } => {
                write!(f, "row {} has no column {}", row, column)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SmoothingError {}

fn check_window(points: usize) -> Result<usize, SmoothingError> {
    if points == 0 {
        return Err(SmoothingError::ZeroWindow);
    }
    if points % 2 == 0 {
        return Err(SmoothingError::EvenWindow(points));
    }
    Ok((points - 1) / 2)
}

/// Smooth `values` with a centered window of `points` samples.
pub fn moving_average<T: Float>(values: &[T], points: usize) -> Result<Vec<T>, SmoothingError> {
    let reach = check_window(points)?;
    let n = values.len();
    Ok((0..n)
        .map(|i| {
            let lo = i.saturating_sub(reach);
            let hi = core::cmp::min(n, i + reach + 1);
            let sum = values[lo..hi].iter().fold(T::zero(), |acc, &v| acc + v);
            sum / T::from_f64((hi - lo) as f64)
        })
        .collect())
}

/// Smooth one 0-based `column` of a row-major table in place.
///
/// Every row must have an entry at `column`; the table is left untouched
/// when one does not.
pub fn smooth_column<T: Float>(
    table: &mut [Vec<T>],
    points: usize,
    column: usize,
) -> Result<(), SmoothingError> {
    let values = table
        .iter()
        .enumerate()
        .map(|(row, r)| {
            r.get(column)
                .copied()
                .ok_or(SmoothingError::ColumnOutOfRange { row, column })
        })
        .collect::<Result<Vec<T>, _>>()?;
    let smoothed = moving_average(&values, points)?;
    for (row, v) in table.iter_mut().zip(smoothed) {
        row[column] = v;
    }
    Ok(())
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_window_of_one_is_identity() {
        let v = [1.0f64, 5.0, -2.0];
        assert_eq!(moving_average(&v, 1).unwrap(), v.to_vec());
    }

    #[test]
    fn test_edges_are_clipped() {
        let v = [0.0f64, 3.0, 6.0, 9.0];
        let s = moving_average(&v, 3).unwrap();
        assert_eq!(s, vec![1.5, 3.0, 6.0, 7.5]);
    }

    #[test]
    fn test_bad_windows() {
        assert_eq!(
            moving_average(&[1.0f64], 4),
            Err(SmoothingError::EvenWindow(4))
        );
        assert_eq!(moving_average(&[1.0f64], 0), Err(SmoothingError::ZeroWindow));
    }

    #[test]
    fn test_smooth_column_only_touches_column() {
        let mut table = vec![vec![0.0f64, 0.0], vec![1.0, 3.0], vec![2.0, 0.0]];
        smooth_column(&mut table, 3, 1).unwrap();
        assert_eq!(table[0], vec![0.0, 1.5]);
        assert_eq!(table[1], vec![1.0, 1.0]);
        assert_eq!(table[2], vec![2.0, 1.5]);
    }

    #[test]
    fn test_smooth_column_ragged() {
        let mut table = vec![vec![0.0f64, 1.0], vec![1.0]];
        assert_eq!(
            smooth_column(&mut table, 3, 1),
            Err(SmoothingError::ColumnOutOfRange { row: 1, column: 1 })
        );
        assert_eq!(table[0], vec![0.0, 1.0]);
    }
}
