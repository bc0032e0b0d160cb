//! Whitespace-separated column tables: reading samples, writing spectra.
//!
//! Lines that are empty or start with `#` are comments and are skipped.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use crate::freq::SpectrumRow;
use crate::num::Complex64;

/// Header line written above every spectrum table.
pub const SPECTRUM_HEADER: &str = "# Format: freq x.real x.imag y.real y.imag";

#[derive(Debug)]
pub enum ColumnError {
    Io(io::Error),
    /// Columns are numbered from 1.
    InvalidColumn,
    /// A data line has fewer than `column` fields.
    MissingColumn { line: usize, column: usize },
    /// A field could not be parsed as a number.
    Parse { line: usize, field: String },
}

impl fmt::Display for ColumnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnError::Io(e) => write!(f, "i/o error: {}", e),
            ColumnError::InvalidColumn => write!(f, "column numbers start at 1"),
            ColumnError::MissingColumn { line, column } => {
                write!(f, "line {} has no column {}", line, column)
            }
            ColumnError::Parse { line, field } => {
                write!(f, "line {}: cannot parse {:?} as a number", line, field)
            }
        }
    }
}

impl std::error::Error for ColumnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColumnError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ColumnError {
    fn from(e: io::Error) -> Self {
        ColumnError::Io(e)
    }
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn parse_field(field: &str, line: usize) -> Result<f64, ColumnError> {
    field.parse::<f64>().map_err(|_| ColumnError::Parse {
        line,
        field: field.into(),
    })
}

/// Read the 1-based `column` of every data line as a real-valued sample.
///
/// Line numbers in errors are 1-based and count comment lines too.
pub fn read_column<R: BufRead>(reader: R, column: usize) -> Result<Vec<Complex64>, ColumnError> {
    if column == 0 {
        return Err(ColumnError::InvalidColumn);
    }
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if is_comment(&line) {
            continue;
        }
        let field = line
            .split_whitespace()
            .nth(column - 1)
            .ok_or(ColumnError::MissingColumn {
                line: idx + 1,
                column,
            })?;
        samples.push(Complex64::from_real(parse_field(field, idx + 1)?));
    }
    log::debug!("read {} samples from column {}", samples.len(), column);
    Ok(samples)
}

/// Read every numeric data line into a row-major table.
///
/// Rows may have different widths. Empty lines and lines starting with `#`
/// are skipped; blank or indented comment lines are skipped with a warning.
pub fn read_table<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>, ColumnError> {
    let mut table = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if is_comment(&line) {
            log::warn!("line {} holds no numbers, skipping", idx + 1);
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|field| parse_field(field, idx + 1))
            .collect::<Result<Vec<f64>, _>>()?;
        table.push(row);
    }
    Ok(table)
}

/// Write a spectrum table: header, then `freq |x.re| |x.im| |y.re| |y.im|` per row.
pub fn write_spectrum<W: Write>(mut writer: W, rows: &[SpectrumRow<f64>]) -> io::Result<()> {
    writeln!(writer, "{}", SPECTRUM_HEADER)?;
    for row in rows {
        writeln!(
            writer,
            "{} {} {}",
            row.frequency,
            row.sample.abs_parts(),
            row.bin.abs_parts()
        )?;
    }
    writer.flush()
}

/// Write a numeric table, space-separated, one row per line.
pub fn write_table<W: Write>(mut writer: W, table: &[Vec<f64>]) -> io::Result<()> {
    for row in table {
        let mut first = true;
        for v in row {
            if !first {
                write!(writer, " ")?;
            }
            write!(writer, "{}", v)?;
            first = false;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use std::vec;

    const DATA: &str = "# t value\n0 1.5\n\n1 -2\n# trailing comment\n2 4e-1\n";

    #[test]
    fn test_read_second_column() {
        let samples = read_column(DATA.as_bytes(), 2).unwrap();
        assert_eq!(
            samples,
            vec![
                Complex64::from_real(1.5),
                Complex64::from_real(-2.0),
                Complex64::from_real(0.4)
            ]
        );
    }

    #[test]
    fn test_read_column_errors() {
        assert!(matches!(
            read_column(DATA.as_bytes(), 0),
            Err(ColumnError::InvalidColumn)
        ));
        assert!(matches!(
            read_column(DATA.as_bytes(), 3),
            Err(ColumnError::MissingColumn { line: 2, column: 3 })
        ));
        assert!(matches!(
            read_column("1 x\n".as_bytes(), 2),
            Err(ColumnError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_table_roundtrip_text() {
        let table = read_table("1 2 3\n# c\n4 5\n".as_bytes()).unwrap();
        assert_eq!(table, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]);
        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 2 3\n4 5\n");
    }

    #[test]
    fn test_spectrum_prints_absolute_parts() {
        let rows = [SpectrumRow {
            frequency: 0.25,
            sample: Complex64::new(-1.0, 0.0),
            bin: Complex64::new(0.5, -0.5),
        }];
        let mut out = Vec::new();
        write_spectrum(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(SPECTRUM_HEADER));
        assert_eq!(lines.next(), Some("0.25 1 0 0.5 0.5"));
    }
}
