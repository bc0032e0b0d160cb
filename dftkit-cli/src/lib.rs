use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use dftkit::columns::{read_column, read_table, write_spectrum, write_table};
use dftkit::freq::spectrum_rows;
use dftkit::smoothing::smooth_column;
use dftkit::{normalize, Algorithm, RoundSize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundDir {
    /// Zero-pad up to the next power of two (after optional truncation to `-n`)
    Up,
    /// Truncate to the largest power of two; `-n` is ignored
    Down,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alg {
    /// Recursive radix-2 FFT
    Fast,
    /// One even/odd split with direct sub-sums
    SingleStage,
    /// Reference O(N²) DFT
    Discrete,
}

impl From<Alg> for Algorithm {
    fn from(alg: Alg) -> Self {
        match alg {
            Alg::Fast => Algorithm::Fast,
            Alg::SingleStage => Algorithm::SingleStage,
            Alg::Discrete => Algorithm::Discrete,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TransformArgs {
    /// Input data file; whitespace-separated columns, `#` starts a comment line
    #[arg(long)]
    pub infile: PathBuf,

    /// Output file for the spectrum table (stdout when omitted)
    #[arg(long)]
    pub outfile: Option<PathBuf>,

    /// Column holding the samples (1-based)
    #[arg(long, default_value_t = 1)]
    pub col: usize,

    /// Sampling step between consecutive samples
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,

    /// Number of samples to keep (use a power of 2)
    #[arg(short = 'n', long = "n", visible_alias = "size")]
    pub size: Option<usize>,

    /// How to bring the sample count to a power of 2
    #[arg(long, value_enum, default_value_t = RoundDir::Up)]
    pub round_size: RoundDir,

    /// Transform algorithm
    #[arg(long, value_enum, default_value_t = Alg::Fast)]
    pub alg: Alg,
}

#[derive(Args, Debug, Clone)]
pub struct SmoothArgs {
    /// Number of points in the averaging window (odd)
    #[arg(long)]
    pub points: usize,

    /// Column to smooth (0-based)
    #[arg(long)]
    pub column: usize,

    /// Input data file
    pub datafile: PathBuf,
}

impl TransformArgs {
    pub fn round_size(&self) -> RoundSize {
        match self.round_size {
            RoundDir::Down => {
                if let Some(n) = self.size {
                    log::warn!("-n {} ignored when rounding down", n);
                }
                RoundSize::Down
            }
            RoundDir::Up => RoundSize::Up { target: self.size },
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("cannot create {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Read a column, normalize its length, transform it and write the half-spectrum.
///
/// Returns the transform length actually used.
pub fn run_transform(args: &TransformArgs) -> Result<usize> {
    let samples = read_column(open(&args.infile)?, args.col)
        .with_context(|| format!("reading column {} of {}", args.col, args.infile.display()))?;
    let normalized = normalize(samples, args.round_size());
    if normalized.is_empty() {
        bail!("{} holds no samples", args.infile.display());
    }
    let algorithm = Algorithm::from(args.alg);
    let spectrum = algorithm.transform(&normalized.samples)?;
    let rows = spectrum_rows(&normalized.samples, &spectrum, args.step)
        .with_context(|| format!("invalid step {}", args.step))?;
    write_spectrum(output(args.outfile.as_deref())?, &rows).context("writing spectrum")?;
    log::info!(
        "{:?} transform of {} samples, {} rows written",
        algorithm,
        normalized.len(),
        rows.len()
    );
    Ok(normalized.len())
}

/// Smooth one column of a table and write the whole table to stdout.
pub fn run_smooth(args: &SmoothArgs) -> Result<()> {
    let mut table = read_table(open(&args.datafile)?)
        .with_context(|| format!("reading {}", args.datafile.display()))?;
    smooth_column(&mut table, args.points, args.column)?;
    write_table(output(None)?, &table).context("writing table")?;
    Ok(())
}
