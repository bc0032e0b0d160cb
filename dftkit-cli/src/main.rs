use clap::{ArgAction, Parser, Subcommand};
use dftkit_cli::{run_smooth, run_transform, SmoothArgs, TransformArgs};
use log::LevelFilter;

#[derive(Parser)]
#[command(author, version, about = "Fourier transforms and smoothing of column data")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform one column of a data file and write its half-spectrum
    Transform(TransformArgs),
    /// Smooth one column of a data file with a centered moving average
    Smooth(SmoothArgs),
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Transform(args) => {
            run_transform(&args)?;
        }
        Commands::Smooth(args) => run_smooth(&args)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dftkit_cli::{Alg, RoundDir};

    #[test]
    fn parse_transform_defaults() {
        let cli = Cli::parse_from(["dftkit", "transform", "--infile", "data.txt"]);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.col, 1);
                assert_eq!(args.step, 1.0);
                assert_eq!(args.size, None);
                assert_eq!(args.round_size, RoundDir::Up);
                assert_eq!(args.alg, Alg::Fast);
            }
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn parse_transform_flags() {
        let cli = Cli::parse_from([
            "dftkit",
            "-vv",
            "transform",
            "--infile",
            "in.dat",
            "-n",
            "64",
            "--round-size",
            "down",
            "--alg",
            "single-stage",
            "--step",
            "0.5",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.size, Some(64));
                assert_eq!(args.round_size, RoundDir::Down);
                assert_eq!(args.alg, Alg::SingleStage);
                assert_eq!(args.step, 0.5);
            }
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn parse_long_size_flag() {
        for flag in ["--n", "--size"] {
            let cli = Cli::parse_from(["dftkit", "transform", "--infile", "in.dat", flag, "128"]);
            match cli.command {
                Commands::Transform(args) => assert_eq!(args.size, Some(128)),
                _ => panic!("parsed wrong command"),
            }
        }
    }

    #[test]
    fn parse_smooth() {
        let cli = Cli::parse_from(["dftkit", "smooth", "--points", "5", "--column", "1", "t.dat"]);
        match cli.command {
            Commands::Smooth(args) => {
                assert_eq!(args.points, 5);
                assert_eq!(args.column, 1);
            }
            _ => panic!("parsed wrong command"),
        }
    }
}
