//! Convert a "vida laboral" PDF report to CSV
//!
//! Writes the employment history found in the report to a CSV file next to
//! the input, with the same name and a `.csv` extension.
//!
//! Usage:
//!   vida_laboral_to_csv <file.pdf>
//!   vida_laboral_to_csv --fail-on-empty <file.pdf>
//!   RUST_LOG=debug vida_laboral_to_csv <file.pdf>

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;

use vida_laboral::output::{is_pdf_path, output_path, write_csv_file};
use vida_laboral::{ConverterConfig, Error, NoDataPolicy, Outcome, Pipeline};

/// Extract the employment history of a Social Security "vida laboral" report into CSV.
#[derive(Debug, Parser)]
#[command(name = "vida_laboral_to_csv", version)]
struct Args {
    /// Input report (.pdf)
    input: PathBuf,

    /// Exit with a failure status when no records could be extracted
    #[arg(long)]
    fail_on_empty: bool,

    /// Log per-table detail
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> ConverterConfig {
        let policy = if self.fail_on_empty {
            NoDataPolicy::Fail
        } else {
            NoDataPolicy::Succeed
        };
        ConverterConfig::new().with_no_data_policy(policy)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn check_input(path: &Path) -> Result<(), Error> {
    if !is_pdf_path(path) {
        return Err(Error::InvalidInputPath(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        },
        Err(err) => {
            let _ = err.print();
            eprintln!("Usage: vida_laboral_to_csv <file.pdf>");
            return ExitCode::from(1);
        },
    };

    init_logging(args.verbose);

    if let Err(err) = check_input(&args.input) {
        eprintln!("Error: {}", err);
        return ExitCode::from(1);
    }

    let config = args.config();
    let policy = config.no_data;
    let mut pipeline = Pipeline::for_pdf(config);

    match pipeline.run(&args.input) {
        Outcome::Tables(tables) => {
            let records: Vec<_> = tables.into_iter().flat_map(|t| t.records).collect();
            let output = output_path(&args.input);
            match write_csv_file(&output, &records) {
                Ok(()) => {
                    println!("CSV saved: {}", output.display());
                    ExitCode::SUCCESS
                },
                Err(err) => {
                    eprintln!("Error writing {}: {}", output.display(), err);
                    ExitCode::from(1)
                },
            }
        },
        Outcome::NoData(reason) => {
            println!("{}", reason);
            println!("Could not process PDF");
            ExitCode::from(policy.exit_code())
        },
    }
}
