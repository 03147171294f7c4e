//! Product listing CLI: prints the filtered, sorted catalogue as a table.
//!
//! This binary delegates to `product_listing::cli` for parsing and listing,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use product_listing::cli::{CliError, ParseOutcome, USAGE, build_controller, parse_args};
use product_listing::{ListingSettings, render_table};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            write_stdout(USAGE.trim_end());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let settings = ListingSettings::from_environment()?;
            let controller = build_controller(&options, &settings)?;
            write_stdout(&render_table(&controller.listing()));
            Ok(())
        }
    }
}

fn write_stdout(text: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{text}") {
        drop(err);
    }
}
