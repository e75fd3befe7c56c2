//! Docsize - document size estimation CLI
//!
//! Reads a schema of typed fields and estimates how many bytes the described
//! document occupies in storage, without building any real values.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use docsize_core::error::ExitCode as DocsizeExitCode;
use docsize_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(DocsizeExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}
