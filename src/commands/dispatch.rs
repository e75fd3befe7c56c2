//! Command dispatch logic for docsize
use std::time::Instant;

use docsize_core::bail_usage;
use docsize_core::config::EstimatorConfig;
use docsize_core::error::Result;
use docsize_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{estimate, format_bytes, init, tree, validate};

/// Largest accepted `--decimals`
const MAX_DECIMALS: usize = 20;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EstimatorConfig::resolve(cli.config.as_deref())?;
    trace_time!(start, "load_config");

    let result = match &cli.command {
        None => handle_no_command(),

        Some(Commands::Init { path, force }) => init::execute(cli, path.as_deref(), *force),

        Some(Commands::Estimate {
            schema,
            path,
            collection,
            id_kind,
            id,
            multiplier,
            decimals,
        }) => {
            let options = estimate::EstimateOptions {
                path: path.as_deref(),
                collection: collection.as_deref(),
                id_kind: *id_kind,
                id: id.as_deref().unwrap_or_default(),
                multiplier: *multiplier,
                decimals: resolve_decimals(*decimals, &config)?,
            };
            estimate::execute(cli, &config, schema, &options)
        }

        Some(Commands::Tree { schema }) => tree::execute(cli, &config, schema),

        Some(Commands::Validate { schema }) => validate::execute(cli, &config, schema),

        Some(Commands::FormatBytes { bytes, decimals }) => {
            format_bytes::execute(cli, *bytes, resolve_decimals(*decimals, &config)?)
        }
    };

    trace_time!(start, "command");
    result
}

fn resolve_decimals(flag: Option<usize>, config: &EstimatorConfig) -> Result<usize> {
    let decimals = flag.unwrap_or(config.format.decimals);
    if decimals > MAX_DECIMALS {
        bail_usage!(format!("--decimals must be at most {}", MAX_DECIMALS));
    }
    Ok(decimals)
}

fn handle_no_command() -> Result<()> {
    println!("docsize {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Estimate the stored size of a document from a schema of typed fields.");
    println!();
    println!("Run `docsize init` to write an example schema, then `docsize estimate docsize.toml`.");
    println!("Run `docsize --help` for usage information.");
    Ok(())
}
