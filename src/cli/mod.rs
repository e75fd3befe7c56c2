//! CLI argument parsing for docsize
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use docsize_core::format::OutputFormat;
use parse::{parse_id_kind, parse_output_format};

use docsize_core::path::DocumentIdKind;

/// Docsize - estimate stored document sizes from a field schema
#[derive(Parser, Debug)]
#[command(name = "docsize")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. debug, or docsize_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ~/.config/docsize/config.toml)
    #[arg(long, global = true, env = "DOCSIZE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example schema file
    Init {
        /// Destination (format follows the extension; default docsize.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Estimate the stored size of the document a schema describes
    Estimate {
        /// Schema file (TOML, JSON or YAML)
        schema: PathBuf,

        /// Full document path, overriding the schema's collection and id
        #[arg(long)]
        path: Option<String>,

        /// Collection path, used together with --id-kind
        #[arg(long, conflicts_with = "path")]
        collection: Option<String>,

        /// How the document id is produced (auto, custom-string, custom-int)
        #[arg(long, value_parser = parse_id_kind, requires = "collection")]
        id_kind: Option<DocumentIdKind>,

        /// Document id text for custom-string / custom-int
        #[arg(long, requires = "collection")]
        id: Option<String>,

        /// Number of repeated entries, overriding the schema
        #[arg(long, short)]
        multiplier: Option<u64>,

        /// Decimal places in human-readable sizes
        #[arg(long)]
        decimals: Option<usize>,
    },

    /// Show the field tree with the cost of each field
    Tree {
        /// Schema file (TOML, JSON or YAML)
        schema: PathBuf,
    },

    /// Check a schema for structural problems
    Validate {
        /// Schema file (TOML, JSON or YAML)
        schema: PathBuf,
    },

    /// Render a byte count with binary units
    FormatBytes {
        /// Number of bytes
        bytes: u64,

        /// Decimal places
        #[arg(long)]
        decimals: Option<usize>,
    },
}
