//! Output format handling and human-readable sizes
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts and LLM context injection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DocsizeError;

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const UNIT_STEP: f64 = 1024.0;

/// Default number of decimal places in [`format_bytes`]
pub const DEFAULT_DECIMALS: usize = 2;

/// Output format for docsize commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented consumers
    Records,
}

impl FromStr for OutputFormat {
    type Err = DocsizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(DocsizeError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render a byte count with binary units, e.g. `1536 -> "1.5 KB"`.
///
/// The value is rounded half away from zero to `decimals` places and
/// trailing zeros are dropped. Zero is always `"0 Bytes"`.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= UNIT_STEP && unit < UNITS.len() - 1 {
        scaled /= UNIT_STEP;
        unit += 1;
    }

    // Past 15 places f64 carries no further digits
    let factor = 10f64.powi(decimals.min(15) as i32);
    let rounded = format!("{:.*}", decimals, (scaled * factor).round() / factor);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };

    format!("{} {}", trimmed, UNITS[unit])
}

/// Share of `limit` used by `bytes`, as a percentage
pub fn percent_of(bytes: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (bytes as f64 / limit as f64) * 100.0
}

/// Escape double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}
