//! `docsize init` command - write an example schema
//!
//! - Refuses to overwrite an existing file unless `--force` is given
//! - The file format follows the extension (TOML by default)

use std::path::Path;

use docsize_core::error::{DocsizeError, Result};
use docsize_core::format::escape_quotes;
use docsize_core::schema::{default_schema_path, SchemaFile};
use tracing::debug;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the init command
pub fn execute(cli: &Cli, path: Option<&Path>, force: bool) -> Result<()> {
    let default_path = default_schema_path();
    let path = path.unwrap_or(&default_path);

    if path.exists() && !force {
        return Err(DocsizeError::already_exists("schema file", path.display()));
    }

    SchemaFile::starter().save(path)?;
    debug!(path = %path.display(), force, "wrote example schema");

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "schema": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), DocsizeError>(())
        },
        human => {
            if !cli.quiet {
                println!("Wrote example schema to {}", path.display());
                println!();
                println!("Run `docsize estimate {}` to size it.", path.display());
            }
        },
        records => {
            println!(
                "H docsize=1 records=1 mode=init status=ok schema=\"{}\"",
                escape_quotes(&path.display().to_string())
            );
        }
    )
}
