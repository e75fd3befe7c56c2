//! `docsize validate` command - check a schema without estimating
//!
//! Loading the schema runs every structural check (duplicate ids, unknown
//! parents, non-container parents, cycles). Problems surface as data errors.

use std::path::Path;

use docsize_core::config::EstimatorConfig;
use docsize_core::error::Result;
use docsize_core::format::escape_quotes;
use docsize_core::repeated::{REPEATED_ROOT, SINGLE_ROOT};
use docsize_core::schema::Schema;
use serde_json::json;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Field counts of a valid schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionCounts {
    single: usize,
    repeated: usize,
}

impl SectionCounts {
    fn of(schema: &Schema) -> Self {
        Self {
            single: schema.section_len(SINGLE_ROOT),
            repeated: schema.section_len(REPEATED_ROOT),
        }
    }

    fn total(&self) -> usize {
        self.single + self.repeated
    }
}

/// Execute the validate command
pub fn execute(cli: &Cli, config: &EstimatorConfig, schema_path: &Path) -> Result<()> {
    let schema = Schema::load(schema_path, &config.limits)?;
    let counts = SectionCounts::of(&schema);

    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "status": "ok",
                "document": schema.address().full_path(),
                "fields": counts.total(),
                "single": counts.single,
                "repeated": counts.repeated,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), docsize_core::error::DocsizeError>(())
        },
        human => {
            if !cli.quiet {
                println!("{}", summary(&counts));
            }
        },
        records => {
            println!(
                "H docsize=1 records=1 mode=validate status=ok document=\"{}\" fields={} single={} repeated={}",
                escape_quotes(&schema.address().full_path()),
                counts.total(),
                counts.single,
                counts.repeated
            );
        }
    )
}

fn summary(counts: &SectionCounts) -> String {
    format!(
        "Schema OK: {} fields ({} single, {} repeated)",
        counts.total(),
        counts.single,
        counts.repeated
    )
}
