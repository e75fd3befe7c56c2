//! `docsize estimate` command - size of the document a schema describes
//!
//! Reports the total plus a per-section breakdown:
//! - path: collection path, document id and addressing overhead
//! - fields: fields stored once per document
//! - repeated: the repeated-entry array
//! - document_overhead: fixed record metadata

use std::path::Path;

use docsize_core::config::EstimatorConfig;
use docsize_core::error::Result;
use docsize_core::format::{escape_quotes, format_bytes, percent_of};
use docsize_core::path::{DocumentAddress, DocumentId, DocumentIdKind};
use docsize_core::schema::Schema;
use docsize_core::SizeBreakdown;
use serde_json::json;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Column at which section sizes start in human output
const SECTION_COLUMN: usize = 22;

/// Command-line overrides for the schema
#[derive(Debug, Default)]
pub struct EstimateOptions<'a> {
    pub path: Option<&'a str>,
    pub collection: Option<&'a str>,
    pub id_kind: Option<DocumentIdKind>,
    pub id: &'a str,
    pub multiplier: Option<u64>,
    pub decimals: usize,
}

/// Execute the estimate command
pub fn execute(
    cli: &Cli,
    config: &EstimatorConfig,
    schema_path: &Path,
    options: &EstimateOptions,
) -> Result<()> {
    let schema = apply_overrides(Schema::load(schema_path, &config.limits)?, options)?;
    let breakdown = schema.breakdown()?;
    let limit = config.limits.max_document_bytes;

    output_by_format_result!(cli.format,
        json => {
            let report = build_json(&schema, &breakdown, limit, options.decimals);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok::<(), docsize_core::error::DocsizeError>(())
        },
        human => {
            let total = breakdown.total();
            if cli.quiet {
                println!("{}", format_bytes(total, options.decimals));
            } else {
                for line in human_lines(&schema, &breakdown, limit, options.decimals) {
                    println!("{}", line);
                }
            }
        },
        records => {
            for line in record_lines(&schema, &breakdown, limit) {
                println!("{}", line);
            }
        }
    )
}

fn apply_overrides(mut schema: Schema, options: &EstimateOptions) -> Result<Schema> {
    if let Some(path) = options.path {
        schema = schema.with_address(DocumentAddress::parse(path));
    }
    if let Some(collection) = options.collection {
        let id = DocumentId::from_kind(options.id_kind.unwrap_or_default(), options.id)?;
        schema = schema.with_address(DocumentAddress::new(collection, id));
    }
    if let Some(multiplier) = options.multiplier {
        schema = schema.with_multiplier(multiplier);
    }
    Ok(schema)
}

fn build_json(
    schema: &Schema,
    breakdown: &SizeBreakdown,
    limit: u64,
    decimals: usize,
) -> serde_json::Value {
    let total = breakdown.total();
    json!({
        "document": schema.address().full_path(),
        "id_kind": schema.address().id().kind().to_string(),
        "multiplier": schema.multiplier(),
        "total": total,
        "total_human": format_bytes(total, decimals),
        "breakdown": breakdown,
        "limit": limit,
        "percent_of_limit": percent_of(total, limit),
    })
}

fn human_lines(
    schema: &Schema,
    breakdown: &SizeBreakdown,
    limit: u64,
    decimals: usize,
) -> Vec<String> {
    let total = breakdown.total();
    vec![
        format!("Document: {}", schema.address()),
        format!(
            "Estimated size: {} ({} bytes)",
            format_bytes(total, decimals),
            total
        ),
        section_row("Path and id", breakdown.path),
        section_row("Fields", breakdown.fields),
        section_row(
            &format!("Repeated (x{})", schema.multiplier()),
            breakdown.repeated,
        ),
        section_row("Document overhead", breakdown.document_overhead),
        format!(
            "Limit: {:.2}% of {}",
            percent_of(total, limit),
            format_bytes(limit, decimals)
        ),
    ]
}

/// Indented `label: value` row with values lined up in one column
fn section_row(label: &str, bytes: u64) -> String {
    let label = format!("  {}:", label);
    let width = SECTION_COLUMN.max(label.len() + 1);
    format!("{:<width$}{}", label, bytes, width = width)
}

fn record_lines(schema: &Schema, breakdown: &SizeBreakdown, limit: u64) -> Vec<String> {
    let total = breakdown.total();
    vec![
        format!(
            "H docsize=1 records=1 mode=estimate document=\"{}\" total={}",
            escape_quotes(&schema.address().full_path()),
            total
        ),
        format!("S path {}", breakdown.path),
        format!("S fields {}", breakdown.fields),
        format!(
            "S repeated {} multiplier={}",
            breakdown.repeated,
            schema.multiplier()
        ),
        format!("S document_overhead {}", breakdown.document_overhead),
        format!("L limit={} percent={:.2}", limit, percent_of(total, limit)),
    ]
}
