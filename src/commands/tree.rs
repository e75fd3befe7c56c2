//! `docsize tree` command - field tree with per-field costs
//!
//! Costs include the field name, so the top-level costs add up to the
//! `fields` + `repeated` sections of `docsize estimate`. Array costs cover
//! every element; the single element shown beneath an array is the
//! representative entry.

use std::path::Path;

use docsize_core::config::EstimatorConfig;
use docsize_core::error::Result;
use docsize_core::field::{FieldNode, FieldType};
use docsize_core::format::escape_quotes;
use docsize_core::schema::Schema;
use docsize_core::size::estimate_field_size;
use serde_json::json;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Label used for unnamed array elements
const ELEMENT_LABEL: &str = "[element]";

/// One node of the flattened tree
#[derive(Debug, Clone, PartialEq)]
struct TreeRow<'a> {
    depth: usize,
    node: &'a FieldNode,
    cost: u64,
    is_element: bool,
}

/// Execute the tree command
pub fn execute(cli: &Cli, config: &EstimatorConfig, schema_path: &Path) -> Result<()> {
    let schema = Schema::load(schema_path, &config.limits)?;
    let nodes = schema.document_tree()?;

    output_by_format_result!(cli.format,
        json => {
            let output = json!({
                "document": schema.address().full_path(),
                "fields": nodes.iter().map(|n| node_json(n, false)).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), docsize_core::error::DocsizeError>(())
        },
        human => {
            if !cli.quiet {
                println!("{}", schema.address());
            }
            for row in flatten(&nodes) {
                println!("{}", human_line(&row));
            }
        },
        records => {
            println!(
                "H docsize=1 records=1 mode=tree document=\"{}\" fields={}",
                escape_quotes(&schema.address().full_path()),
                nodes.iter().map(FieldNode::node_count).sum::<usize>()
            );
            for row in flatten(&nodes) {
                println!("{}", record_line(&row));
            }
        }
    )
}

/// Depth-first listing of the tree, parents before children
fn flatten(nodes: &[FieldNode]) -> Vec<TreeRow<'_>> {
    let mut rows = Vec::new();
    for node in nodes {
        push_rows(node, 0, false, &mut rows);
    }
    rows
}

fn push_rows<'a>(node: &'a FieldNode, depth: usize, is_element: bool, rows: &mut Vec<TreeRow<'a>>) {
    rows.push(TreeRow {
        depth,
        node,
        cost: estimate_field_size(node, is_element),
        is_element,
    });
    let children_are_elements = node.field_type == FieldType::Array;
    for child in &node.children {
        push_rows(child, depth + 1, children_are_elements, rows);
    }
}

fn display_name<'a>(node: &'a FieldNode, is_element: bool) -> &'a str {
    if is_element || node.name.is_empty() {
        ELEMENT_LABEL
    } else {
        &node.name
    }
}

fn human_line(row: &TreeRow) -> String {
    let mut line = format!(
        "{}{} ({})",
        "  ".repeat(row.depth + 1),
        display_name(row.node, row.is_element),
        row.node.field_type
    );
    if row.node.field_type == FieldType::Array {
        line.push_str(&format!(" x{}", row.node.size_or_zero()));
    }
    line.push_str(&format!(" {} bytes", row.cost));
    line
}

fn record_line(row: &TreeRow) -> String {
    format!(
        "F {} {} {} \"{}\" cost={}",
        row.depth,
        row.node.id,
        row.node.field_type,
        escape_quotes(display_name(row.node, row.is_element)),
        row.cost
    )
}

fn node_json(node: &FieldNode, is_element: bool) -> serde_json::Value {
    let children_are_elements = node.field_type == FieldType::Array;
    json!({
        "id": node.id,
        "name": node.name,
        "type": node.field_type,
        "size": node.size,
        "cost": estimate_field_size(node, is_element),
        "children": node
            .children
            .iter()
            .map(|child| node_json(child, children_are_elements))
            .collect::<Vec<_>>(),
    })
}
