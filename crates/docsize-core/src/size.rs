//! Encoded size estimation for field trees
//!
//! Costs follow the document storage format's sizing rules:
//! - string: UTF-8 byte length + 1 terminator
//! - number, timestamp: 8; boolean, null: 1; geopoint: 16
//! - bytes: raw length, no terminator
//! - reference: path length + 16
//! - map: sum of the children's field costs (name + value)
//! - array: cost of one unnamed representative element times the count
//!
//! A named field additionally pays for its name (UTF-8 length + 1). Array
//! elements are positional and carry no name.

use serde::Serialize;
use tracing::debug;

use crate::field::{FieldNode, FieldType};
use crate::path::DocumentAddress;

/// Terminator byte after string payloads and field names
pub const STRING_TERMINATOR: u64 = 1;
pub const NUMBER_SIZE: u64 = 8;
pub const BOOLEAN_SIZE: u64 = 1;
pub const NULL_SIZE: u64 = 1;
pub const TIMESTAMP_SIZE: u64 = 8;
pub const GEOPOINT_SIZE: u64 = 16;
/// Fixed addressing overhead stored with a reference value
pub const REFERENCE_OVERHEAD: u64 = 16;
/// Per-document record metadata (timestamps, version markers)
pub const DOCUMENT_OVERHEAD: u64 = 32;
/// Maximum size of a single stored document (1 MiB)
pub const MAX_DOCUMENT_SIZE: u64 = 1024 * 1024;

/// UTF-8 encoded length of `text` in bytes
pub fn utf8_len(text: &str) -> u64 {
    text.len() as u64
}

/// Cost of a field's value, excluding its name.
pub fn estimate_value_size(node: &FieldNode) -> u64 {
    match node.field_type {
        FieldType::String => node.size_or_zero().saturating_add(STRING_TERMINATOR),
        FieldType::Number => NUMBER_SIZE,
        FieldType::Boolean => BOOLEAN_SIZE,
        FieldType::Null => NULL_SIZE,
        FieldType::Timestamp => TIMESTAMP_SIZE,
        FieldType::Geopoint => GEOPOINT_SIZE,
        FieldType::Bytes => node.size_or_zero(),
        FieldType::Reference => node.size_or_zero().saturating_add(REFERENCE_OVERHEAD),
        FieldType::Map => sum_fields(&node.children, false),
        FieldType::Array => {
            let count = node.size_or_zero();
            if count == 0 || node.children.is_empty() {
                return 0;
            }
            sum_fields(&node.children, true).saturating_mul(count)
        }
    }
}

/// Cost of a field: its name (unless it is an array element) plus its value.
pub fn estimate_field_size(node: &FieldNode, is_array_element: bool) -> u64 {
    name_size(&node.name, is_array_element).saturating_add(estimate_value_size(node))
}

/// Cost of the name part of a field
pub fn name_size(name: &str, is_array_element: bool) -> u64 {
    if is_array_element || name.is_empty() {
        0
    } else {
        utf8_len(name) + STRING_TERMINATOR
    }
}

/// Total cost of top-level fields. Top-level fields are always named.
pub fn estimate_forest_size(nodes: &[FieldNode]) -> u64 {
    sum_fields(nodes, false)
}

/// Estimated size of a whole document stored at `path` with `nodes` as its
/// top-level fields.
pub fn estimate_document_size(path: &str, nodes: &[FieldNode]) -> u64 {
    estimate_breakdown(&DocumentAddress::parse(path), nodes, None).total()
}

fn sum_fields(nodes: &[FieldNode], is_array_element: bool) -> u64 {
    nodes
        .iter()
        .map(|node| estimate_field_size(node, is_array_element))
        .fold(0, u64::saturating_add)
}

/// Document size split by section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SizeBreakdown {
    /// Collection path, identifier and addressing overhead
    pub path: u64,
    /// Top-level fields
    pub fields: u64,
    /// Repeated-entry array section
    pub repeated: u64,
    /// Fixed record metadata
    pub document_overhead: u64,
}

impl SizeBreakdown {
    pub fn total(&self) -> u64 {
        self.path
            .saturating_add(self.fields)
            .saturating_add(self.repeated)
            .saturating_add(self.document_overhead)
    }
}

/// Compute the per-section sizes of a document.
///
/// `repeated` is an extra top-level field (usually built by
/// [`crate::repeated::repeated_section`]) reported in its own section.
pub fn estimate_breakdown(
    address: &DocumentAddress,
    fields: &[FieldNode],
    repeated: Option<&FieldNode>,
) -> SizeBreakdown {
    let breakdown = SizeBreakdown {
        path: address.overhead(),
        fields: estimate_forest_size(fields),
        repeated: repeated.map_or(0, |node| estimate_field_size(node, false)),
        document_overhead: DOCUMENT_OVERHEAD,
    };
    debug!(
        path = breakdown.path,
        fields = breakdown.fields,
        repeated = breakdown.repeated,
        total = breakdown.total(),
        "estimate_breakdown"
    );
    breakdown
}
