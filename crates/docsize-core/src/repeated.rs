//! Repeated-entry section
//!
//! Fields declared under the `repeated` root describe one entry of a list of
//! maps stored in the document. The section is modelled as a single array
//! field whose representative element is an unnamed map of those fields.

use crate::field::{FieldNode, FieldType};

/// Name of the array field holding repeated entries
pub const REPEATED_FIELD_NAME: &str = "repeated_items";

/// Root id for fields stored once per document
pub const SINGLE_ROOT: &str = "single";

/// Root id for fields stored once per repeated entry
pub const REPEATED_ROOT: &str = "repeated";

/// Wrap the repeated fields into an array of `multiplier` maps.
///
/// Returns `None` when there is nothing to repeat.
pub fn repeated_section(fields: Vec<FieldNode>, multiplier: u64) -> Option<FieldNode> {
    if multiplier == 0 || fields.is_empty() {
        return None;
    }

    let element = FieldNode {
        id: format!("{}-element", REPEATED_FIELD_NAME),
        name: String::new(),
        field_type: FieldType::Map,
        value: None,
        size: None,
        children: fields,
    };

    Some(FieldNode {
        id: REPEATED_FIELD_NAME.to_string(),
        name: REPEATED_FIELD_NAME.to_string(),
        field_type: FieldType::Array,
        value: None,
        size: Some(multiplier),
        children: vec![element],
    })
}
