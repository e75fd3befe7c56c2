//! Field tree construction from the flat, parent-referencing field list

use std::collections::HashMap;

use tracing::debug;

use crate::error::{DocsizeError, Result};
use crate::field::{Field, FieldNode};

/// Nesting depth past which the list is treated as containing a parent cycle
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Build the forest of fields whose parent is `root_id`.
///
/// Siblings keep the relative order they have in `all_fields`.
pub fn build_tree(all_fields: &[Field], root_id: &str) -> Result<Vec<FieldNode>> {
    build_tree_with_depth(all_fields, root_id, DEFAULT_MAX_DEPTH)
}

/// Same as [`build_tree`] with an explicit depth limit.
pub fn build_tree_with_depth(
    all_fields: &[Field],
    root_id: &str,
    max_depth: usize,
) -> Result<Vec<FieldNode>> {
    let mut by_parent: HashMap<&str, Vec<&Field>> = HashMap::new();
    for field in all_fields {
        by_parent
            .entry(field.parent_id.as_str())
            .or_default()
            .push(field);
    }

    let forest = build_level(&by_parent, root_id, 0, max_depth)?;
    debug!(
        root = root_id,
        fields = all_fields.len(),
        top_level = forest.len(),
        "build_tree"
    );
    Ok(forest)
}

fn build_level(
    by_parent: &HashMap<&str, Vec<&Field>>,
    parent_id: &str,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<FieldNode>> {
    let Some(children) = by_parent.get(parent_id) else {
        return Ok(Vec::new());
    };

    if depth >= max_depth {
        return Err(DocsizeError::StructuralCycle {
            id: parent_id.to_string(),
            depth: max_depth,
        });
    }

    children
        .iter()
        .map(|field| {
            let grandchildren = build_level(by_parent, &field.id, depth + 1, max_depth)?;
            Ok(FieldNode::from_field(field, grandchildren))
        })
        .collect()
}
