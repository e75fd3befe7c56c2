//! The flat field list: the editable source of truth for a schema

use std::collections::HashSet;

use tracing::debug;

use crate::error::{DocsizeError, Result};
use crate::field::{Field, FieldNode, FieldType};
use crate::tree::{build_tree_with_depth, DEFAULT_MAX_DEPTH};

/// Partial update applied by [`FieldList::update`]
#[derive(Debug, Clone, Default)]
pub struct FieldUpdate {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub value: Option<Option<serde_json::Value>>,
    pub size: Option<Option<u64>>,
}

/// Ordered list of flat field declarations
#[derive(Debug, Clone, PartialEq)]
pub struct FieldList {
    fields: Vec<Field>,
    max_depth: usize,
}

impl FieldList {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the nesting limit used when building trees
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_slice(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Append an existing declaration, rejecting duplicate ids
    pub fn push(&mut self, field: Field) -> Result<()> {
        if self.get(&field.id).is_some() {
            return Err(DocsizeError::DuplicateFieldId { id: field.id });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Add a new empty field under `parent_id` and return its id.
    ///
    /// Elements of an array get no name; other fields get a placeholder name.
    pub fn add(&mut self, parent_id: &str, field_type: FieldType) -> String {
        let parent_is_array = self
            .get(parent_id)
            .is_some_and(|parent| parent.field_type == FieldType::Array);
        let name = if parent_is_array {
            String::new()
        } else {
            format!("newField{}", self.fields.len())
        };

        let id = ulid::Ulid::new().to_string().to_lowercase();
        self.fields
            .push(Field::new(id.clone(), parent_id, name, field_type).with_size(0));
        debug!(id = %id, parent = parent_id, "add_field");
        id
    }

    /// Apply a partial update to the field with `id`
    pub fn update(&mut self, id: &str, update: FieldUpdate) -> Result<&Field> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| DocsizeError::field_not_found(id))?;

        if let Some(name) = update.name {
            field.name = name;
        }
        if let Some(field_type) = update.field_type {
            field.field_type = field_type;
        }
        if let Some(value) = update.value {
            field.value = value;
        }
        if let Some(size) = update.size {
            field.size = size;
        }
        Ok(field)
    }

    /// Remove a field together with every field nested beneath it.
    ///
    /// Returns the removed declarations in list order.
    pub fn remove(&mut self, id: &str) -> Result<Vec<Field>> {
        if self.get(id).is_none() {
            return Err(DocsizeError::field_not_found(id));
        }

        let doomed = self.subtree_ids(id);
        let (removed, kept): (Vec<Field>, Vec<Field>) = std::mem::take(&mut self.fields)
            .into_iter()
            .partition(|f| doomed.contains(f.id.as_str()));
        self.fields = kept;

        debug!(id, removed = removed.len(), "remove_field");
        Ok(removed)
    }

    /// Ids of `id` and all of its transitive children
    pub fn subtree_ids(&self, id: &str) -> HashSet<String> {
        let mut ids = HashSet::from([id.to_string()]);
        loop {
            let before = ids.len();
            for field in &self.fields {
                if ids.contains(field.parent_id.as_str()) {
                    ids.insert(field.id.clone());
                }
            }
            if ids.len() == before {
                return ids;
            }
        }
    }

    /// Build the tree below `root_id`
    pub fn tree(&self, root_id: &str) -> Result<Vec<FieldNode>> {
        build_tree_with_depth(&self.fields, root_id, self.max_depth)
    }
}

impl Default for FieldList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self {
            fields,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
