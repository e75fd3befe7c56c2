//! Field declarations and the derived field tree
//!
//! A schema is authored as a flat list of [`Field`] records that reference
//! their container through `parent_id`. The estimator never works on the flat
//! list directly: it consumes [`FieldNode`] trees rebuilt from it on demand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::DocsizeError;

/// Parent id of top-level fields
pub const ROOT_ID: &str = "root";

/// The closed set of value types a field may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Null,
    Timestamp,
    Geopoint,
    Bytes,
    Reference,
    Map,
    Array,
}

impl FieldType {
    /// Every field type, in the order they are offered to users
    pub const ALL: [FieldType; 10] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Null,
        FieldType::Map,
        FieldType::Array,
        FieldType::Timestamp,
        FieldType::Geopoint,
        FieldType::Bytes,
        FieldType::Reference,
    ];

    /// Whether fields of this type may have children
    pub fn is_container(self) -> bool {
        matches!(self, FieldType::Map | FieldType::Array)
    }

    /// Whether `size` affects the cost of this type
    pub fn uses_size(self) -> bool {
        matches!(
            self,
            FieldType::String | FieldType::Bytes | FieldType::Reference | FieldType::Array
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Null => "null",
            FieldType::Timestamp => "timestamp",
            FieldType::Geopoint => "geopoint",
            FieldType::Bytes => "bytes",
            FieldType::Reference => "reference",
            FieldType::Map => "map",
            FieldType::Array => "array",
        }
    }
}

impl FromStr for FieldType {
    type Err = DocsizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        match FieldType::ALL.iter().find(|t| t.as_str() == lowered) {
            Some(field_type) => Ok(*field_type),
            None => {
                let supported: Vec<&str> = FieldType::ALL.iter().map(|t| t.as_str()).collect();
                bail_unsupported!("field type", s, supported.join(", "))
            }
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat field declaration as held by the editing collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Unique, stable identifier
    pub id: String,
    /// Id of the containing map/array field, or a root sentinel
    pub parent_id: String,
    /// Field name (ignored for array elements)
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Example value; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Byte length for string/bytes/reference, element count for arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Field {
    pub fn new(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        name: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.into(),
            name: name.into(),
            field_type,
            value: None,
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// A field with its children attached, rebuilt from the flat list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub children: Vec<FieldNode>,
}

impl FieldNode {
    /// Attach children to a flat declaration
    pub fn from_field(field: &Field, children: Vec<FieldNode>) -> Self {
        Self {
            id: field.id.clone(),
            name: field.name.clone(),
            field_type: field.field_type,
            value: field.value.clone(),
            size: field.size,
            children,
        }
    }

    /// Leaf node without a backing flat record
    pub fn leaf(name: impl Into<String>, field_type: FieldType, size: Option<u64>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            field_type,
            value: None,
            size,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<FieldNode>) -> Self {
        self.children = children;
        self
    }

    /// Declared size, with a missing value read as zero
    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(FieldNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_parsing() {
        assert_eq!("string".parse::<FieldType>().unwrap(), FieldType::String);
        assert_eq!("GeoPoint".parse::<FieldType>().unwrap(), FieldType::Geopoint);
        assert_eq!("array".parse::<FieldType>().unwrap(), FieldType::Array);

        let err = "decimal".parse::<FieldType>().unwrap_err();
        assert!(matches!(err, DocsizeError::Unsupported { .. }));
        assert!(err.to_string().contains("reference"));
    }

    #[test]
    fn test_field_type_display_matches_serde() {
        for field_type in FieldType::ALL {
            let json = serde_json::to_string(&field_type).unwrap();
            assert_eq!(json, format!("\"{}\"", field_type));
        }
    }

    #[test]
    fn test_only_map_and_array_are_containers() {
        let containers: Vec<_> = FieldType::ALL
            .iter()
            .filter(|t| t.is_container())
            .collect();
        assert_eq!(containers, vec![&FieldType::Map, &FieldType::Array]);
    }

    #[test]
    fn test_field_deserializes_with_defaults() {
        let field: Field =
            serde_json::from_str(r#"{"id":"a","parent_id":"root","type":"number"}"#).unwrap();
        assert_eq!(field.name, "");
        assert_eq!(field.size, None);
        assert_eq!(field.value, None);
        assert_eq!(field.field_type, FieldType::Number);
    }

    #[test]
    fn test_node_count() {
        let node = FieldNode::leaf("tags", FieldType::Array, Some(3)).with_children(vec![
            FieldNode::leaf("", FieldType::Map, None).with_children(vec![
                FieldNode::leaf("a", FieldType::String, Some(1)),
                FieldNode::leaf("b", FieldType::Number, None),
            ]),
        ]);
        assert_eq!(node.node_count(), 4);
    }
}
