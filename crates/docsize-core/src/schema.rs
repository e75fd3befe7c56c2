//! Schema documents: the input boundary of the estimator
//!
//! A schema file declares the document address, a multiplier for repeated
//! entries and two flat field lists (`fields`, stored once, and `repeated`,
//! stored once per entry). Files are TOML unless the extension says JSON or
//! YAML.
//!
//! Loading validates the field lists and clamps sizes into range, so the
//! estimator only ever sees well-formed, bounded input.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LimitsConfig;
use crate::error::{DocsizeError, Result};
use crate::field::{Field, FieldNode, FieldType, ROOT_ID};
use crate::fields::FieldList;
use crate::path::{DocumentAddress, DocumentId, DocumentIdKind};
use crate::repeated::{repeated_section, REPEATED_ROOT, SINGLE_ROOT};
use crate::size::{estimate_breakdown, utf8_len, SizeBreakdown};

/// Serialization format of a schema file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Toml,
    Json,
    Yaml,
}

impl SchemaFormat {
    /// Pick the format from the file extension (TOML by default)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => SchemaFormat::Json,
            Some("yaml") | Some("yml") => SchemaFormat::Yaml,
            _ => SchemaFormat::Toml,
        }
    }
}

/// Identifier settings of the described document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentIdSpec {
    #[serde(default)]
    pub kind: DocumentIdKind,
    /// Identifier text for `custom-string` / `custom-int`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// One field declaration as written in a schema file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub id: String,
    /// Containing map/array; the section root when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Byte length or element count; negative values are clamped to 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    /// Example text whose UTF-8 length stands in for a missing `size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FieldEntry {
    pub fn new(id: &str, name: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            parent: None,
            name: Some(name.to_string()),
            field_type,
            size: None,
            sample: None,
            value: None,
        }
    }
}

/// Raw, unvalidated contents of a schema file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Collection path, e.g. `users/alice/posts`
    #[serde(default)]
    pub collection: String,

    /// Full document path; overrides `collection` and `document_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Number of repeated entries
    #[serde(default = "default_multiplier")]
    pub multiplier: u64,

    #[serde(default)]
    pub document_id: DocumentIdSpec,

    #[serde(default)]
    pub fields: Vec<FieldEntry>,

    #[serde(default)]
    pub repeated: Vec<FieldEntry>,
}

/// Ids that name section roots and cannot be used by declarations
const RESERVED_IDS: [&str; 3] = [SINGLE_ROOT, REPEATED_ROOT, ROOT_ID];

fn default_multiplier() -> u64 {
    1
}

impl SchemaFile {
    /// Example schema: a post with an author, a view counter and comments
    pub fn starter() -> Self {
        let mut author = FieldEntry::new("s1", "author", FieldType::String);
        author.size = Some(8);
        author.value = Some(serde_json::json!("Jane Doe"));

        let mut views = FieldEntry::new("s2", "views", FieldType::Number);
        views.value = Some(serde_json::json!(12345));

        let mut comment = FieldEntry::new("r1", "comment", FieldType::String);
        comment.size = Some(27);
        comment.value = Some(serde_json::json!("This is an example comment."));

        let mut likes = FieldEntry::new("r2", "likes", FieldType::Number);
        likes.value = Some(serde_json::json!(10));

        Self {
            collection: "posts".to_string(),
            path: None,
            multiplier: 1,
            document_id: DocumentIdSpec {
                kind: DocumentIdKind::CustomString,
                value: "my-awesome-document-id".to_string(),
            },
            fields: vec![author, views],
            repeated: vec![comment, likes],
        }
    }

    /// Parse schema text in the given format
    pub fn parse(content: &str, format: SchemaFormat) -> Result<Self> {
        let file = match format {
            SchemaFormat::Toml => toml::from_str(content)?,
            SchemaFormat::Json => serde_json::from_str(content)?,
            SchemaFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(file)
    }

    /// Render schema text in the given format
    pub fn render(&self, format: SchemaFormat) -> Result<String> {
        let content = match format {
            SchemaFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| DocsizeError::Other(format!("failed to serialize schema: {}", e)))?,
            SchemaFormat::Json => serde_json::to_string_pretty(self)?,
            SchemaFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(content)
    }

    /// Read and parse a schema file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DocsizeError::SchemaNotFound {
                path: path.to_path_buf(),
            },
            _ => DocsizeError::io_operation("read schema", path.display(), e),
        })?;

        Self::parse(&content, SchemaFormat::from_path(path)).map_err(|e| {
            DocsizeError::InvalidSchema {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })
    }

    /// Write the schema in the format implied by the extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.render(SchemaFormat::from_path(path))?;
        fs::write(path, content)
            .map_err(|e| DocsizeError::io_operation("write schema", path.display(), e))?;
        Ok(())
    }

    /// Validate the declarations and build a [`Schema`]
    pub fn validate(self, limits: &LimitsConfig) -> Result<Schema> {
        let address = match &self.path {
            Some(path) => DocumentAddress::parse(path),
            None => DocumentAddress::new(
                &self.collection,
                DocumentId::from_kind(self.document_id.kind, &self.document_id.value)?,
            ),
        };

        let mut list = FieldList::new().with_max_depth(limits.max_depth);
        let mut sections: HashMap<String, &'static str> = HashMap::new();
        let mut types: HashMap<String, FieldType> = HashMap::new();

        for (root, entries) in [(SINGLE_ROOT, &self.fields), (REPEATED_ROOT, &self.repeated)] {
            for entry in entries {
                if RESERVED_IDS.contains(&entry.id.as_str()) {
                    return Err(DocsizeError::ReservedFieldId {
                        id: entry.id.clone(),
                    });
                }
                if sections.contains_key(&entry.id) {
                    return Err(DocsizeError::DuplicateFieldId {
                        id: entry.id.clone(),
                    });
                }
                sections.insert(entry.id.clone(), root);
                types.insert(entry.id.clone(), entry.field_type);
            }
        }

        for (root, entries) in [(SINGLE_ROOT, &self.fields), (REPEATED_ROOT, &self.repeated)] {
            for entry in entries {
                let parent = entry.parent.as_deref().unwrap_or(root);
                check_parent(entry, parent, root, &sections, &types)?;

                let parent_is_array = types.get(parent) == Some(&FieldType::Array);
                list.push(to_field(entry, parent, parent_is_array, limits))?;
            }
        }

        check_cycles(&list)?;

        debug!(
            single = self.fields.len(),
            repeated = self.repeated.len(),
            multiplier = self.multiplier,
            "validate_schema"
        );

        Ok(Schema {
            address,
            multiplier: self.multiplier,
            fields: list,
        })
    }
}

fn check_parent(
    entry: &FieldEntry,
    parent: &str,
    root: &str,
    sections: &HashMap<String, &'static str>,
    types: &HashMap<String, FieldType>,
) -> Result<()> {
    if parent == root {
        return Ok(());
    }

    let unknown = || DocsizeError::UnknownParent {
        id: entry.id.clone(),
        parent: parent.to_string(),
    };

    if sections.get(parent).copied() != Some(root) {
        return Err(unknown());
    }
    match types.get(parent) {
        Some(parent_type) if parent_type.is_container() => Ok(()),
        Some(_) => Err(DocsizeError::NotAContainer {
            id: entry.id.clone(),
            parent: parent.to_string(),
        }),
        None => Err(unknown()),
    }
}

fn to_field(
    entry: &FieldEntry,
    parent: &str,
    parent_is_array: bool,
    limits: &LimitsConfig,
) -> Field {
    let name = entry.name.clone().unwrap_or_default();
    if parent_is_array && !name.is_empty() {
        debug!(id = %entry.id, name = %name, "array element name ignored");
    } else if !parent_is_array && name.is_empty() {
        warn!(id = %entry.id, "field has no name");
    }

    let declared = match (entry.size, &entry.sample) {
        (Some(size), _) => Some(size),
        (None, Some(sample)) => Some(i64::try_from(utf8_len(sample)).unwrap_or(i64::MAX)),
        (None, None) => None,
    };

    let declared = match declared {
        Some(size) if !entry.field_type.uses_size() => {
            warn!(
                id = %entry.id,
                size,
                field_type = %entry.field_type,
                "size ignored for this field type"
            );
            None
        }
        other => other,
    };

    let mut field = Field::new(entry.id.clone(), parent, name, entry.field_type);
    if let Some(value) = &entry.value {
        field = field.with_value(value.clone());
    }
    field.size = declared.map(|size| clamp_size(&entry.id, size, limits.max_field_size));
    field
}

fn clamp_size(id: &str, size: i64, max: u64) -> u64 {
    if size < 0 {
        warn!(id, size, "negative size clamped to 0");
        return 0;
    }
    let size = size as u64;
    if size > max {
        warn!(id, size, max, "size clamped to maximum");
        return max;
    }
    size
}

/// Reject parent chains that loop back on themselves
fn check_cycles(list: &FieldList) -> Result<()> {
    let parents: HashMap<&str, &str> = list
        .iter()
        .map(|f| (f.id.as_str(), f.parent_id.as_str()))
        .collect();

    for field in list {
        let mut seen = HashSet::from([field.id.as_str()]);
        let mut current = field.parent_id.as_str();
        while let Some(&next) = parents.get(current) {
            if !seen.insert(current) {
                return Err(DocsizeError::StructuralCycle {
                    id: field.id.clone(),
                    depth: seen.len(),
                });
            }
            current = next;
        }
    }
    Ok(())
}

/// A validated schema, ready for estimation
#[derive(Debug, Clone)]
pub struct Schema {
    address: DocumentAddress,
    multiplier: u64,
    fields: FieldList,
}

impl Schema {
    /// Read, parse and validate a schema file
    pub fn load(path: &Path, limits: &LimitsConfig) -> Result<Self> {
        SchemaFile::read(path)?.validate(limits)
    }

    pub fn address(&self) -> &DocumentAddress {
        &self.address
    }

    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    /// Replace the document address
    pub fn with_address(mut self, address: DocumentAddress) -> Self {
        self.address = address;
        self
    }

    pub fn with_multiplier(mut self, multiplier: u64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Number of declarations in a section (`single` or `repeated`)
    pub fn section_len(&self, root: &str) -> usize {
        let ids = self.fields.subtree_ids(root);
        ids.len() - 1
    }

    /// Fields stored once per document
    pub fn single_tree(&self) -> Result<Vec<FieldNode>> {
        self.fields.tree(SINGLE_ROOT)
    }

    /// The repeated section as an array field, if anything repeats
    pub fn repeated_tree(&self) -> Result<Option<FieldNode>> {
        Ok(repeated_section(
            self.fields.tree(REPEATED_ROOT)?,
            self.multiplier,
        ))
    }

    /// Every top-level field as it would be stored, repeated section last
    pub fn document_tree(&self) -> Result<Vec<FieldNode>> {
        let mut nodes = self.single_tree()?;
        nodes.extend(self.repeated_tree()?);
        Ok(nodes)
    }

    /// Per-section size estimate
    pub fn breakdown(&self) -> Result<SizeBreakdown> {
        let single = self.single_tree()?;
        let repeated = self.repeated_tree()?;
        Ok(estimate_breakdown(&self.address, &single, repeated.as_ref()))
    }
}

/// Default schema file name written by `docsize init`
pub fn default_schema_path() -> PathBuf {
    PathBuf::from("docsize.toml")
}
