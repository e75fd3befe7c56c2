//! Document path and identifier overhead
//!
//! A document path is a `/`-delimited list of segments. The last segment is
//! the document identifier; everything before it is the collection path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::DocsizeError;
use crate::size::utf8_len;

/// Fixed addressing overhead added to every document name
pub const ADDRESS_OVERHEAD: u64 = 16;

/// Length of an auto-generated identifier string
pub const AUTO_ID_LENGTH: u64 = 20;

/// Cost of an identifier stored as a fixed-width integer
pub const INTEGER_ID_SIZE: u64 = 8;

/// Separator or terminator byte accompanying each string segment
const SEGMENT_SEPARATOR: u64 = 1;

/// How the identifier of a document is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentIdKind {
    #[default]
    Auto,
    CustomString,
    CustomInt,
}

impl FromStr for DocumentIdKind {
    type Err = DocsizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DocumentIdKind::Auto),
            "custom-string" | "string" => Ok(DocumentIdKind::CustomString),
            "custom-int" | "int" | "integer" => Ok(DocumentIdKind::CustomInt),
            _ => Err(DocsizeError::unsupported(
                "document id kind",
                s,
                "auto, custom-string, custom-int",
            )),
        }
    }
}

impl fmt::Display for DocumentIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentIdKind::Auto => write!(f, "auto"),
            DocumentIdKind::CustomString => write!(f, "custom-string"),
            DocumentIdKind::CustomInt => write!(f, "custom-int"),
        }
    }
}

/// The trailing identifier of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentId {
    /// Generated by the database as a fixed-length string
    Auto,
    Custom(String),
    Integer(i64),
}

impl DocumentId {
    /// Build an identifier from a kind selector and the user's text.
    ///
    /// The text is ignored for auto ids and must parse as an integer for
    /// `custom-int`.
    pub fn from_kind(kind: DocumentIdKind, text: &str) -> crate::error::Result<Self> {
        match kind {
            DocumentIdKind::Auto => Ok(DocumentId::Auto),
            DocumentIdKind::CustomString => Ok(DocumentId::Custom(text.to_string())),
            DocumentIdKind::CustomInt => match text.trim().parse::<i64>() {
                Ok(value) => Ok(DocumentId::Integer(value)),
                Err(_) => bail_invalid!("integer document id", text),
            },
        }
    }

    pub fn kind(&self) -> DocumentIdKind {
        match self {
            DocumentId::Auto => DocumentIdKind::Auto,
            DocumentId::Custom(_) => DocumentIdKind::CustomString,
            DocumentId::Integer(_) => DocumentIdKind::CustomInt,
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Auto => write!(f, "{{auto-id}}"),
            DocumentId::Custom(id) => write!(f, "{}", id),
            DocumentId::Integer(id) => write!(f, "{}", id),
        }
    }
}

/// A document address: collection path segments plus an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAddress {
    collection: Vec<String>,
    id: DocumentId,
}

impl DocumentAddress {
    /// Pair form: a collection path and an identifier.
    pub fn new(collection_path: &str, id: DocumentId) -> Self {
        Self {
            collection: split_segments(collection_path)
                .map(str::to_string)
                .collect(),
            id,
        }
    }

    /// Path-string form: the last non-empty segment is a custom string id.
    pub fn parse(full_path: &str) -> Self {
        let mut segments: Vec<String> = split_segments(full_path).map(str::to_string).collect();
        let id = segments.pop().unwrap_or_default();
        Self {
            collection: segments,
            id: DocumentId::Custom(id),
        }
    }

    pub fn collection_segments(&self) -> &[String] {
        &self.collection
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn collection_path(&self) -> String {
        self.collection.join("/")
    }

    pub fn full_path(&self) -> String {
        if self.collection.is_empty() {
            self.id.to_string()
        } else {
            format!("{}/{}", self.collection_path(), self.id)
        }
    }

    /// Bytes spent on addressing this document
    pub fn overhead(&self) -> u64 {
        segments_size(self.collection.iter().map(String::as_str))
            .saturating_add(identifier_size(&self.id))
            .saturating_add(ADDRESS_OVERHEAD)
    }
}

impl fmt::Display for DocumentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Cost of collection path segments: UTF-8 length plus one separator each.
pub fn segments_size<'a>(segments: impl IntoIterator<Item = &'a str>) -> u64 {
    segments
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| utf8_len(segment) + SEGMENT_SEPARATOR)
        .fold(0, u64::saturating_add)
}

/// Cost of the trailing identifier.
pub fn identifier_size(id: &DocumentId) -> u64 {
    match id {
        DocumentId::Auto => AUTO_ID_LENGTH + SEGMENT_SEPARATOR,
        DocumentId::Custom(text) => utf8_len(text) + SEGMENT_SEPARATOR,
        DocumentId::Integer(_) => INTEGER_ID_SIZE,
    }
}

/// Addressing overhead of a `/`-delimited document path.
pub fn document_path_size(full_path: &str) -> u64 {
    DocumentAddress::parse(full_path).overhead()
}
