//! Docsize Core Library
//!
//! Estimates the stored size of a document from a schema of typed fields,
//! without building any real values.

pub mod config;
pub mod error;
pub mod field;
pub mod fields;
pub mod format;
pub mod logging;
pub mod path;
pub mod repeated;
pub mod schema;
pub mod size;
pub mod tree;

pub use field::{Field, FieldNode, FieldType, ROOT_ID};
pub use fields::{FieldList, FieldUpdate};
pub use format::format_bytes;
pub use path::{DocumentAddress, DocumentId, DocumentIdKind};
pub use size::{
    estimate_document_size, estimate_field_size, estimate_forest_size, estimate_value_size,
    SizeBreakdown,
};
pub use tree::build_tree;
