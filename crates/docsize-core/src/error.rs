//! Error types and exit codes for docsize
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/schema error (missing schema, malformed field list, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the docsize binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/schema error - missing schema, invalid field list (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading schemas and estimating sizes
#[derive(Error, Debug)]
pub enum DocsizeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data/schema errors (exit code 3)
    #[error("schema not found: {path:?}")]
    SchemaNotFound { path: PathBuf },

    #[error("invalid schema {path:?}: {reason}")]
    InvalidSchema { path: PathBuf, reason: String },

    #[error("duplicate field id: {id}")]
    DuplicateFieldId { id: String },

    #[error("field id {id} is reserved for a section root")]
    ReservedFieldId { id: String },

    #[error("field {id} references unknown parent {parent}")]
    UnknownParent { id: String, parent: String },

    #[error("field {id} is nested under {parent}, which is not a map or array")]
    NotAContainer { id: String, parent: String },

    #[error("field tree exceeds maximum depth {depth} at field {id} (parent cycle?)")]
    StructuralCycle { id: String, depth: usize },

    #[error("field not found: {id}")]
    FieldNotFound { id: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl DocsizeError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        DocsizeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        DocsizeError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        DocsizeError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        DocsizeError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a field id that is not in the list
    pub fn field_not_found(id: impl Into<String>) -> Self {
        DocsizeError::FieldNotFound { id: id.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DocsizeError::UnknownFormat(_)
            | DocsizeError::UsageError(_)
            | DocsizeError::InvalidValue { .. }
            | DocsizeError::Unsupported { .. } => ExitCode::Usage,

            DocsizeError::SchemaNotFound { .. }
            | DocsizeError::InvalidSchema { .. }
            | DocsizeError::DuplicateFieldId { .. }
            | DocsizeError::ReservedFieldId { .. }
            | DocsizeError::UnknownParent { .. }
            | DocsizeError::NotAContainer { .. }
            | DocsizeError::StructuralCycle { .. }
            | DocsizeError::FieldNotFound { .. }
            | DocsizeError::AlreadyExists { .. } => ExitCode::Data,

            DocsizeError::Io(_)
            | DocsizeError::Yaml(_)
            | DocsizeError::Json(_)
            | DocsizeError::Toml(_)
            | DocsizeError::FailedOperationWithTarget { .. }
            | DocsizeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DocsizeError::UnknownFormat(_) => "unknown_format",
            DocsizeError::UsageError(_) => "usage_error",
            DocsizeError::InvalidValue { .. } => "invalid_value",
            DocsizeError::Unsupported { .. } => "unsupported",
            DocsizeError::SchemaNotFound { .. } => "schema_not_found",
            DocsizeError::InvalidSchema { .. } => "invalid_schema",
            DocsizeError::DuplicateFieldId { .. } => "duplicate_field_id",
            DocsizeError::ReservedFieldId { .. } => "reserved_field_id",
            DocsizeError::UnknownParent { .. } => "unknown_parent",
            DocsizeError::NotAContainer { .. } => "not_a_container",
            DocsizeError::StructuralCycle { .. } => "structural_cycle",
            DocsizeError::FieldNotFound { .. } => "field_not_found",
            DocsizeError::AlreadyExists { .. } => "already_exists",
            DocsizeError::Io(_) => "io_error",
            DocsizeError::Yaml(_) => "yaml_error",
            DocsizeError::Json(_) => "json_error",
            DocsizeError::Toml(_) => "toml_error",
            DocsizeError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            DocsizeError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for docsize operations
pub type Result<T> = std::result::Result<T, DocsizeError>;
