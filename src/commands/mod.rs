//! CLI commands for docsize

pub mod dispatch;
pub mod estimate;
pub mod format_bytes;
pub mod init;
pub mod tree;
pub mod validate;
