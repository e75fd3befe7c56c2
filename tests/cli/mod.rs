pub mod support;

mod estimate;
mod format_bytes;
mod init;
mod tree;
mod validate;
