//! Filesystem helpers: configuration, record files, plain text.

pub mod config;
pub mod record_store;
pub mod text_file;
