//! Error taxonomy for file-backed operations.
//!
//! Whole-file failures (`NotFound`, `PermissionDenied`, `Structural`, `Io`)
//! abort a single read or write. `MalformedRecord` describes one bad row or
//! entry and is reported alongside the records that did load.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// What the reader did with a malformed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Repaired,
    Skipped,
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowAction::Repaired => f.write_str("repaired"),
            RowAction::Skipped => f.write_str("skipped"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("malformed record at {location} ({reason}); {action}")]
    MalformedRecord {
        location: String,
        reason: String,
        action: RowAction,
    },

    #[error("structural error in {}: {message}", .path.display())]
    Structural { path: PathBuf, message: String },

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound { path },
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path },
            _ => StoreError::Io { path, source: err },
        }
    }

    pub fn structural(path: &Path, message: impl fmt::Display) -> Self {
        StoreError::Structural {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn malformed(
        location: impl Into<String>,
        reason: impl Into<String>,
        action: RowAction,
    ) -> Self {
        StoreError::MalformedRecord {
            location: location.into(),
            reason: reason.into(),
            action,
        }
    }
}
