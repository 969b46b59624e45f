//! Whole-file text reads with the same log-and-degrade policy as the record
//! store.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::text_stats::TextStats;
use crate::error::StoreError;

pub fn try_read_text(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|err| StoreError::from_io(path, err))
}

/// Read `path` as UTF-8; empty string on failure.
pub fn read_text(path: &Path) -> String {
    match try_read_text(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), "{}; returning empty text", err);
            String::new()
        }
    }
}

/// Count lines and words in `path`; zeros on failure.
pub fn count_lines_words(path: &Path) -> TextStats {
    TextStats::of(&read_text(path))
}
