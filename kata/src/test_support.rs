//! Test-only helpers for building records and record files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::record::{Record, demo_records};

/// The four demo records used across tests and `kata records sample`.
pub fn sample_records() -> Vec<Record> {
    demo_records()
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}
