//! Kata configuration stored in `kata.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::record::RepairPolicy;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "kata.toml";

/// Kata configuration (TOML).
///
/// Missing fields fall back to the defaults below, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KataConfig {
    /// Directory holding the record files.
    pub data_dir: PathBuf,

    /// File name (within `data_dir`) of the delimited record file.
    pub delimited_file: String,

    /// File name (within `data_dir`) of the structured record file.
    pub structured_file: String,

    pub records: RecordsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecordsConfig {
    /// `repair` substitutes defaults for bad delimited fields; `skip` drops the row.
    pub repair: RepairPolicy,
}

impl Default for KataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            delimited_file: "persons.csv".to_string(),
            structured_file: "persons.json".to_string(),
            records: RecordsConfig::default(),
        }
    }
}

impl KataConfig {
    pub fn validate(&self) -> Result<()> {
        validate_file_name("delimited_file", &self.delimited_file)?;
        validate_file_name("structured_file", &self.structured_file)?;
        Ok(())
    }

    pub fn delimited_path(&self) -> PathBuf {
        self.data_dir.join(&self.delimited_file)
    }

    pub fn structured_path(&self) -> PathBuf {
        self.data_dir.join(&self.structured_file)
    }
}

fn validate_file_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} must be non-empty", field));
    }
    if value.contains('/') || value.contains('\\') {
        return Err(anyhow!(
            "{} must be a file name, not a path (got '{}')",
            field,
            value
        ));
    }
    Ok(())
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `KataConfig::default()`.
pub fn load_config(path: &Path) -> Result<KataConfig> {
    if !path.exists() {
        let cfg = KataConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: KataConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &KataConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
