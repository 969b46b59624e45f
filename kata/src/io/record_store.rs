//! File-backed storage for [`Record`] lists in delimited (CSV) and
//! structured (JSON) form.
//!
//! The plain operations (`read_delimited`, `write_structured`, ...) never fail:
//! every error is logged with `tracing::warn!` and the call degrades to an
//! empty result or a no-op. The `try_*` variants return the same failures as
//! [`StoreError`] values for callers that want to act on them.
//!
//! Writes go straight to the target path. A write that fails part way leaves
//! the file in whatever state the filesystem left it; there is no temp-file
//! swap.

use std::fs::{self, File};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, warn};

use crate::core::record::{
    RawRecord, Record, RepairPolicy, RowCheck, check_row, record_from_json,
};
use crate::error::{RowAction, StoreError};

/// Column order written to delimited files.
pub const HEADER: [&str; 3] = ["name", "age", "city"];

const JSON_INDENT: &[u8] = b"    ";

/// Records loaded from a file plus one `MalformedRecord` issue per bad row.
#[derive(Debug, Default)]
pub struct ReadReport {
    pub records: Vec<Record>,
    pub issues: Vec<StoreError>,
}

/// Which on-disk format a path holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Delimited,
    Structured,
}

impl RecordFormat {
    /// `.json` is structured; everything else is treated as delimited.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RecordFormat::Structured,
            _ => RecordFormat::Delimited,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStore {
    policy: RepairPolicy,
}

impl RecordStore {
    pub fn new(policy: RepairPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RepairPolicy {
        self.policy
    }

    /// Read a delimited file; empty on any whole-file failure.
    pub fn read_delimited(&self, path: &Path) -> Vec<Record> {
        log_read(path, self.try_read_delimited(path))
    }

    /// Write `records` with a `name,age,city` header, overwriting `path`.
    pub fn write_delimited(&self, path: &Path, records: &[Record]) {
        log_write(path, self.try_write_delimited(path, records));
    }

    /// Read a structured file; empty on any whole-file failure.
    pub fn read_structured(&self, path: &Path) -> Vec<Record> {
        log_read(path, self.try_read_structured(path))
    }

    /// Write `records` as a pretty-printed array, overwriting `path`.
    pub fn write_structured(&self, path: &Path, records: &[Record]) {
        log_write(path, self.try_write_structured(path, records));
    }

    /// Read either format, chosen by [`RecordFormat::from_path`].
    pub fn read(&self, path: &Path) -> Vec<Record> {
        match RecordFormat::from_path(path) {
            RecordFormat::Delimited => self.read_delimited(path),
            RecordFormat::Structured => self.read_structured(path),
        }
    }

    /// Write either format, chosen by [`RecordFormat::from_path`].
    pub fn write(&self, path: &Path, records: &[Record]) {
        match RecordFormat::from_path(path) {
            RecordFormat::Delimited => self.write_delimited(path, records),
            RecordFormat::Structured => self.write_structured(path, records),
        }
    }

    pub fn try_read_delimited(&self, path: &Path) -> Result<ReadReport, StoreError> {
        let bytes = fs::read(path).map_err(|err| StoreError::from_io(path, err))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes.as_slice());

        let headers = reader.headers().map_err(|err| from_csv(path, err))?.clone();
        let mut report = ReadReport::default();
        if headers.is_empty() {
            return Ok(report);
        }
        let columns = Columns::locate(&headers);
        if columns.is_empty() {
            return Err(StoreError::structural(
                path,
                "header has none of name, age, city",
            ));
        }

        for (index, row) in reader.records().enumerate() {
            let location = format!("row {}", index + 1);
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    report.issues.push(StoreError::malformed(
                        location,
                        err.to_string(),
                        RowAction::Skipped,
                    ));
                    continue;
                }
            };
            match check_row(columns.raw(&row), self.policy) {
                RowCheck::Clean(record) => report.records.push(record),
                RowCheck::Repaired { record, problems } => {
                    report.issues.push(StoreError::malformed(
                        location,
                        problems.join(", "),
                        RowAction::Repaired,
                    ));
                    report.records.push(record);
                }
                RowCheck::Rejected { problems } => {
                    report.issues.push(StoreError::malformed(
                        location,
                        problems.join(", "),
                        RowAction::Skipped,
                    ));
                }
            }
        }

        debug!(
            path = %path.display(),
            records = report.records.len(),
            issues = report.issues.len(),
            "read delimited records"
        );
        Ok(report)
    }

    pub fn try_write_delimited(&self, path: &Path, records: &[Record]) -> Result<(), StoreError> {
        let file = File::create(path).map_err(|err| StoreError::from_io(path, err))?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);
        writer.write_record(HEADER).map_err(|err| from_csv(path, err))?;
        for record in records {
            writer.serialize(record).map_err(|err| from_csv(path, err))?;
        }
        writer.flush().map_err(|err| StoreError::from_io(path, err))?;
        debug!(path = %path.display(), records = records.len(), "wrote delimited records");
        Ok(())
    }

    pub fn try_read_structured(&self, path: &Path) -> Result<ReadReport, StoreError> {
        let contents = fs::read_to_string(path).map_err(|err| StoreError::from_io(path, err))?;
        let value: Value =
            serde_json::from_str(&contents).map_err(|err| StoreError::structural(path, err))?;
        let Value::Array(entries) = value else {
            return Err(StoreError::structural(
                path,
                "top-level value is not an array",
            ));
        };

        let mut report = ReadReport::default();
        for (index, entry) in entries.iter().enumerate() {
            match record_from_json(entry) {
                Ok(record) => report.records.push(record),
                Err(reason) => report.issues.push(StoreError::malformed(
                    format!("entry {}", index + 1),
                    reason,
                    RowAction::Skipped,
                )),
            }
        }

        debug!(
            path = %path.display(),
            records = report.records.len(),
            issues = report.issues.len(),
            "read structured records"
        );
        Ok(report)
    }

    pub fn try_write_structured(&self, path: &Path, records: &[Record]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        records
            .serialize(&mut serializer)
            .map_err(|err| StoreError::structural(path, err))?;
        buf.push(b'\n');
        fs::write(path, buf).map_err(|err| StoreError::from_io(path, err))?;
        debug!(path = %path.display(), records = records.len(), "wrote structured records");
        Ok(())
    }
}

/// Header positions of the three record columns.
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: Option<usize>,
    age: Option<usize>,
    city: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |wanted: &str| headers.iter().position(|header| header.trim() == wanted);
        Self {
            name: find("name"),
            age: find("age"),
            city: find("city"),
        }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.city.is_none()
    }

    fn raw<'a>(&self, row: &'a StringRecord) -> RawRecord<'a> {
        let field = |column: Option<usize>| column.and_then(|index| row.get(index));
        RawRecord {
            name: field(self.name),
            age: field(self.age),
            city: field(self.city),
        }
    }
}

fn from_csv(path: &Path, err: csv::Error) -> StoreError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => StoreError::from_io(path, io_err),
        _ => StoreError::structural(path, message),
    }
}

fn log_read(path: &Path, result: Result<ReadReport, StoreError>) -> Vec<Record> {
    match result {
        Ok(report) => {
            for issue in &report.issues {
                warn!(path = %path.display(), "{}", issue);
            }
            report.records
        }
        Err(err) => {
            warn!(path = %path.display(), "{}; returning no records", err);
            Vec::new()
        }
    }
}

fn log_write(path: &Path, result: Result<(), StoreError>) {
    if let Err(err) = result {
        warn!(path = %path.display(), "{}; nothing written", err);
    }
}
