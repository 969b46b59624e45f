//! The `Record` value type and the validation rules applied when reading it
//! back from delimited or structured text.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder used for a missing or blank text field.
pub const UNKNOWN: &str = "Unknown";

/// Age substituted when the age field is missing or not an integer.
pub const DEFAULT_AGE: i64 = 0;

/// A person entry stored by the record store.
///
/// Field order here is the serialized field order (`name, age, city`) for
/// both the delimited and structured formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    /// Non-negative by convention; not enforced.
    pub age: i64,
    pub city: String,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i64, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name='{}', age={}, city='{}'",
            self.name, self.age, self.city
        )
    }
}

/// The demo list written by `kata records sample`.
pub fn demo_records() -> Vec<Record> {
    vec![
        Record::new("John", 30, "New York"),
        Record::new("Jane", 25, "London"),
        Record::new("Bob", 40, "Paris"),
        Record::new("Alice", 35, "Tokyo"),
    ]
}

/// What to do with a row whose fields are missing or invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairPolicy {
    /// Substitute defaults (`"Unknown"`, `0`) and keep the row.
    #[default]
    Repair,
    /// Drop the row instead of fabricating values.
    Skip,
}

/// One unvalidated delimited row, borrowed from the reader.
///
/// `None` means the column is absent from the header or the row is too short
/// to reach it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub name: Option<&'a str>,
    pub age: Option<&'a str>,
    pub city: Option<&'a str>,
}

/// Outcome of checking a [`RawRecord`] against a [`RepairPolicy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCheck {
    /// Every field was present and valid.
    Clean(Record),
    /// Defaults were substituted; `problems` names each repaired field.
    Repaired {
        record: Record,
        problems: Vec<String>,
    },
    /// The row cannot be turned into a record.
    Rejected { problems: Vec<String> },
}

/// Validate a raw row and apply `policy` to any missing or invalid field.
///
/// Blank fields count as missing; the age is trimmed before parsing. A row
/// with none of the three fields present is always rejected: there is nothing
/// to repair.
pub fn check_row(raw: RawRecord<'_>, policy: RepairPolicy) -> RowCheck {
    let name = present(raw.name);
    let age_text = present(raw.age);
    let city = present(raw.city);

    if name.is_none() && age_text.is_none() && city.is_none() {
        return RowCheck::Rejected {
            problems: vec!["row has no name, age or city".to_string()],
        };
    }

    let mut problems = Vec::new();
    if name.is_none() {
        problems.push("missing name".to_string());
    }
    let age = match age_text {
        None => {
            problems.push("missing age".to_string());
            None
        }
        Some(text) => match text.trim().parse::<i64>() {
            Ok(age) => Some(age),
            Err(_) => {
                problems.push(format!("age '{}' is not an integer", text));
                None
            }
        },
    };
    if city.is_none() {
        problems.push("missing city".to_string());
    }

    let record = Record {
        name: name.unwrap_or(UNKNOWN).to_string(),
        age: age.unwrap_or(DEFAULT_AGE),
        city: city.unwrap_or(UNKNOWN).to_string(),
    };

    if problems.is_empty() {
        return RowCheck::Clean(record);
    }
    match policy {
        RepairPolicy::Repair => RowCheck::Repaired { record, problems },
        RepairPolicy::Skip => RowCheck::Rejected { problems },
    }
}

/// Build a record from one structured entry, or explain why it is unusable.
///
/// `name` and `city` must be strings. `age` may be an integer or a string
/// holding one. Structured entries are never repaired.
pub fn record_from_json(entry: &Value) -> Result<Record, String> {
    let Value::Object(object) = entry else {
        return Err("entry is not an object".to_string());
    };
    let text = |key: &str| match object.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(format!("{} must be a string, got {}", key, other)),
        None => Err(format!("missing {}", key)),
    };
    let name = text("name")?;
    let age = match object.get("age") {
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| format!("age {} is not an integer", number))?,
        Some(Value::String(value)) => value
            .trim()
            .parse()
            .map_err(|_| format!("age '{}' is not an integer", value))?,
        Some(other) => {
            return Err(format!("age must be an integer, got {}", other));
        }
        None => return Err("missing age".to_string()),
    };
    let city = text("city")?;
    Ok(Record { name, age, city })
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.trim().is_empty())
}
