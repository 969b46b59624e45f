//! CLI tests for the kata binary.
//!
//! Spawns the binary in a temp directory and checks stdout and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use kata::core::record::Record;
use kata::exit_codes;
use kata::io::record_store::RecordStore;
use kata::test_support::{sample_records, write_fixture};

fn kata(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kata"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run kata")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn merge_prints_merged_intervals() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = kata(temp.path(), &["merge", "1,3", "2,6", "8,10", "15,18"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "[[1, 6], [8, 10], [15, 18]]\n");
}

#[test]
fn merge_rejects_malformed_interval() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = kata(temp.path(), &["merge", "1;3"]);
    assert_ne!(output.status.code(), Some(exit_codes::OK));
}

#[test]
fn spiral_prints_clockwise_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = kata(temp.path(), &["spiral", "[[1,2,3],[4,5,6],[7,8,9]]"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "[1,2,3,6,9,8,7,4,5]\n");
}

#[test]
fn spiral_ragged_grid_prints_empty_list() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = kata(temp.path(), &["spiral", "[[1,2],[3]]"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "[]\n");
}

#[test]
fn spiral_invalid_json_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = kata(temp.path(), &["spiral", "[[1,2"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn brackets_reports_balance_through_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let balanced = kata(temp.path(), &["brackets", "()[]{}"]);
    assert_eq!(balanced.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&balanced), "balanced\n");

    let unbalanced = kata(temp.path(), &["brackets", "([)]"]);
    assert_eq!(unbalanced.status.code(), Some(exit_codes::UNBALANCED));
    assert_eq!(stdout(&unbalanced), "unbalanced at 2\n");
}

#[test]
fn count_prints_line_and_word_totals() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(temp.path(), "notes.txt", "alpha beta\ngamma\n");
    let output = kata(temp.path(), &["count", "notes.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "lines=2 words=3\n");

    let missing = kata(temp.path(), &["count", "absent.txt"]);
    assert_eq!(missing.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&missing), "lines=0 words=0\n");
}

#[test]
fn records_sample_then_show_uses_configured_paths() {
    let temp = tempfile::tempdir().expect("tempdir");
    let sample = kata(temp.path(), &["records", "sample"]);
    assert_eq!(sample.status.code(), Some(exit_codes::OK));

    let csv_path = temp.path().join("data").join("persons.csv");
    assert_eq!(
        RecordStore::default().read_delimited(&csv_path),
        sample_records()
    );

    let show = kata(temp.path(), &["records", "show"]);
    assert_eq!(show.status.code(), Some(exit_codes::OK));
    let lines: Vec<String> = stdout(&show).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "name='John', age=30, city='New York'");
}

#[test]
fn records_convert_csv_to_json() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(
        temp.path(),
        "people.csv",
        "name,age,city\nJohn,30,New York\nJane,,London\n",
    );
    let output = kata(temp.path(), &["records", "convert", "people.csv", "out/people.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let records = RecordStore::default().read_structured(&temp.path().join("out/people.json"));
    assert_eq!(
        records,
        vec![
            Record::new("John", 30, "New York"),
            Record::new("Jane", 0, "London"),
        ]
    );
}

#[test]
fn records_show_honours_skip_policy_from_config() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(temp.path(), "kata.toml", "[records]\nrepair = \"skip\"\n");
    write_fixture(
        temp.path(),
        "people.csv",
        "name,age,city\nJohn,30,New York\nJane,,London\n",
    );
    let output = kata(temp.path(), &["records", "show", "people.csv"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "name='John', age=30, city='New York'\n");
}

#[test]
fn records_show_missing_file_prints_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = kata(temp.path(), &["records", "show", "absent.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("file not found"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = kata(temp.path(), &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    let contents = fs::read_to_string(temp.path().join("kata.toml")).expect("config");
    assert!(contents.contains("delimited_file = \"persons.csv\""));

    let second = kata(temp.path(), &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::INVALID));

    let forced = kata(temp.path(), &["init", "--force"]);
    assert_eq!(forced.status.code(), Some(exit_codes::OK));
}

#[test]
fn invalid_config_is_reported() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(temp.path(), "kata.toml", "structured_file = \"\"\n");
    let output = kata(temp.path(), &["records", "show"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("structured_file must be non-empty"));
}
