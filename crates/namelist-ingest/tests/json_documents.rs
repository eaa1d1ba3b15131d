//! Tests for JSON document loading.

use std::fs;

use namelist_ingest::read_document;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn reads_plain_utf8_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("names.json");
    let body = json!([
        {"strName": "First Names", "aValues": ["Alice", "IsFemale", "Bob", "IsMale"]}
    ]);
    fs::write(&path, serde_json::to_string_pretty(&body).unwrap()).expect("write json");

    let document = read_document(&path).expect("read document");

    assert_eq!(document.first.label, "First Names");
    assert_eq!(
        document.first.values,
        vec!["Alice", "IsFemale", "Bob", "IsMale"]
    );
    assert!(document.rest.is_empty());
}

#[test]
fn reads_bom_prefixed_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("names.json");
    let body = json!([{"strName": "First Names", "aValues": ["Alice", "IsFemale"]}]);
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(serde_json::to_string(&body).unwrap().as_bytes());
    fs::write(&path, bytes).expect("write json");

    let document = read_document(&path).expect("read document");

    assert_eq!(document.first.values, vec!["Alice", "IsFemale"]);
}

#[test]
fn malformed_json_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("names.json");
    fs::write(&path, "[{\"strName\": ").expect("write json");

    assert!(read_document(&path).is_err());
}

#[test]
fn missing_values_field_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("names.json");
    fs::write(&path, "[{\"strName\": \"First Names\"}]").expect("write json");

    assert!(read_document(&path).is_err());
}

#[test]
fn gender_strings_pass_through_unvalidated() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("names.json");
    let body = json!([{"strName": "First Names", "aValues": ["Alice", "NotAGender"]}]);
    fs::write(&path, serde_json::to_string(&body).unwrap()).expect("write json");

    let document = read_document(&path).expect("read document");

    assert_eq!(document.first.values, vec!["Alice", "NotAGender"]);
}
