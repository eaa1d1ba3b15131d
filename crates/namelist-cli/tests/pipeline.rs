//! Integration tests for the merge pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use namelist_cli::cli::MergeArgs;
use namelist_cli::commands::run_merge;
use namelist_core::WriteStatus;

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("namelist_{label}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_names_json(dir: &Path, name: &str, values: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let body = json!([{"strName": "First Names", "aValues": values}]);
    fs::write(&path, serde_json::to_string_pretty(&body).unwrap()).expect("write json");
    path
}

fn read_values(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).expect("read output");
    let body: serde_json::Value = serde_json::from_str(&text).expect("parse output");
    body[0]["aValues"]
        .as_array()
        .expect("aValues array")
        .iter()
        .map(|v| v.as_str().expect("string value").to_string())
        .collect()
}

fn args(new: &Path, default: &Path) -> MergeArgs {
    MergeArgs {
        new_name_file: new.to_path_buf(),
        default_name_file: default.to_path_buf(),
        dry_run: false,
        force: false,
    }
}

#[test]
fn reduced_and_merged_from_json_inputs() {
    let dir = temp_dir("json_basic");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale", "Bob", "IsMale"]);
    let new = write_names_json(&dir, "new.json", &["Alice", "IsFemale", "Carol", "IsFemale"]);

    let result = run_merge(&args(&new, &default)).expect("run");

    assert_eq!(result.default_count, 2);
    assert_eq!(result.new_count, 2);
    assert_eq!(result.removed, vec!["Alice".to_string()]);
    assert_eq!(result.reduced_count, 1);
    assert_eq!(result.reduced.status, WriteStatus::Written);
    assert_eq!(result.merged.status, WriteStatus::Written);
    assert_eq!(read_values(&dir.join("new_R.json")), vec!["Carol", "IsFemale"]);
    assert_eq!(
        read_values(&dir.join("new_M.json")),
        vec!["Alice", "IsFemale", "Bob", "IsMale", "Carol", "IsFemale"]
    );

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn existing_reduced_target_is_preserved_and_merged_still_written() {
    let dir = temp_dir("guard_reduced");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale"]);
    let new = write_names_json(&dir, "new.json", &["Carol", "IsFemale"]);
    let reduced_target = dir.join("new_R.json");
    fs::write(&reduced_target, "do not touch").expect("seed reduced");

    let result = run_merge(&args(&new, &default)).expect("run");

    assert_eq!(result.reduced.status, WriteStatus::SkippedExists);
    assert_eq!(result.merged.status, WriteStatus::Written);
    assert_eq!(fs::read_to_string(&reduced_target).unwrap(), "do not touch");
    assert_eq!(
        read_values(&dir.join("new_M.json")),
        vec!["Alice", "IsFemale", "Carol", "IsFemale"]
    );

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn csv_input_with_only_skipped_rows_yields_empty_values() {
    let dir = temp_dir("csv_skips");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale"]);
    let csv = dir.join("new.csv");
    fs::write(&csv, "#comment,skip\nAl,IsMale\n").expect("write csv");

    let result = run_merge(&args(&csv, &default)).expect("run");

    let conversion = result.conversion.expect("csv conversion");
    assert_eq!(conversion.outcome.status, WriteStatus::Written);
    assert_eq!(conversion.stats.comment_rows, 1);
    assert_eq!(conversion.stats.rejected_rows, 1);
    assert!(read_values(&dir.join("new.json")).is_empty());
    assert!(read_values(&dir.join("new_R.json")).is_empty());
    assert_eq!(
        read_values(&dir.join("new_M.json")),
        vec!["Alice", "IsFemale"]
    );

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn csv_and_converted_json_paths_agree() {
    let dir = temp_dir("csv_roundtrip");
    let default = write_names_json(&dir, "default.json", &["Mara", "IsNB"]);
    let csv = dir.join("new.csv");
    fs::write(&csv, "Zoe,IsFemale\nMara,IsNB\nAdam,IsMale\n").expect("write csv");

    run_merge(&args(&csv, &default)).expect("csv run");
    let reduced_from_csv = fs::read(dir.join("new_R.json")).expect("reduced bytes");
    let merged_from_csv = fs::read(dir.join("new_M.json")).expect("merged bytes");

    fs::remove_file(dir.join("new_R.json")).expect("drop reduced");
    fs::remove_file(dir.join("new_M.json")).expect("drop merged");

    // Second run treats the converted JSON as direct input
    run_merge(&args(&dir.join("new.json"), &default)).expect("json run");

    assert_eq!(fs::read(dir.join("new_R.json")).unwrap(), reduced_from_csv);
    assert_eq!(fs::read(dir.join("new_M.json")).unwrap(), merged_from_csv);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn rerun_after_deleting_outputs_is_byte_identical() {
    let dir = temp_dir("idempotence");
    let default = write_names_json(&dir, "default.json", &["Bob", "IsMale", "Alice", "IsFemale"]);
    let new = write_names_json(&dir, "new.json", &["Carol", "IsFemale", "Bob", "IsMale"]);

    run_merge(&args(&new, &default)).expect("first run");
    let reduced = fs::read(dir.join("new_R.json")).expect("reduced bytes");
    let merged = fs::read(dir.join("new_M.json")).expect("merged bytes");

    fs::remove_file(dir.join("new_R.json")).expect("drop reduced");
    fs::remove_file(dir.join("new_M.json")).expect("drop merged");

    run_merge(&args(&new, &default)).expect("second run");

    assert_eq!(fs::read(dir.join("new_R.json")).unwrap(), reduced);
    assert_eq!(fs::read(dir.join("new_M.json")).unwrap(), merged);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn existing_sibling_json_blocks_conversion_but_run_continues() {
    let dir = temp_dir("csv_sibling_guard");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale"]);
    let stale = write_names_json(&dir, "new.json", &["Stale", "IsMale"]);
    let csv = dir.join("new.csv");
    fs::write(&csv, "Carol,IsFemale\n").expect("write csv");

    let result = run_merge(&args(&csv, &default)).expect("run");

    let conversion = result.conversion.expect("csv conversion");
    assert_eq!(conversion.outcome.status, WriteStatus::SkippedExists);
    // The stale sibling is preserved, but the run still uses the CSV data
    assert_eq!(read_values(&stale), vec!["Stale", "IsMale"]);
    assert_eq!(read_values(&dir.join("new_R.json")), vec!["Carol", "IsFemale"]);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = temp_dir("dry_run");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale"]);
    let new = write_names_json(&dir, "new.json", &["Carol", "IsFemale"]);

    let mut merge_args = args(&new, &default);
    merge_args.dry_run = true;
    let result = run_merge(&merge_args).expect("run");

    assert_eq!(result.reduced.status, WriteStatus::DryRun);
    assert_eq!(result.merged.status, WriteStatus::DryRun);
    assert!(!dir.join("new_R.json").exists());
    assert!(!dir.join("new_M.json").exists());

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn force_overwrites_existing_outputs() {
    let dir = temp_dir("force");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale"]);
    let new = write_names_json(&dir, "new.json", &["Carol", "IsFemale"]);
    fs::write(dir.join("new_R.json"), "stale").expect("seed reduced");

    let mut merge_args = args(&new, &default);
    merge_args.force = true;
    let result = run_merge(&merge_args).expect("run");

    assert_eq!(result.reduced.status, WriteStatus::Written);
    assert_eq!(read_values(&dir.join("new_R.json")), vec!["Carol", "IsFemale"]);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn merged_document_preserves_extra_sections_of_default() {
    let dir = temp_dir("extra_sections");
    let default = dir.join("default.json");
    let body = json!([
        {"strName": "First Names", "aValues": ["Alice", "IsFemale"]},
        {"strName": "Surnames", "aValues": ["Smith", "IsNB"]}
    ]);
    fs::write(&default, serde_json::to_string(&body).unwrap()).expect("write default");
    let new = write_names_json(&dir, "new.json", &["Carol", "IsFemale"]);

    run_merge(&args(&new, &default)).expect("run");

    let merged: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("new_M.json")).unwrap()).unwrap();
    assert_eq!(merged.as_array().unwrap().len(), 2);
    assert_eq!(merged[1]["strName"], "Surnames");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = temp_dir("missing_input");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale"]);

    let result = run_merge(&args(&dir.join("absent.json"), &default));

    let error = result.expect_err("missing file");
    assert!(error.to_string().contains("cannot find input file"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = temp_dir("bad_extension");
    let default = write_names_json(&dir, "default.json", &["Alice", "IsFemale"]);
    let new = dir.join("new.txt");
    fs::write(&new, "Carol,IsFemale\n").expect("write txt");

    let result = run_merge(&args(&new, &default));

    assert!(result.is_err());

    fs::remove_dir_all(&dir).expect("cleanup");
}
