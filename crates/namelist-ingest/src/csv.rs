//! CSV name-list import.
//!
//! CSV input carries one record per row: name, gender, optional trailing
//! columns ignored. A `#` in the first cell marks a comment row. Rows
//! are validated here; the JSON path performs no validation at all.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use namelist_model::{Gender, NameDocument, Section};

use crate::error::Result;

/// Options for CSV import.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Minimum accepted name length, in characters.
    pub min_name_length: usize,
    /// Label given to the section wrapping the imported names.
    pub section_label: String,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            min_name_length: 3,
            section_label: "First Names".to_string(),
        }
    }
}

/// Result of a CSV import: the converted single-section document plus
/// row-level counters for reporting.
#[derive(Debug, Clone)]
pub struct CsvImport {
    pub document: NameDocument,
    pub stats: CsvImportStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvImportStats {
    /// Distinct names accepted (after last-write-wins).
    pub accepted: usize,
    pub comment_rows: usize,
    pub short_rows: usize,
    pub rejected_rows: usize,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read and validate a CSV name list.
///
/// Accepted entries collect last-write-wins by name, then re-flatten in
/// sorted-by-name order into a document labeled per
/// [`CsvOptions::section_label`].
pub fn read_csv_names(path: &Path, options: &CsvOptions) -> Result<CsvImport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut names: BTreeMap<String, String> = BTreeMap::new();
    let mut stats = CsvImportStats::default();
    for record in reader.records() {
        let record = record?;
        let first = normalize_cell(record.get(0).unwrap_or(""));
        if first.starts_with('#') {
            info!(cell = %first, "skipping commented row");
            stats.comment_rows += 1;
            continue;
        }
        if record.len() < 2 {
            info!(columns = record.len(), "skipping row: fewer than 2 columns");
            stats.short_rows += 1;
            continue;
        }
        let name = first;
        let gender = normalize_cell(record.get(1).unwrap_or(""));
        if name.chars().count() >= options.min_name_length && gender.parse::<Gender>().is_ok() {
            names.insert(name, gender);
        } else {
            info!(
                name = %name,
                gender = %gender,
                "skipping row: name too short or unrecognized gender"
            );
            stats.rejected_rows += 1;
        }
    }
    stats.accepted = names.len();

    let mut values = Vec::with_capacity(names.len() * 2);
    for (name, gender) in &names {
        values.push(name.clone());
        values.push(gender.clone());
    }
    let document =
        NameDocument::single_section(Section::new(options.section_label.as_str(), values));
    Ok(CsvImport { document, stats })
}
