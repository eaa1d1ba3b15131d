use std::path::PathBuf;

use namelist_core::WriteOutcome;
use namelist_ingest::CsvImportStats;

/// Result of a full merge run, consumed by the summary printer.
#[derive(Debug)]
pub struct MergeResult {
    /// Resolved new-name file (the converted `.json` path for CSV input).
    pub new_file: PathBuf,
    pub default_file: PathBuf,
    pub default_count: usize,
    /// New entries before deduplication.
    pub new_count: usize,
    /// Names removed because they collide with the default list.
    pub removed: Vec<String>,
    pub reduced_count: usize,
    /// CSV conversion report, when the new-name file was CSV.
    pub conversion: Option<ConversionReport>,
    pub reduced: WriteOutcome,
    pub merged: WriteOutcome,
}

#[derive(Debug)]
pub struct ConversionReport {
    pub outcome: WriteOutcome,
    pub stats: CsvImportStats,
}
