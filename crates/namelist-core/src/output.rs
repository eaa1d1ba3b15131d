//! Guarded document writes and output path computation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use namelist_model::NameDocument;

use crate::error::Result;

/// Options controlling output writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Overwrite existing targets instead of skipping them.
    pub force: bool,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
}

/// What happened to a single output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    /// Target already exists; write skipped.
    SkippedExists,
    /// Target equals the resolved source file; write skipped.
    SkippedSelf,
    DryRun,
}

#[derive(Debug, Clone)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub status: WriteStatus,
}

impl WriteOutcome {
    pub fn written(&self) -> bool {
        self.status == WriteStatus::Written
    }
}

/// Sibling path with the extension swapped to `.json`.
pub fn sibling_json_path(path: &Path) -> PathBuf {
    path.with_extension("json")
}

/// `<stem>_R.json` next to the resolved new-name file.
pub fn reduced_path(new_json_path: &Path) -> PathBuf {
    suffixed_json_path(new_json_path, "_R")
}

/// `<stem>_M.json` next to the resolved new-name file.
pub fn merged_path(new_json_path: &Path) -> PathBuf {
    suffixed_json_path(new_json_path, "_M")
}

fn suffixed_json_path(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}{suffix}.json"))
}

/// Serialize a document as 2-space-indented UTF-8 JSON (no BOM) and
/// write it to `target`, honoring the overwrite guards.
///
/// The write is skipped with a warning when `target` equals `source`
/// (never overridable) or when `target` already exists (overridable
/// with [`WriteOptions::force`]).
pub fn write_document_guarded(
    document: &NameDocument,
    target: &Path,
    source: &Path,
    options: WriteOptions,
) -> Result<WriteOutcome> {
    if target == source {
        warn!(path = %target.display(), "will not overwrite input file");
        return Ok(WriteOutcome {
            path: target.to_path_buf(),
            status: WriteStatus::SkippedSelf,
        });
    }
    if target.exists() && !options.force {
        warn!(path = %target.display(), "will not overwrite existing file");
        return Ok(WriteOutcome {
            path: target.to_path_buf(),
            status: WriteStatus::SkippedExists,
        });
    }
    if options.dry_run {
        info!(path = %target.display(), "dry-run: would write document");
        return Ok(WriteOutcome {
            path: target.to_path_buf(),
            status: WriteStatus::DryRun,
        });
    }
    let json = serde_json::to_string_pretty(&document.to_value())?;
    fs::write(target, format!("{json}\n"))?;
    info!(path = %target.display(), "wrote document");
    Ok(WriteOutcome {
        path: target.to_path_buf(),
        status: WriteStatus::Written,
    })
}
