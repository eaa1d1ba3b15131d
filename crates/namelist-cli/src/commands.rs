use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use namelist_core::{
    WriteOptions, build_merged_document, build_reduced_document, merged_path, reduced_path,
    remove_default_collisions, sibling_json_path, write_document_guarded,
};
use namelist_ingest::{CsvOptions, read_csv_names, read_document};
use namelist_model::{NameDocument, NameMapping};

use crate::cli::MergeArgs;
use crate::types::{ConversionReport, MergeResult};

pub fn run_merge(args: &MergeArgs) -> Result<MergeResult> {
    let new_path = resolve_input(&args.new_name_file)?;
    let default_path = resolve_input(&args.default_name_file)?;
    info!(path = %new_path.display(), "new name file");
    info!(path = %default_path.display(), "default name file");

    let write_options = WriteOptions {
        force: args.force,
        dry_run: args.dry_run,
    };

    // =========================================================================
    // Stage 1: Load the default list (always JSON)
    // =========================================================================
    let default_document = read_document(&default_path)
        .with_context(|| format!("load default names: {}", default_path.display()))?;
    let default_names = NameMapping::from_flat_values(&default_document.first.values);
    info!(count = default_names.len(), "default name list loaded");

    // =========================================================================
    // Stage 2: Load the new list (JSON directly, or CSV converted first)
    // =========================================================================
    let load_span = info_span!("load_new", path = %new_path.display());
    let (new_document, resolved_new_path, conversion) = load_span.in_scope(|| {
        load_new_names(&new_path, write_options)
            .with_context(|| format!("load new names: {}", new_path.display()))
    })?;
    let mut new_names = NameMapping::from_flat_values(&new_document.first.values);
    info!(count = new_names.len(), "new name list loaded");

    // =========================================================================
    // Stage 3: Dedupe against the default list
    // =========================================================================
    let new_count = new_names.len();
    let removed = remove_default_collisions(&mut new_names, &default_names);

    // =========================================================================
    // Stage 4: Build and write reduced + merged documents
    // =========================================================================
    let reduced_document = build_reduced_document(&new_document, &new_names);
    let merged_document = build_merged_document(&default_document, &new_names);

    let reduced = write_document_guarded(
        &reduced_document,
        &reduced_path(&resolved_new_path),
        &resolved_new_path,
        write_options,
    )
    .context("write reduced name list")?;
    let merged = write_document_guarded(
        &merged_document,
        &merged_path(&resolved_new_path),
        &resolved_new_path,
        write_options,
    )
    .context("write merged name list")?;

    Ok(MergeResult {
        new_file: resolved_new_path,
        default_file: default_path,
        default_count: default_names.len(),
        new_count,
        removed,
        reduced_count: new_names.len(),
        conversion,
        reduced,
        merged,
    })
}

fn resolve_input(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        bail!("cannot find input file: {}", path.display());
    }
    path.canonicalize()
        .with_context(|| format!("resolve path: {}", path.display()))
}

/// Load the new-name document by extension.
///
/// CSV input is converted to a single-section document and persisted to
/// the sibling `.json` path (guarded); the sibling path becomes the
/// resolved new-name path for downstream output naming regardless of
/// whether the conversion write happened.
fn load_new_names(
    new_path: &Path,
    write_options: WriteOptions,
) -> Result<(NameDocument, PathBuf, Option<ConversionReport>)> {
    match new_path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let document = read_document(new_path)?;
            Ok((document, new_path.to_path_buf(), None))
        }
        Some("csv") => {
            let import = read_csv_names(new_path, &CsvOptions::default())?;
            info!(
                accepted = import.stats.accepted,
                comment_rows = import.stats.comment_rows,
                short_rows = import.stats.short_rows,
                rejected_rows = import.stats.rejected_rows,
                "csv name list imported"
            );
            let json_path = sibling_json_path(new_path);
            let outcome =
                write_document_guarded(&import.document, &json_path, new_path, write_options)
                    .context("write converted name list")?;
            let conversion = ConversionReport {
                outcome,
                stats: import.stats,
            };
            Ok((import.document, json_path, Some(conversion)))
        }
        _ => bail!(
            "unsupported new-name file extension (expected .json or .csv): {}",
            new_path.display()
        ),
    }
}
