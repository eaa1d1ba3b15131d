//! JSON document loading.

use std::fs;
use std::path::Path;

use namelist_model::NameDocument;

use crate::error::Result;

/// Read a name document from a JSON file.
///
/// A leading UTF-8 byte-order mark is stripped before parsing, so
/// BOM-prefixed and plain files are accepted identically.
pub fn read_document(path: &Path) -> Result<NameDocument> {
    let text = fs::read_to_string(path)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(NameDocument::from_json_str(text)?)
}
