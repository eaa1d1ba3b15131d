//! Output document construction.
//!
//! Both builders take the loaded documents and the deduplicated mapping
//! as immutable inputs and return fresh documents; nothing mutates the
//! loaded structures in place.

use namelist_model::{NameDocument, NameMapping};

/// The reduced document: the new-name document with section 0's values
/// replaced by the deduplicated pairs, in mapping iteration order.
pub fn build_reduced_document(
    new_document: &NameDocument,
    reduced_names: &NameMapping,
) -> NameDocument {
    new_document.with_first_values(reduced_names.to_flat_values())
}

/// The merged document: the default document with the deduplicated
/// pairs appended after its original section 0 entries.
pub fn build_merged_document(
    default_document: &NameDocument,
    reduced_names: &NameMapping,
) -> NameDocument {
    let mut values = default_document.first.values.clone();
    values.extend(reduced_names.to_flat_values());
    default_document.with_first_values(values)
}
