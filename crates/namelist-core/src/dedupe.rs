//! Removal of new names already present in the default list.

use tracing::info;

use namelist_model::NameMapping;

/// Remove every entry of `new_names` whose name also appears in
/// `default_names`. Matching is exact string equality; no case or
/// whitespace normalization. The default mapping is never mutated.
///
/// Returns the removed names in default-mapping iteration order.
pub fn remove_default_collisions(
    new_names: &mut NameMapping,
    default_names: &NameMapping,
) -> Vec<String> {
    let mut removed = Vec::new();
    for name in default_names.names() {
        if new_names.remove(name).is_some() {
            info!(name = %name, "removed duplicate name");
            removed.push(name.to_string());
        }
    }
    removed
}
