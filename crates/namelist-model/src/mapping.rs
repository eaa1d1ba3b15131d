//! Insertion-ordered name → gender mapping.

use indexmap::IndexMap;

/// Name → gender mapping derived from a section's flat value list.
///
/// Iteration follows insertion order. Re-inserting an existing name
/// replaces its gender but keeps the original position, so duplicate
/// names resolve last-write-wins without reordering the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameMapping {
    entries: IndexMap<String, String>,
}

impl NameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a flat alternating `[name, gender, ...]` sequence into a
    /// mapping, consuming it two elements at a time. A trailing
    /// unpaired element is dropped. No validation is performed here.
    pub fn from_flat_values(values: &[String]) -> Self {
        let mut entries = IndexMap::with_capacity(values.len() / 2);
        for pair in values.chunks_exact(2) {
            entries.insert(pair[0].clone(), pair[1].clone());
        }
        Self { entries }
    }

    /// Re-flatten to `[name, gender, ...]` in iteration order.
    pub fn to_flat_values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(self.entries.len() * 2);
        for (name, gender) in &self.entries {
            values.push(name.clone());
            values.push(gender.clone());
        }
        values
    }

    pub fn insert(&mut self, name: impl Into<String>, gender: impl Into<String>) {
        self.entries.insert(name.into(), gender.into());
    }

    /// Remove a name, preserving the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, gender)| (name.as_str(), gender.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for NameMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
