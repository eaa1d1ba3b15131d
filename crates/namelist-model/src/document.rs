//! Name document structure.
//!
//! A name document is a top-level JSON array of sections. Section 0 is
//! the only section this tool reads or rewrites; later sections are
//! carried as raw values and re-serialized unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};

/// A named group of alternating (name, gender) values.
///
/// Unknown sibling fields are retained so a rewritten document keeps
/// whatever else the producing application stored on the section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "strName")]
    pub label: String,
    /// Flat alternating sequence: `[name1, gender1, name2, gender2, ...]`.
    #[serde(rename = "aValues")]
    pub values: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Section {
    pub fn new(label: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            label: label.into(),
            values,
            extra: Map::new(),
        }
    }
}

/// A parsed name document: the typed first section plus any trailing
/// sections preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct NameDocument {
    pub first: Section,
    pub rest: Vec<Value>,
}

impl NameDocument {
    /// Wrap a single section into a document with no trailing sections.
    pub fn single_section(first: Section) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Build a document from a JSON value. The root must be a non-empty
    /// array whose first element matches the [`Section`] shape.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(mut elements) = value else {
            return Err(ModelError::NotAnArray);
        };
        if elements.is_empty() {
            return Err(ModelError::EmptyDocument);
        }
        let rest = elements.split_off(1);
        let first = elements.pop().expect("array has a first element");
        let first: Section =
            serde_json::from_value(first).map_err(ModelError::SectionShape)?;
        Ok(Self { first, rest })
    }

    /// Serialize back to the top-level array form.
    pub fn to_value(&self) -> Value {
        let mut elements = Vec::with_capacity(1 + self.rest.len());
        elements.push(serde_json::to_value(&self.first).expect("section serializes"));
        elements.extend(self.rest.iter().cloned());
        Value::Array(elements)
    }

    /// A copy of this document with section 0's value list replaced.
    /// Label, extra fields, and trailing sections are kept.
    pub fn with_first_values(&self, values: Vec<String>) -> Self {
        let mut copy = self.clone();
        copy.first.values = values;
        copy
    }
}
