//! Gender tags recognized during CSV ingestion.
//!
//! Name documents store gender as a plain string; only the CSV import
//! path validates values against this enumeration. JSON input passes
//! gender strings through untouched.

use std::fmt;
use std::str::FromStr;

/// Recognized gender tag for a name record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    IsMale,
    IsFemale,
    IsNB,
}

impl Gender {
    /// All recognized tags, in canonical order.
    pub const ALL: [Gender; 3] = [Gender::IsMale, Gender::IsFemale, Gender::IsNB];

    /// Returns the tag exactly as it appears in name files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::IsMale => "IsMale",
            Gender::IsFemale => "IsFemale",
            Gender::IsNB => "IsNB",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a gender tag. Matching is exact; only surrounding
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "IsMale" => Ok(Gender::IsMale),
            "IsFemale" => Ok(Gender::IsFemale),
            "IsNB" => Ok(Gender::IsNB),
            other => Err(format!("unrecognized gender tag: {other}")),
        }
    }
}
