pub mod csv;
pub mod error;
pub mod json;

pub use csv::{CsvImport, CsvImportStats, CsvOptions, read_csv_names};
pub use error::{IngestError, Result};
pub use json::read_document;
