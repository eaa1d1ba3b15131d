pub mod build;
pub mod dedupe;
pub mod error;
pub mod output;

pub use build::{build_merged_document, build_reduced_document};
pub use dedupe::remove_default_collisions;
pub use error::{CoreError, Result};
pub use output::{
    WriteOptions, WriteOutcome, WriteStatus, merged_path, reduced_path, sibling_json_path,
    write_document_guarded,
};
