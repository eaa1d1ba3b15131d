pub mod document;
pub mod error;
pub mod gender;
pub mod mapping;

pub use document::{NameDocument, Section};
pub use error::{ModelError, Result};
pub use gender::Gender;
pub use mapping::NameMapping;
