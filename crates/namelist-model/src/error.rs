use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document root is not an array")]
    NotAnArray,
    #[error("document has no sections")]
    EmptyDocument,
    #[error("section 0 has unexpected shape: {0}")]
    SectionShape(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
