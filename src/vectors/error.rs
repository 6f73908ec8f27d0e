use thiserror::Error;

/// Errors raised while loading, building or saving vector tables
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("Vector for '{word}' has dimension {found}, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    #[error("Vector for '{word}' has a non-finite component")]
    NonFinite { word: String },

    #[error("Vector table contains a blank word key")]
    EmptyKey,

    #[error("Vector table I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Vector table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
