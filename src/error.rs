use thiserror::Error;

/// Main error type for KMS
#[derive(Error, Debug)]
pub enum KmsError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lookup of a graph, document or entity that is not stored
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using KmsError
pub type Result<T> = std::result::Result<T, KmsError>;
