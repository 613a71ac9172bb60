//! Error types for store operations

use thiserror::Error;

/// Error type for relation store operations.
///
/// These are infrastructural failures. Business-rule rejections never come
/// from the store; they are the workflow engine's to produce.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A referenced record is missing
    #[error("not found: {0}")]
    NotFound(String),

    /// An optimistic-concurrency version check failed
    #[error("version conflict: {0}")]
    Conflict(String),

    /// Connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Operation error
    #[error("operation error: {0}")]
    Operation(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Store timeout
    #[error("timeout: {0}")]
    Timeout(String),
}

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Operation(err.to_string())
    }
}
