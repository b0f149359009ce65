//! Error types for local storage

use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors from the local key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O error reading or writing the store file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Persisted content was not valid JSON
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for aria_core::CoreError {
    fn from(e: StorageError) -> Self {
        aria_core::CoreError::Storage(e.to_string())
    }
}
