//! Storage error types

use thiserror::Error;

/// Result type for backend operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by the document backend's read path
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The named collection does not exist in the backend
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    /// The backend failed to open or advance a cursor
    #[error("backend read failed: {0}")]
    ReadFailed(String),
}
