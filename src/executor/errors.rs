//! Executor error types
//!
//! Error codes:
//! - TETRA_STORE_MISMATCH (ERROR)
//! - TETRA_SCAN_FAILED (ERROR)

use std::fmt;

use crate::storage::StorageError;

/// Severity levels for executor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query fails, store stays healthy
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Executor-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// The store handle is not a document-backed quad store
    TetraStoreMismatch,
    /// The backend failed while opening or advancing a cursor
    TetraScanFailed,
}

impl ExecutorErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::TetraStoreMismatch => "TETRA_STORE_MISMATCH",
            ExecutorErrorCode::TetraScanFailed => "TETRA_SCAN_FAILED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorError {
    code: ExecutorErrorCode,
    message: String,
}

impl ExecutorError {
    /// Create a store-mismatch error: the shape was planned for a
    /// document-backed store and got something else
    pub fn store_mismatch() -> Self {
        Self {
            code: ExecutorErrorCode::TetraStoreMismatch,
            message: "query shape requires a document-backed quad store".into(),
        }
    }

    /// Create a scan-failed error from a backend failure
    pub fn scan_failed(err: StorageError) -> Self {
        Self {
            code: ExecutorErrorCode::TetraScanFailed,
            message: err.to_string(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ExecutorErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ExecutorError {}

impl From<StorageError> for ExecutorError {
    fn from(err: StorageError) -> Self {
        Self::scan_failed(err)
    }
}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;
