//! Error Types
//!
//! Errors for the list core and the persistent store.

/// Result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// List-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    InvalidInput(String),
    /// The largest id is already `u32::MAX`
    IdsExhausted,
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ListError::IdsExhausted => write!(f, "No ids left to assign"),
        }
    }
}

impl std::error::Error for ListError {}

/// Persistent store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No `window.localStorage` (non-browser host, privacy mode, ...)
    Unavailable(String),
    Read(String),
    Write(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Read failed: {}", msg),
            StorageError::Write(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
