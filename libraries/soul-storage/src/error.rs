/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Store name cannot be used as a file name
    #[error("Invalid store name: {0:?}")]
    InvalidName(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Background writer is gone
    #[error("Preferences writer for {0:?} has stopped")]
    WriterClosed(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<StorageError> for soul_core::SoulError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(io) => soul_core::SoulError::Io(io),
            other => soul_core::SoulError::Other(other.to_string()),
        }
    }
}
