//! Error types for session coordination

use crate::coordinator::Lifecycle;
use soul_core::SoulError;
use soul_storage::StorageError;
use thiserror::Error;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Operation not allowed in the current lifecycle state
    #[error("Cannot {operation} while {from}")]
    InvalidTransition {
        /// State the coordinator was in
        from: Lifecycle,
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Collaborator error
    #[error(transparent)]
    Core(#[from] SoulError),

    /// Persistence error
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
