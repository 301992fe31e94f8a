/// Core error types for Soul Session
use thiserror::Error;

/// Result type alias using `SoulError`
pub type Result<T> = std::result::Result<T, SoulError>;

/// Core error type for Soul Session
///
/// Returned by collaborator implementations (transport, notification host,
/// platform). The session layer decides which of these are fatal.
#[derive(Error, Debug)]
pub enum SoulError {
    /// Session transport errors (session could not be published, etc.)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Notification/status channel errors
    #[error("Notification error: {0}")]
    Notification(String),

    /// Host platform errors
    #[error("Platform error: {0}")]
    Platform(String),

    /// Permission denied
    #[error("Permission denied")]
    PermissionDenied,

    /// Permission denied with context
    #[error("Permission denied: {0}")]
    PermissionDeniedWithContext(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SoulError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a notification error
    pub fn notification(msg: impl Into<String>) -> Self {
        Self::Notification(msg.into())
    }

    /// Create a platform error
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDeniedWithContext(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means the platform refused for lack of permission
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied | Self::PermissionDeniedWithContext(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_variants_are_detected() {
        assert!(SoulError::PermissionDenied.is_permission_denied());
        assert!(SoulError::permission_denied("post notifications").is_permission_denied());
        assert!(!SoulError::notification("channel missing").is_permission_denied());
    }

    #[test]
    fn messages_carry_context() {
        let err = SoulError::transport("session already published");
        assert_eq!(err.to_string(), "Transport error: session already published");
    }
}
