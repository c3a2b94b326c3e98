//! Error types for process monitoring operations
//!
//! Every failure the service can report falls into one of four kinds. The
//! HTTP layer maps each kind to a status code; the message text is what the
//! caller sees.

use thiserror::Error;

/// Errors that can occur while querying or signalling processes
#[derive(Error, Debug)]
pub enum MonitorError {
    /// No running process has the requested identifier
    #[error("process PID not found (pid={pid})")]
    NotFound { pid: u32 },

    /// The service lacks the privilege to act on the process
    #[error("access denied (pid={pid})")]
    PermissionDenied { pid: u32 },

    /// The request itself was malformed
    #[error("{0}")]
    InvalidInput(String),

    /// Enumeration, sampling or signalling failed for a reason unrelated to the target
    #[error("{0}")]
    Internal(String),
}

/// Coarse classification of a [`MonitorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    InvalidInput,
    Internal,
}

impl MonitorError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<tokio::task::JoinError> for MonitorError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Internal(format!("OS query task failed: {}", e))
    }
}

/// Result type alias for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;
