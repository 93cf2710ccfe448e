//! Contract error types for notification settings
//!
//! `RemoteError` is produced by the transport and reaches callers untouched.

use thiserror::Error;

/// Failure reported by the remote transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        /// Backend error code (e.g. `authorization_required`), if provided
        code: Option<String>,
        message: String,
    },

    /// Request did not complete (connect failure, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Build an `Http` error from a status, optional backend code and message
    #[must_use]
    pub fn http(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            code,
            message: message.into(),
        }
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Notification settings service errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationsError {
    /// No default account, or its credentials are missing
    #[error("No authenticated WordPress.com account")]
    Unauthenticated,

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
