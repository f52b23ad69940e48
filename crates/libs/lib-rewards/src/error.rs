//! # Client Error Types
//!
//! Every fallible operation in this crate returns [`ClientError`].
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a response (connection refused, DNS, timeout)
//! - **Status**: the backend answered with a non-2xx status
//! - **Decode**: a 2xx body did not match the expected shape
//! - **Config**: the backend base URL could not be determined
//!
//! ```rust
//! use lib_rewards::ClientError;
//!
//! let err = ClientError::Status { status: 401, message: "Invalid credentials".to_string() };
//! assert_eq!(err.to_string(), "HTTP 401: Invalid credentials");
//! assert_eq!(err.status(), Some(401));
//! ```

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure before any HTTP status was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status. `message` is the backend's `error` field when
    /// the body carries one, otherwise the raw body or the status reason.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status code, when the failure came from a backend response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
