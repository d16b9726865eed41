//! Error types for the ADS metrics aggregator.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::{Path, PathBuf};

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token cannot be sent as an HTTP header value.
    #[error("Invalid API token (not a valid header value): {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// The configured API URL could not be parsed.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Token rejected by ADS (401/403 response)
    #[error("Unauthorized ({status}): {message}")]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create an unauthorized error.
    #[must_use]
    pub fn unauthorized(status: u16, message: impl Into<String>) -> Self {
        Self::Unauthorized {
            status,
            message: message.into(),
        }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by this error, if the service answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::BadRequest { .. } => Some(400),
            _ => None,
        }
    }
}

/// Errors from constructing an aggregator or collecting metrics.
#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    /// A constructor input has the wrong type.
    #[error("Invalid argument: the {role} `{value}` is not a {expected}")]
    InvalidArgument {
        /// What the value was supposed to be (e.g. "author name")
        role: &'static str,
        /// The offending value, rendered as JSON
        value: String,
        /// The expected type
        expected: &'static str,
    },

    /// The ADS development key file does not exist.
    #[error("The ADS development key file `{}` does not exist", path.display())]
    CredentialNotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// The key file exists but could not be read.
    #[error("Failed to read ADS development key file `{}`: {source}", path.display())]
    CredentialUnreadable {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The key file holds a token that cannot be sent in a header
    /// (e.g. a stray `\r` from CRLF line endings).
    #[error("ADS development key in `{}` is not a valid token: {source}", path.display())]
    InvalidCredential {
        /// Path the token was read from
        path: PathBuf,
        /// Header validation error
        source: reqwest::header::InvalidHeaderValue,
    },

    /// Error from the ADS service or HTTP layer, passed through untouched.
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

impl MetricsError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(
        role: &'static str,
        value: &serde_json::Value,
        expected: &'static str,
    ) -> Self {
        Self::InvalidArgument {
            role,
            value: value.to_string(),
            expected,
        }
    }

    /// Create a missing credential error.
    #[must_use]
    pub fn credential_not_found(path: impl AsRef<Path>) -> Self {
        Self::CredentialNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an unreadable credential error.
    #[must_use]
    pub fn credential_unreadable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::CredentialUnreadable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid credential error.
    #[must_use]
    pub fn invalid_credential(
        path: impl AsRef<Path>,
        source: reqwest::header::InvalidHeaderValue,
    ) -> Self {
        Self::InvalidCredential {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true if this error came from the remote service.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for aggregator operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
