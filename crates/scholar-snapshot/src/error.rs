//! Error types for the profile snapshot builder.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Rate limited by Google Scholar (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before the next run
        retry_after: Duration,
    },

    /// Profile not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

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
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status behind this error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
            Self::RateLimited { .. } => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
        }
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors from a snapshot run.
#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    /// Fetching the profile page failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] ClientError),

    /// Writing the snapshot file failed
    #[error("Write error ({}): {source}", path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input or configuration
    #[error("Configuration error: {field}: {message}")]
    Config {
        /// Offending setting
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Zero rows on a page that does not look like a profile (strict mode only)
    #[error("No publications found for '{user_id}': {reason}")]
    EmptyProfile {
        /// Profile identifier
        user_id: String,
        /// Why the page was not recognized
        reason: String,
    },
}

impl SnapshotError {
    /// Create a write error for `path`.
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly message for the console.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Fetch(ClientError::RateLimited { retry_after }) => {
                format!(
                    "Google Scholar is rate limiting this client. Wait {:?} before the next run.",
                    retry_after
                )
            }
            Self::Fetch(ClientError::NotFound { .. }) => {
                "Profile not found. Please check the user id is correct.".to_string()
            }
            Self::Config { field, message } => {
                format!("Invalid value for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_status() {
        assert_eq!(ClientError::rate_limited(60).status(), Some(429));
        assert_eq!(ClientError::not_found("user=abc").status(), Some(404));
        assert_eq!(ClientError::server(503, "unavailable").status(), Some(503));
        let err = ClientError::UnexpectedStatus { status: 302, message: String::new() };
        assert_eq!(err.status(), Some(302));
    }

    #[test]
    fn test_client_error_retry_after() {
        let err = ClientError::rate_limited(60);
        assert_eq!(err.retry_after(), Some(Duration::from_secs(60)));

        let err = ClientError::not_found("profile");
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_write_error_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SnapshotError::write("/readonly/publications.json", io);
        let msg = err.to_string();
        assert!(msg.contains("/readonly/publications.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_fetch_error_wraps_client_error() {
        let err: SnapshotError = ClientError::not_found("user=abc").into();
        assert!(matches!(err, SnapshotError::Fetch(ClientError::NotFound { .. })));
        assert!(err.to_string().starts_with("Fetch error"));
    }

    #[test]
    fn test_user_message() {
        let err = SnapshotError::config("user", "cannot be empty");
        assert!(err.to_user_message().contains("user"));
        assert!(err.to_user_message().contains("cannot be empty"));

        let err = SnapshotError::Fetch(ClientError::rate_limited(30));
        assert!(err.to_user_message().contains("30s"));
    }
}
