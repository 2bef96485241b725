//! Error types and handling for didact-core operations.
//!
//! All fallible operations in this crate return [`Result<T, Error>`]. The
//! error type covers the two failure surfaces the crate actually has: talking
//! to the content API over HTTP, and turning its responses into typed
//! documents. Rendering and outline extraction are total and never appear
//! here.
//!
//! Errors carry a coarse recoverability hint so callers can decide between
//! retrying and surfacing a not-found page:
//!
//! ```rust
//! use didact_core::Error;
//!
//! fn describe(err: &Error) -> &'static str {
//!     if err.is_recoverable() {
//!         "temporary, worth retrying"
//!     } else {
//!         "permanent, render an error page"
//!     }
//! }
//! ```

use thiserror::Error;

/// The main error type for didact-core operations.
///
/// `Display` gives a user-facing message; the underlying source error is
/// preserved where one exists so callers can inspect the full chain.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed (config file reads, page output writes).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Covers HTTP requests against the content API. The underlying
    /// `reqwest::Error` is preserved for connection-level detail.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The content API answered with a non-success status other than 404.
    #[error("Unexpected HTTP status {status} from {url}")]
    Http {
        /// Status code returned by the server
        status: u16,
        /// The request URL
        url: String,
    },

    /// A response body could not be deserialized into the expected shape.
    #[error("Deserialize error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Requested document was not found.
    ///
    /// Produced both for HTTP 404 and for an empty `docs` envelope when a
    /// single document was requested by slug. The page layer renders this as
    /// a not-found page rather than an error.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether retrying the operation might succeed.
    ///
    /// Network-level failures (timeouts, connection resets) and server-side
    /// 5xx responses are considered transient; everything else is permanent.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            Self::Deserialize(_) | Self::NotFound(_) | Self::Config(_) => false,
        }
    }

    /// Coarse category label used in log lines and CLI diagnostics.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) | Self::Http { .. } => "network",
            Self::Deserialize(_) => "deserialize",
            Self::NotFound(_) => "not-found",
            Self::Config(_) => "config",
        }
    }
}

/// Result alias used throughout didact-core.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_not_recoverable() {
        let err = Error::NotFound("tutorial 'missing'".into());
        assert!(!err.is_recoverable());
        assert_eq!(err.category(), "not-found");
    }

    #[test]
    fn server_errors_are_recoverable() {
        let err = Error::Http {
            status: 503,
            url: "http://localhost:3000/api/categories".into(),
        };
        assert!(err.is_recoverable());

        let err = Error::Http {
            status: 400,
            url: "http://localhost:3000/api/categories".into(),
        };
        assert!(!err.is_recoverable());
    }
}
