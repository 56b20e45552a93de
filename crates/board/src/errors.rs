//! Cross-cutting error type for the board_works domain.
//!
//! Every remote operation fails with a [`BoardError`]. No variant is ever
//! recovered locally, downgraded to a warning, or retried; all four are fatal
//! to the calling operation and propagate to the caller unchanged. The
//! infrastructure crate constructs these from its transport-level failures;
//! this crate never sees an HTTP type.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Operation errors
// ---------------------------------------------------------------------------

/// Errors produced by remote board and repository operations.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum BoardError {
    /// The HTTP round trip failed, or the service answered with a non-success
    /// status.
    ///
    /// Produced by: the request executor, carrying whatever the underlying
    /// HTTP client reported. Never retried.
    #[error("Transport failure: {message}")]
    Transport {
        /// The HTTP client's report of what went wrong.
        message: String,
    },

    /// The service answered 2xx but the response carried a non-empty
    /// `errors` list alongside (or instead of) data.
    ///
    /// Produced by: the request executor. The list is carried verbatim so
    /// callers can inspect the service's own error objects.
    #[error("GraphQL error response: {}", format_api_errors(.errors))]
    Api {
        /// The `errors` list exactly as the service returned it.
        errors: Vec<Value>,
    },

    /// A successful response did not have the expected shape: a key path was
    /// absent or a value had the wrong type.
    ///
    /// Produced by: the typed decode step. Also covers the service returning
    /// `null` for an entity the caller has no permission to see or that does
    /// not exist.
    #[error("Unexpected response shape: {message}")]
    Shape {
        /// Description of the decode failure, including the offending path.
        message: String,
    },

    /// The client configuration is invalid.
    ///
    /// Produced at construction time; no network call is ever attempted with
    /// an invalid configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl BoardError {
    /// Convenience constructor for [`BoardError::Shape`].
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`BoardError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Renders the first service error message for `Display`; the full list stays
/// available on the variant.
fn format_api_errors(errors: &[Value]) -> String {
    let first = errors
        .first()
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("(no message)");
    if errors.len() > 1 {
        format!("{first} (and {} more)", errors.len() - 1)
    } else {
        first.to_owned()
    }
}
