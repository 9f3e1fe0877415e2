//! Internal error types for catalog HTTP operations.
//!
//! These errors are internal to `storefront-http` and are mapped to core
//! port errors at the boundary. Only construction failures surface directly.

use storefront_core::ValidationError;
use thiserror::Error;

/// Result type alias for catalog HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors related to catalog API operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// API request failed with an HTTP error status.
    #[error("catalog API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Message from the response body, when the server sent one
        message: Option<String>,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from catalog API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The payload failed pre-flight validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
