//! Error types for store port operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors from category and navbar store operations.
///
/// These are domain-level errors. Implementation-specific errors (HTTP,
/// JSON) are mapped to these by the adapter.
#[derive(Debug, Error)]
pub enum StorePortError {
    /// The payload failed pre-flight checks; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store could not be reached.
    #[error("Network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The store answered with a non-success status.
    #[error("Store rejected the request with status {status}: {message}")]
    Remote {
        /// HTTP-like status code
        status: u16,
        /// Message reported by the store, or the request that failed
        message: String,
    },

    /// The store answered with something that is not a category.
    #[error("Invalid store response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter is misconfigured (bad base URL, unusable MIME type).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl StorePortError {
    /// Whether the request never produced a store answer.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Whether the store reported that the target does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { status: 404, .. })
    }
}

/// Result type alias for store port operations.
pub type StorePortResult<T> = Result<T, StorePortError>;
