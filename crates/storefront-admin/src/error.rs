//! Semantic error types for admin operations.
//!
//! Store failures carry the operation they interrupted so the operator
//! message names what failed. Adapters render them through
//! [`Notice::from`](crate::Notice).

use storefront_core::{StorePortError, ValidationError};
use thiserror::Error;

/// Semantic errors for admin backend operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The draft failed pre-flight checks; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Create or update was rejected or never reached the store.
    #[error("Failed to save category.")]
    Save(#[source] StorePortError),

    /// Delete was rejected or never reached the store.
    #[error("Failed to delete category.")]
    Delete(#[source] StorePortError),

    /// The category list could not be fetched.
    #[error("Failed to fetch categories")]
    Fetch(#[source] StorePortError),

    /// Navbar entry creation failed.
    #[error("Failed to add navbar: {0}")]
    Navbar(#[source] StorePortError),

    /// Entity not found in the loaded list.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Type of entity (e.g., "category").
        entity: &'static str,
        /// Identifier that was not found.
        id: String,
    },

    /// A submit for this draft is still in flight.
    #[error("A submission is already in progress")]
    SubmitInFlight,

    /// The draft was already committed or its surface is closed.
    #[error("This form is closed")]
    EditorClosed,

    /// A subcategory slot index past the end of the list.
    #[error("Subcategory #{} does not exist (the list has {len})", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },
}

impl AdminError {
    /// Wrap a create/update failure, keeping adapter-side validation errors
    /// as validation so the operator sees which field is wrong.
    pub(crate) fn save(err: StorePortError) -> Self {
        match err {
            StorePortError::Validation(e) => Self::Validation(e),
            other => Self::Save(other),
        }
    }

    /// The underlying store error, if the store was involved.
    pub const fn store_error(&self) -> Option<&StorePortError> {
        match self {
            Self::Save(e) | Self::Delete(e) | Self::Fetch(e) | Self::Navbar(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the failure was detected locally before any request.
    pub const fn is_local(&self) -> bool {
        self.store_error().is_none()
    }
}
