//! Category store port trait.

use async_trait::async_trait;

use super::error::StorePortResult;
use crate::domain::{Category, CategoryId, CategoryRecord, CategoryUpdate, NewCategory};

/// Port trait for the category resource.
///
/// The implementation lives in `storefront-http`.
///
/// # Design
///
/// - `list_categories` returns normalized records; malformed documents are
///   reported as [`CategoryRecord::Malformed`], never as an error
/// - Writes validate their payload before any I/O and fail with
///   `StorePortError::Validation` without contacting the store
/// - Writes are never retried by the implementation
#[async_trait]
pub trait CategoryStorePort: Send + Sync {
    /// Fetch the full category collection.
    async fn list_categories(&self) -> StorePortResult<Vec<CategoryRecord>>;

    /// Create a category.
    ///
    /// Returns the stored record, or `None` when the store accepted the write
    /// but its response did not describe the record.
    async fn create_category(&self, category: &NewCategory)
    -> StorePortResult<Option<Category>>;

    /// Replace a category's name and subcategories.
    ///
    /// Stored images are only replaced when `update.images` is non-empty.
    /// `None` has the same meaning as for [`create_category`](Self::create_category).
    async fn update_category(
        &self,
        id: &CategoryId,
        update: &CategoryUpdate,
    ) -> StorePortResult<Option<Category>>;

    /// Delete a category. Deleting an unknown id is a `Remote` error.
    async fn delete_category(&self, id: &CategoryId) -> StorePortResult<()>;
}
