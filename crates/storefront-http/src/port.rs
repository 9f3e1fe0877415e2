//! Port trait implementations for `CategoryClient`.
//!
//! This module implements the core-owned store ports for `CategoryClient`,
//! mapping internal HTTP errors to core port errors.

use async_trait::async_trait;
use storefront_core::{
    Category, CategoryId, CategoryRecord, CategoryStorePort, CategoryUpdate, NavbarEntry,
    NavbarStorePort, NewCategory, StorePortError, StorePortResult,
};

use crate::client::CategoryClient;
use crate::error::HttpError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HttpError` to core `StorePortError`.
fn map_error(err: HttpError) -> StorePortError {
    match err {
        HttpError::ApiRequestFailed {
            status,
            url,
            message,
        } => StorePortError::Remote {
            status,
            message: message.unwrap_or(url),
        },
        HttpError::InvalidResponse { message } => StorePortError::InvalidResponse { message },
        HttpError::Validation(e) => StorePortError::Validation(e),
        HttpError::Network(e) if e.is_builder() => StorePortError::Configuration {
            message: e.to_string(),
        },
        HttpError::Network(e) => StorePortError::Network {
            message: e.to_string(),
        },
        HttpError::InvalidUrl(e) => StorePortError::Configuration {
            message: e.to_string(),
        },
        HttpError::JsonParse(e) => StorePortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

fn log_failure(operation: &'static str, err: &StorePortError) {
    tracing::warn!(operation, error = %err, "catalog request failed");
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> CategoryStorePort for CategoryClient<B> {
    async fn list_categories(&self) -> StorePortResult<Vec<CategoryRecord>> {
        self.fetch_categories().await.map_err(|e| {
            let err = map_error(e);
            log_failure("list_categories", &err);
            err
        })
    }

    async fn create_category(
        &self,
        category: &NewCategory,
    ) -> StorePortResult<Option<Category>> {
        let created = self.post_category(category).await.map_err(|e| {
            let err = map_error(e);
            log_failure("create_category", &err);
            err
        })?;
        match &created {
            Some(c) => tracing::info!(id = %c.id, name = %c.name, "category created"),
            None => tracing::info!(name = %category.name, "category created without a readable record"),
        }
        Ok(created)
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        update: &CategoryUpdate,
    ) -> StorePortResult<Option<Category>> {
        let updated = self.put_category(id, update).await.map_err(|e| {
            let err = map_error(e);
            log_failure("update_category", &err);
            err
        })?;
        tracing::info!(%id, images_replaced = update.replaces_images(), "category updated");
        Ok(updated)
    }

    async fn delete_category(&self, id: &CategoryId) -> StorePortResult<()> {
        self.remove_category(id).await.map_err(|e| {
            let err = map_error(e);
            log_failure("delete_category", &err);
            err
        })?;
        tracing::info!(%id, "category deleted");
        Ok(())
    }
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> NavbarStorePort for CategoryClient<B> {
    async fn create_navbar_entry(&self, entry: &NavbarEntry) -> StorePortResult<()> {
        self.post_navbar_entry(entry).await.map_err(|e| {
            let err = map_error(e);
            log_failure("create_navbar_entry", &err);
            err
        })?;
        tracing::info!(category = %entry.categories, "navbar entry created");
        Ok(())
    }
}
