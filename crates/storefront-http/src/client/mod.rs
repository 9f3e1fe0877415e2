//! Catalog client for the category and navbar resources.

mod categories;
mod navbar;

use crate::config::ClientConfig;
use crate::error::HttpResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::EndpointConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCategoryClient = CategoryClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the storefront catalog API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultCategoryClient` for production code.
pub struct CategoryClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: EndpointConfig,
}

impl DefaultCategoryClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL does not parse or the TLS backend cannot be
    /// initialized.
    pub fn new(config: &ClientConfig) -> HttpResult<Self> {
        let config = EndpointConfig::from_client_config(config)?;
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> CategoryClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: EndpointConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
