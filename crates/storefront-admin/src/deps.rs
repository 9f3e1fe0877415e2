//! Dependency injection for `AdminBackend`.
//!
//! Stores are injected as trait objects so the facade never depends on the
//! HTTP adapter.

use std::sync::Arc;

use storefront_core::{CategoryStorePort, ImageResolver, NavbarStorePort};

/// Dependencies required to construct an `AdminBackend`.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(DefaultCategoryClient::new(&config)?);
/// let deps = AdminDeps::new(client.clone(), client, ImageResolver::new(base_url));
/// let backend = AdminBackend::new(deps);
/// ```
pub struct AdminDeps {
    /// Category collection store.
    pub(crate) categories: Arc<dyn CategoryStorePort>,
    /// Navbar entry store.
    pub(crate) navbar: Arc<dyn NavbarStorePort>,
    /// Resolves stored image paths for thumbnails and previews.
    pub(crate) images: ImageResolver,
}

impl AdminDeps {
    /// Create a new `AdminDeps` with all required dependencies.
    pub fn new(
        categories: Arc<dyn CategoryStorePort>,
        navbar: Arc<dyn NavbarStorePort>,
        images: ImageResolver,
    ) -> Self {
        Self {
            categories,
            navbar,
            images,
        }
    }

    /// Access the image resolver.
    pub const fn images(&self) -> &ImageResolver {
        &self.images
    }
}
