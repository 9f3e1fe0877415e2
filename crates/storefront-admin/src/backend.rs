//! `AdminBackend` - the catalog administration facade.
//!
//! Every operator surface is created here so they all share one
//! authoritative category list.

use std::sync::Arc;

use storefront_core::ImageResolver;

use crate::catalog::CategoryCatalog;
use crate::deps::AdminDeps;
use crate::manager::CategoryManager;
use crate::navbar::NavbarComposer;

/// Unified admin facade.
///
/// # Construction
///
/// ```ignore
/// let deps = AdminDeps::new(categories, navbar, images);
/// let backend = AdminBackend::new(deps);
/// let mut manager = backend.category_manager();
/// manager.load().await;
/// ```
pub struct AdminBackend {
    deps: AdminDeps,
    catalog: Arc<CategoryCatalog>,
}

impl AdminBackend {
    /// Create a new admin backend with the provided dependencies.
    pub fn new(deps: AdminDeps) -> Self {
        let catalog = Arc::new(CategoryCatalog::new(Arc::clone(&deps.categories)));
        Self { deps, catalog }
    }

    /// The shared authoritative list.
    pub fn catalog(&self) -> Arc<CategoryCatalog> {
        Arc::clone(&self.catalog)
    }

    pub const fn images(&self) -> &ImageResolver {
        self.deps.images()
    }

    /// Admin table bound to the shared list.
    pub fn category_manager(&self) -> CategoryManager {
        CategoryManager::new(self.catalog(), self.deps.images.clone())
    }

    /// Navbar composer bound to the shared list.
    pub fn navbar_composer(&self) -> NavbarComposer {
        NavbarComposer::new(self.catalog(), Arc::clone(&self.deps.navbar))
    }
}
