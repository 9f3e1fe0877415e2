//! The authoritative category list.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use storefront_core::{Category, CategoryId, CategoryRecord, CategoryStorePort, filter_records};
use tokio::sync::RwLock;

use crate::error::AdminError;

/// A fetched list tagged with the refresh that requested it.
#[derive(Default)]
struct Listing {
    generation: u64,
    records: Arc<Vec<CategoryRecord>>,
}

/// Server-confirmed category collection shared by every admin surface.
///
/// The list is only ever replaced wholesale by [`refresh`](Self::refresh);
/// nothing patches it locally after a mutation.
pub struct CategoryCatalog {
    store: Arc<dyn CategoryStorePort>,
    issued: AtomicU64,
    listing: RwLock<Listing>,
}

impl CategoryCatalog {
    pub fn new(store: Arc<dyn CategoryStorePort>) -> Self {
        Self {
            store,
            issued: AtomicU64::new(0),
            listing: RwLock::new(Listing::default()),
        }
    }

    /// Refetch the full list and replace the local copy.
    ///
    /// Overlapping refreshes are ordered by when they started: a fetch that
    /// finishes after a later-started one has been stored is discarded.
    /// On failure the previous list stays in place. Returns the list held
    /// once this refresh is done.
    pub async fn refresh(&self) -> Result<Arc<Vec<CategoryRecord>>, AdminError> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        match self.store.list_categories().await {
            Ok(records) => {
                let mut listing = self.listing.write().await;
                if generation > listing.generation {
                    *listing = Listing {
                        generation,
                        records: Arc::new(records),
                    };
                    tracing::debug!(count = listing.records.len(), "category list refreshed");
                } else {
                    tracing::debug!(generation, "discarding superseded category list");
                }
                Ok(Arc::clone(&listing.records))
            }
            Err(e) => {
                tracing::warn!(error = %e, "keeping stale category list");
                Err(AdminError::Fetch(e))
            }
        }
    }

    /// The most recently fetched list.
    pub async fn snapshot(&self) -> Arc<Vec<CategoryRecord>> {
        Arc::clone(&self.listing.read().await.records)
    }

    /// Look up a well-formed category by id.
    pub async fn find(&self, id: &CategoryId) -> Option<Category> {
        self.listing
            .read()
            .await
            .records
            .iter()
            .filter_map(CategoryRecord::as_category)
            .find(|c| &c.id == id)
            .cloned()
    }

    /// Look up a well-formed category by exact name.
    pub async fn find_by_name(&self, name: &str) -> Option<Category> {
        self.listing
            .read()
            .await
            .records
            .iter()
            .filter_map(CategoryRecord::as_category)
            .find(|c| c.name == name)
            .cloned()
    }

    /// Records whose name contains `term`, case-insensitively.
    pub async fn search(&self, term: &str) -> Vec<CategoryRecord> {
        let records = self.snapshot().await;
        filter_records(&records, term).into_iter().cloned().collect()
    }

    pub const fn store(&self) -> &Arc<dyn CategoryStorePort> {
        &self.store
    }
}
