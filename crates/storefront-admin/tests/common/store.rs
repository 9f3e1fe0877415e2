//! In-memory category and navbar store.
//!
//! Behaves like the REST backend: ids are assigned on create, uploaded files
//! become `uploads/<name>` references, an update without files keeps the
//! stored images, and deleting an unknown id answers 404. Raw documents can
//! be seeded to stand in for records another client wrote with a broken
//! shape.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use storefront_core::{
    Category, CategoryId, CategoryRecord, CategoryStorePort, CategoryUpdate, ImageFile, ImageRef,
    NavbarEntry, NavbarStorePort, NewCategory, StorePortError, StorePortResult,
};
use tokio::sync::{Mutex, Notify};

#[derive(Default)]
struct Inner {
    next_id: u32,
    categories: Vec<Category>,
    raw: Vec<Value>,
    navbar: Vec<NavbarEntry>,
    navbar_in_flight: usize,
    navbar_peak: usize,
    parked_list: Option<Arc<Notify>>,
    updates: Vec<CategoryUpdate>,
    list_calls: usize,
    offline: bool,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    gate: Option<Arc<Notify>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A store whose creates, updates and navbar posts wait for the returned
    /// notify.
    pub fn gated() -> (Arc<Self>, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let store = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        };
        (Arc::new(store), gate)
    }

    /// Every subsequent call fails as if the server were unreachable.
    pub async fn set_offline(&self, offline: bool) {
        self.inner.lock().await.offline = offline;
    }

    /// Seed a stored document as-is; it is listed after the categories.
    pub async fn insert_raw(&self, document: Value) {
        self.inner.lock().await.raw.push(document);
    }

    /// The next list call reads the store, then waits for the returned
    /// notify before answering with what it read.
    pub async fn park_next_list(&self) -> Arc<Notify> {
        let release = Arc::new(Notify::new());
        self.inner.lock().await.parked_list = Some(Arc::clone(&release));
        release
    }

    /// Most navbar posts ever in flight at once.
    pub async fn navbar_peak(&self) -> usize {
        self.inner.lock().await.navbar_peak
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.inner.lock().await.categories.clone()
    }

    pub async fn navbar_entries(&self) -> Vec<NavbarEntry> {
        self.inner.lock().await.navbar.clone()
    }

    pub async fn updates(&self) -> Vec<CategoryUpdate> {
        self.inner.lock().await.updates.clone()
    }

    pub async fn list_calls(&self) -> usize {
        self.inner.lock().await.list_calls
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    fn check_online(inner: &Inner) -> StorePortResult<()> {
        if inner.offline {
            return Err(StorePortError::Network {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    fn uploaded(files: &[ImageFile]) -> Vec<ImageRef> {
        files
            .iter()
            .map(|f| ImageRef::from(format!("uploads/{}", f.file_name())))
            .collect()
    }

    fn not_found() -> StorePortError {
        StorePortError::Remote {
            status: 404,
            message: "Category not found".to_string(),
        }
    }
}

#[async_trait]
impl CategoryStorePort for MemoryStore {
    async fn list_categories(&self) -> StorePortResult<Vec<CategoryRecord>> {
        let (records, parked) = {
            let mut inner = self.inner.lock().await;
            inner.list_calls += 1;
            Self::check_online(&inner)?;
            let records: Vec<_> = inner
                .categories
                .iter()
                .cloned()
                .map(CategoryRecord::from)
                .chain(inner.raw.iter().cloned().map(CategoryRecord::from_json))
                .collect();
            (records, inner.parked_list.take())
        };
        if let Some(release) = parked {
            release.notified().await;
        }
        Ok(records)
    }

    async fn create_category(
        &self,
        category: &NewCategory,
    ) -> StorePortResult<Option<Category>> {
        self.wait_for_gate().await;
        let mut inner = self.inner.lock().await;
        Self::check_online(&inner)?;
        category.validate()?;
        inner.next_id += 1;
        let created = Category {
            id: CategoryId::new(format!("cat-{}", inner.next_id)),
            name: category.name.clone(),
            subcategories: category.subcategories.clone(),
            images: Self::uploaded(&category.images),
        };
        inner.categories.push(created.clone());
        Ok(Some(created))
    }

    async fn update_category(
        &self,
        id: &CategoryId,
        update: &CategoryUpdate,
    ) -> StorePortResult<Option<Category>> {
        self.wait_for_gate().await;
        let mut inner = self.inner.lock().await;
        Self::check_online(&inner)?;
        update.validate()?;
        inner.updates.push(update.clone());
        let stored = inner
            .categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(Self::not_found)?;
        stored.name.clone_from(&update.name);
        stored.subcategories.clone_from(&update.subcategories);
        if update.replaces_images() {
            stored.images = Self::uploaded(&update.images);
        }
        Ok(Some(stored.clone()))
    }

    async fn delete_category(&self, id: &CategoryId) -> StorePortResult<()> {
        let mut inner = self.inner.lock().await;
        Self::check_online(&inner)?;
        let before = inner.categories.len();
        inner.categories.retain(|c| &c.id != id);
        if inner.categories.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

#[async_trait]
impl NavbarStorePort for MemoryStore {
    async fn create_navbar_entry(&self, entry: &NavbarEntry) -> StorePortResult<()> {
        {
            let mut inner = self.inner.lock().await;
            inner.navbar_in_flight += 1;
            inner.navbar_peak = inner.navbar_peak.max(inner.navbar_in_flight);
        }
        self.wait_for_gate().await;
        let mut inner = self.inner.lock().await;
        inner.navbar_in_flight -= 1;
        Self::check_online(&inner)?;
        inner.navbar.push(entry.clone());
        Ok(())
    }
}
