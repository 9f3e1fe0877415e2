//! Category manager: the admin table with search, delete and editor entry
//! points.

use std::sync::Arc;

use serde::Serialize;
use storefront_core::{Category, CategoryId, CategoryRecord, ImageResolver};

use crate::catalog::CategoryCatalog;
use crate::editor::CategoryEditor;
use crate::error::AdminError;
use crate::notice::Notice;

const DELETED: &str = "Category deleted successfully!";
const NO_CATEGORY: &str = "No Category";
const NO_SUBCATEGORIES: &str = "No Subcategories";

/// One row of the admin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    /// `None` only for records the store returned without an id.
    pub id: Option<CategoryId>,
    pub thumbnail_url: String,
    pub display_name: String,
    pub subcategories: String,
}

impl CategoryRow {
    fn from_record(record: &CategoryRecord, images: &ImageResolver) -> Self {
        let subcategories = match record.subcategories() {
            [] => NO_SUBCATEGORIES.to_string(),
            list => list.join(", "),
        };
        Self {
            id: record.id().cloned(),
            thumbnail_url: images.thumbnail(record.images()),
            display_name: record.name().unwrap_or(NO_CATEGORY).to_string(),
            subcategories,
        }
    }
}

/// Admin table over the authoritative list.
pub struct CategoryManager {
    catalog: Arc<CategoryCatalog>,
    images: ImageResolver,
    search: String,
    notice: Option<Notice>,
}

impl CategoryManager {
    pub fn new(catalog: Arc<CategoryCatalog>, images: ImageResolver) -> Self {
        Self {
            catalog,
            images,
            search: String::new(),
            notice: None,
        }
    }

    /// Fetch the list. A failure keeps the stale list and raises a notice.
    pub async fn load(&mut self) -> Option<Notice> {
        match self.catalog.refresh().await {
            Ok(_) => None,
            Err(e) => Some(self.raise(&e)),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Records matching the current search term.
    pub async fn records(&self) -> Vec<CategoryRecord> {
        self.catalog.search(&self.search).await
    }

    /// Table rows for the records matching the current search term.
    pub async fn rows(&self) -> Vec<CategoryRow> {
        self.records()
            .await
            .iter()
            .map(|record| CategoryRow::from_record(record, &self.images))
            .collect()
    }

    /// Delete a category, then relist.
    ///
    /// The local list is untouched unless the store confirms the delete.
    pub async fn delete(&mut self, id: &CategoryId) -> Notice {
        if let Err(e) = self.catalog.store().delete_category(id).await {
            tracing::warn!(%id, error = %e, "category delete failed");
            return self.raise(&AdminError::Delete(e));
        }
        if let Err(e) = self.catalog.refresh().await {
            tracing::debug!(%id, error = %e, "category deleted, list left stale");
        }
        let notice = Notice::success(DELETED);
        self.notice = Some(notice.clone());
        notice
    }

    /// Open an editor for a new category.
    pub fn open_create(&self) -> CategoryEditor {
        CategoryEditor::create(Arc::clone(&self.catalog), self.images.clone())
    }

    /// Open an editor seeded from a loaded category.
    pub async fn open_update(&self, id: &CategoryId) -> Result<CategoryEditor, AdminError> {
        let category = self
            .catalog
            .find(id)
            .await
            .ok_or_else(|| AdminError::NotFound {
                entity: "category",
                id: id.to_string(),
            })?;
        Ok(CategoryEditor::update(
            Arc::clone(&self.catalog),
            self.images.clone(),
            &category,
        ))
    }

    /// Close an editor, adopting its notice. Returns the committed category
    /// if the editor submitted successfully.
    pub fn close_editor(&mut self, editor: CategoryEditor) -> Option<Category> {
        if let Some(notice) = editor.notice() {
            self.notice = Some(notice);
        }
        let committed = editor.take_committed();
        if committed.is_none() {
            editor.cancel();
        }
        committed
    }

    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn raise(&mut self, err: &AdminError) -> Notice {
        let notice = Notice::from(err);
        self.notice = Some(notice.clone());
        notice
    }
}
