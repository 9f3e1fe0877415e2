//! Category editor: one draft, in create or update mode.
//!
//! The draft is local until submit. A successful submit refetches the whole
//! category list and closes the editor; a failed one keeps every field so the
//! operator can fix and resubmit.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use storefront_core::{
    Category, CategoryId, CategoryUpdate, ImageFile, ImageRef, ImageResolver, NewCategory,
    ValidationError,
};

use crate::catalog::CategoryCatalog;
use crate::error::AdminError;
use crate::notice::Notice;
use crate::phase::{DraftPhase, InFlight, lock};

const ADDED: &str = "Category added successfully!";
const UPDATED: &str = "Category updated successfully!";

// ============================================================================
// Mode and capabilities
// ============================================================================

/// Whether the editor creates a new category or updates a stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Update {
        id: CategoryId,
        /// Images already stored for the category, used for the preview.
        stored_images: Vec<ImageRef>,
    },
}

/// How many files one image selection may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageUploadPolicy {
    /// At most one file; a local preview is shown.
    Single,
    /// Any number of files, uploaded as an ordered set.
    Multiple,
}

impl ImageUploadPolicy {
    /// Default policy: create uploads many, update replaces one.
    pub const fn for_mode(mode: &EditorMode) -> Self {
        match mode {
            EditorMode::Create => Self::Multiple,
            EditorMode::Update { .. } => Self::Single,
        }
    }

    pub const fn max_files(self) -> Option<usize> {
        match self {
            Self::Single => Some(1),
            Self::Multiple => None,
        }
    }

    fn check(self, count: usize) -> Result<(), ValidationError> {
        match self.max_files() {
            Some(max) if count > max => Err(ValidationError::TooManyImages { count, max }),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Editable copy of a category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub subcategories: Vec<String>,
    /// Files picked for upload, in selection order.
    pub images: Vec<ImageFile>,
}

impl CategoryDraft {
    /// A fresh create draft with one subcategory slot to fill.
    pub fn seeded() -> Self {
        Self {
            subcategories: vec![String::new()],
            ..Self::default()
        }
    }

    /// An update draft holding the stored name and subcategories.
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            subcategories: category.subcategories.clone(),
            images: Vec::new(),
        }
    }

    fn slot(&mut self, index: usize) -> Result<&mut String, AdminError> {
        let len = self.subcategories.len();
        self.subcategories
            .get_mut(index)
            .ok_or(AdminError::IndexOutOfRange { index, len })
    }
}

/// What the image area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePreview {
    /// A locally selected file, not yet uploaded.
    Selected { file_name: String },
    /// The resolved URL of the stored thumbnail (or the placeholder).
    Stored(String),
    /// Nothing to preview.
    None,
}

// ============================================================================
// Editor
// ============================================================================

struct EditorState {
    phase: DraftPhase,
    draft: CategoryDraft,
    notice: Option<Notice>,
    committed: Option<Category>,
}

impl EditorState {
    fn phase_mut(&mut self) -> &mut DraftPhase {
        &mut self.phase
    }
}

/// Create/update surface for one category draft.
///
/// All methods take `&self`; the editor can be shared behind an `Arc` and a
/// second submit while one is in flight is rejected.
pub struct CategoryEditor {
    catalog: Arc<CategoryCatalog>,
    images: ImageResolver,
    mode: EditorMode,
    policy: ImageUploadPolicy,
    state: Mutex<EditorState>,
}

impl CategoryEditor {
    /// Open a create editor with a seeded draft.
    pub fn create(catalog: Arc<CategoryCatalog>, images: ImageResolver) -> Self {
        Self::open(catalog, images, EditorMode::Create, CategoryDraft::seeded())
    }

    /// Open an update editor seeded from a stored category.
    pub fn update(catalog: Arc<CategoryCatalog>, images: ImageResolver, category: &Category) -> Self {
        let mode = EditorMode::Update {
            id: category.id.clone(),
            stored_images: category.images.clone(),
        };
        let mut editor = Self::open(catalog, images, mode, CategoryDraft::from_category(category));
        editor.state_mut().phase = DraftPhase::Editing;
        editor
    }

    fn open(
        catalog: Arc<CategoryCatalog>,
        images: ImageResolver,
        mode: EditorMode,
        draft: CategoryDraft,
    ) -> Self {
        Self {
            catalog,
            images,
            policy: ImageUploadPolicy::for_mode(&mode),
            mode,
            state: Mutex::new(EditorState {
                phase: DraftPhase::Empty,
                draft,
                notice: None,
                committed: None,
            }),
        }
    }

    /// Override the default image cardinality.
    #[must_use]
    pub fn with_policy(mut self, policy: ImageUploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn state_mut(&mut self) -> &mut EditorState {
        self.state
            .get_mut()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub const fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub const fn policy(&self) -> ImageUploadPolicy {
        self.policy
    }

    pub fn phase(&self) -> DraftPhase {
        lock(&self.state).phase
    }

    pub fn draft(&self) -> CategoryDraft {
        lock(&self.state).draft.clone()
    }

    pub fn notice(&self) -> Option<Notice> {
        lock(&self.state).notice.clone()
    }

    pub fn dismiss_notice(&self) {
        lock(&self.state).notice = None;
    }

    // ------------------------------------------------------------------------
    // Local edits
    // ------------------------------------------------------------------------

    fn edit<R>(
        &self,
        f: impl FnOnce(&mut CategoryDraft) -> Result<R, AdminError>,
    ) -> Result<R, AdminError> {
        let mut state = lock(&self.state);
        state.phase.touch()?;
        f(&mut state.draft)
    }

    pub fn set_name(&self, name: impl Into<String>) -> Result<(), AdminError> {
        let name = name.into();
        self.edit(|draft| {
            draft.name = name;
            Ok(())
        })
    }

    /// Append one empty subcategory slot.
    pub fn add_subcategory(&self) -> Result<(), AdminError> {
        self.edit(|draft| {
            draft.subcategories.push(String::new());
            Ok(())
        })
    }

    /// Replace the value at `index`, keeping every position.
    pub fn set_subcategory(&self, index: usize, value: impl Into<String>) -> Result<(), AdminError> {
        let value = value.into();
        self.edit(|draft| {
            *draft.slot(index)? = value;
            Ok(())
        })
    }

    /// Remove the slot at `index`; later slots shift down by one.
    pub fn remove_subcategory(&self, index: usize) -> Result<String, AdminError> {
        self.edit(|draft| {
            draft.slot(index)?;
            Ok(draft.subcategories.remove(index))
        })
    }

    /// Replace the selected files. An empty selection clears it.
    pub fn select_images(&self, files: Vec<ImageFile>) -> Result<(), AdminError> {
        self.policy.check(files.len())?;
        self.edit(|draft| {
            draft.images = files;
            Ok(())
        })
    }

    /// Preview for the image area.
    ///
    /// Create mode never previews. Update mode shows the selected file, or
    /// the stored thumbnail when nothing is selected.
    pub fn preview(&self) -> ImagePreview {
        let EditorMode::Update { stored_images, .. } = &self.mode else {
            return ImagePreview::None;
        };
        match lock(&self.state).draft.images.first() {
            Some(file) => ImagePreview::Selected {
                file_name: file.file_name().to_string(),
            },
            None => ImagePreview::Stored(self.images.thumbnail(stored_images)),
        }
    }

    // ------------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------------

    /// Send the draft to the store.
    ///
    /// The returned notice is also kept on the editor until dismissed.
    /// Re-entrant or post-commit submits are answered with an error notice
    /// and leave the editor untouched.
    pub async fn submit(&self) -> Notice {
        let draft = {
            let mut state = lock(&self.state);
            if let Err(e) = state.phase.begin_submit() {
                return Notice::from(&e);
            }
            let draft = state.draft.clone();
            if let Err(e) = self.policy.check(draft.images.len()) {
                return Self::fail(&mut state, &AdminError::from(e));
            }
            draft
        };
        let _in_flight = InFlight::new(&self.state, EditorState::phase_mut);
        let name = draft.name.clone();

        match self.send(draft).await {
            Ok(saved) => {
                if let Err(e) = self.catalog.refresh().await {
                    tracing::debug!(error = %e, "category saved, list left stale");
                }
                let committed = match saved {
                    Some(category) => Some(category),
                    None => self.find_saved(&name).await,
                };
                let notice = Notice::success(match self.mode {
                    EditorMode::Create => ADDED,
                    EditorMode::Update { .. } => UPDATED,
                });
                let mut state = lock(&self.state);
                state.phase = DraftPhase::Committed;
                state.draft = CategoryDraft::default();
                state.committed = committed;
                state.notice = Some(notice.clone());
                notice
            }
            Err(e) => {
                tracing::warn!(error = %e, source = ?e.store_error(), "category submit failed");
                let mut state = lock(&self.state);
                Self::fail(&mut state, &e)
            }
        }
    }

    async fn send(&self, draft: CategoryDraft) -> Result<Option<Category>, AdminError> {
        let store = self.catalog.store();
        match &self.mode {
            EditorMode::Create => {
                let payload = NewCategory {
                    name: draft.name,
                    subcategories: draft.subcategories,
                    images: draft.images,
                };
                payload.validate()?;
                store.create_category(&payload).await.map_err(AdminError::save)
            }
            EditorMode::Update { id, .. } => {
                let payload = CategoryUpdate {
                    name: draft.name,
                    subcategories: draft.subcategories,
                    images: draft.images,
                };
                payload.validate()?;
                store.update_category(id, &payload).await.map_err(AdminError::save)
            }
        }
    }

    /// Saved record from the refreshed list, for stores that did not echo it.
    async fn find_saved(&self, name: &str) -> Option<Category> {
        match &self.mode {
            EditorMode::Create => self.catalog.find_by_name(name).await,
            EditorMode::Update { id, .. } => self.catalog.find(id).await,
        }
    }

    fn fail(state: &mut EditorState, err: &AdminError) -> Notice {
        let notice = Notice::from(err);
        state.phase = DraftPhase::Failed;
        state.notice = Some(notice.clone());
        notice
    }

    /// The category returned by a successful submit, once.
    pub fn take_committed(&self) -> Option<Category> {
        lock(&self.state).committed.take()
    }

    /// Whether the editor has committed and should be closed.
    pub fn is_committed(&self) -> bool {
        self.phase() == DraftPhase::Committed
    }

    /// Close without submitting. The draft is discarded.
    pub fn cancel(self) {
        tracing::debug!(mode = ?self.mode, "editor cancelled");
    }
}
