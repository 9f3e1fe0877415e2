//! Navbar composer: builds one navbar entry from a loaded category.

use std::sync::{Arc, Mutex};

use storefront_core::{NavbarEntry, NavbarStorePort, ValidationError};

use crate::catalog::CategoryCatalog;
use crate::error::AdminError;
use crate::notice::Notice;
use crate::phase::{DraftPhase, InFlight, lock};

const ADDED: &str = "Navbar added successfully!";

#[derive(Default)]
struct ComposerState {
    open: bool,
    phase: DraftPhase,
    draft: NavbarEntry,
    notice: Option<Notice>,
}

impl ComposerState {
    fn phase_mut(&mut self) -> &mut DraftPhase {
        &mut self.phase
    }
}

/// Surface for adding a navbar entry.
///
/// The entry is a snapshot: subcategories are copied from the selected
/// category when it is picked and never linked to it afterwards.
pub struct NavbarComposer {
    catalog: Arc<CategoryCatalog>,
    navbar: Arc<dyn NavbarStorePort>,
    state: Mutex<ComposerState>,
}

impl NavbarComposer {
    pub fn new(catalog: Arc<CategoryCatalog>, navbar: Arc<dyn NavbarStorePort>) -> Self {
        Self {
            catalog,
            navbar,
            state: Mutex::new(ComposerState::default()),
        }
    }

    /// Open the surface with an empty draft and load the category options.
    ///
    /// A failed load leaves the previous list as the options and is reported
    /// as an error notice. While a submit is in flight the surface is left
    /// as it is and the call answers with an error notice.
    pub async fn open(&self) -> Option<Notice> {
        {
            let mut state = lock(&self.state);
            if state.phase.is_busy() {
                return Some(Notice::from(&AdminError::SubmitInFlight));
            }
            *state = ComposerState {
                open: true,
                ..ComposerState::default()
            };
        }
        match self.catalog.refresh().await {
            Ok(_) => None,
            Err(e) => {
                let notice = Notice::from(&e);
                lock(&self.state).notice = Some(notice.clone());
                Some(notice)
            }
        }
    }

    pub fn is_open(&self) -> bool {
        lock(&self.state).open
    }

    pub fn phase(&self) -> DraftPhase {
        lock(&self.state).phase
    }

    pub fn draft(&self) -> NavbarEntry {
        lock(&self.state).draft.clone()
    }

    pub fn notice(&self) -> Option<Notice> {
        lock(&self.state).notice.clone()
    }

    pub fn dismiss_notice(&self) {
        lock(&self.state).notice = None;
    }

    /// Names offered for selection, in list order. Malformed records are
    /// skipped.
    pub async fn options(&self) -> Vec<String> {
        self.catalog
            .snapshot()
            .await
            .iter()
            .filter_map(|record| record.as_category().map(|c| c.name.clone()))
            .collect()
    }

    /// Select a category by exact name.
    ///
    /// The subcategories are replaced by the selected category's list, or
    /// cleared when no category has that name.
    pub async fn select(&self, name: &str) -> Result<(), AdminError> {
        let subcategories = self
            .catalog
            .find_by_name(name)
            .await
            .map(|c| c.subcategories)
            .unwrap_or_default();

        let mut state = lock(&self.state);
        if !state.open {
            return Err(AdminError::EditorClosed);
        }
        state.phase.touch()?;
        state.draft = NavbarEntry {
            categories: name.to_string(),
            subcategories,
        };
        Ok(())
    }

    /// Send the entry to the navbar store.
    ///
    /// Success resets the draft and closes the surface; failure keeps both.
    pub async fn submit(&self) -> Notice {
        let entry = {
            let mut state = lock(&self.state);
            if !state.open {
                return Notice::from(&AdminError::EditorClosed);
            }
            if let Err(e) = state.phase.begin_submit() {
                return Notice::from(&e);
            }
            if state.draft.is_unselected() {
                return Self::fail(&mut state, &AdminError::from(ValidationError::NoCategorySelected));
            }
            state.draft.clone()
        };
        let _in_flight = InFlight::new(&self.state, ComposerState::phase_mut);

        match self.navbar.create_navbar_entry(&entry).await {
            Ok(()) => {
                let notice = Notice::success(ADDED);
                let mut state = lock(&self.state);
                *state = ComposerState {
                    phase: DraftPhase::Committed,
                    notice: Some(notice.clone()),
                    ..ComposerState::default()
                };
                notice
            }
            Err(e) => {
                let err = AdminError::Navbar(e);
                tracing::warn!(error = %err, category = %entry.categories, "navbar submit failed");
                let mut state = lock(&self.state);
                Self::fail(&mut state, &err)
            }
        }
    }

    fn fail(state: &mut ComposerState, err: &AdminError) -> Notice {
        let notice = Notice::from(err);
        state.phase = DraftPhase::Failed;
        state.notice = Some(notice.clone());
        notice
    }

    /// Close the surface and discard the draft.
    ///
    /// Refused while a submit is in flight.
    pub fn cancel(&self) -> Result<(), AdminError> {
        let mut state = lock(&self.state);
        if state.phase.is_busy() {
            return Err(AdminError::SubmitInFlight);
        }
        *state = ComposerState::default();
        Ok(())
    }
}
