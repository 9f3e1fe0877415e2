//! Draft lifecycle shared by the category editor and the navbar composer.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::error::AdminError;

/// Where a draft is in its lifecycle.
///
/// `Empty -> Editing -> Submitting -> {Committed | Failed}`. A failed draft
/// keeps its contents and goes back to `Editing` on the next change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftPhase {
    #[default]
    Empty,
    Editing,
    Submitting,
    Committed,
    Failed,
}

impl DraftPhase {
    /// Whether a submit is in flight.
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Record a local edit.
    pub(crate) fn touch(&mut self) -> Result<(), AdminError> {
        match self {
            Self::Submitting => Err(AdminError::SubmitInFlight),
            Self::Committed => Err(AdminError::EditorClosed),
            Self::Empty | Self::Editing | Self::Failed => {
                *self = Self::Editing;
                Ok(())
            }
        }
    }

    /// Enter `Submitting`, rejecting re-entrant and post-commit submits.
    pub(crate) fn begin_submit(&mut self) -> Result<(), AdminError> {
        match self {
            Self::Submitting => Err(AdminError::SubmitInFlight),
            Self::Committed => Err(AdminError::EditorClosed),
            Self::Empty | Self::Editing | Self::Failed => {
                *self = Self::Submitting;
                Ok(())
            }
        }
    }
}

/// Lock a state mutex, recovering the data if a holder panicked.
pub(crate) fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores `Editing` if a submit future is dropped while in flight.
///
/// Completed submits move the phase on before the guard drops, so the guard
/// only acts on cancellation.
pub(crate) struct InFlight<'a, T> {
    state: &'a Mutex<T>,
    phase: fn(&mut T) -> &mut DraftPhase,
}

impl<'a, T> InFlight<'a, T> {
    pub(crate) fn new(state: &'a Mutex<T>, phase: fn(&mut T) -> &mut DraftPhase) -> Self {
        Self { state, phase }
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        let phase = (self.phase)(&mut *state);
        if phase.is_busy() {
            tracing::debug!("submit abandoned in flight; draft back to editing");
            *phase = DraftPhase::Editing;
        }
    }
}
