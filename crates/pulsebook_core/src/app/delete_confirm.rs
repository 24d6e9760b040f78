//! Two-step delete confirmation flow.
//!
//! # Responsibility
//! - Park a delete request until the user confirms or cancels it.
//!
//! # Invariants
//! - States are idle (no target) and pending-confirmation (target set).
//! - The delete mutation is issued only from `confirm`; `cancel` never
//!   mutates.

use crate::model::contact::ContactId;
use crate::storage::{ContactStorage, StorageResult};
use crate::store::contact_store::ContactStore;

/// Confirmation state for the list view's delete action.
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    target: Option<ContactId>,
}

impl DeleteConfirmation {
    /// Starts in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id awaiting confirmation, if any.
    pub fn pending(&self) -> Option<ContactId> {
        self.target
    }

    pub fn is_pending(&self) -> bool {
        self.target.is_some()
    }

    /// Enters pending-confirmation for `id`.
    ///
    /// A second request before the first resolves replaces the target.
    pub fn request(&mut self, id: ContactId) {
        self.target = Some(id);
    }

    /// Returns to idle without mutating anything.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Applies the pending delete against the store and returns to idle.
    ///
    /// Returns the confirmed target id, or `None` when no request was
    /// pending (confirm without request is a no-op).
    pub fn confirm<S: ContactStorage>(
        &mut self,
        store: &mut ContactStore<S>,
    ) -> StorageResult<Option<ContactId>> {
        match self.target.take() {
            Some(id) => {
                store.delete(id)?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }
}
