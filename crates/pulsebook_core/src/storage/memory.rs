//! In-memory storage backend.
//!
//! Holds the serialized JSON text rather than live records, so load/save
//! behavior (including corrupt-content handling) matches the file backend
//! byte for byte. Intended for tests and embedders without a filesystem.

use super::{ContactStorage, StorageResult};
use crate::model::contact::Contact;
use log::warn;
use std::cell::RefCell;

/// Memory-backed contact storage with local-storage semantics.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Empty storage (first-run state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage seeded with raw serialized content.
    ///
    /// The content is not checked here; feeding garbage exercises the
    /// corrupt-hydration path.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    /// Current serialized content, if any was ever saved or seeded.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ContactStorage for MemoryStorage {
    fn load(&self) -> Vec<Contact> {
        let slot = self.slot.borrow();
        let raw = match slot.as_deref() {
            Some(raw) => raw,
            None => return Vec::new(),
        };

        match serde_json::from_str::<Vec<Contact>>(raw) {
            Ok(contacts) => contacts,
            Err(err) => {
                warn!("event=storage_load module=storage status=corrupt backend=memory error={err}");
                Vec::new()
            }
        }
    }

    fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        let serialized = serde_json::to_string(contacts)?;
        self.slot.borrow_mut().replace(serialized);
        Ok(())
    }
}
