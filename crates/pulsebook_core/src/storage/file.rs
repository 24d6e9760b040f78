//! JSON-file storage backend.
//!
//! # Responsibility
//! - Persist the contact collection as one JSON array in `contacts.json`.
//! - Emit `storage_*` logging events with duration and status.
//!
//! # Invariants
//! - A missing file hydrates as an empty collection (first run).
//! - Corrupt content hydrates as an empty collection and is logged at
//!   warn level; it is never surfaced to the user.

use super::{ContactStorage, StorageResult};
use crate::model::contact::Contact;
use log::{debug, error, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name of the serialized collection inside the data directory.
pub const STORAGE_FILE_NAME: &str = "contacts.json";

/// File-backed contact storage.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Uses `contacts.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE_NAME),
        }
    }

    /// Uses an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStorage for FileStorage {
    fn load(&self) -> Vec<Contact> {
        let started_at = Instant::now();

        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=storage_load module=storage status=first_run path={}",
                    self.path.display()
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=storage_load module=storage status=error path={} error={}",
                    self.path.display(),
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Contact>>(&raw) {
            Ok(contacts) => {
                info!(
                    "event=storage_load module=storage status=ok count={} duration_ms={}",
                    contacts.len(),
                    started_at.elapsed().as_millis()
                );
                contacts
            }
            Err(err) => {
                warn!(
                    "event=storage_load module=storage status=corrupt path={} error={}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        let started_at = Instant::now();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string(contacts)?;
        match std::fs::write(&self.path, serialized) {
            Ok(()) => {
                info!(
                    "event=storage_save module=storage status=ok count={} duration_ms={}",
                    contacts.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=storage_save module=storage status=error path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
