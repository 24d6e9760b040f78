//! Durable storage boundary for the contact collection.
//!
//! # Responsibility
//! - Define the persistence seam used by the contact store.
//! - Keep serialization details inside the storage backends.
//!
//! # Invariants
//! - The full collection is the persistence unit: `save` rewrites the
//!   whole serialized sequence, never a partial update.
//! - Hydration never fails the caller: absent or unparsable content
//!   yields an empty collection.

use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Write-path errors of the storage backends.
///
/// Read failures are intentionally absent: loads degrade to an empty
/// collection instead of erroring.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize contacts: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence seam for the contact collection.
pub trait ContactStorage {
    /// Loads the persisted collection.
    ///
    /// Missing storage is a normal first run; unparsable content is
    /// logged and treated as "no data". Neither surfaces as an error.
    fn load(&self) -> Vec<Contact>;

    /// Serializes and durably writes the full collection.
    fn save(&self, contacts: &[Contact]) -> StorageResult<()>;
}

impl<T: ContactStorage> ContactStorage for &T {
    fn load(&self) -> Vec<Contact> {
        (**self).load()
    }

    fn save(&self, contacts: &[Contact]) -> StorageResult<()> {
        (**self).save(contacts)
    }
}
