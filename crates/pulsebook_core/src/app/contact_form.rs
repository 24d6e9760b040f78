//! Contact form controller.
//!
//! # Responsibility
//! - Bridge raw form input to store mutations: validate first, dispatch
//!   only on success.
//! - Prefill the edit form from an existing record.
//!
//! # Invariants
//! - A draft that fails validation never reaches the store.
//! - `submit_edit` preserves the given id; ids are immutable.

use crate::form::validator::{validate_contact, ContactDraft, FieldErrors};
use crate::model::contact::ContactId;
use crate::storage::{ContactStorage, StorageError};
use crate::store::contact_store::ContactStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a form submission did not go through.
#[derive(Debug)]
pub enum FormError {
    /// The draft violated the schema; submission is blocked until every
    /// listed field is fixed.
    Validation(FieldErrors),
    /// The mutation was accepted but could not be persisted.
    Storage(StorageError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "contact form has {} invalid field(s)", errors.len())
            }
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for FormError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Builds a draft prefilled from an existing record, for the edit form.
///
/// Returns `None` when the id is unknown.
pub fn prefill<S: ContactStorage>(
    store: &ContactStore<S>,
    id: ContactId,
) -> Option<ContactDraft> {
    store.get(id).map(|contact| ContactDraft {
        name: contact.name.clone(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        address: contact.address.clone().unwrap_or_default(),
        status: contact.status.as_str().to_string(),
    })
}

/// Validates a draft and appends a new contact with a fresh id.
pub fn submit_new<S: ContactStorage>(
    store: &mut ContactStore<S>,
    draft: &ContactDraft,
) -> Result<ContactId, FormError> {
    let validated = validate_contact(draft).map_err(FormError::Validation)?;
    let id = store.add(validated.into_contact())?;
    Ok(id)
}

/// Validates a draft and replaces the record with the given id.
///
/// The store silently ignores unknown ids; once validation passes the
/// submission counts as accepted either way.
pub fn submit_edit<S: ContactStorage>(
    store: &mut ContactStore<S>,
    id: ContactId,
    draft: &ContactDraft,
) -> Result<(), FormError> {
    let validated = validate_contact(draft).map_err(FormError::Validation)?;
    store.edit(validated.into_contact_with_id(id))?;
    Ok(())
}
