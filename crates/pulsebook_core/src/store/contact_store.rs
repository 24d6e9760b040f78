//! Contact store over a pluggable storage backend.
//!
//! # Responsibility
//! - Provide the add/edit/delete mutation surface consumed by views.
//! - Re-serialize the full collection to durable storage after every
//!   applied mutation, then notify subscribers.
//!
//! # Invariants
//! - Records arriving here already satisfy the form schema; the store
//!   performs no shape validation of its own.
//! - `edit` of an unknown id neither persists nor notifies; `delete`
//!   re-persists unconditionally.

use crate::model::contact::{Contact, ContactId};
use crate::storage::{ContactStorage, StorageResult};
use crate::store::subscribers::{SubscriberRegistry, SubscriptionId};
use log::{debug, info};

/// Mutable collection state owned by the top-level application object and
/// passed by reference to consumers.
pub struct ContactStore<S: ContactStorage> {
    storage: S,
    contacts: Vec<Contact>,
    subscribers: SubscriberRegistry,
}

impl<S: ContactStorage> ContactStore<S> {
    /// Hydrates the store from durable storage.
    ///
    /// Absent or unparsable content yields an empty collection; hydration
    /// never fails.
    pub fn hydrate(storage: S) -> Self {
        let contacts = storage.load();
        info!(
            "event=store_hydrate module=store status=ok count={}",
            contacts.len()
        );
        Self {
            storage,
            contacts,
            subscribers: SubscriberRegistry::new(),
        }
    }

    /// Current collection, in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Looks up one contact by id.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a contact, persists, and notifies subscribers.
    ///
    /// Returns the id of the stored record.
    pub fn add(&mut self, contact: Contact) -> StorageResult<ContactId> {
        let id = contact.id;
        self.contacts.push(contact);
        self.persist("add")?;
        self.subscribers.notify_all(&self.contacts);
        Ok(id)
    }

    /// Replaces the record whose id matches `contact.id`.
    ///
    /// Unknown ids are silently ignored: nothing is persisted and no
    /// subscriber fires.
    pub fn edit(&mut self, contact: Contact) -> StorageResult<()> {
        match self
            .contacts
            .iter_mut()
            .find(|existing| existing.id == contact.id)
        {
            Some(slot) => {
                *slot = contact;
                self.persist("edit")?;
                self.subscribers.notify_all(&self.contacts);
            }
            None => {
                debug!(
                    "event=store_edit module=store status=missing id={}",
                    contact.id
                );
            }
        }
        Ok(())
    }

    /// Removes the record whose id matches.
    ///
    /// The collection is re-persisted and subscribers are notified even
    /// when the id was absent.
    pub fn delete(&mut self, id: ContactId) -> StorageResult<()> {
        self.contacts.retain(|contact| contact.id != id);
        self.persist("delete")?;
        self.subscribers.notify_all(&self.contacts);
        Ok(())
    }

    /// Registers a listener invoked with the full collection after every
    /// applied mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&[Contact]) + 'static) -> SubscriptionId {
        self.subscribers.register(Box::new(listener))
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn persist(&self, operation: &str) -> StorageResult<()> {
        self.storage.save(&self.contacts)?;
        debug!(
            "event=store_persist module=store status=ok operation={} count={}",
            operation,
            self.contacts.len()
        );
        Ok(())
    }
}
