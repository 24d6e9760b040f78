//! Contact record and status model.
//!
//! # Responsibility
//! - Define the canonical contact shape persisted and rendered everywhere.
//! - Keep id assignment in one place.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes across edits.
//! - `id` is never reused for another contact.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every contact record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Generated ids are UUIDv7, so creation order is reflected in the id.
pub type ContactId = Uuid;

/// Reachability status of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Inactive,
}

impl ContactStatus {
    /// Wire/form representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Parses the form representation. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Canonical contact record.
///
/// `address` stays optional end to end: an absent address is omitted from
/// the serialized collection rather than stored as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable id used for edit/delete targeting and route parameters.
    pub id: ContactId,
    /// Display name, 2-50 characters.
    pub name: String,
    /// Email address, at most 100 characters.
    pub email: String,
    /// Digit-only phone number, 8-10 digits.
    pub phone: String,
    /// Optional postal address, at most 255 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub status: ContactStatus,
}

impl Contact {
    /// Creates a new contact with a freshly generated time-based id.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: Option<String>,
        status: ContactStatus,
    ) -> Self {
        Self::with_id(Uuid::now_v7(), name, email, phone, address, status)
    }

    /// Creates a contact with a caller-provided id.
    ///
    /// Used by the edit flow, where identity already exists and must be
    /// preserved.
    pub fn with_id(
        id: ContactId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: Option<String>,
        status: ContactStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address,
            status,
        }
    }

    /// Returns whether the contact is currently active.
    pub fn is_active(&self) -> bool {
        self.status == ContactStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactStatus};

    #[test]
    fn new_contacts_get_distinct_ids() {
        let a = Contact::new("Ann", "ann@x.com", "12345678", None, ContactStatus::Active);
        let b = Contact::new("Bob", "bob@x.com", "12345678", None, ContactStatus::Active);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn status_round_trips_through_form_representation() {
        for status in [ContactStatus::Active, ContactStatus::Inactive] {
            assert_eq!(ContactStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ContactStatus::parse("Active"), None);
        assert_eq!(ContactStatus::parse(""), None);
    }
}
