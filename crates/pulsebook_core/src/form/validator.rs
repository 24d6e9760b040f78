//! Contact schema validation.
//!
//! # Responsibility
//! - Map a raw form draft to a validated, normalized contact record.
//! - Accumulate one human-readable message per failing field.
//!
//! # Invariants
//! - All fields are checked on every run; errors accumulate across fields
//!   but each field keeps only its first failing rule.
//! - A draft that validates cleanly always yields a schema-conforming
//!   record.

use crate::model::contact::{Contact, ContactId, ContactStatus};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Field key for `name` in error maps.
pub const FIELD_NAME: &str = "name";
/// Field key for `email` in error maps.
pub const FIELD_EMAIL: &str = "email";
/// Field key for `phone` in error maps.
pub const FIELD_PHONE: &str = "phone";
/// Field key for `address` in error maps.
pub const FIELD_ADDRESS: &str = "address";
/// Field key for `status` in error maps.
pub const FIELD_STATUS: &str = "status";

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 50;
const EMAIL_MAX_CHARS: usize = 100;
const ADDRESS_MAX_CHARS: usize = 255;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8,10}$").expect("valid phone regex"));

/// Mapping from field key to the first human-readable error for it.
///
/// `BTreeMap` keeps rendering order deterministic.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Raw form input, exactly as collected from the user.
///
/// Every field is a plain string; typing and normalization happen in
/// [`validate_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Blank input means "no address".
    pub address: String,
    pub status: String,
}

impl Default for ContactDraft {
    /// Empty draft with the form's default status preselected.
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            status: ContactStatus::Active.as_str().to_string(),
        }
    }
}

/// Schema-conforming contact data, without an identity yet.
///
/// Produced only by [`validate_contact`]; pair it with an id via
/// [`ValidatedContact::into_contact`] or
/// [`ValidatedContact::into_contact_with_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub status: ContactStatus,
}

impl ValidatedContact {
    /// Builds a new contact with a freshly generated id.
    pub fn into_contact(self) -> Contact {
        Contact::new(self.name, self.email, self.phone, self.address, self.status)
    }

    /// Builds a contact preserving an existing id (edit flow).
    pub fn into_contact_with_id(self, id: ContactId) -> Contact {
        Contact::with_id(id, self.name, self.email, self.phone, self.address, self.status)
    }
}

/// Validates a raw draft against the contact schema.
///
/// Returns the normalized record on success, or a field → message map with
/// every failing field on failure. Lengths are counted in characters, not
/// bytes.
pub fn validate_contact(draft: &ContactDraft) -> Result<ValidatedContact, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name_chars = draft.name.chars().count();
    if draft.name.is_empty() {
        errors.insert(FIELD_NAME, "Name is required".to_string());
    } else if name_chars < NAME_MIN_CHARS {
        errors.insert(
            FIELD_NAME,
            format!("Name must be at least {NAME_MIN_CHARS} characters long"),
        );
    } else if name_chars > NAME_MAX_CHARS {
        errors.insert(
            FIELD_NAME,
            format!("Name cannot exceed {NAME_MAX_CHARS} characters"),
        );
    }

    if draft.email.is_empty() {
        errors.insert(FIELD_EMAIL, "Email is required".to_string());
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.insert(FIELD_EMAIL, "Invalid email format".to_string());
    } else if draft.email.chars().count() > EMAIL_MAX_CHARS {
        errors.insert(
            FIELD_EMAIL,
            format!("Email cannot exceed {EMAIL_MAX_CHARS} characters"),
        );
    }

    if draft.phone.is_empty() {
        errors.insert(FIELD_PHONE, "Phone number is required".to_string());
    } else if !PHONE_RE.is_match(&draft.phone) {
        errors.insert(
            FIELD_PHONE,
            "Phone number must be 8-10 digits long".to_string(),
        );
    }

    let address = normalize_address(&draft.address);
    if let Some(value) = &address {
        if value.chars().count() > ADDRESS_MAX_CHARS {
            errors.insert(
                FIELD_ADDRESS,
                format!("Address cannot exceed {ADDRESS_MAX_CHARS} characters"),
            );
        }
    }

    let status = if draft.status.is_empty() {
        errors.insert(FIELD_STATUS, "Status is required".to_string());
        None
    } else {
        let parsed = ContactStatus::parse(&draft.status);
        if parsed.is_none() {
            errors.insert(
                FIELD_STATUS,
                "Status must be either \"active\" or \"inactive\"".to_string(),
            );
        }
        parsed
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedContact {
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        address,
        // Status parse failure inserted an error above, so this is present
        // on every success path.
        status: status.unwrap_or(ContactStatus::Active),
    })
}

fn normalize_address(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_address;

    #[test]
    fn blank_address_normalizes_to_none() {
        assert_eq!(normalize_address(""), None);
        assert_eq!(normalize_address("   "), None);
        assert_eq!(normalize_address(" 1 Main St"), Some(" 1 Main St".to_string()));
    }

    #[test]
    fn email_pattern_accepts_subdomains_and_rejects_missing_tld() {
        assert!(super::EMAIL_RE.is_match("jane@mail.example.com"));
        assert!(!super::EMAIL_RE.is_match("jane@example"));
        assert!(!super::EMAIL_RE.is_match("jane example@x.com"));
    }
}
