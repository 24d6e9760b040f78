//! Contact form input and validation.
//!
//! # Responsibility
//! - Hold the raw-input draft shape collected by form views.
//! - Validate drafts against the contact schema, field by field.
//!
//! # Invariants
//! - Validation is synchronous and pure: no storage, network or clock
//!   access.
//! - The validator is the only path from raw input to a `Contact` value.

pub mod validator;
