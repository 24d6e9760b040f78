//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by list, form and storage code.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - A record that reaches the model layer already satisfies the form
//!   schema; raw input is validated upstream in `crate::form`.

pub mod contact;
