//! Application-level view flows.
//!
//! # Responsibility
//! - Model navigation targets and the stateful view behaviors that sit
//!   between user input and store mutations.
//! - Keep these flows free of any UI framework so hosts (CLI, embedded
//!   UI) only render.

pub mod contact_form;
pub mod delete_confirm;
pub mod route;
