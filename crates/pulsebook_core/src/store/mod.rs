//! Contact collection state container.
//!
//! # Responsibility
//! - Hold the ordered in-memory contact collection.
//! - Keep durable storage synchronized with every applied mutation.
//! - Drive view re-renders through subscriber notifications.
//!
//! # Invariants
//! - All mutations are synchronous and run to completion; there is
//!   exactly one writer to durable storage.
//! - Insertion order is preserved across mutations and hydration.

pub mod contact_store;
pub mod subscribers;
