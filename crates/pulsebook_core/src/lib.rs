//! Core domain logic for Pulsebook.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod form;
pub mod logging;
pub mod model;
pub mod remote;
pub mod storage;
pub mod store;

pub use app::contact_form::{prefill, submit_edit, submit_new, FormError};
pub use app::delete_confirm::DeleteConfirmation;
pub use app::route::Route;
pub use form::validator::{validate_contact, ContactDraft, FieldErrors, ValidatedContact};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId, ContactStatus};
pub use remote::client::{EpidemicClient, RemoteError, RemoteResult, DEFAULT_API_URL};
pub use remote::fetch::FetchState;
pub use remote::models::{CountryInfo, CountrySnapshot, HistoricalSeries};
pub use storage::{ContactStorage, FileStorage, MemoryStorage, StorageError, StorageResult};
pub use store::contact_store::ContactStore;
pub use store::subscribers::SubscriptionId;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
