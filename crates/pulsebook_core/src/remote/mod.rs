//! Read-only clients for remote epidemiological data.
//!
//! # Responsibility
//! - Fetch and parse the historical case series and per-country
//!   snapshots.
//! - Track per-request lifecycle state for rendering.
//!
//! # Invariants
//! - Strictly read-only: no write path, no caching beyond the request
//!   lifetime, no retry.
//! - Requests are independent of each other and of the contact store.

pub mod client;
pub mod fetch;
pub mod models;

pub use client::{EpidemicClient, RemoteError, RemoteResult, DEFAULT_API_URL};
pub use fetch::FetchState;
pub use models::{CountryInfo, CountrySnapshot, HistoricalSeries};
