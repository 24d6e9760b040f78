//! Epidemiological API client.
//!
//! # Responsibility
//! - Issue read-only GET requests against the remote API and parse the
//!   payloads.
//! - Emit `remote_fetch` logging events with duration and status.
//!
//! # Invariants
//! - No retry, no backoff, no caching; a failed request is reported once
//!   and dropped.
//! - Non-2xx responses are errors, never partial data.

use crate::remote::models::{CountrySnapshot, HistoricalSeries};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Public disease.sh v3 base URL.
pub const DEFAULT_API_URL: &str = "https://disease.sh/v3/covid-19";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Fetch/parse errors of the remote clients.
#[derive(Debug)]
pub enum RemoteError {
    Http(reqwest::Error),
    UnexpectedStatus(u16),
}

impl Display for RemoteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "{err}"),
            Self::UnexpectedStatus(code) => write!(f, "unexpected response status {code}"),
        }
    }
}

impl Error for RemoteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::UnexpectedStatus(_) => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// Read-only client for the epidemiological API.
pub struct EpidemicClient {
    base_url: String,
    http: reqwest::Client,
}

impl EpidemicClient {
    /// Creates a client against `base_url` (trailing slashes stripped).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("pulsebook/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the all-time cumulative case/death/recovery series.
    pub async fn historical_all(&self) -> RemoteResult<HistoricalSeries> {
        let url = format!("{}/historical/all?lastdays=all", self.base_url);
        self.get_json(&url, "historical_all").await
    }

    /// Fetches per-country snapshots.
    pub async fn countries(&self) -> RemoteResult<Vec<CountrySnapshot>> {
        let url = format!("{}/countries", self.base_url);
        self.get_json(&url, "countries").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        operation: &str,
    ) -> RemoteResult<T> {
        let started_at = Instant::now();

        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    "event=remote_fetch module=remote status=error operation={} duration_ms={} error={}",
                    operation,
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=remote_fetch module=remote status=error operation={} http_status={} duration_ms={}",
                operation,
                status.as_u16(),
                started_at.elapsed().as_millis()
            );
            return Err(RemoteError::UnexpectedStatus(status.as_u16()));
        }

        match response.json::<T>().await {
            Ok(parsed) => {
                info!(
                    "event=remote_fetch module=remote status=ok operation={} duration_ms={}",
                    operation,
                    started_at.elapsed().as_millis()
                );
                Ok(parsed)
            }
            Err(err) => {
                warn!(
                    "event=remote_fetch module=remote status=error operation={} duration_ms={} error={}",
                    operation,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl Default for EpidemicClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
