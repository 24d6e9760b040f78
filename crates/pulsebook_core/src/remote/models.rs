//! Remote payload models.
//!
//! Read-only shapes parsed from the remote API; their lifetime is one
//! fetch-render cycle and they are never persisted locally.

use indexmap::IndexMap;
use serde::Deserialize;

/// All-time cumulative series keyed by API-provided date strings.
///
/// `IndexMap` keeps the API's own chronological order; the `M/D/YY` date
/// keys do not sort lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HistoricalSeries {
    pub cases: IndexMap<String, u64>,
    pub deaths: IndexMap<String, u64>,
    pub recovered: IndexMap<String, u64>,
}

impl HistoricalSeries {
    /// Number of tracked days in the cases series.
    pub fn day_count(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.deaths.is_empty() && self.recovered.is_empty()
    }

    /// Latest (date, cumulative cases) data point.
    pub fn latest_cases(&self) -> Option<(&str, u64)> {
        last_point(&self.cases)
    }

    /// Latest (date, cumulative deaths) data point.
    pub fn latest_deaths(&self) -> Option<(&str, u64)> {
        last_point(&self.deaths)
    }

    /// Latest (date, cumulative recoveries) data point.
    pub fn latest_recovered(&self) -> Option<(&str, u64)> {
        last_point(&self.recovered)
    }
}

fn last_point(series: &IndexMap<String, u64>) -> Option<(&str, u64)> {
    series.last().map(|(date, value)| (date.as_str(), *value))
}

/// Geographic metadata for one country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryInfo {
    pub lat: f64,
    pub long: f64,
    /// Flag image URL.
    pub flag: String,
}

/// Per-country case snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySnapshot {
    pub country: String,
    pub country_info: CountryInfo,
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    /// Derived by the source as cases - deaths - recovered; negative
    /// values occur in the published data.
    pub active: i64,
}
