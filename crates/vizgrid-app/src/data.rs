#![forbid(unsafe_code)]

//! Raw API payloads and the data-fetch seam.
//!
//! The backend returns loosely-typed records whose shape depends on the
//! widget type; they stay as JSON maps until the dispatcher coerces them
//! into typed view models. Real network I/O lives behind [`DataSource`],
//! which the composition shell calls from background tasks.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// One loosely-typed backend record (e.g. `{name, value, unit_of_measurement}`).
pub type RawDataRecord = serde_json::Map<String, serde_json::Value>;

/// Filter name → selected values. Mutated only by full replacement so a
/// re-fetch is idempotent per filter set.
pub type SelectedFilters = BTreeMap<String, Vec<String>>;

/// Per-widget chart payload as returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChartEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub chart_name: String,
    #[serde(default)]
    pub chart_value: Vec<RawDataRecord>,
}

/// Filter metadata entry as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFilterEntry {
    pub filter_name: String,
    #[serde(default)]
    pub filter_values: Vec<String>,
}

/// The fetch layer, specified only at its interface.
///
/// Implementations block; the shell runs them on background task threads
/// and routes results back through the message channel.
pub trait DataSource: Send + Sync + 'static {
    /// Fetch chart data for all widgets, unfiltered.
    fn fetch_chart_data(&self) -> Result<Vec<RawChartEntry>, FetchError>;

    /// Fetch chart data restricted to the given filter selection.
    fn fetch_chart_data_with_filters(
        &self,
        selected_filters: &SelectedFilters,
    ) -> Result<Vec<RawChartEntry>, FetchError>;

    /// Fetch the available filter names and values.
    fn fetch_filter_data(&self) -> Result<Vec<RawFilterEntry>, FetchError>;
}

/// A failed fetch: network trouble or an undecodable payload.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure.
    Network(String),
    /// The response arrived but could not be decoded.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
