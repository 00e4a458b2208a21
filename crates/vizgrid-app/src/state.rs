#![forbid(unsafe_code)]

//! Dashboard state and the actions that mutate it.
//!
//! Every mutation goes through [`DashboardState::apply`]; nothing else
//! writes the fields. This keeps the fetch flags and the chart list in
//! lock-step and makes state transitions auditable from one match.

use std::collections::BTreeMap;

use tracing::debug;

use crate::data::SelectedFilters;
use crate::dispatch::ResolvedWidget;

/// Composition-level state.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// The resolved widgets of the latest accepted fetch.
    pub charts: Vec<ResolvedWidget>,
    /// Available filter names and values, post allow-list.
    pub filters_meta: BTreeMap<String, Vec<String>>,
    /// The user's current filter selection.
    pub selected_filters: SelectedFilters,
    /// A chart fetch is in flight.
    pub fetching_charts: bool,
    /// The filter-metadata fetch is in flight.
    pub fetching_filters: bool,
    /// Filter metadata has been fetched at least once.
    pub filters_meta_fetched: bool,
    /// The initial chart fetch has completed (successfully or not).
    pub initial_charts_fetched: bool,
    /// The in-flight fetch was user-applied (filter change) rather than
    /// initial; drives whether a loading indicator replaces the grid.
    pub applied_fetch: bool,
}

/// The only way state changes.
#[derive(Debug)]
pub enum Action {
    SetChartsFetching(bool),
    SetFiltersFetching(bool),
    SetFilters(BTreeMap<String, Vec<String>>),
    SetCharts(Vec<ResolvedWidget>),
    MarkFiltersMetaFetched,
    MarkInitialChartsFetched,
    SetSelectedFilters(SelectedFilters),
    SetAppliedFetch(bool),
}

impl DashboardState {
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "state action");
        match action {
            Action::SetChartsFetching(v) => self.fetching_charts = v,
            Action::SetFiltersFetching(v) => self.fetching_filters = v,
            Action::SetFilters(filters) => self.filters_meta = filters,
            Action::SetCharts(charts) => self.charts = charts,
            Action::MarkFiltersMetaFetched => self.filters_meta_fetched = true,
            Action::MarkInitialChartsFetched => self.initial_charts_fetched = true,
            Action::SetSelectedFilters(selected) => self.selected_filters = selected,
            Action::SetAppliedFetch(v) => self.applied_fetch = v,
        }
    }
}
