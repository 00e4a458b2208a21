#![forbid(unsafe_code)]

//! The composition shell.
//!
//! [`Dashboard`] owns the configuration, the fetch lifecycle, and the
//! per-frame render pass. Fetches run as background tasks; every in-flight
//! chart fetch carries a monotonic token and only the latest token's result
//! is accepted, so overlapping filter changes can never interleave stale
//! data into the grid.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use vizgrid_core::{PxPoint, PxRect, Viewport};
use vizgrid_scene::{DrawCommand, Scene, TextAnchor};
use vizgrid_widgets::{
    BarChart, Card, DonutChart, Placeholder, TopicTable, Widget, WordCloud,
};

use crate::config::DashboardConfig;
use crate::data::{DataSource, FetchError, RawChartEntry, RawFilterEntry, SelectedFilters};
use crate::dispatch::resolve;
use crate::model::{TABLE_COLUMNS, WidgetModel};
use crate::pack::{COLUMN_GAP_PERCENT, pack};
use crate::runtime::{Cmd, Model};
use crate::state::{Action, DashboardState};

/// Debounce window applied to viewport resizes.
const RESIZE_SETTLE: Duration = Duration::from_millis(10);

/// The filter whose `"all"` sentinel selection means "no restriction".
const SENTIMENT_FILTER: &str = "Sentiment";

/// Vertical gap between rows, in pixels.
const ROW_GAP_PX: f64 = 16.0;

/// Messages driving the dashboard.
#[derive(Debug)]
pub enum Msg {
    FiltersFetched(Result<Vec<RawFilterEntry>, FetchError>),
    ChartsFetched {
        token: u64,
        result: Result<Vec<RawChartEntry>, FetchError>,
    },
    /// The user changed the filter selection.
    ApplyFilters(SelectedFilters),
    /// The viewport was measured or re-measured. Width-only changes count:
    /// the label breakpoint depends on width alone.
    ViewportResized { width: f64, height: f64 },
    /// The resize debounce elapsed.
    SettleTick,
    PointerMoved(PxPoint),
    PointerLeft,
}

/// The dashboard orchestrator.
pub struct Dashboard {
    config: DashboardConfig,
    source: Arc<dyn DataSource>,
    state: DashboardState,
    viewport: Viewport,
    /// The latest resize, applied when the debounce settles.
    pending_viewport: Option<Viewport>,
    hover: Option<PxPoint>,
    next_token: u64,
    /// Token of the latest issued chart fetch; older results are discarded.
    current_token: u64,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, source: Arc<dyn DataSource>, viewport: Viewport) -> Self {
        Self {
            config,
            source,
            state: DashboardState::default(),
            viewport,
            pending_viewport: None,
            hover: None,
            next_token: 0,
            current_token: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The sentinel selection `["all", ..]` on the sentiment filter means
    /// "unfiltered": the backend expects the filter absent, not literal.
    fn normalize_filters(mut selected: SelectedFilters) -> SelectedFilters {
        if let Some(values) = selected.get_mut(SENTIMENT_FILTER)
            && values.first().is_some_and(|v| v.eq_ignore_ascii_case("all"))
        {
            values.clear();
        }
        selected
    }

    /// Issue a chart fetch for the given selection under a fresh token.
    fn fetch_charts(&mut self, selected: SelectedFilters) -> Cmd<Msg> {
        let selected = Self::normalize_filters(selected);
        self.next_token += 1;
        let token = self.next_token;
        self.current_token = token;
        self.state.apply(Action::SetChartsFetching(true));
        debug!(token, "issuing chart fetch");

        let source = Arc::clone(&self.source);
        Cmd::task(move || {
            let unrestricted = selected.values().all(|v| v.is_empty());
            let result = if unrestricted {
                source.fetch_chart_data()
            } else {
                source.fetch_chart_data_with_filters(&selected)
            };
            Msg::ChartsFetched { token, result }
        })
    }

    fn fetch_filters(&mut self) -> Cmd<Msg> {
        self.state.apply(Action::SetFiltersFetching(true));
        let source = Arc::clone(&self.source);
        Cmd::task(move || Msg::FiltersFetched(source.fetch_filter_data()))
    }

    fn on_filters_fetched(
        &mut self,
        result: Result<Vec<RawFilterEntry>, FetchError>,
    ) -> Cmd<Msg> {
        self.state.apply(Action::SetFiltersFetching(false));
        self.state.apply(Action::MarkFiltersMetaFetched);
        match result {
            Ok(entries) => {
                let accepted = entries
                    .into_iter()
                    .filter(|e| self.config.accepted_filters.contains(&e.filter_name))
                    .map(|e| (e.filter_name, e.filter_values))
                    .collect();
                self.state.apply(Action::SetFilters(accepted));
                let defaults = self.config.default_filters.clone();
                self.state
                    .apply(Action::SetSelectedFilters(defaults.clone()));
                self.fetch_charts(defaults)
            }
            Err(err) => {
                error!(%err, "filter metadata fetch failed");
                self.state.apply(Action::SetCharts(Vec::new()));
                self.state.apply(Action::MarkInitialChartsFetched);
                Cmd::none()
            }
        }
    }

    fn on_charts_fetched(
        &mut self,
        token: u64,
        result: Result<Vec<RawChartEntry>, FetchError>,
    ) -> Cmd<Msg> {
        if token != self.current_token {
            debug!(token, current = self.current_token, "discarding stale chart fetch");
            return Cmd::none();
        }
        match result {
            Ok(entries) => {
                let resolved = resolve(&self.config.charts, &entries);
                info!(widgets = resolved.len(), "chart fetch accepted");
                self.state.apply(Action::SetCharts(resolved));
            }
            Err(err) => {
                error!(%err, "chart fetch failed; clearing the grid");
                self.state.apply(Action::SetCharts(Vec::new()));
            }
        }
        self.state.apply(Action::SetChartsFetching(false));
        self.state.apply(Action::MarkInitialChartsFetched);
        self.state.apply(Action::SetAppliedFetch(false));
        Cmd::none()
    }
}

impl Model for Dashboard {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        if self.config.charts.is_empty() {
            info!("no widgets configured; nothing to fetch");
            return Cmd::none();
        }
        if self.state.filters_meta_fetched {
            return Cmd::none();
        }
        self.fetch_filters()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::FiltersFetched(result) => self.on_filters_fetched(result),
            Msg::ChartsFetched { token, result } => self.on_charts_fetched(token, result),
            Msg::ApplyFilters(selected) => {
                self.state
                    .apply(Action::SetSelectedFilters(selected.clone()));
                self.state.apply(Action::SetAppliedFetch(true));
                self.fetch_charts(selected)
            }
            Msg::ViewportResized { width, height } => {
                self.pending_viewport = Some(Viewport::new(width, height));
                Cmd::tick(RESIZE_SETTLE, Msg::SettleTick)
            }
            Msg::SettleTick => {
                if let Some(viewport) = self.pending_viewport.take() {
                    debug!(width = viewport.width, height = viewport.height, "viewport settled");
                    self.viewport = viewport;
                }
                Cmd::none()
            }
            Msg::PointerMoved(pointer) => {
                self.hover = Some(pointer);
                Cmd::none()
            }
            Msg::PointerLeft => {
                self.hover = None;
                Cmd::none()
            }
        }
    }

    fn view(&self, scene: &mut Scene) {
        // The initial load replaces the whole grid with an indicator; an
        // applied (filter-change) fetch keeps the previous frame visible.
        if self.state.fetching_charts && !self.state.applied_fetch {
            scene.push(DrawCommand::text(
                PxPoint::new(self.viewport.width / 2.0, self.viewport.height / 2.0),
                "Loading...",
                TextAnchor::Middle,
            ));
            return;
        }

        let widgets = &self.state.charts;
        let mut y = 0.0;
        for row in pack(widgets, COLUMN_GAP_PERCENT) {
            let height = row.geometry.row_height_px(self.viewport);
            let rects = row
                .geometry
                .column_rects(0.0, y, self.viewport.width, height);
            for (&index, rect) in row.ordered(widgets).iter().zip(&rects) {
                self.render_widget(&widgets[index], *rect, scene);
            }
            y += height + ROW_GAP_PX;
        }
    }
}

impl Dashboard {
    fn render_widget(&self, widget: &crate::dispatch::ResolvedWidget, area: PxRect, scene: &mut Scene) {
        if !widget.title.is_empty() {
            scene.push(DrawCommand::sized_text(
                PxPoint::new(area.x, area.y + 16.0),
                widget.title.clone(),
                TextAnchor::Start,
                16.0,
            ));
        }
        if !widget.has_data() {
            Placeholder::new().render(area, scene);
            return;
        }
        match &widget.model {
            Some(WidgetModel::Card {
                value,
                description,
                unit_of_measurement,
            }) => {
                Card::new(value.clone(), description.clone(), unit_of_measurement.clone())
                    .render(area, scene);
            }
            Some(WidgetModel::Donut { slices }) => DonutChart::new(slices).render(area, scene),
            Some(WidgetModel::Bar { data }) => {
                let mut chart = BarChart::new(data).hover(self.hover);
                if !widget.title.is_empty() {
                    chart = chart.y_label(&widget.title);
                }
                chart.render(area, scene);
            }
            Some(WidgetModel::Table { rows }) => {
                TopicTable::new(&TABLE_COLUMNS, rows).render(area, scene);
            }
            Some(WidgetModel::WordCloud { words }) => WordCloud::new(words).render(area, scene),
            // Unrecognized widget type: title only.
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Program;
    use serde_json::json;
    use std::sync::Mutex;

    struct MockSource {
        filters: Mutex<Result<Vec<RawFilterEntry>, FetchError>>,
        charts: Mutex<Result<Vec<RawChartEntry>, FetchError>>,
        filtered_calls: Mutex<Vec<SelectedFilters>>,
    }

    impl MockSource {
        fn ok(filters: serde_json::Value, charts: serde_json::Value) -> Self {
            Self {
                filters: Mutex::new(Ok(serde_json::from_value(filters).unwrap())),
                charts: Mutex::new(Ok(serde_json::from_value(charts).unwrap())),
                filtered_calls: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                filters: Mutex::new(Ok(Vec::new())),
                charts: Mutex::new(Err(FetchError::Network("connection refused".into()))),
                filtered_calls: Mutex::new(Vec::new()),
            }
        }
    }

    fn clone_result<T: Clone>(r: &Result<T, FetchError>) -> Result<T, FetchError> {
        match r {
            Ok(v) => Ok(v.clone()),
            Err(FetchError::Network(m)) => Err(FetchError::Network(m.clone())),
            Err(FetchError::Decode(m)) => Err(FetchError::Decode(m.clone())),
        }
    }

    impl DataSource for MockSource {
        fn fetch_chart_data(&self) -> Result<Vec<RawChartEntry>, FetchError> {
            clone_result(&self.charts.lock().unwrap())
        }

        fn fetch_chart_data_with_filters(
            &self,
            selected_filters: &SelectedFilters,
        ) -> Result<Vec<RawChartEntry>, FetchError> {
            self.filtered_calls
                .lock()
                .unwrap()
                .push(selected_filters.clone());
            clone_result(&self.charts.lock().unwrap())
        }

        fn fetch_filter_data(&self) -> Result<Vec<RawFilterEntry>, FetchError> {
            clone_result(&self.filters.lock().unwrap())
        }
    }

    fn config() -> DashboardConfig {
        DashboardConfig::from_json(
            r#"{
                "charts": [
                    {"id": "TOPICS", "name": "Topics", "type": "bar",
                     "layout": {"row": 1, "column": 1}}
                ],
                "accepted_filters": ["Topic", "Sentiment"],
                "default_filters": {"Sentiment": ["all"]}
            }"#,
        )
        .unwrap()
    }

    fn source() -> Arc<MockSource> {
        Arc::new(MockSource::ok(
            json!([
                {"filter_name": "Topic", "filter_values": ["Billing"]},
                {"filter_name": "Agent", "filter_values": ["a1"]}
            ]),
            json!([{
                "id": "TOPICS",
                "chart_name": "Topics by Duration",
                "chart_value": [{"name": "Billing", "value": 12}]
            }]),
        ))
    }

    fn settled_program(source: Arc<MockSource>) -> Program<Dashboard> {
        let dashboard = Dashboard::new(config(), source, Viewport::new(1200.0, 800.0));
        let mut program = Program::new(dashboard);
        program.start();
        program.run_until_settled(Duration::from_secs(2));
        program
    }

    #[test]
    fn startup_fetches_filters_then_charts() {
        let program = settled_program(source());
        let state = program.model().state();
        assert!(state.filters_meta_fetched);
        assert!(state.initial_charts_fetched);
        assert!(!state.fetching_charts);
        assert_eq!(state.charts.len(), 1);
        assert_eq!(state.charts[0].title, "Topics by Duration");
        // The "Agent" filter is not in the allow-list.
        assert!(state.filters_meta.contains_key("Topic"));
        assert!(!state.filters_meta.contains_key("Agent"));
    }

    #[test]
    fn sentiment_all_fetches_unrestricted() {
        let source = source();
        let program = settled_program(Arc::clone(&source));
        // Default selection was {"Sentiment": ["all"]}: normalized to
        // unrestricted, so the filtered endpoint was never hit.
        assert!(source.filtered_calls.lock().unwrap().is_empty());
        assert!(!program.model().state().charts.is_empty());
    }

    #[test]
    fn apply_filters_hits_filtered_endpoint() {
        let source = source();
        let mut program = settled_program(Arc::clone(&source));
        let mut selected = SelectedFilters::new();
        selected.insert("Topic".to_string(), vec!["Billing".to_string()]);
        program.process(Msg::ApplyFilters(selected.clone()));
        program.run_until_settled(Duration::from_secs(2));
        assert_eq!(*source.filtered_calls.lock().unwrap(), vec![selected]);
        assert!(!program.model().state().applied_fetch);
    }

    #[test]
    fn failed_fetch_clears_grid_without_panicking() {
        let program = settled_program(Arc::new(MockSource::failing()));
        let state = program.model().state();
        assert!(state.charts.is_empty());
        assert!(!state.fetching_charts);
        assert!(state.initial_charts_fetched);
    }

    #[test]
    fn stale_chart_result_is_discarded() {
        let source = source();
        let mut program = settled_program(Arc::clone(&source));
        let live = program.model().current_token;
        program.process(Msg::ChartsFetched {
            token: live.wrapping_sub(1),
            result: Ok(Vec::new()),
        });
        // The stale empty payload must not replace the accepted charts.
        assert_eq!(program.model().state().charts.len(), 1);
    }

    #[test]
    fn resize_applies_after_settle() {
        let mut program = settled_program(source());
        program.process(Msg::ViewportResized {
            width: 480.0,
            height: 800.0,
        });
        program.run_until_settled(Duration::from_secs(2));
        assert_eq!(program.model().viewport().width, 480.0);
    }

    #[test]
    fn empty_config_fetches_nothing() {
        let dashboard = Dashboard::new(
            DashboardConfig::default(),
            source(),
            Viewport::new(1200.0, 800.0),
        );
        let mut program = Program::new(dashboard);
        program.start();
        program.run_until_settled(Duration::from_millis(200));
        assert!(!program.model().state().filters_meta_fetched);
    }

    #[test]
    fn settled_frame_contains_widget_title() {
        let program = settled_program(source());
        let texts: Vec<&str> = program
            .scene()
            .commands()
            .iter()
            .filter_map(|c| c.as_text())
            .collect();
        assert!(texts.contains(&"Topics by Duration"));
    }

    #[test]
    fn hover_over_bar_produces_tooltip() {
        let mut program = settled_program(source());
        // Single widget in a full-width row: the bar starts at the wide
        // left margin (180) at y >= top margin; hover inside the plot.
        program.process(Msg::PointerMoved(PxPoint::new(200.0, 100.0)));
        assert_eq!(program.scene().tooltip_count(), 1);
        program.process(Msg::PointerLeft);
        assert_eq!(program.scene().tooltip_count(), 0);
    }
}
