#![forbid(unsafe_code)]

//! End-to-end dashboard flow: configuration in, fetches through the
//! runtime, a settled scene out.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;

use vizgrid_app::{
    Dashboard, DashboardConfig, DataSource, FetchError, Msg, Program, RawChartEntry,
    RawFilterEntry, SelectedFilters,
};
use vizgrid_core::{PxPoint, Viewport};

struct StaticSource {
    filters: Vec<RawFilterEntry>,
    charts: Mutex<Result<Vec<RawChartEntry>, String>>,
}

impl StaticSource {
    fn new(filters: serde_json::Value, charts: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            filters: serde_json::from_value(filters).unwrap(),
            charts: Mutex::new(Ok(serde_json::from_value(charts).unwrap())),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            filters: Vec::new(),
            charts: Mutex::new(Err("backend unavailable".to_string())),
        })
    }

    fn charts(&self) -> Result<Vec<RawChartEntry>, FetchError> {
        match &*self.charts.lock().unwrap() {
            Ok(entries) => Ok(entries.clone()),
            Err(msg) => Err(FetchError::Network(msg.clone())),
        }
    }
}

impl DataSource for StaticSource {
    fn fetch_chart_data(&self) -> Result<Vec<RawChartEntry>, FetchError> {
        self.charts()
    }

    fn fetch_chart_data_with_filters(
        &self,
        _selected_filters: &SelectedFilters,
    ) -> Result<Vec<RawChartEntry>, FetchError> {
        self.charts()
    }

    fn fetch_filter_data(&self) -> Result<Vec<RawFilterEntry>, FetchError> {
        Ok(self.filters.clone())
    }
}

fn config() -> DashboardConfig {
    DashboardConfig::from_json(
        r#"{
            "charts": [
                {"id": "TOPICS", "name": "Topics", "type": "bar",
                 "layout": {"row": 1, "column": 1, "width": 70}},
                {"id": "QUALITY", "name": "Quality Score", "type": "card",
                 "layout": {"row": 1, "column": 2}}
            ],
            "accepted_filters": ["Sentiment"],
            "default_filters": {"Sentiment": ["all"]}
        }"#,
    )
    .unwrap()
}

fn settled(source: Arc<StaticSource>, viewport: Viewport) -> Program<Dashboard> {
    let mut program = Program::new(Dashboard::new(config(), source, viewport));
    program.start();
    program.run_until_settled(Duration::from_secs(2));
    program
}

#[test]
fn widget_with_data_renders_and_widget_without_shows_placeholder() {
    let source = StaticSource::new(
        json!([{"filter_name": "Sentiment", "filter_values": ["all", "positive"]}]),
        json!([{
            "id": "TOPICS",
            "chart_name": "Topics by Duration",
            "chart_value": [
                {"name": "Billing", "value": 12},
                {"name": "Returns", "value": 30}
            ]
        }]),
    );
    let program = settled(source, Viewport::new(1200.0, 800.0));

    let state = program.model().state();
    assert_eq!(state.charts.len(), 2);
    assert!(state.charts[0].has_data());
    assert_eq!(state.charts[0].title, "Topics by Duration");
    // No API entry for QUALITY: config-name title, placeholder body.
    assert!(!state.charts[1].has_data());
    assert_eq!(state.charts[1].title, "Quality Score");

    let texts: Vec<&str> = program
        .scene()
        .commands()
        .iter()
        .filter_map(|c| c.as_text())
        .collect();
    assert!(texts.contains(&"Topics by Duration"));
    assert!(texts.contains(&"Quality Score"));
    assert!(texts.contains(&"No data to display"));
    assert_eq!(
        program
            .scene()
            .commands()
            .iter()
            .filter(|c| c.as_bar().is_some())
            .count(),
        2
    );
}

#[test]
fn narrow_viewport_truncates_axis_label_but_tooltip_shows_it_in_full() {
    let long = "Subscription cancellation requests";
    let source = StaticSource::new(
        json!([]),
        json!([{
            "id": "TOPICS",
            "chart_name": "Topics",
            "chart_value": [{"name": long, "value": 8}]
        }]),
    );
    // 70% of a 480px row is well under the label breakpoint.
    let mut program = settled(source, Viewport::new(480.0, 800.0));

    let axis_label = program
        .scene()
        .commands()
        .iter()
        .filter_map(|c| c.as_text())
        .find(|t| t.starts_with("Subscription"))
        .map(str::to_string)
        .unwrap();
    assert!(axis_label.ends_with("..."));
    assert!(axis_label.len() < long.len());

    // Hover the bar: it starts at the narrow left margin inside the chart
    // column, which itself starts at x = 0.
    let bar = program
        .scene()
        .commands()
        .iter()
        .find_map(|c| c.as_bar().copied())
        .unwrap();
    let pointer = PxPoint::new(bar.left() + 1.0, bar.top() + bar.height / 2.0);
    program.process(Msg::PointerMoved(pointer));

    let tooltip = program.scene().tooltip().unwrap();
    assert_eq!(tooltip.label, long);
    assert_eq!(tooltip.value, 8.0);
}

#[test]
fn repeated_pointer_moves_keep_at_most_one_tooltip() {
    let source = StaticSource::new(
        json!([]),
        json!([{
            "id": "TOPICS",
            "chart_name": "Topics",
            "chart_value": [{"name": "Billing", "value": 5}]
        }]),
    );
    let mut program = settled(source, Viewport::new(1200.0, 800.0));
    let bar = program
        .scene()
        .commands()
        .iter()
        .find_map(|c| c.as_bar().copied())
        .unwrap();
    let inside = PxPoint::new(bar.left() + 2.0, bar.top() + 2.0);
    for _ in 0..5 {
        program.process(Msg::PointerMoved(inside));
        assert_eq!(program.scene().tooltip_count(), 1);
    }
    program.process(Msg::PointerLeft);
    assert_eq!(program.scene().tooltip_count(), 0);
}

#[test]
fn rejected_fetch_settles_into_an_empty_grid() {
    let program = settled(StaticSource::failing(), Viewport::new(1200.0, 800.0));
    let state = program.model().state();
    assert!(state.charts.is_empty());
    assert!(!state.fetching_charts);
    assert!(state.initial_charts_fetched);
    assert_eq!(
        program
            .scene()
            .commands()
            .iter()
            .filter(|c| c.as_bar().is_some())
            .count(),
        0
    );
}
