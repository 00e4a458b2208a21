#![forbid(unsafe_code)]

//! The config/data join.
//!
//! Each configured widget is matched to its backend payload by id
//! (case-insensitively) and coerced into its typed view model. The join is
//! total over the configuration: a widget with no payload, or with a
//! payload that fails coercion, still resolves - it just renders as a
//! placeholder or with zeroed marks.

use tracing::warn;

use crate::config::{WidgetConfig, WidgetKind};
use crate::data::{RawChartEntry, RawDataRecord};
use crate::model::{CoercionReport, WidgetModel};

/// One widget ready to render: config, resolved title, raw data, and the
/// typed model (when the kind is recognized and data exists).
#[derive(Debug, Clone)]
pub struct ResolvedWidget {
    pub config: WidgetConfig,
    /// Title precedence: API `chart_name`, then config `name`, then empty.
    pub title: String,
    pub data: Vec<RawDataRecord>,
    pub model: Option<WidgetModel>,
    pub coercion: CoercionReport,
}

impl ResolvedWidget {
    /// Whether the widget has records to draw. Drives the placeholder path.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Join configured widgets against the fetched chart entries.
///
/// Output order is configuration order. Entries the config does not name
/// are ignored; configured widgets the API does not name resolve with empty
/// data.
pub fn resolve(configs: &[WidgetConfig], entries: &[RawChartEntry]) -> Vec<ResolvedWidget> {
    configs
        .iter()
        .map(|config| {
            let id_lower = config.id.to_lowercase();
            let entry = entries
                .iter()
                .filter(|e| !e.id.is_empty())
                .find(|e| e.id.to_lowercase() == id_lower);

            let title = entry
                .map(|e| e.chart_name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(&config.name)
                .to_string();

            let data = entry.map(|e| e.chart_value.clone()).unwrap_or_default();

            let (model, coercion) = if data.is_empty() {
                (None, CoercionReport::default())
            } else {
                match WidgetModel::from_records(&config.kind, &data) {
                    Some((model, coercion)) => (Some(model), coercion),
                    None => {
                        if let WidgetKind::Other(raw) = &config.kind {
                            warn!(widget = %config.id, kind = %raw, "unrecognized widget type; rendering nothing");
                        }
                        (None, CoercionReport::default())
                    }
                }
            };

            if !coercion.is_clean() {
                warn!(
                    widget = %config.id,
                    failures = coercion.failures().len(),
                    "coercion failures; affected values drawn as zero"
                );
            }

            ResolvedWidget {
                config: config.clone(),
                title,
                data,
                model,
                coercion,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use serde_json::json;

    fn configs() -> Vec<WidgetConfig> {
        DashboardConfig::from_json(
            r#"{"charts": [
                {"id": "TOTAL_CALLS", "name": "Total Calls", "type": "card",
                 "layout": {"row": 1, "column": 1}},
                {"id": "topics", "name": "Topics", "type": "bar",
                 "layout": {"row": 2, "column": 1}}
            ]}"#,
        )
        .unwrap()
        .charts
    }

    fn entry(id: &str, name: &str, values: serde_json::Value) -> RawChartEntry {
        serde_json::from_value(json!({
            "id": id,
            "chart_name": name,
            "chart_value": values,
        }))
        .unwrap()
    }

    #[test]
    fn joins_case_insensitively_in_config_order() {
        let entries = vec![
            entry("TOPICS", "Topics by Duration", json!([{"name": "Billing", "value": 5}])),
            entry("total_calls", "", json!([{"name": "Total", "value": 128}])),
        ];
        let resolved = resolve(&configs(), &entries);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].config.id, "TOTAL_CALLS");
        assert!(resolved[0].has_data());
        assert!(resolved[1].has_data());
        assert!(matches!(resolved[1].model, Some(WidgetModel::Bar { .. })));
    }

    #[test]
    fn title_prefers_api_name_then_config_then_empty() {
        let entries = vec![
            entry("TOPICS", "Topics by Duration", json!([{"name": "a", "value": 1}])),
            entry("TOTAL_CALLS", "", json!([{"name": "Total", "value": 128}])),
        ];
        let resolved = resolve(&configs(), &entries);
        assert_eq!(resolved[1].title, "Topics by Duration");
        assert_eq!(resolved[0].title, "Total Calls");

        let mut anonymous = configs();
        anonymous[0].name.clear();
        let resolved = resolve(&anonymous, &[]);
        assert_eq!(resolved[0].title, "");
    }

    #[test]
    fn missing_entry_resolves_with_empty_data() {
        let resolved = resolve(&configs(), &[]);
        assert_eq!(resolved.len(), 2);
        assert!(!resolved[0].has_data());
        assert!(resolved[0].model.is_none());
    }

    #[test]
    fn empty_entry_id_never_matches() {
        let entries = vec![entry("", "ghost", json!([{"name": "x", "value": 1}]))];
        let resolved = resolve(&configs(), &entries);
        assert!(!resolved[0].has_data());
        assert!(!resolved[1].has_data());
    }

    #[test]
    fn unknown_kind_keeps_data_but_no_model() {
        let config = DashboardConfig::from_json(
            r#"{"charts": [
                {"id": "X", "type": "hologram", "layout": {"row": 1, "column": 1}}
            ]}"#,
        )
        .unwrap()
        .charts;
        let entries = vec![entry("X", "X-ray", json!([{"name": "a", "value": 1}]))];
        let resolved = resolve(&config, &entries);
        assert!(resolved[0].has_data());
        assert!(resolved[0].model.is_none());
        assert_eq!(resolved[0].title, "X-ray");
    }
}
