#![forbid(unsafe_code)]

//! Declarative layout configuration.
//!
//! The config loader is the single place widget entries are validated:
//! entries without an id or a row are configuration defects and are dropped
//! here with a diagnostic, so the dispatcher and packer downstream never see
//! them. Dropping is deliberate - one bad entry must not take the dashboard
//! down.

use std::fmt;

use serde::Deserialize;
use tracing::warn;

use crate::data::SelectedFilters;

/// Renderer family a widget routes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    Card,
    DonutChart,
    Bar,
    Table,
    WordCloud,
    /// Unrecognized type, kept verbatim for diagnostics. Renders nothing;
    /// the dashboard must stay usable with future widget types present.
    Other(String),
}

impl WidgetKind {
    fn parse(raw: &str) -> Self {
        match raw {
            "card" => Self::Card,
            "donutchart" => Self::DonutChart,
            "bar" => Self::Bar,
            "table" => Self::Table,
            "wordcloud" => Self::WordCloud,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => f.write_str("card"),
            Self::DonutChart => f.write_str("donutchart"),
            Self::Bar => f.write_str("bar"),
            Self::Table => f.write_str("table"),
            Self::WordCloud => f.write_str("wordcloud"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Validated placement of one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub row: i64,
    pub col: i64,
    /// Column width as a percentage of the row, when declared.
    pub width: Option<f64>,
    /// Row height in viewport-height units, when declared and parseable.
    pub height_vh: Option<u32>,
}

/// One validated widget entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub id: String,
    /// DOM-safe derivation of `id`: whitespace runs collapsed to `_`,
    /// upper-cased. Stable key for geometry lookups; unique per render pass.
    pub dom_id: String,
    pub kind: WidgetKind,
    /// Config-declared title, the fallback when the API provides none.
    pub name: String,
    pub layout: LayoutSpec,
}

/// The whole dashboard layout, plus filter policy.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    pub charts: Vec<WidgetConfig>,
    /// Allow-list applied to fetched filter metadata.
    pub accepted_filters: Vec<String>,
    /// Filter selection used for the initial data fetch.
    pub default_filters: SelectedFilters,
}

/// Configuration could not be loaded at all.
///
/// Per-entry defects are not errors; they are logged and the entry is
/// dropped.
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON or has the wrong overall shape.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "config parse error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ===== Raw (pre-validation) shapes =====

#[derive(Debug, Deserialize)]
struct RawDashboardConfig {
    #[serde(default)]
    charts: Vec<RawWidgetConfig>,
    #[serde(default)]
    accepted_filters: Vec<String>,
    #[serde(default)]
    default_filters: SelectedFilters,
}

#[derive(Debug, Deserialize)]
struct RawWidgetConfig {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    layout: Option<RawLayout>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLayout {
    #[serde(default)]
    row: Option<i64>,
    #[serde(default, alias = "col")]
    column: Option<i64>,
    #[serde(default)]
    width: Option<f64>,
    /// Height in vh; accepts a number or a numeric string.
    #[serde(default)]
    height: Option<serde_json::Value>,
}

/// Derive the DOM-safe id: whitespace runs become `_`, then upper-case.
pub fn dom_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut in_space = false;
    for ch in id.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out.to_uppercase()
}

fn parse_height_vh(raw: Option<&serde_json::Value>) -> Option<u32> {
    match raw? {
        serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        serde_json::Value::String(s) => {
            // Tolerate a unit suffix ("30vh"): parse the leading integer.
            let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

impl DashboardConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawDashboardConfig = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawDashboardConfig) -> Self {
        let mut charts = Vec::with_capacity(raw.charts.len());
        let mut seen_dom_ids: Vec<String> = Vec::new();

        for entry in raw.charts {
            let Some(id) = entry.id.as_deref().filter(|id| !id.is_empty()) else {
                warn!("widget config without id dropped: {entry:?}");
                continue;
            };
            let layout = entry.layout.unwrap_or_default();
            let Some(row) = layout.row else {
                warn!(widget = id, "widget config without layout.row dropped");
                continue;
            };

            let dom_id = dom_id(id);
            if seen_dom_ids.contains(&dom_id) {
                warn!(widget = id, %dom_id, "duplicate dom id; keeping first entry");
                continue;
            }
            seen_dom_ids.push(dom_id.clone());

            charts.push(WidgetConfig {
                id: id.to_string(),
                dom_id,
                kind: WidgetKind::parse(entry.kind.as_deref().unwrap_or("")),
                name: entry.name.unwrap_or_default(),
                layout: LayoutSpec {
                    row,
                    col: layout.column.unwrap_or(0),
                    width: layout.width,
                    height_vh: parse_height_vh(layout.height.as_ref()),
                },
            });
        }

        Self {
            charts,
            accepted_filters: raw.accepted_filters,
            default_filters: raw.default_filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "charts": [
            {"id": "total calls", "name": "Total Calls", "type": "card",
             "layout": {"row": 1, "column": 1, "width": 25}},
            {"id": "SENTIMENT", "type": "donutchart",
             "layout": {"row": 1, "column": 2, "height": "30vh"}},
            {"id": "TOPICS", "type": "bar", "layout": {"row": 2, "column": 1, "height": 45}},
            {"id": "FUTURE", "type": "hologram", "layout": {"row": 2, "column": 2}}
        ],
        "accepted_filters": ["Topic", "Sentiment"],
        "default_filters": {"Sentiment": ["all"]}
    }"#;

    #[test]
    fn loads_and_validates() {
        let config = DashboardConfig::from_json(CONFIG).unwrap();
        assert_eq!(config.charts.len(), 4);
        assert_eq!(config.accepted_filters, vec!["Topic", "Sentiment"]);
        assert_eq!(config.default_filters["Sentiment"], vec!["all"]);
    }

    #[test]
    fn dom_id_collapses_whitespace_and_uppercases() {
        assert_eq!(dom_id("total calls"), "TOTAL_CALLS");
        assert_eq!(dom_id("a \t b"), "A_B");
        assert_eq!(dom_id("Chart"), "CHART");
    }

    #[test]
    fn unknown_type_is_preserved_not_rejected() {
        let config = DashboardConfig::from_json(CONFIG).unwrap();
        assert_eq!(
            config.charts[3].kind,
            WidgetKind::Other("hologram".to_string())
        );
    }

    #[test]
    fn height_accepts_number_or_suffixed_string() {
        let config = DashboardConfig::from_json(CONFIG).unwrap();
        assert_eq!(config.charts[1].layout.height_vh, Some(30));
        assert_eq!(config.charts[2].layout.height_vh, Some(45));
        assert_eq!(config.charts[0].layout.height_vh, None);
    }

    #[test]
    fn missing_id_or_row_drops_entry() {
        let json = r#"{"charts": [
            {"name": "anonymous", "type": "card", "layout": {"row": 1, "column": 1}},
            {"id": "NO_ROW", "type": "card", "layout": {"column": 1}},
            {"id": "OK", "type": "card", "layout": {"row": 1, "column": 2}}
        ]}"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.charts.len(), 1);
        assert_eq!(config.charts[0].id, "OK");
    }

    #[test]
    fn duplicate_dom_id_keeps_first() {
        let json = r#"{"charts": [
            {"id": "a b", "type": "card", "layout": {"row": 1, "column": 1}},
            {"id": "A B", "type": "card", "layout": {"row": 1, "column": 2}}
        ]}"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.charts.len(), 1);
        assert_eq!(config.charts[0].layout.col, 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(DashboardConfig::from_json("not json").is_err());
    }
}
