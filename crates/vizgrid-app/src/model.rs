#![forbid(unsafe_code)]

//! Typed per-renderer view models.
//!
//! Raw backend records are JSON maps; each widget type has an explicit,
//! fallible coercion into the shape its renderer consumes. Coercion never
//! fails the widget: a bad field becomes `0.0` (or an empty string) and is
//! recorded in the [`CoercionReport`], so one malformed record renders as a
//! zero-length mark instead of blanking the chart - and the defect is still
//! visible to diagnostics.

use serde_json::Value;

use vizgrid_core::Rgba;
use vizgrid_core::color::sentiment_color;
use vizgrid_widgets::{BarDatum, CloudWord, DonutSlice};

use crate::config::WidgetKind;
use crate::data::RawDataRecord;

/// Column headers of the topic table.
pub const TABLE_COLUMNS: [&str; 3] = ["Topic", "Frequency", "Sentiment"];

/// Record keys backing the topic table columns, in column order.
const TABLE_KEYS: [&str; 3] = ["name", "call_frequency", "average_sentiment"];

/// A field that failed coercion, by record index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    pub field: &'static str,
    pub index: usize,
}

/// Per-widget record of coercion failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoercionReport {
    failures: Vec<FieldFailure>,
}

impl CoercionReport {
    fn record(&mut self, field: &'static str, index: usize) {
        self.failures.push(FieldFailure { field, index });
    }

    /// Whether every field coerced cleanly.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failed fields.
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }
}

/// The renderer-specific projection of one widget's data.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetModel {
    Card {
        value: String,
        description: String,
        unit_of_measurement: String,
    },
    Donut {
        slices: Vec<DonutSlice>,
    },
    Bar {
        data: Vec<BarDatum>,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    WordCloud {
        words: Vec<CloudWord>,
    },
}

impl WidgetModel {
    /// Build the view model for a widget kind from its raw records.
    ///
    /// Returns `None` for unrecognized kinds - those render nothing. The
    /// caller guarantees `records` is non-empty (the placeholder path
    /// handles empty data before coercion).
    pub fn from_records(
        kind: &WidgetKind,
        records: &[RawDataRecord],
    ) -> Option<(Self, CoercionReport)> {
        let mut report = CoercionReport::default();
        let model = match kind {
            WidgetKind::Card => {
                let first = records.first();
                Self::Card {
                    value: first
                        .and_then(|r| coerce_string(r, "value", 0, &mut report))
                        .unwrap_or_else(|| "0".to_string()),
                    description: first
                        .and_then(|r| coerce_string(r, "name", 0, &mut report))
                        .unwrap_or_default(),
                    unit_of_measurement: first
                        .and_then(|r| coerce_string(r, "unit_of_measurement", 0, &mut report))
                        .unwrap_or_default(),
                }
            }
            WidgetKind::DonutChart => {
                let slices = records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        let label =
                            coerce_string(r, "name", i, &mut report).unwrap_or_default();
                        let value = coerce_f64(r, "value", i, &mut report).trunc();
                        let color: Rgba = sentiment_color(&label.to_lowercase());
                        DonutSlice::new(label, value, color)
                    })
                    .collect();
                Self::Donut { slices }
            }
            WidgetKind::Bar => {
                let data = records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        BarDatum::new(
                            coerce_string(r, "name", i, &mut report).unwrap_or_default(),
                            coerce_f64(r, "value", i, &mut report),
                        )
                    })
                    .collect();
                Self::Bar { data }
            }
            WidgetKind::Table => {
                let mut rows = Vec::with_capacity(records.len());
                for (i, r) in records.iter().enumerate() {
                    let mut row = Vec::with_capacity(TABLE_KEYS.len());
                    for key in TABLE_KEYS {
                        if !r.contains_key(key) {
                            report.record(key, i);
                        }
                        row.push(display_string(r.get(key)));
                    }
                    rows.push(row);
                }
                Self::Table { rows }
            }
            WidgetKind::WordCloud => {
                let words = records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        CloudWord::new(
                            coerce_string(r, "text", i, &mut report).unwrap_or_default(),
                            coerce_f64(r, "size", i, &mut report),
                            coerce_string(r, "average_sentiment", i, &mut report)
                                .unwrap_or_default(),
                        )
                    })
                    .collect();
                Self::WordCloud { words }
            }
            WidgetKind::Other(_) => return None,
        };
        Some((model, report))
    }
}

/// Coerce a field to a display string. Numbers are formatted; anything else
/// is a recorded failure.
fn coerce_string(
    record: &RawDataRecord,
    field: &'static str,
    index: usize,
    report: &mut CoercionReport,
) -> Option<String> {
    match record.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(_) => {
            report.record(field, index);
            None
        }
        None => {
            report.record(field, index);
            None
        }
    }
}

/// Coerce a field to a finite non-negative number; failures become `0.0`.
fn coerce_f64(
    record: &RawDataRecord,
    field: &'static str,
    index: usize,
    report: &mut CoercionReport,
) -> f64 {
    let parsed = match record.get(field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => {
            report.record(field, index);
            0.0
        }
    }
}

/// Best-effort display form for table cells; never fails, non-scalar values
/// show as empty.
fn display_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
