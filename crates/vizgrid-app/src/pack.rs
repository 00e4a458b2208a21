#![forbid(unsafe_code)]

//! Row grouping and per-row grid geometry.
//!
//! Widgets group into rows by their declared row key, in first-seen order;
//! within a row they sort by column at render time. Each row derives one
//! [`GridGeometry`]: column fractions from declared percentage widths (the
//! remainder split evenly) and a row height in viewport-height units with a
//! fixed pixel fallback.

use vizgrid_core::{PxRect, Viewport};

use crate::dispatch::ResolvedWidget;

/// Default gap between columns as a percentage of the row width.
pub const COLUMN_GAP_PERCENT: f64 = 1.0;

/// Horizontal track layout and height for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    /// Per-column width fractions, summing to 1.0 (gaps excluded).
    pub columns: Vec<f64>,
    pub gap_percent: f64,
    /// Declared row height; `None` falls back to the default pixel height.
    pub height_vh: Option<u32>,
}

impl GridGeometry {
    /// Row height in pixels for the given viewport.
    pub fn row_height_px(&self, viewport: Viewport) -> f64 {
        viewport.row_height_px(self.height_vh)
    }

    /// Lay the columns out across `container_width` pixels starting at
    /// `(x, y)`, leaving `gap_percent` of the width between tracks.
    pub fn column_rects(&self, x: f64, y: f64, container_width: f64, height: f64) -> Vec<PxRect> {
        if self.columns.is_empty() || container_width <= 0.0 {
            return Vec::new();
        }
        let gap = container_width * self.gap_percent / 100.0;
        let gaps_total = gap * (self.columns.len().saturating_sub(1)) as f64;
        let usable = (container_width - gaps_total).max(0.0);

        let mut rects = Vec::with_capacity(self.columns.len());
        let mut cursor = x;
        for fraction in &self.columns {
            let width = usable * fraction;
            rects.push(PxRect::new(cursor, y, width, height));
            cursor += width + gap;
        }
        rects
    }
}

/// One row of the dashboard: member indices into the resolved widget list,
/// in declaration order, plus the row's derived geometry.
#[derive(Debug, Clone)]
pub struct RowGroup {
    pub key: String,
    pub members: Vec<usize>,
    pub geometry: GridGeometry,
}

impl RowGroup {
    /// Member indices sorted by declared column. The sort is stable, so
    /// widgets sharing a column keep declaration order.
    pub fn ordered(&self, widgets: &[ResolvedWidget]) -> Vec<usize> {
        let mut ordered = self.members.clone();
        ordered.sort_by_key(|&i| widgets[i].config.layout.col);
        ordered
    }
}

/// Group resolved widgets into rows, first-seen order, and derive each
/// row's geometry.
pub fn pack(widgets: &[ResolvedWidget], gap_percent: f64) -> Vec<RowGroup> {
    let mut rows: Vec<(String, Vec<usize>)> = Vec::new();

    for (index, widget) in widgets.iter().enumerate() {
        let key = widget.config.layout.row.to_string();
        match rows.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(index),
            None => rows.push((key, vec![index])),
        }
    }

    rows.into_iter()
        .map(|(key, members)| {
            let geometry = derive_geometry(&members, widgets, gap_percent);
            RowGroup { key, members, geometry }
        })
        .collect()
}

fn derive_geometry(
    members: &[usize],
    widgets: &[ResolvedWidget],
    gap_percent: f64,
) -> GridGeometry {
    let declared: Vec<Option<f64>> = members
        .iter()
        .map(|&i| {
            widgets[i]
                .config
                .layout
                .width
                .filter(|w| w.is_finite() && *w > 0.0)
        })
        .collect();

    let explicit_sum: f64 = declared.iter().flatten().sum();
    let unsized_count = declared.iter().filter(|w| w.is_none()).count();
    let remainder = (100.0 - explicit_sum).max(0.0);
    let even_share = if unsized_count > 0 {
        remainder / unsized_count as f64
    } else {
        0.0
    };

    let mut columns: Vec<f64> = declared
        .iter()
        .map(|w| w.unwrap_or(even_share))
        .collect();
    let total: f64 = columns.iter().sum();
    if total > 0.0 {
        for c in &mut columns {
            *c /= total;
        }
    } else {
        // Every declared width was zero or invalid: split evenly.
        let even = 1.0 / columns.len().max(1) as f64;
        columns.iter_mut().for_each(|c| *c = even);
    }

    let height_vh = members
        .iter()
        .filter_map(|&i| widgets[i].config.layout.height_vh)
        .max();

    GridGeometry {
        columns,
        gap_percent,
        height_vh,
    }
}
