#![forbid(unsafe_code)]

//! Responsive horizontal bar chart.
//!
//! The exemplar of the chart pipeline: measurement fallback, breakpoint
//! label truncation, linear/band/sequential scales, a top quantitative axis
//! with unit-suffixed ticks, a left categorical axis, rounded bar marks, and
//! a pointer-following tooltip showing the untruncated label.

use vizgrid_core::scale::{BandScale, LinearScale, SequentialScale};
use vizgrid_core::truncate::{LABEL_BREAKPOINT_PX, TruncatedLabel, truncate_label};
use vizgrid_core::{Margins, PxPoint, PxRect};
use vizgrid_scene::scene::HitRegion;
use vizgrid_scene::{DrawCommand, Scene, TextAnchor, Tooltip};

use crate::Widget;

/// Width assumed when the container could not be measured.
const FALLBACK_WIDTH: f64 = 200.0;

/// Vertical space reserved above the plot for the widget title chrome.
const TITLE_GUTTER: f64 = 40.0;

/// Horizontal deduction compensating for scrollbar/border chrome.
const WIDTH_OFFSET: f64 = 25.0;

/// Left margin above the width breakpoint (room for longer labels).
const LEFT_MARGIN_WIDE: f64 = 180.0;

/// Left margin at or below the width breakpoint.
const LEFT_MARGIN_NARROW: f64 = 120.0;

const MARGIN_TOP: f64 = 40.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;

/// Fractional padding between category bands.
const BAND_PADDING: f64 = 0.2;

/// Corner radius of each bar mark.
const CORNER_RADIUS: f64 = 8.0;

/// Number of intervals on the value axis.
const TICK_COUNT: usize = 5;

/// Length of a tick stroke, in pixels.
const TICK_LEN: f64 = 6.0;

/// Gap between the category axis and its labels.
const CATEGORY_LABEL_PAD: f64 = 8.0;

/// Inset of the rotated y-axis title from the plot's left edge.
const Y_TITLE_INSET: f64 = 60.0;

/// One bar: a category label and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub category: String,
    pub value: f64,
}

impl BarDatum {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

/// Horizontal bar chart widget.
#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    data: &'a [BarDatum],
    y_label: Option<&'a str>,
    hover: Option<PxPoint>,
}

impl<'a> BarChart<'a> {
    pub fn new(data: &'a [BarDatum]) -> Self {
        Self {
            data,
            y_label: None,
            hover: None,
        }
    }

    /// Set the optional y-axis title, drawn rotated -90 degrees.
    pub fn y_label(mut self, label: &'a str) -> Self {
        self.y_label = Some(label);
        self
    }

    /// Provide the current pointer position for hover resolution.
    pub fn hover(mut self, pointer: Option<PxPoint>) -> Self {
        self.hover = pointer;
        self
    }

    fn margins(container_width: f64) -> Margins {
        let left = if container_width > LABEL_BREAKPOINT_PX {
            LEFT_MARGIN_WIDE
        } else {
            LEFT_MARGIN_NARROW
        };
        Margins::new(MARGIN_TOP, MARGIN_RIGHT, MARGIN_BOTTOM, left)
    }
}

/// Format a tick value with the minutes unit suffix.
fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}min", value.round() as i64)
    } else {
        format!("{value:.1}min")
    }
}

impl Widget for BarChart<'_> {
    fn render(&self, area: PxRect, scene: &mut Scene) {
        if self.data.is_empty() || area.height <= 0.0 {
            return;
        }

        let container_width = if area.width.is_finite() && area.width > 0.0 {
            area.width
        } else {
            FALLBACK_WIDTH
        };

        let labels: Vec<TruncatedLabel> = self
            .data
            .iter()
            .map(|d| truncate_label(&d.category, container_width))
            .collect();

        let adjusted_height = area.height - TITLE_GUTTER;
        let margins = Self::margins(container_width);
        let inner_width =
            (container_width - margins.horizontal() - WIDTH_OFFSET).max(0.0);
        let band_range = (adjusted_height - margins.vertical()).max(0.0);

        // Plot origin, in dashboard coordinates.
        let origin = PxPoint::new(area.x + margins.left, area.y + margins.top);

        let values: Vec<f64> = self.data.iter().map(|d| d.value).collect();
        let x = LinearScale::from_values(&values, inner_width);
        let y = BandScale::new(self.data.len(), band_range, BAND_PADDING);
        let color = SequentialScale::new(x.domain_max());

        // Top quantitative axis: spine, ticks, unit-suffixed labels.
        scene.push(DrawCommand::Line {
            from: origin,
            to: PxPoint::new(origin.x + inner_width, origin.y),
        });
        for tick in x.ticks(TICK_COUNT) {
            let tx = origin.x + x.map(tick);
            scene.push(DrawCommand::Line {
                from: PxPoint::new(tx, origin.y),
                to: PxPoint::new(tx, origin.y - TICK_LEN),
            });
            scene.push(DrawCommand::text(
                PxPoint::new(tx, origin.y - TICK_LEN - 2.0),
                format_tick(tick),
                TextAnchor::Middle,
            ));
        }

        // Left categorical axis: spine plus one (possibly truncated) label
        // per band, vertically centered on it.
        scene.push(DrawCommand::Line {
            from: origin,
            to: PxPoint::new(origin.x, origin.y + band_range),
        });
        for (i, label) in labels.iter().enumerate() {
            let Some(band_y) = y.position(i) else { break };
            scene.push(DrawCommand::text(
                PxPoint::new(
                    origin.x - CATEGORY_LABEL_PAD,
                    origin.y + band_y + y.bandwidth() / 2.0,
                ),
                label.display.clone(),
                TextAnchor::End,
            ));
        }

        // Bar marks, with a hit region per bar. Hover resolves against the
        // full band-height rect so thin bars stay hoverable.
        for (i, datum) in self.data.iter().enumerate() {
            let Some(band_y) = y.position(i) else { break };
            let rect = PxRect::new(
                origin.x,
                origin.y + band_y,
                x.map(datum.value),
                y.bandwidth(),
            );
            scene.push(DrawCommand::Bar {
                rect,
                fill: color.map(datum.value),
                corner_radius: CORNER_RADIUS,
            });
            let region = HitRegion {
                rect,
                label: labels[i].full.clone(),
                value: datum.value,
            };
            if let Some(pointer) = self.hover
                && region.rect.contains(pointer)
            {
                scene.set_tooltip(Tooltip::at_pointer(
                    region.label.clone(),
                    region.value,
                    pointer,
                ));
            }
            scene.push_hit_region(region);
        }

        // Optional y-axis title, rotated and vertically centered.
        if let Some(title) = self.y_label {
            scene.push(DrawCommand::Text {
                position: PxPoint::new(
                    origin.x - Y_TITLE_INSET,
                    area.y + margins.top + adjusted_height / 2.0,
                ),
                content: title.to_string(),
                anchor: TextAnchor::Middle,
                rotation_deg: -90.0,
                font_size: vizgrid_scene::DEFAULT_FONT_SIZE,
                color: None,
            });
        }
    }
}
