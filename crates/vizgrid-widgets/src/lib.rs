#![forbid(unsafe_code)]

//! Widget renderers for vizgrid.
//!
//! Each renderer is a builder-style value that draws itself into a
//! [`Scene`](vizgrid_scene::Scene) within a given pixel area. Renderers are
//! stateless across invocations: every call is a full redraw from the
//! current inputs, never an incremental update.
//!
//! The horizontal [`BarChart`](bar_chart::BarChart) carries the full
//! responsive pipeline (measurement fallback, label truncation, scales,
//! axes, hover tooltip); the siblings (card, donut, table, word cloud) share
//! the same contract at lower complexity. [`Placeholder`](placeholder::Placeholder)
//! stands in whenever a widget has no data, so real renderers never see
//! empty input.

pub mod bar_chart;
pub mod card;
pub mod donut;
pub mod placeholder;
pub mod table;
pub mod word_cloud;

use vizgrid_core::PxRect;
use vizgrid_scene::Scene;

pub use bar_chart::{BarChart, BarDatum};
pub use card::Card;
pub use donut::{DonutChart, DonutSlice};
pub use placeholder::Placeholder;
pub use table::TopicTable;
pub use word_cloud::{CloudWord, WordCloud};

/// A `Widget` is a renderable dashboard component.
///
/// Widgets render themselves into a `Scene` within a given pixel area. The
/// area's width is the measured container width; the height is the row
/// height allotted by the layout packer.
pub trait Widget {
    /// Render the widget into the scene at the given area.
    fn render(&self, area: PxRect, scene: &mut Scene);
}
