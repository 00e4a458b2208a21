#![forbid(unsafe_code)]

//! Geometry, scales, and label policy for vizgrid.
//!
//! This crate holds the pure building blocks the renderers and the layout
//! packer share:
//!
//! - [`geometry`] - pixel rectangles, points, and margins
//! - [`scale`] - linear, banded, and sequential value mappings
//! - [`color`] - RGBA color, interpolation, and the dashboard palettes
//! - [`truncate`] - breakpoint-driven category label truncation
//! - [`viewport`] - viewport-relative unit conversion
//!
//! Everything here is a pure function of its inputs; nothing measures,
//! fetches, or draws.

pub mod color;
pub mod geometry;
pub mod scale;
pub mod truncate;
pub mod viewport;

pub use color::Rgba;
pub use geometry::{Margins, PxPoint, PxRect};
pub use scale::{BandScale, LinearScale, SequentialScale};
pub use truncate::{TruncatedLabel, truncate_label};
pub use viewport::{DEFAULT_ROW_HEIGHT_PX, Viewport};
