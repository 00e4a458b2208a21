#![forbid(unsafe_code)]

//! Retained drawing surface for vizgrid.
//!
//! Renderers are pure functions from view models to draw commands; this
//! crate owns the command vocabulary and the [`Scene`] they draw into. The
//! scene bundles the command list with singleton metadata (the tooltip slot)
//! and pointer hit regions, so a host adapter can present a frame and route
//! hover without knowing anything about individual chart types.

pub mod command;
pub mod scene;
pub mod tooltip;

pub use command::{DEFAULT_FONT_SIZE, DrawCommand, TextAnchor};
pub use scene::{HitRegion, Scene};
pub use tooltip::Tooltip;
