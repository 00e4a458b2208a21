#![forbid(unsafe_code)]

//! Dashboard composition for vizgrid.
//!
//! This crate joins the declarative layout configuration with per-widget
//! backend payloads and drives the render loop:
//!
//! - [`config`] - layout configuration, validation, DOM-safe ids
//! - [`data`] - raw API payload types and the [`DataSource`](data::DataSource) seam
//! - [`model`] - typed per-renderer view models with explicit coercion
//! - [`dispatch`] - the config/data join producing [`ResolvedWidget`](dispatch::ResolvedWidget)s
//! - [`pack`] - row grouping and per-row grid geometry
//! - [`state`] - dashboard state mutated only through [`Action`](state::Action)s
//! - [`runtime`] - Elm-style [`Model`](runtime::Model)/[`Cmd`](runtime::Cmd)
//!   loop with background tasks over a single channel
//! - [`shell`] - the [`Dashboard`](shell::Dashboard) orchestrator

pub mod config;
pub mod data;
pub mod dispatch;
pub mod model;
pub mod pack;
pub mod runtime;
pub mod shell;
pub mod state;

pub use config::{ConfigError, DashboardConfig, LayoutSpec, WidgetConfig, WidgetKind};
pub use data::{DataSource, FetchError, RawChartEntry, RawDataRecord, RawFilterEntry, SelectedFilters};
pub use dispatch::{ResolvedWidget, resolve};
pub use model::{CoercionReport, FieldFailure, WidgetModel};
pub use pack::{GridGeometry, RowGroup, pack};
pub use runtime::{Cmd, Model, Program};
pub use shell::{Dashboard, Msg};
pub use state::{Action, DashboardState};
