#![forbid(unsafe_code)]

//! Vizgrid public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use vizgrid_core::{
    BandScale, LinearScale, Margins, PxPoint, PxRect, Rgba, SequentialScale, TruncatedLabel,
    Viewport, truncate_label,
};

// --- Scene re-exports ------------------------------------------------------

pub use vizgrid_scene::{DrawCommand, HitRegion, Scene, TextAnchor, Tooltip};

// --- Widget re-exports -----------------------------------------------------

pub use vizgrid_widgets::{
    BarChart, BarDatum, Card, CloudWord, DonutChart, DonutSlice, Placeholder, TopicTable, Widget,
    WordCloud,
};

// --- App re-exports --------------------------------------------------------

pub use vizgrid_app::{
    Action, Cmd, ConfigError, Dashboard, DashboardConfig, DashboardState, DataSource, FetchError,
    Model, Msg, Program, ResolvedWidget, SelectedFilters, WidgetConfig, WidgetKind, WidgetModel,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for vizgrid apps.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// A data fetch failed.
    Fetch(FetchError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Fetch(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

/// Standard result type for vizgrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BarChart, BarDatum, Cmd, Dashboard, DashboardConfig, DataSource, DrawCommand, Error,
        Model, Msg, Program, PxPoint, PxRect, Result, Scene, Viewport, Widget,
    };

    pub use crate::{app, core, scene, widgets};
}

pub use vizgrid_app as app;
pub use vizgrid_core as core;
pub use vizgrid_scene as scene;
pub use vizgrid_widgets as widgets;
