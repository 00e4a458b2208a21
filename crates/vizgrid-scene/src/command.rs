#![forbid(unsafe_code)]

//! Draw command vocabulary.

use vizgrid_core::{PxPoint, PxRect, Rgba};

/// Default font size for text commands, in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Horizontal anchor for text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// One retained drawing operation.
///
/// Commands are emitted in paint order; a host adapter replays them onto
/// whatever surface it owns (canvas, SVG, test buffer).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle with rounded corners; the bar mark.
    Bar {
        rect: PxRect,
        fill: Rgba,
        corner_radius: f64,
    },
    /// An annular sector; one donut slice.
    Arc {
        center: PxPoint,
        outer_radius: f64,
        inner_radius: f64,
        /// Start angle in radians, clockwise from 12 o'clock.
        start_angle: f64,
        /// End angle in radians, clockwise from 12 o'clock.
        end_angle: f64,
        fill: Rgba,
    },
    /// A straight line segment; axis spines, tick strokes, table rules.
    Line { from: PxPoint, to: PxPoint },
    /// Anchored text, optionally rotated around its position.
    Text {
        position: PxPoint,
        content: String,
        anchor: TextAnchor,
        /// Rotation in degrees, counterclockwise. `-90.0` for axis titles.
        rotation_deg: f64,
        font_size: f64,
        /// Explicit fill; `None` means the host's default text color.
        color: Option<Rgba>,
    },
}

impl DrawCommand {
    /// Unrotated text at the default font size.
    pub fn text(position: PxPoint, content: impl Into<String>, anchor: TextAnchor) -> Self {
        Self::Text {
            position,
            content: content.into(),
            anchor,
            rotation_deg: 0.0,
            font_size: DEFAULT_FONT_SIZE,
            color: None,
        }
    }

    /// Unrotated text at an explicit font size.
    pub fn sized_text(
        position: PxPoint,
        content: impl Into<String>,
        anchor: TextAnchor,
        font_size: f64,
    ) -> Self {
        Self::Text {
            position,
            content: content.into(),
            anchor,
            rotation_deg: 0.0,
            font_size,
            color: None,
        }
    }

    /// Unrotated text with an explicit size and fill color.
    pub fn colored_text(
        position: PxPoint,
        content: impl Into<String>,
        anchor: TextAnchor,
        font_size: f64,
        color: Rgba,
    ) -> Self {
        Self::Text {
            position,
            content: content.into(),
            anchor,
            rotation_deg: 0.0,
            font_size,
            color: Some(color),
        }
    }

    /// The text content, if this command draws text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// The bar rectangle, if this command draws a bar mark.
    pub fn as_bar(&self) -> Option<&PxRect> {
        match self {
            Self::Bar { rect, .. } => Some(rect),
            _ => None,
        }
    }

    /// Whether this command draws a donut slice.
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }
}
