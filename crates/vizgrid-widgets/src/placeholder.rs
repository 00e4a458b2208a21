#![forbid(unsafe_code)]

//! "No data" placeholder.

use vizgrid_core::{PxPoint, PxRect};
use vizgrid_scene::{DrawCommand, Scene, TextAnchor};

/// Vertical chrome deducted from the allotted height, matching the gutter
/// the real renderers reserve for the widget title.
const CHROME_HEIGHT: f64 = 40.0;

const MESSAGE: &str = "No data to display";

/// Placeholder substituted for any widget whose data set is empty.
///
/// Sized to the allotted height minus the title chrome, so it occupies
/// exactly the space the real renderer would have.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholder;

impl Placeholder {
    pub fn new() -> Self {
        Self
    }

    /// The inner box the placeholder occupies within the widget area.
    pub fn inner_box(area: PxRect) -> PxRect {
        PxRect::new(
            area.x,
            area.y,
            area.width,
            (area.height - CHROME_HEIGHT).max(0.0),
        )
    }
}

impl crate::Widget for Placeholder {
    fn render(&self, area: PxRect, scene: &mut Scene) {
        let inner = Self::inner_box(area);
        if inner.is_empty() {
            return;
        }
        scene.push(DrawCommand::text(
            PxPoint::new(inner.x + inner.width / 2.0, inner.y + inner.height / 2.0),
            MESSAGE,
            TextAnchor::Middle,
        ));
    }
}
