#![forbid(unsafe_code)]

//! Single-value metric card.

use vizgrid_core::{PxPoint, PxRect};
use vizgrid_scene::{DrawCommand, Scene, TextAnchor};

const VALUE_FONT_SIZE: f64 = 32.0;
const UNIT_FONT_SIZE: f64 = 14.0;

/// A headline value with its unit and a one-line description.
///
/// The value is kept as the backend-provided string: cards display counts,
/// durations, and percentages verbatim rather than re-formatting them.
#[derive(Debug, Clone)]
pub struct Card {
    value: String,
    description: String,
    unit_of_measurement: String,
}

impl Card {
    pub fn new(
        value: impl Into<String>,
        description: impl Into<String>,
        unit_of_measurement: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
            unit_of_measurement: unit_of_measurement.into(),
        }
    }
}

impl crate::Widget for Card {
    fn render(&self, area: PxRect, scene: &mut Scene) {
        if area.is_empty() {
            return;
        }
        let center_x = area.x + area.width / 2.0;
        let value_y = area.y + area.height * 0.4;
        let value = if self.unit_of_measurement.is_empty() {
            self.value.clone()
        } else {
            format!("{} {}", self.value, self.unit_of_measurement)
        };
        scene.push(DrawCommand::sized_text(
            PxPoint::new(center_x, value_y),
            value,
            TextAnchor::Middle,
            VALUE_FONT_SIZE,
        ));
        if !self.description.is_empty() {
            scene.push(DrawCommand::sized_text(
                PxPoint::new(center_x, value_y + VALUE_FONT_SIZE),
                self.description.clone(),
                TextAnchor::Middle,
                UNIT_FONT_SIZE,
            ));
        }
    }
}
