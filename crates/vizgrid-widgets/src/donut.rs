#![forbid(unsafe_code)]

//! Donut chart.

use std::f64::consts::TAU;

use vizgrid_core::{PxPoint, PxRect, Rgba};
use vizgrid_scene::{DrawCommand, Scene, TextAnchor};

/// Ratio of inner to outer radius (the hole).
const HOLE_RATIO: f64 = 0.6;

/// Vertical chrome reserved for the widget title.
const CHROME_HEIGHT: f64 = 40.0;

/// One donut slice.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: Rgba,
}

impl DonutSlice {
    pub fn new(label: impl Into<String>, value: f64, color: Rgba) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Donut chart with a legend column on the right.
#[derive(Debug, Clone)]
pub struct DonutChart<'a> {
    slices: &'a [DonutSlice],
}

impl<'a> DonutChart<'a> {
    pub fn new(slices: &'a [DonutSlice]) -> Self {
        Self { slices }
    }

    fn total(&self) -> f64 {
        self.slices
            .iter()
            .map(|s| if s.value.is_finite() { s.value.max(0.0) } else { 0.0 })
            .sum()
    }
}

impl crate::Widget for DonutChart<'_> {
    fn render(&self, area: PxRect, scene: &mut Scene) {
        if self.slices.is_empty() || area.is_empty() {
            return;
        }
        let total = self.total();
        if total <= 0.0 {
            return;
        }

        let plot_height = (area.height - CHROME_HEIGHT).max(0.0);
        let outer_radius = (plot_height.min(area.width) / 2.0 * 0.9).max(0.0);
        if outer_radius <= 0.0 {
            return;
        }
        let center = PxPoint::new(
            area.x + area.width / 2.0,
            area.y + plot_height / 2.0,
        );

        let mut angle = 0.0_f64;
        for slice in self.slices {
            let value = if slice.value.is_finite() {
                slice.value.max(0.0)
            } else {
                0.0
            };
            let sweep = value / total * TAU;
            scene.push(DrawCommand::Arc {
                center,
                outer_radius,
                inner_radius: outer_radius * HOLE_RATIO,
                start_angle: angle,
                end_angle: angle + sweep,
                fill: slice.color,
            });
            angle += sweep;
        }

        // Legend down the right edge, one entry per slice.
        for (i, slice) in self.slices.iter().enumerate() {
            scene.push(DrawCommand::text(
                PxPoint::new(
                    center.x + outer_radius + 12.0,
                    area.y + 16.0 * (i as f64 + 1.0),
                ),
                slice.label.clone(),
                TextAnchor::Start,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Widget;

    fn slices() -> Vec<DonutSlice> {
        vec![
            DonutSlice::new("positive", 6.0, Rgba::rgb(0x65, 0x76, 0xF9)),
            DonutSlice::new("neutral", 3.0, Rgba::rgb(0xB2, 0xBB, 0xFC)),
            DonutSlice::new("negative", 1.0, Rgba::rgb(0xFF, 0x74, 0x9B)),
        ]
    }

    #[test]
    fn slices_cover_full_circle() {
        let slices = slices();
        let mut scene = Scene::new();
        DonutChart::new(&slices).render(PxRect::from_size(400.0, 280.0), &mut scene);
        let mut end = 0.0;
        let mut arcs = 0;
        for cmd in scene.commands() {
            if let DrawCommand::Arc {
                start_angle,
                end_angle,
                ..
            } = cmd
            {
                assert!((start_angle - end).abs() < 1e-9, "arcs must be contiguous");
                end = *end_angle;
                arcs += 1;
            }
        }
        assert_eq!(arcs, 3);
        assert!((end - TAU).abs() < 1e-9);
    }

    #[test]
    fn legend_lists_labels() {
        let slices = slices();
        let mut scene = Scene::new();
        DonutChart::new(&slices).render(PxRect::from_size(400.0, 280.0), &mut scene);
        let texts: Vec<&str> = scene.commands().iter().filter_map(|c| c.as_text()).collect();
        assert_eq!(texts, vec!["positive", "neutral", "negative"]);
    }

    #[test]
    fn all_zero_values_render_nothing() {
        let slices = vec![DonutSlice::new("a", 0.0, Rgba::WHITE)];
        let mut scene = Scene::new();
        DonutChart::new(&slices).render(PxRect::from_size(400.0, 280.0), &mut scene);
        assert!(scene.commands().is_empty());
    }
}
