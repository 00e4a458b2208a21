#![forbid(unsafe_code)]

//! Topic table.

use vizgrid_core::{PxPoint, PxRect};
use vizgrid_scene::{DrawCommand, Scene, TextAnchor};

const HEADER_HEIGHT: f64 = 28.0;
const ROW_HEIGHT: f64 = 24.0;
const CELL_PAD: f64 = 8.0;

/// Column-oriented table of topic rows.
///
/// Columns get equal widths; rows that would overflow the allotted height
/// are clipped rather than compressed.
#[derive(Debug, Clone)]
pub struct TopicTable<'a> {
    columns: &'a [&'a str],
    rows: &'a [Vec<String>],
}

impl<'a> TopicTable<'a> {
    pub fn new(columns: &'a [&'a str], rows: &'a [Vec<String>]) -> Self {
        Self { columns, rows }
    }
}

impl crate::Widget for TopicTable<'_> {
    fn render(&self, area: PxRect, scene: &mut Scene) {
        if self.columns.is_empty() || self.rows.is_empty() || area.is_empty() {
            return;
        }
        let col_width = area.width / self.columns.len() as f64;

        for (c, name) in self.columns.iter().enumerate() {
            scene.push(DrawCommand::text(
                PxPoint::new(area.x + col_width * c as f64 + CELL_PAD, area.y + HEADER_HEIGHT / 2.0),
                *name,
                TextAnchor::Start,
            ));
        }
        scene.push(DrawCommand::Line {
            from: PxPoint::new(area.x, area.y + HEADER_HEIGHT),
            to: PxPoint::new(area.x + area.width, area.y + HEADER_HEIGHT),
        });

        let max_rows = ((area.height - HEADER_HEIGHT) / ROW_HEIGHT).floor() as usize;
        for (r, row) in self.rows.iter().take(max_rows).enumerate() {
            let row_y = area.y + HEADER_HEIGHT + ROW_HEIGHT * (r as f64 + 0.5);
            for (c, cell) in row.iter().take(self.columns.len()).enumerate() {
                scene.push(DrawCommand::text(
                    PxPoint::new(area.x + col_width * c as f64 + CELL_PAD, row_y),
                    cell.clone(),
                    TextAnchor::Start,
                ));
            }
        }
    }
}
