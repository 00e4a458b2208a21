#![forbid(unsafe_code)]

//! The hover tooltip.

use vizgrid_core::PxPoint;

/// Horizontal offset from the pointer to the tooltip's left edge.
pub const POINTER_OFFSET_X: f64 = 10.0;

/// Vertical offset from the pointer to the tooltip's top edge.
pub const POINTER_OFFSET_Y: f64 = -20.0;

/// Tooltip content and placement for the hovered mark.
///
/// Always carries the untruncated label; truncation is a display-axis
/// concern and must never leak into the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Full, untruncated category label.
    pub label: String,
    /// Raw (uncoerced-for-display) value of the hovered mark.
    pub value: f64,
    /// Top-left position, already offset from the pointer.
    pub position: PxPoint,
}

impl Tooltip {
    /// Build a tooltip following the pointer at the standard offsets.
    pub fn at_pointer(label: impl Into<String>, value: f64, pointer: PxPoint) -> Self {
        Self {
            label: label.into(),
            value,
            position: PxPoint::new(pointer.x + POINTER_OFFSET_X, pointer.y + POINTER_OFFSET_Y),
        }
    }
}
