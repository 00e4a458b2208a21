#![forbid(unsafe_code)]

//! The scene: a command list plus frame-level singleton metadata.

use smallvec::SmallVec;
use vizgrid_core::{PxPoint, PxRect};

use crate::command::DrawCommand;
use crate::tooltip::Tooltip;

/// A pointer-sensitive region registered by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    pub rect: PxRect,
    /// Untruncated label of the mark under this region.
    pub label: String,
    /// Raw value of the mark.
    pub value: f64,
}

/// One frame's worth of draw output.
///
/// A scene is rebuilt from scratch on every render pass: the composition
/// shell calls [`Scene::clear`] and each widget appends its commands. The
/// tooltip lives in a single `Option` slot, so no sequence of renders can
/// ever produce more than one tooltip.
#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
    hit_regions: SmallVec<[HitRegion; 8]>,
    tooltip: Option<Tooltip>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all commands, hit regions, and any tooltip from a previous pass.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.hit_regions.clear();
        self.tooltip = None;
    }

    /// Append a draw command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    /// Register a pointer-sensitive region.
    #[inline]
    pub fn push_hit_region(&mut self, region: HitRegion) {
        self.hit_regions.push(region);
    }

    /// Set the frame's tooltip, replacing any existing one.
    #[inline]
    pub fn set_tooltip(&mut self, tooltip: Tooltip) {
        self.tooltip = Some(tooltip);
    }

    /// The tooltip for this frame, if a mark is hovered.
    #[inline]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Number of tooltips in the frame (0 or 1).
    #[inline]
    pub fn tooltip_count(&self) -> usize {
        usize::from(self.tooltip.is_some())
    }

    /// All draw commands in paint order.
    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All registered hit regions.
    #[inline]
    pub fn hit_regions(&self) -> &[HitRegion] {
        &self.hit_regions
    }

    /// Find the topmost hit region containing the pointer.
    pub fn hit_test(&self, pointer: PxPoint) -> Option<&HitRegion> {
        self.hit_regions.iter().rev().find(|r| r.rect.contains(pointer))
    }
}
