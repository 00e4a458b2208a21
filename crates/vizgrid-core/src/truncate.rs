#![forbid(unsafe_code)]

//! Breakpoint-driven category label truncation.
//!
//! Long category labels get shortened so they fit the reserved axis margin,
//! with the cutoff depending on the container width breakpoint. The original
//! text is always kept alongside the display text so tooltips can show it in
//! full.

use unicode_segmentation::UnicodeSegmentation;

/// Container-width breakpoint (px) separating narrow from wide label policy.
pub const LABEL_BREAKPOINT_PX: f64 = 500.0;

/// Grapheme cutoff for containers at or below the breakpoint.
pub const NARROW_LABEL_MAX: usize = 20;

/// Grapheme cutoff for containers above the breakpoint.
pub const WIDE_LABEL_MAX: usize = 30;

const ELLIPSIS: &str = "...";

/// A category label plus its untruncated source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedLabel {
    /// Possibly-shortened text for axis display.
    pub display: String,
    /// Original text, retained for tooltips.
    pub full: String,
}

impl TruncatedLabel {
    /// Whether the display text differs from the original.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.display != self.full
    }
}

/// Apply the truncation policy for a label in a container of the given width.
///
/// Labels longer than 20 graphemes are cut at 20 when the container is at or
/// below 500 px; labels longer than 30 are cut at 30 above 500 px; anything
/// else passes through unchanged. Truncated labels get a `...` suffix.
pub fn truncate_label(label: &str, container_width: f64) -> TruncatedLabel {
    let limit = if container_width <= LABEL_BREAKPOINT_PX {
        NARROW_LABEL_MAX
    } else {
        WIDE_LABEL_MAX
    };

    let graphemes: Vec<&str> = label.graphemes(true).collect();
    let display = if graphemes.len() > limit {
        let mut s: String = graphemes[..limit].concat();
        s.push_str(ELLIPSIS);
        s
    } else {
        label.to_string()
    };

    TruncatedLabel {
        display,
        full: label.to_string(),
    }
}
