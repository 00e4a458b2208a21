#![forbid(unsafe_code)]

//! Viewport-relative unit conversion.

/// Row height used when a row declares no parseable viewport-relative height.
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 240.0;

/// The measured viewport, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from measured dimensions.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a `vh` value (percent of viewport height) to pixels.
    #[inline]
    pub fn vh_to_px(&self, vh: f64) -> f64 {
        vh / 100.0 * self.height
    }

    /// Resolve an optional row height in vh to pixels.
    ///
    /// `None` (no declared height, or a height that failed to parse at
    /// config load) falls back to [`DEFAULT_ROW_HEIGHT_PX`].
    pub fn row_height_px(&self, vh: Option<u32>) -> f64 {
        match vh {
            Some(vh) => self.vh_to_px(f64::from(vh)),
            None => DEFAULT_ROW_HEIGHT_PX,
        }
    }
}
