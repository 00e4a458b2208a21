#![forbid(unsafe_code)]

//! Geometric primitives.

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle in pixel space, origin at top-left.
///
/// Used for widget areas, bar marks, and pointer hit testing. Unlike a
/// terminal cell grid the dashboard works in fractional pixels, so all
/// fields are `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxRect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PxRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has no drawable area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, p: PxPoint) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Create a new rectangle inside the current one with the given margins.
    ///
    /// Shrinks to empty rather than inverting when the margins exceed the
    /// available size.
    pub fn inner(&self, margins: Margins) -> PxRect {
        let width = (self.width - margins.left - margins.right).max(0.0);
        let height = (self.height - margins.top - margins.bottom).max(0.0);
        PxRect {
            x: self.x + margins.left,
            y: self.y + margins.top,
            width,
            height,
        }
    }

    /// Translate the rectangle by an offset.
    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> PxRect {
        PxRect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Margins around a rectangle, one value per side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Create margins from individual sides (top, right, bottom, left).
    #[inline]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Total horizontal margin.
    #[inline]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical margin.
    #[inline]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}
