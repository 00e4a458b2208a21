#![forbid(unsafe_code)]

//! Value-to-pixel scale mappings.
//!
//! Three scales cover what the chart renderers need: [`LinearScale`] for bar
//! lengths and axis ticks, [`BandScale`] for positioning one band per
//! category, and [`SequentialScale`] for value-encoded color.

use crate::color::{Rgba, blues_gradient};

/// Linear mapping from a `[0, max]` value domain to a `[0, range]` pixel range.
///
/// The domain maximum maps to the full range and `0` maps to `0`. A
/// degenerate domain (empty input, all zeros, or non-finite maximum) maps
/// every value to `0` rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a scale with an explicit domain maximum.
    pub fn new(domain_max: f64, range_max: f64) -> Self {
        let domain_max = if domain_max.is_finite() { domain_max } else { 0.0 };
        let range_max = if range_max.is_finite() { range_max } else { 0.0 };
        Self {
            domain_max,
            range_max,
        }
    }

    /// Create a scale from a data slice, using `max(values)` as the domain.
    ///
    /// Non-finite entries are ignored, matching how bar values are coerced.
    pub fn from_values(values: &[f64], range_max: f64) -> Self {
        let max = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        Self::new(max, range_max)
    }

    /// Domain maximum.
    #[inline]
    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Map a value to a pixel offset.
    pub fn map(&self, value: f64) -> f64 {
        if self.domain_max <= 0.0 || self.range_max <= 0.0 {
            return 0.0;
        }
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        value / self.domain_max * self.range_max
    }

    /// Evenly spaced tick values across the domain, including both endpoints.
    ///
    /// `count` is the number of intervals; `count = 5` yields 6 labels from
    /// `0` to the domain maximum.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return vec![0.0];
        }
        (0..=count)
            .map(|i| self.domain_max * i as f64 / count as f64)
            .collect()
    }
}

/// Ordinal band scale: one band per category across a pixel range.
///
/// Follows the d3 band model with equal inner and outer padding: with `n`
/// bands and padding `p`, `step = range / (n - p + 2p)` and
/// `bandwidth = step * (1 - p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: f64,
    padding: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// Create a band scale for `count` categories over `[0, range]`.
    pub fn new(count: usize, range: f64, padding: f64) -> Self {
        let range = if range.is_finite() { range.max(0.0) } else { 0.0 };
        let padding = padding.clamp(0.0, 1.0);
        let n = count as f64;
        let denom = (n - padding + padding * 2.0).max(1.0);
        let step = range / denom;
        let bandwidth = step * (1.0 - padding);
        // Center the bands in the range (align 0.5).
        let start = (range - step * (n - padding)) * 0.5;
        Self {
            count,
            range,
            padding,
            step,
            bandwidth,
            start,
        }
    }

    /// Top edge of band `index`, or `None` when out of range.
    pub fn position(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        Some(self.start + self.step * index as f64)
    }

    /// Width of each band.
    #[inline]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between consecutive band starts.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of bands.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the scale has no bands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Sequential color scale over a `[0, max]` value domain.
///
/// Higher values map to more saturated colors on the blues ramp; the mapping
/// is monotonic in the input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    domain_max: f64,
}

impl SequentialScale {
    /// Create a scale with an explicit domain maximum.
    pub fn new(domain_max: f64) -> Self {
        let domain_max = if domain_max.is_finite() { domain_max } else { 0.0 };
        Self { domain_max }
    }

    /// Map a value to a color on the ramp.
    pub fn map(&self, value: f64) -> Rgba {
        if self.domain_max <= 0.0 {
            return blues_gradient(0.0);
        }
        let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
        blues_gradient(value / self.domain_max)
    }
}
