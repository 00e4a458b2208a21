#![forbid(unsafe_code)]

//! RGBA color and the dashboard palettes.

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Linearly interpolate between two colors.
pub fn lerp_color(a: Rgba, b: Rgba, t: f64) -> Rgba {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) } as f32;
    let inv = 1.0 - t;
    let r = (a.r as f32 * inv + b.r as f32 * t).round() as u8;
    let g = (a.g as f32 * inv + b.g as f32 * t).round() as u8;
    let bv = (a.b as f32 * inv + b.b as f32 * t).round() as u8;
    let av = (a.a as f32 * inv + b.a as f32 * t).round() as u8;
    Rgba::rgba(r, g, bv, av)
}

/// Blues ramp for value-encoded marks (0.0 to 1.0).
///
/// Light → saturated: near-white through mid blue to deep navy. Monotonic in
/// saturation so higher values always read as more intense.
pub fn blues_gradient(value: f64) -> Rgba {
    const STOPS: [(f64, Rgba); 5] = [
        (0.00, Rgba::rgb(247, 251, 255)),
        (0.25, Rgba::rgb(198, 219, 239)),
        (0.50, Rgba::rgb(107, 174, 214)),
        (0.75, Rgba::rgb(33, 113, 181)),
        (1.00, Rgba::rgb(8, 48, 107)),
    ];

    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    for window in STOPS.windows(2) {
        let (t0, c0) = window[0];
        let (t1, c1) = window[1];
        if clamped <= t1 {
            let t = if t1 > t0 {
                (clamped - t0) / (t1 - t0)
            } else {
                0.0
            };
            return lerp_color(c0, c1, t);
        }
    }

    STOPS[STOPS.len() - 1].1
}

/// Color for a sentiment label on the donut chart.
///
/// Unrecognized labels get a neutral grey so an unexpected category never
/// blanks the slice.
pub fn sentiment_color(label: &str) -> Rgba {
    match label {
        "positive" => Rgba::rgb(0x65, 0x76, 0xF9),
        "neutral" => Rgba::rgb(0xB2, 0xBB, 0xFC),
        "negative" => Rgba::rgb(0xFF, 0x74, 0x9B),
        _ => Rgba::rgb(0xCC, 0xCC, 0xCC),
    }
}
