//! HSL colours and the brand palette.

use crate::constants::{BRAND_BLEND, BRAND_BLUE, BRAND_MAGENTA};
use crate::error::{BackdropError, Result};

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parse `#rgb` / `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let bad = || BackdropError::InvalidHexColor(hex.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
        let (r, g, b) = match digits.len() {
            3 => (
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            ),
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            _ => return Err(bad()),
        };
        Ok(Self::from_rgb8(r, g, b))
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Self::new(0.0, 0.0, l * 100.0);
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        Self::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
    }

    /// Linear RGB triple in [0, 1] (sRGB-encoded, no gamma handling).
    pub fn to_rgb(self) -> [f64; 3] {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0) / 360.0;
        if s == 0.0 {
            return [l, l, l];
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        [
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        ]
    }

    pub fn with_saturation_scaled(self, factor: f64) -> Self {
        Self::new(self.h, self.s * factor, self.l)
    }

    /// CSS `hsla(...)` string with one decimal per component.
    pub fn to_css(self, alpha: f64) -> String {
        format!("hsla({:.1}, {:.1}%, {:.1}%, {})", self.h, self.s, self.l, alpha)
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate two colours, moving the hue along the shorter arc.
pub fn lerp_hsl(a: Hsl, b: Hsl, t: f64) -> Hsl {
    let dh = (b.h - a.h + 540.0).rem_euclid(360.0) - 180.0;
    Hsl::new(
        (a.h + dh * t).rem_euclid(360.0),
        lerp(a.s, b.s, t),
        lerp(a.l, b.l, t),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette(pub [Hsl; 3]);

impl Palette {
    pub fn from_hex(colors: [&str; 3]) -> Result<Self> {
        Ok(Self([
            Hsl::from_hex(colors[0])?,
            Hsl::from_hex(colors[1])?,
            Hsl::from_hex(colors[2])?,
        ]))
    }

    pub fn brand() -> Self {
        // The brand constants are valid six-digit colours.
        Self::from_hex([BRAND_BLUE, BRAND_BLEND, BRAND_MAGENTA]).unwrap_or(Self([
            Hsl::new(204.0, 99.2, 49.8),
            Hsl::new(254.8, 90.5, 63.1),
            Hsl::new(299.2, 100.0, 46.9),
        ]))
    }

    /// Colour pair blended by blob `index`.
    #[inline]
    pub fn pair(&self, index: usize) -> (Hsl, Hsl) {
        let n = self.0.len();
        (self.0[index % n], self.0[(index + 1) % n])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::brand()
    }
}
