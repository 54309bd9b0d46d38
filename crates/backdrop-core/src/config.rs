//! Mount-time options for the background.
//!
//! Values are stored as given and clamped whenever they are read, so a caller
//! passing `quality: 5.0` still renders at scale 1.0.

use serde::Deserialize;
use std::ops::RangeInclusive;

pub const QUALITY_RANGE: RangeInclusive<f64> = 0.35..=1.0;
pub const INTENSITY_RANGE: RangeInclusive<f64> = 0.4..=1.8;
pub const SPEED_RANGE: RangeInclusive<f64> = 0.6..=1.6;
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.4..=1.0;
pub const BLUR_RANGE: RangeInclusive<f64> = 8.0..=32.0;
pub const DESATURATE_RANGE: RangeInclusive<f64> = 0.0..=0.6;
pub const PARALLAX_RANGE: RangeInclusive<f64> = 0.0..=0.5;
pub const ENERGY_GAIN_RANGE: RangeInclusive<f64> = 0.0..=1.0;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackdropConfig {
    pub quality: f64,
    pub intensity: f64,
    pub speed: f64,
    pub opacity: f64,
    pub blur: f64,
    pub desaturate: f64,
    pub parallax: f64,
    pub energy_gain: f64,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            quality: 0.6,
            intensity: 0.9,
            speed: 1.0,
            opacity: 0.65,
            blur: 20.0,
            desaturate: 0.25,
            parallax: 0.24,
            energy_gain: 0.8,
        }
    }
}

#[inline]
fn clamp_or(value: f64, fallback: f64, range: &RangeInclusive<f64>) -> f64 {
    let v = if value.is_finite() { value } else { fallback };
    v.clamp(*range.start(), *range.end())
}

impl BackdropConfig {
    pub fn quality(&self) -> f64 {
        clamp_or(self.quality, Self::default().quality, &QUALITY_RANGE)
    }

    pub fn intensity(&self) -> f64 {
        clamp_or(self.intensity, Self::default().intensity, &INTENSITY_RANGE)
    }

    pub fn speed(&self) -> f64 {
        clamp_or(self.speed, Self::default().speed, &SPEED_RANGE)
    }

    pub fn opacity(&self) -> f64 {
        clamp_or(self.opacity, Self::default().opacity, &OPACITY_RANGE)
    }

    pub fn blur(&self) -> f64 {
        clamp_or(self.blur, Self::default().blur, &BLUR_RANGE)
    }

    pub fn desaturate(&self) -> f64 {
        clamp_or(self.desaturate, Self::default().desaturate, &DESATURATE_RANGE)
    }

    pub fn parallax(&self) -> f64 {
        clamp_or(self.parallax, Self::default().parallax, &PARALLAX_RANGE)
    }

    pub fn energy_gain(&self) -> f64 {
        clamp_or(self.energy_gain, Self::default().energy_gain, &ENERGY_GAIN_RANGE)
    }

    /// Copy with every field replaced by its effective value.
    pub fn clamped(&self) -> Self {
        Self {
            quality: self.quality(),
            intensity: self.intensity(),
            speed: self.speed(),
            opacity: self.opacity(),
            blur: self.blur(),
            desaturate: self.desaturate(),
            parallax: self.parallax(),
            energy_gain: self.energy_gain(),
        }
    }
}
