//! The fixed set of glowing blobs and their per-frame derived attributes.

use crate::color::{lerp_hsl, Hsl, Palette};
use crate::constants::*;
use crate::noise::SimplexNoise;
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;

/// Static per-blob parameters chosen once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub phase: f64,
    pub radius: f64,
}

pub type BlobSet = SmallVec<[Blob; BLOB_COUNT]>;

pub fn spawn_blobs<R: Rng + ?Sized>(rng: &mut R) -> BlobSet {
    (0..BLOB_COUNT)
        .map(|_| Blob {
            phase: rng.gen::<f64>() * BLOB_PHASE_SPAN,
            radius: BLOB_RADIUS_MIN + rng.gen::<f64>() * BLOB_RADIUS_SPAN,
        })
        .collect()
}

/// Everything a frame's blob attributes depend on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldInputs {
    pub time: f64,
    pub pointer: DVec2,
    pub energy: f64,
    pub intensity: f64,
    /// Offscreen surface size in pixels.
    pub surface: DVec2,
}

/// Derived visual state of one blob for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobSample {
    pub center: DVec2,
    pub radius: f64,
    pub color: Hsl,
    pub alpha: f64,
}

pub fn sample_blob(
    noise: &SimplexNoise,
    palette: &Palette,
    index: usize,
    blob: &Blob,
    input: &FieldInputs,
) -> BlobSample {
    let i = index as f64;
    let t = input.time;
    let p = input.pointer;

    let nx = noise.noise3d(i * NOISE_X_INDEX_SCALE, t + blob.phase, p.x * 2.0 - 1.0);
    let ny = noise.noise3d(t + blob.phase, i * NOISE_Y_INDEX_SCALE, p.y * 2.0 - 1.0);
    let ang = ny.atan2(nx);

    let unit = DVec2::new(
        0.5 + ORBIT_RADIUS * ang.cos() + POINTER_PULL * (p.x - 0.5),
        0.5 + ORBIT_RADIUS * ang.sin() + POINTER_PULL * (p.y - 0.5),
    );
    let center = unit * input.surface;

    let radius = input.surface.min_element()
        * blob.radius
        * (RADIUS_BASE_GAIN + RADIUS_WAVE_GAIN * (t * RADIUS_WAVE_FREQ + i).sin())
        * (1.0 + input.energy * RADIUS_ENERGY_BOOST);

    let (from, to) = palette.pair(index);
    let mix = ((t * COLOR_WAVE_FREQ + i).sin() + 1.0) / 2.0;
    let color = lerp_hsl(from, to, mix);

    let alpha = (ALPHA_BASE + ALPHA_ENERGY_GAIN * input.energy) * input.intensity;

    BlobSample {
        center,
        radius,
        color,
        alpha,
    }
}

pub fn sample_field<'a>(
    noise: &'a SimplexNoise,
    palette: &'a Palette,
    blobs: &'a [Blob],
    input: FieldInputs,
) -> impl Iterator<Item = BlobSample> + 'a {
    blobs
        .iter()
        .enumerate()
        .map(move |(i, b)| sample_blob(noise, palette, i, b, &input))
}
