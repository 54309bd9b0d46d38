use crate::constants::{ENERGY_IMPULSE, ENERGY_RETAIN};
use glam::DVec2;

/// CSS-pixel viewport of the hosting page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Normalised pointer position and its last per-event delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: DVec2::splat(0.5),
            vel: DVec2::ZERO,
        }
    }
}

impl PointerState {
    pub fn on_move(&mut self, client_x: f64, client_y: f64, viewport: Viewport) {
        let next = normalize_pointer(client_x, client_y, viewport);
        self.vel = next - self.pos;
        self.pos = next;
    }
}

#[inline]
pub fn normalize_pointer(client_x: f64, client_y: f64, viewport: Viewport) -> DVec2 {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return DVec2::splat(0.5);
    }
    DVec2::new(
        (client_x / viewport.width).clamp(0.0, 1.0),
        (client_y / viewport.height).clamp(0.0, 1.0),
    )
}

/// Last scroll offset plus the scroll "energy" accumulated from recent deltas.
///
/// Energy only decays when a new scroll event arrives, so it holds its value
/// between bursts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    energy: f64,
}

impl ScrollState {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            energy: 0.0,
        }
    }

    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64, energy_gain: f64) {
        let dy = offset - self.offset;
        self.offset = offset;
        self.energy = step_energy(self.energy, dy, viewport_height, energy_gain);
    }

    /// Current energy, kept inside [0, 1].
    pub fn energy(&self) -> f64 {
        self.energy.clamp(0.0, 1.0)
    }

    pub fn raw_energy(&self) -> f64 {
        self.energy
    }
}

/// One step of the scroll-energy recurrence.
#[inline]
pub fn step_energy(energy: f64, delta: f64, viewport_height: f64, energy_gain: f64) -> f64 {
    let vel = delta.abs() / viewport_height.max(1.0);
    energy * ENERGY_RETAIN + (vel * (0.5 + 0.5 * energy_gain)).min(1.0) * ENERGY_IMPULSE
}
