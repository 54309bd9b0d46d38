//! Drawing seam between the compositor and a concrete pair of surfaces.

use crate::color::Hsl;
use glam::DVec2;

/// Pixel dimensions of a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }
}

/// Sizes of the low-resolution offscreen surface and the visible one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub offscreen: SurfaceSize,
    pub visible: SurfaceSize,
}

/// A circle filled with a radial gradient fading from `inner_radius` to
/// `radius`, blended additively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGlow {
    pub center: DVec2,
    pub inner_radius: f64,
    pub radius: f64,
    pub color: Hsl,
    pub alpha: f64,
}

/// Filters applied while copying the offscreen surface to the visible one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentFilter {
    pub blur_px: u32,
    pub saturate_percent: u32,
    pub global_alpha: f64,
}

impl PresentFilter {
    pub fn to_css(&self) -> String {
        format!("blur({}px) saturate({}%)", self.blur_px, self.saturate_percent)
    }
}

/// An offscreen + visible surface pair the compositor draws into.
///
/// Offscreen operations accumulate; `present` replaces the visible contents.
pub trait RenderTarget {
    /// Reallocate both surfaces. Contents are discarded.
    fn resize(&mut self, layout: SurfaceLayout);
    /// Clear the offscreen surface to transparent.
    fn clear(&mut self);
    /// Source-over fill of the whole offscreen surface with a black veil.
    fn trail_fill(&mut self, alpha: f64);
    /// Additive radial glow on the offscreen surface.
    fn radial_glow(&mut self, glow: &RadialGlow);
    /// Clear the visible surface and draw the scaled, filtered offscreen onto it.
    fn present(&mut self, filter: &PresentFilter);
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn resize(&mut self, layout: SurfaceLayout) {
        (**self).resize(layout)
    }
    fn clear(&mut self) {
        (**self).clear()
    }
    fn trail_fill(&mut self, alpha: f64) {
        (**self).trail_fill(alpha)
    }
    fn radial_glow(&mut self, glow: &RadialGlow) {
        (**self).radial_glow(glow)
    }
    fn present(&mut self, filter: &PresentFilter) {
        (**self).present(filter)
    }
}
