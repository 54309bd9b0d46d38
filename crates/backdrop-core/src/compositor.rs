//! Turns blob samples into draw calls on a [`RenderTarget`].

use crate::blob::BlobSample;
use crate::config::BackdropConfig;
use crate::constants::{
    GRADIENT_INNER_RATIO, MAX_DEVICE_PIXEL_RATIO, MIN_OFFSCREEN_EDGE, TRAIL_ALPHA,
};
use crate::input::Viewport;
use crate::target::{PresentFilter, RadialGlow, RenderTarget, SurfaceLayout, SurfaceSize};
use glam::DVec2;

/// Device pixel ratio with missing/invalid values treated as 1 and capped at 2.
#[inline]
pub fn effective_dpr(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

pub fn compute_layout(viewport: Viewport, device_pixel_ratio: f64, quality: f64) -> SurfaceLayout {
    let dpr = effective_dpr(device_pixel_ratio);
    let w = viewport.width.max(0.0);
    let h = viewport.height.max(0.0);
    SurfaceLayout {
        offscreen: SurfaceSize::new(
            ((w * dpr * quality).floor() as u32).max(MIN_OFFSCREEN_EDGE),
            ((h * dpr * quality).floor() as u32).max(MIN_OFFSCREEN_EDGE),
        ),
        visible: SurfaceSize::new((w * dpr).floor() as u32, (h * dpr).floor() as u32),
    }
}

/// Vertical offset of the field, in offscreen pixels, for a scroll position.
#[inline]
pub fn world_y_offset(scroll_y: f64, parallax: f64, offscreen_height: f64, viewport_height: f64) -> f64 {
    scroll_y * parallax * (offscreen_height / viewport_height.max(1.0))
}

pub fn present_filter(config: &BackdropConfig) -> PresentFilter {
    let sat = (1.0 - config.desaturate()).max(0.0);
    PresentFilter {
        blur_px: config.blur().floor() as u32,
        saturate_percent: (sat * 100.0).round() as u32,
        global_alpha: config.opacity(),
    }
}

/// Draws one complete frame: trail veil, three stacked glows per blob, then a
/// single present onto the visible surface.
pub fn compose_frame<T, I>(
    target: &mut T,
    layout: SurfaceLayout,
    samples: I,
    world_y_off: f64,
    config: &BackdropConfig,
) where
    T: RenderTarget + ?Sized,
    I: IntoIterator<Item = BlobSample>,
{
    target.trail_fill(TRAIL_ALPHA);

    let h = layout.offscreen.height as f64;
    let sat_scale = 1.0 - config.desaturate();
    for s in samples {
        let color = s.color.with_saturation_scaled(sat_scale);
        let y = s.center.y - world_y_off;
        for cy in [y - h, y, y + h] {
            target.radial_glow(&RadialGlow {
                center: DVec2::new(s.center.x, cy),
                inner_radius: s.radius * GRADIENT_INNER_RATIO,
                radius: s.radius,
                color,
                alpha: s.alpha,
            });
        }
    }

    target.present(&present_filter(config));
}
