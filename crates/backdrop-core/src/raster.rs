//! Software implementation of [`RenderTarget`].
//!
//! Pixels are premultiplied RGBA `f32`. It mirrors what the browser's 2D
//! context does closely enough for headless rendering and tests: additive
//! glows, a veil fill, bilinear upscale, a three-pass box blur standing in for
//! the gaussian, and the CSS `saturate()` colour matrix.

use crate::target::{PresentFilter, RadialGlow, RenderTarget, SurfaceLayout, SurfaceSize};

type Px = [f32; 4];

#[derive(Clone, Debug, Default)]
pub struct PixelTarget {
    layout: SurfaceLayout,
    offscreen: Vec<Px>,
    visible: Vec<Px>,
}

impl PixelTarget {
    pub fn new(layout: SurfaceLayout) -> Self {
        let mut t = Self::default();
        t.resize(layout);
        t
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    pub fn offscreen_pixels(&self) -> &[Px] {
        &self.offscreen
    }

    pub fn visible_pixels(&self) -> &[Px] {
        &self.visible
    }

    /// Visible surface as straight-alpha RGBA8, row-major.
    pub fn visible_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.visible.len() * 4);
        for p in &self.visible {
            let a = p[3];
            let un = |c: f32| if a > 0.0 { (c / a).clamp(0.0, 1.0) } else { 0.0 };
            out.push(to_u8(un(p[0])));
            out.push(to_u8(un(p[1])));
            out.push(to_u8(un(p[2])));
            out.push(to_u8(a));
        }
        out
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn area(size: SurfaceSize) -> usize {
    size.width as usize * size.height as usize
}

impl RenderTarget for PixelTarget {
    fn resize(&mut self, layout: SurfaceLayout) {
        self.layout = layout;
        self.offscreen = vec![[0.0; 4]; area(layout.offscreen)];
        self.visible = vec![[0.0; 4]; area(layout.visible)];
    }

    fn clear(&mut self) {
        self.offscreen.fill([0.0; 4]);
    }

    fn trail_fill(&mut self, alpha: f64) {
        let a = alpha.clamp(0.0, 1.0) as f32;
        for p in &mut self.offscreen {
            p[0] *= 1.0 - a;
            p[1] *= 1.0 - a;
            p[2] *= 1.0 - a;
            p[3] = a + p[3] * (1.0 - a);
        }
    }

    fn radial_glow(&mut self, glow: &RadialGlow) {
        let SurfaceSize { width, height } = self.layout.offscreen;
        if glow.radius <= 0.0 || width == 0 || height == 0 {
            return;
        }
        let x0 = ((glow.center.x - glow.radius).floor().max(0.0)) as u32;
        let y0 = ((glow.center.y - glow.radius).floor().max(0.0)) as u32;
        let x1 = ((glow.center.x + glow.radius).ceil().min(width as f64)).max(0.0) as u32;
        let y1 = ((glow.center.y + glow.radius).ceil().min(height as f64)).max(0.0) as u32;
        let [r, g, b] = glow.color.to_rgb();
        let base_alpha = glow.alpha.clamp(0.0, 1.0);
        let span = glow.radius - glow.inner_radius;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - glow.center.x;
                let dy = y as f64 + 0.5 - glow.center.y;
                let d = (dx * dx + dy * dy).sqrt();
                if d > glow.radius {
                    continue;
                }
                let t = if span > 0.0 {
                    ((d - glow.inner_radius) / span).clamp(0.0, 1.0)
                } else if d < glow.inner_radius {
                    0.0
                } else {
                    1.0
                };
                let a = base_alpha * (1.0 - t);
                if a <= 0.0 {
                    continue;
                }
                let p = &mut self.offscreen[(y * width + x) as usize];
                p[0] = (p[0] + (r * a) as f32).min(1.0);
                p[1] = (p[1] + (g * a) as f32).min(1.0);
                p[2] = (p[2] + (b * a) as f32).min(1.0);
                p[3] = (p[3] + a as f32).min(1.0);
            }
        }
    }

    fn present(&mut self, filter: &PresentFilter) {
        let src = self.layout.offscreen;
        let dst = self.layout.visible;
        self.visible.fill([0.0; 4]);
        if area(src) == 0 || area(dst) == 0 {
            return;
        }
        let mut img = upscale_bilinear(&self.offscreen, src, dst);
        box_blur(&mut img, dst, filter.blur_px as f32);
        let s = filter.saturate_percent as f32 / 100.0;
        let alpha = filter.global_alpha.clamp(0.0, 1.0) as f32;
        for (out, p) in self.visible.iter_mut().zip(img) {
            let [r, g, b] = saturate(p[0], p[1], p[2], s);
            *out = [r * alpha, g * alpha, b * alpha, p[3] * alpha];
        }
    }
}

fn upscale_bilinear(src: &[Px], from: SurfaceSize, to: SurfaceSize) -> Vec<Px> {
    let (sw, sh) = (from.width as usize, from.height as usize);
    let sx = from.width as f32 / to.width as f32;
    let sy = from.height as f32 / to.height as f32;
    let mut out = Vec::with_capacity(area(to));
    for y in 0..to.height as usize {
        let fy = ((y as f32 + 0.5) * sy - 0.5).clamp(0.0, (sh - 1) as f32);
        let y0 = fy.floor() as usize;
        let y1 = (y0 + 1).min(sh - 1);
        let ty = fy - y0 as f32;
        for x in 0..to.width as usize {
            let fx = ((x as f32 + 0.5) * sx - 0.5).clamp(0.0, (sw - 1) as f32);
            let x0 = fx.floor() as usize;
            let x1 = (x0 + 1).min(sw - 1);
            let tx = fx - x0 as f32;
            let (a, b) = (src[y0 * sw + x0], src[y0 * sw + x1]);
            let (c, d) = (src[y1 * sw + x0], src[y1 * sw + x1]);
            let mut px = [0.0; 4];
            for k in 0..4 {
                let top = a[k] + (b[k] - a[k]) * tx;
                let bottom = c[k] + (d[k] - c[k]) * tx;
                px[k] = top + (bottom - top) * ty;
            }
            out.push(px);
        }
    }
    out
}

/// Approximates a gaussian of std-dev `sigma` with three box passes per axis.
fn box_blur(img: &mut [Px], size: SurfaceSize, sigma: f32) {
    if sigma < 0.5 {
        return;
    }
    let width = (12.0 * sigma * sigma / 3.0 + 1.0).sqrt().floor() as usize;
    let radius = width.saturating_sub(1) / 2;
    if radius == 0 {
        return;
    }
    let (w, h) = (size.width as usize, size.height as usize);
    let mut line = Vec::new();
    for _ in 0..3 {
        for y in 0..h {
            blur_line(img, y * w, 1, w, radius, &mut line);
        }
        for x in 0..w {
            blur_line(img, x, w, h, radius, &mut line);
        }
    }
}

/// Running-sum box filter along one row/column; samples outside are transparent.
fn blur_line(img: &mut [Px], start: usize, stride: usize, len: usize, radius: usize, scratch: &mut Vec<Px>) {
    scratch.clear();
    scratch.extend((0..len).map(|i| img[start + i * stride]));
    let norm = 1.0 / (2 * radius + 1) as f32;
    let mut acc = [0.0f32; 4];
    for px in scratch.iter().take(radius.min(len)) {
        for k in 0..4 {
            acc[k] += px[k];
        }
    }
    for i in 0..len {
        if i + radius < len {
            let add = scratch[i + radius];
            for k in 0..4 {
                acc[k] += add[k];
            }
        }
        if i > radius {
            let sub = scratch[i - radius - 1];
            for k in 0..4 {
                acc[k] -= sub[k];
            }
        }
        let out = &mut img[start + i * stride];
        for k in 0..4 {
            out[k] = (acc[k] * norm).max(0.0);
        }
    }
}

/// CSS `saturate(s)` colour matrix.
fn saturate(r: f32, g: f32, b: f32, s: f32) -> [f32; 3] {
    [
        (0.213 + 0.787 * s) * r + (0.715 - 0.715 * s) * g + (0.072 - 0.072 * s) * b,
        (0.213 - 0.213 * s) * r + (0.715 + 0.285 * s) * g + (0.072 - 0.072 * s) * b,
        (0.213 - 0.213 * s) * r + (0.715 - 0.715 * s) * g + (0.072 + 0.928 * s) * b,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_preserves_total_energy_away_from_edges() {
        let size = SurfaceSize::new(31, 31);
        let mut img = vec![[0.0f32; 4]; 31 * 31];
        img[15 * 31 + 15] = [1.0, 1.0, 1.0, 1.0];
        box_blur(&mut img, size, 2.0);
        let total: f32 = img.iter().map(|p| p[3]).sum();
        assert!((total - 1.0).abs() < 1e-4, "total={total}");
        assert!(img[15 * 31 + 15][3] < 1.0);
    }

    #[test]
    fn full_saturation_is_identity() {
        let [r, g, b] = saturate(0.2, 0.5, 0.9, 1.0);
        assert!((r - 0.2).abs() < 1e-6);
        assert!((g - 0.5).abs() < 1e-6);
        assert!((b - 0.9).abs() < 1e-6);
    }
}
