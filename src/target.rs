use crate::constants::{COMPOSITE_LIGHTER, COMPOSITE_SOURCE_OVER};
use crate::dom;
use backdrop_core::{PresentFilter, RadialGlow, RenderTarget, SurfaceLayout};
use std::f64::consts::TAU;
use web_sys as web;

/// The page's visible canvas paired with a detached low-resolution canvas.
pub struct Canvas2dTarget {
    visible: web::HtmlCanvasElement,
    visible_ctx: web::CanvasRenderingContext2d,
    offscreen: web::HtmlCanvasElement,
    offscreen_ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dTarget {
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let visible_ctx = dom::context_2d(canvas)?;
        let offscreen = dom::create_canvas()?;
        let offscreen_ctx = dom::context_2d(&offscreen)?;
        Ok(Self {
            visible: canvas.clone(),
            visible_ctx,
            offscreen,
            offscreen_ctx,
        })
    }
}

impl RenderTarget for Canvas2dTarget {
    fn resize(&mut self, layout: SurfaceLayout) {
        // Assigning width/height reallocates and clears the backing store.
        self.offscreen.set_width(layout.offscreen.width);
        self.offscreen.set_height(layout.offscreen.height);
        self.visible.set_width(layout.visible.width);
        self.visible.set_height(layout.visible.height);
    }

    fn clear(&mut self) {
        self.offscreen_ctx.clear_rect(
            0.0,
            0.0,
            self.offscreen.width() as f64,
            self.offscreen.height() as f64,
        );
    }

    fn trail_fill(&mut self, alpha: f64) {
        let ctx = &self.offscreen_ctx;
        _ = ctx.set_global_composite_operation(COMPOSITE_SOURCE_OVER);
        ctx.set_fill_style_str(&format!("rgba(0,0,0,{})", alpha));
        ctx.fill_rect(
            0.0,
            0.0,
            self.offscreen.width() as f64,
            self.offscreen.height() as f64,
        );
    }

    fn radial_glow(&mut self, glow: &RadialGlow) {
        let ctx = &self.offscreen_ctx;
        let (x, y) = (glow.center.x, glow.center.y);
        let gradient = match ctx.create_radial_gradient(x, y, glow.inner_radius, x, y, glow.radius) {
            Ok(g) => g,
            // Negative or non-finite radii are rejected by the browser.
            Err(_) => return,
        };
        _ = gradient.add_color_stop(0.0, &glow.color.to_css(glow.alpha));
        _ = gradient.add_color_stop(1.0, &glow.color.to_css(0.0));
        _ = ctx.set_global_composite_operation(COMPOSITE_LIGHTER);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        if ctx.arc(x, y, glow.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }

    fn present(&mut self, filter: &PresentFilter) {
        let ctx = &self.visible_ctx;
        let (w, h) = (self.visible.width() as f64, self.visible.height() as f64);
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_filter(&filter.to_css());
        ctx.set_global_alpha(filter.global_alpha);
        _ = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(&self.offscreen, 0.0, 0.0, w, h);
    }
}
