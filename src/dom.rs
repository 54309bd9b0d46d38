use crate::constants::REDUCED_MOTION_QUERY;
use crate::input;
use backdrop_core::{BackdropError, Environment, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport() -> Viewport {
    match web::window() {
        Some(w) => input::viewport_from(
            w.inner_width().ok().and_then(|v| v.as_f64()),
            w.inner_height().ok().and_then(|v| v.as_f64()),
        ),
        None => Viewport::new(0.0, 0.0),
    }
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn scroll_y() -> f64 {
    input::sanitize_scroll(web::window().and_then(|w| w.scroll_y().ok()))
}

pub fn reduced_motion_query() -> Option<web::MediaQueryList> {
    web::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

pub fn environment(query: Option<&web::MediaQueryList>) -> Environment {
    Environment {
        viewport: viewport(),
        device_pixel_ratio: device_pixel_ratio(),
        scroll_y: scroll_y(),
        reduced_motion: input::reduced_motion_from(query.map(|q| q.matches())),
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| BackdropError::SurfaceUnavailable("getContext('2d') returned null".into()))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn create_canvas() -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn canvas_by_id(id: &str) -> Option<web::HtmlCanvasElement> {
    window_document()?
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}
