#![cfg(target_arch = "wasm32")]
use backdrop_core::BackdropConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mount;
mod target;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    // Pages that only ship the canvas get the background without any JS glue.
    if let Some(canvas) = dom::canvas_by_id(constants::AUTO_MOUNT_CANVAS_ID) {
        let handle = mount_background(canvas, JsValue::UNDEFINED);
        std::mem::forget(handle);
    }
    Ok(())
}

/// Handle returned to JS; the background lives until `unmount()` or until the
/// handle is freed.
#[wasm_bindgen]
pub struct BackgroundHandle {
    state: mount::SharedMount,
}

#[wasm_bindgen]
impl BackgroundHandle {
    pub fn unmount(&self) {
        mount::unmount(&self.state);
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        matches!(&*self.state.borrow(), mount::MountState::Active(_))
    }
}

impl Drop for BackgroundHandle {
    fn drop(&mut self) {
        mount::unmount(&self.state);
    }
}

#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background(canvas: web::HtmlCanvasElement, options: JsValue) -> BackgroundHandle {
    let config = parse_options(&options);
    log::info!("[backdrop] mount {:?}", config.clamped());
    BackgroundHandle {
        state: mount::mount(canvas, config),
    }
}

fn parse_options(options: &JsValue) -> BackdropConfig {
    if options.is_undefined() || options.is_null() {
        return BackdropConfig::default();
    }
    // NaN survives as a float here and is replaced per field when clamped.
    match serde_wasm_bindgen::from_value::<BackdropConfig>(options.clone()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[backdrop] ignoring malformed options: {}", e);
            BackdropConfig::default()
        }
    }
}
