use backdrop_core::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` behind the core's scheduler trait.
///
/// Every request re-submits the same JS callback; cancellation goes through
/// `cancelAnimationFrame` with the id of the one outstanding request.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Install the per-frame handler. Requests made before this are refused.
    pub fn set_callback(&self, f: impl FnMut(f64) + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut(f64)>));
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let window = web::window()?;
        let cb = self.callback.borrow();
        let closure = cb.as_ref()?;
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}
