use super::listener::EventListener;
use crate::constants::EVENT_POINTER_MOVE;
use crate::mount::SharedBackdrop;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(window: &web::Window, backdrop: &SharedBackdrop) -> anyhow::Result<EventListener> {
    let backdrop = backdrop.clone();
    EventListener::passive(window, EVENT_POINTER_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        backdrop
            .borrow_mut()
            .pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
    })
}
