use super::listener::EventListener;
use crate::constants::EVENT_RESIZE;
use crate::dom;
use crate::mount::SharedBackdrop;
use web_sys as web;

// Resize runs synchronously, so both surfaces are reallocated before the next
// animation frame is delivered.
pub fn wire_resize(window: &web::Window, backdrop: &SharedBackdrop) -> anyhow::Result<EventListener> {
    let backdrop = backdrop.clone();
    EventListener::new(window, EVENT_RESIZE, move |_ev: web::Event| {
        backdrop
            .borrow_mut()
            .resize(dom::viewport(), dom::device_pixel_ratio());
    })
}
