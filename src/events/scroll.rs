use super::listener::EventListener;
use crate::constants::EVENT_SCROLL;
use crate::dom;
use crate::mount::SharedBackdrop;
use web_sys as web;

pub fn wire_scroll(window: &web::Window, backdrop: &SharedBackdrop) -> anyhow::Result<EventListener> {
    let backdrop = backdrop.clone();
    EventListener::passive(window, EVENT_SCROLL, move |_ev: web::Event| {
        backdrop.borrow_mut().scrolled(dom::scroll_y());
    })
}
