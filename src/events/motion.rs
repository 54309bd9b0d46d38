use super::listener::EventListener;
use crate::constants::EVENT_MEDIA_CHANGE;
use crate::mount::SharedBackdrop;
use web_sys as web;

/// Follow live changes of the reduced-motion preference. Falls back to
/// `addListener` where the query list does not accept `addEventListener`.
pub fn wire_reduced_motion(
    query: &web::MediaQueryList,
    backdrop: &SharedBackdrop,
) -> anyhow::Result<EventListener> {
    let handler = {
        let backdrop = backdrop.clone();
        let mq = query.clone();
        move |_ev: web::Event| {
            backdrop.borrow_mut().set_reduced_motion(mq.matches());
        }
    };
    EventListener::new(query, EVENT_MEDIA_CHANGE, handler.clone()).or_else(|e| {
        log::debug!("[events] {:?}; retrying with addListener", e);
        EventListener::legacy_media(query, handler)
    })
}
