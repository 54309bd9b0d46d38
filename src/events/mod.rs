pub mod listener;
pub mod motion;
pub mod pointer;
pub mod scroll;
pub mod viewport;

pub use listener::Subscriptions;

use crate::mount::SharedBackdrop;
use web_sys as web;

/// Attach every listener a mounted background needs. A listener that fails to
/// attach is logged and skipped; the background still renders without it.
pub fn wire_all(backdrop: &SharedBackdrop, query: Option<&web::MediaQueryList>) -> Subscriptions {
    let mut subs = Subscriptions::default();
    let Some(window) = web::window() else {
        return subs;
    };
    let wired = [
        ("pointer", pointer::wire_pointermove(&window, backdrop)),
        ("scroll", scroll::wire_scroll(&window, backdrop)),
        ("resize", viewport::wire_resize(&window, backdrop)),
    ];
    for (name, listener) in wired {
        match listener {
            Ok(l) => subs.insert(name, l),
            Err(e) => log::warn!("[events] {} listener not attached: {:?}", name, e),
        }
    }
    if let Some(q) = query {
        match motion::wire_reduced_motion(q, backdrop) {
            Ok(l) => subs.insert("motion", l),
            Err(e) => log::warn!("[events] motion listener not attached: {:?}", e),
        }
    }
    subs
}
