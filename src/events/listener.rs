use fnv::FnvHashMap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

enum Registration {
    Event {
        target: web::EventTarget,
        kind: &'static str,
    },
    /// `MediaQueryList.addListener`, for browsers whose query lists are not
    /// event targets.
    LegacyMedia(web::MediaQueryList),
}

/// A DOM event subscription that unsubscribes when dropped.
pub struct EventListener {
    registration: Registration,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        Self::attach(target, kind, handler, false)
    }

    /// Registered with `{ passive: true }`.
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        Self::attach(target, kind, handler, true)
    }

    /// Subscribe to a media query through the deprecated `addListener`.
    pub fn legacy_media(
        query: &web::MediaQueryList,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        query
            .add_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()))
            .map_err(|e| anyhow::anyhow!("MediaQueryList.addListener failed: {:?}", e))?;
        Ok(Self {
            registration: Registration::LegacyMedia(query.clone()),
            closure,
        })
    }

    pub fn is_legacy_media(&self) -> bool {
        matches!(self.registration, Registration::LegacyMedia(_))
    }

    fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
        passive: bool,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback = closure.as_ref().unchecked_ref::<js_sys::Function>();
        let added = if passive {
            let opts = web::AddEventListenerOptions::new();
            opts.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind, callback, &opts,
            )
        } else {
            target.add_event_listener_with_callback(kind, callback)
        };
        added.map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", kind, e))?;
        Ok(Self {
            registration: Registration::Event {
                target: target.clone(),
                kind,
            },
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let callback = self.closure.as_ref().unchecked_ref::<js_sys::Function>();
        match &self.registration {
            Registration::Event { target, kind } => {
                _ = target.remove_event_listener_with_callback(kind, callback);
            }
            Registration::LegacyMedia(query) => {
                _ = query.remove_listener_with_opt_callback(Some(callback));
            }
        }
    }
}

/// Subscriptions held for the lifetime of one mount, keyed by a short name.
#[derive(Default)]
pub struct Subscriptions {
    listeners: FnvHashMap<&'static str, EventListener>,
}

impl Subscriptions {
    pub fn insert(&mut self, name: &'static str, listener: EventListener) {
        // Replacing an entry drops (and so detaches) the previous listener.
        self.listeners.insert(name, listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
