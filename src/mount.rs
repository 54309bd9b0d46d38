//! Lifecycle of one background bound to one canvas.

use crate::constants::CONTEXT_WAIT_WARN_MS;
use crate::dom;
use crate::events::{self, Subscriptions};
use crate::frame::RafScheduler;
use crate::target::Canvas2dTarget;
use backdrop_core::{Backdrop, BackdropConfig, PendingFrame};
use instant::{Duration, Instant};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type WebBackdrop = Backdrop<Canvas2dTarget, RafScheduler>;
pub type SharedBackdrop = Rc<RefCell<WebBackdrop>>;

pub struct Mounted {
    backdrop: SharedBackdrop,
    subscriptions: Subscriptions,
}

impl Mounted {
    fn teardown(mut self) {
        self.backdrop.borrow_mut().unmount();
        self.subscriptions.clear();
    }
}

pub enum MountState {
    /// The 2D context was not available yet; a retry is queued for the next frame.
    /// The retry owns its JS closure, so leaving this state frees it.
    Waiting {
        retry: Option<PendingFrame<RafScheduler>>,
        since: Instant,
        warned: bool,
    },
    Active(Mounted),
    Unmounted,
}

pub type SharedMount = Rc<RefCell<MountState>>;

pub fn mount(canvas: web::HtmlCanvasElement, config: BackdropConfig) -> SharedMount {
    let state = Rc::new(RefCell::new(MountState::Waiting {
        retry: None,
        since: Instant::now(),
        warned: false,
    }));
    try_activate(&state, canvas, config);
    state
}

pub fn unmount(state: &SharedMount) {
    let previous = std::mem::replace(&mut *state.borrow_mut(), MountState::Unmounted);
    match previous {
        MountState::Active(m) => m.teardown(),
        MountState::Waiting { retry, .. } => {
            drop(retry);
            log::info!("[backdrop] unmounted before a 2d context was available");
        }
        MountState::Unmounted => {}
    }
}

fn try_activate(state: &SharedMount, canvas: web::HtmlCanvasElement, config: BackdropConfig) {
    let (since, mut warned) = match &mut *state.borrow_mut() {
        MountState::Waiting {
            since,
            warned,
            retry,
        } => {
            if let Some(r) = retry {
                r.fired();
            }
            (*since, *warned)
        }
        _ => return,
    };
    // Replacing the state below may drop the closure that is running this call.
    // wasm-bindgen frees it only once the call returns.
    match Canvas2dTarget::acquire(&canvas) {
        Ok(target) => {
            let mounted = activate(target, config);
            *state.borrow_mut() = MountState::Active(mounted);
        }
        Err(e) => {
            if !warned && since.elapsed() >= Duration::from_millis(CONTEXT_WAIT_WARN_MS) {
                log::warn!("[backdrop] still waiting for a 2d context: {:?}", e);
                warned = true;
            } else {
                log::debug!("[backdrop] canvas not ready: {:?}", e);
            }
            let weak: Weak<RefCell<MountState>> = Rc::downgrade(state);
            let scheduler = RafScheduler::new();
            scheduler.set_callback(move |_ts| {
                if let Some(state) = weak.upgrade() {
                    try_activate(&state, canvas.clone(), config);
                }
            });
            let retry = PendingFrame::request(scheduler);
            if retry.handle().is_none() {
                log::warn!("[backdrop] could not queue a context retry");
            }
            *state.borrow_mut() = MountState::Waiting {
                retry: Some(retry),
                since,
                warned,
            };
        }
    }
}

fn activate(target: Canvas2dTarget, config: BackdropConfig) -> Mounted {
    let query = dom::reduced_motion_query();
    let env = dom::environment(query.as_ref());
    let backdrop: SharedBackdrop = Rc::new_cyclic(|weak: &Weak<RefCell<WebBackdrop>>| {
        let scheduler = RafScheduler::new();
        let weak = weak.clone();
        scheduler.set_callback(move |ts: f64| {
            if let Some(b) = weak.upgrade() {
                b.borrow_mut().on_frame(ts);
            }
        });
        RefCell::new(Backdrop::mount(
            config,
            env,
            target,
            scheduler,
            &mut rand::thread_rng(),
        ))
    });
    let subscriptions = events::wire_all(&backdrop, query.as_ref());
    log::info!(
        "[backdrop] active with {} listeners, reduced_motion={}",
        subscriptions.len(),
        env.reduced_motion
    );
    Mounted {
        backdrop,
        subscriptions,
    }
}
