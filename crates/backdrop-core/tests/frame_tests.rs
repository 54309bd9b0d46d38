mod common;

use backdrop_core::*;
use common::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Scheduler whose log outlives the owner it is moved into.
#[derive(Clone, Default)]
struct SharedScheduler(Rc<RefCell<ManualScheduler>>);

impl FrameScheduler for SharedScheduler {
    type Handle = u32;

    fn schedule(&mut self) -> Option<u32> {
        self.0.borrow_mut().schedule()
    }

    fn cancel(&mut self, handle: u32) {
        self.0.borrow_mut().cancel(handle)
    }
}

#[test]
fn animating_callback_rearms_and_reports_timestamp() {
    let mut sched = ManualScheduler::default();
    let mut frames = FrameLoop::new(MotionMode::Animating);
    assert_eq!(frames.start(&mut sched), FrameAction::Idle);
    assert_eq!(frames.pending(), Some(1));

    assert_eq!(frames.on_callback(&mut sched, 16.5), FrameAction::Animate(16.5));
    assert_eq!(frames.pending(), Some(2));
    assert_eq!(sched.scheduled, 2);
}

#[test]
fn static_loop_renders_once_and_never_schedules() {
    let mut sched = ManualScheduler::default();
    let mut frames = FrameLoop::new(MotionMode::Static);
    assert_eq!(frames.start(&mut sched), FrameAction::RenderStatic);
    assert_eq!(frames.on_callback(&mut sched, 16.0), FrameAction::Idle);
    assert_eq!(frames.on_resize(), FrameAction::RenderStatic);
    assert_eq!(sched.scheduled, 0);
}

#[test]
fn mode_switches_cancel_and_rearm() {
    let mut sched = ManualScheduler::default();
    let mut frames = FrameLoop::new(MotionMode::Animating);
    frames.start(&mut sched);

    assert_eq!(
        frames.set_mode(&mut sched, MotionMode::Static),
        FrameAction::RenderStatic
    );
    assert_eq!(sched.cancelled, vec![1]);
    assert_eq!(frames.pending(), None);

    assert_eq!(
        frames.set_mode(&mut sched, MotionMode::Animating),
        FrameAction::Idle
    );
    assert_eq!(frames.pending(), Some(2));
    assert_eq!(frames.on_resize(), FrameAction::Idle);
}

#[test]
fn torn_down_loop_is_inert() {
    let mut sched = ManualScheduler::default();
    let mut frames = FrameLoop::new(MotionMode::Animating);
    frames.start(&mut sched);
    frames.teardown(&mut sched);
    assert!(frames.is_torn_down());
    assert_eq!(sched.cancelled, vec![1]);
    assert_eq!(frames.on_callback(&mut sched, 32.0), FrameAction::Idle);
    assert_eq!(
        frames.set_mode(&mut sched, MotionMode::Static),
        FrameAction::Idle
    );
    assert!(sched.pending.is_empty());
}

#[test]
fn dropping_an_unfired_request_cancels_it() {
    let shared = SharedScheduler::default();
    let retry = PendingFrame::request(shared.clone());
    assert_eq!(retry.handle(), Some(1));
    drop(retry);
    let log = shared.0.borrow();
    assert_eq!(log.cancelled, vec![1]);
    assert!(log.pending.is_empty());
}

#[test]
fn dropping_a_fired_request_cancels_nothing() {
    let shared = SharedScheduler::default();
    let mut retry = PendingFrame::request(shared.clone());
    shared.0.borrow_mut().take_due();
    retry.fired();
    assert_eq!(retry.handle(), None);
    drop(retry);
    assert!(shared.0.borrow().cancelled.is_empty());
}
