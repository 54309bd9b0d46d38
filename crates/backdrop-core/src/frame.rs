//! Frame scheduling state machine.
//!
//! The loop is an explicit handle: at most one frame request is outstanding,
//! and cancelling it is a single call on the scheduler.

/// Platform hook that runs a callback on the next display refresh.
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Request one callback. `None` means the platform refused the request.
    fn schedule(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionMode {
    Animating,
    Static,
}

impl MotionMode {
    pub fn from_reduced_motion(reduce: bool) -> Self {
        if reduce {
            MotionMode::Static
        } else {
            MotionMode::Animating
        }
    }
}

/// What the owner should do in response to a loop event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameAction {
    /// Draw an animated frame at the given timestamp.
    Animate(f64),
    /// Draw the frozen frame once.
    RenderStatic,
    Idle,
}

/// One request owned together with its scheduler. Dropping it before the
/// callback fires cancels the request, then drops the scheduler.
pub struct PendingFrame<S: FrameScheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
}

impl<S: FrameScheduler> PendingFrame<S> {
    pub fn request(mut scheduler: S) -> Self {
        let handle = scheduler.schedule();
        Self { scheduler, handle }
    }

    pub fn handle(&self) -> Option<S::Handle> {
        self.handle
    }

    /// The callback ran, so there is nothing left to cancel.
    pub fn fired(&mut self) {
        self.handle = None;
    }
}

impl<S: FrameScheduler> Drop for PendingFrame<S> {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            self.scheduler.cancel(h);
        }
    }
}

#[derive(Debug)]
pub struct FrameLoop<H> {
    mode: MotionMode,
    pending: Option<H>,
    torn_down: bool,
}

impl<H: Copy + PartialEq + std::fmt::Debug> FrameLoop<H> {
    pub fn new(mode: MotionMode) -> Self {
        Self {
            mode,
            pending: None,
            torn_down: false,
        }
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// First action after mount: schedule when animating, otherwise render once.
    pub fn start<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> FrameAction {
        match self.mode {
            MotionMode::Animating => {
                self.request(scheduler);
                FrameAction::Idle
            }
            MotionMode::Static => FrameAction::RenderStatic,
        }
    }

    /// A scheduled callback fired. Re-arms the next frame while animating.
    pub fn on_callback<S: FrameScheduler<Handle = H>>(
        &mut self,
        scheduler: &mut S,
        timestamp_ms: f64,
    ) -> FrameAction {
        self.pending = None;
        if self.torn_down || self.mode != MotionMode::Animating {
            return FrameAction::Idle;
        }
        self.request(scheduler);
        FrameAction::Animate(timestamp_ms)
    }

    pub fn set_mode<S: FrameScheduler<Handle = H>>(
        &mut self,
        scheduler: &mut S,
        mode: MotionMode,
    ) -> FrameAction {
        if self.torn_down || mode == self.mode {
            return FrameAction::Idle;
        }
        log::info!("[motion] {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        match mode {
            MotionMode::Static => {
                self.cancel(scheduler);
                FrameAction::RenderStatic
            }
            MotionMode::Animating => {
                self.request(scheduler);
                FrameAction::Idle
            }
        }
    }

    /// Surfaces were reallocated; a static background must be drawn again.
    pub fn on_resize(&self) -> FrameAction {
        if !self.torn_down && self.mode == MotionMode::Static {
            FrameAction::RenderStatic
        } else {
            FrameAction::Idle
        }
    }

    pub fn teardown<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        self.cancel(scheduler);
        self.torn_down = true;
    }

    fn request<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if self.pending.is_none() {
            self.pending = scheduler.schedule();
        }
    }

    fn cancel<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if let Some(h) = self.pending.take() {
            scheduler.cancel(h);
        }
    }
}
