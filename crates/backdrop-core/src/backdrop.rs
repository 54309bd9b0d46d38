//! A mounted background instance: owns the surfaces, the frame loop and the
//! input state, and turns host events into draw calls.

use crate::blob::{sample_field, spawn_blobs, BlobSet, FieldInputs};
use crate::color::Palette;
use crate::compositor::{compose_frame, compute_layout, world_y_offset};
use crate::config::BackdropConfig;
use crate::constants::TIME_SCALE;
use crate::frame::{FrameAction, FrameLoop, FrameScheduler, MotionMode};
use crate::input::{PointerState, ScrollState, Viewport};
use crate::noise::SimplexNoise;
use crate::target::{RenderTarget, SurfaceLayout};
use instant::{Duration, Instant};
use rand::Rng;

const SLOW_FRAME: Duration = Duration::from_millis(16);

/// Host signals read once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    pub scroll_y: f64,
    pub reduced_motion: bool,
}

pub struct Backdrop<T: RenderTarget, S: FrameScheduler> {
    config: BackdropConfig,
    noise: SimplexNoise,
    palette: Palette,
    blobs: BlobSet,
    pointer: PointerState,
    scroll: ScrollState,
    viewport: Viewport,
    device_pixel_ratio: f64,
    layout: SurfaceLayout,
    target: T,
    scheduler: S,
    frames: FrameLoop<S::Handle>,
    frames_drawn: u64,
}

impl<T: RenderTarget, S: FrameScheduler> Backdrop<T, S> {
    pub fn mount<R: Rng + ?Sized>(
        config: BackdropConfig,
        env: Environment,
        mut target: T,
        scheduler: S,
        rng: &mut R,
    ) -> Self {
        let config = config.clamped();
        let layout = compute_layout(env.viewport, env.device_pixel_ratio, config.quality());
        target.resize(layout);
        let mode = MotionMode::from_reduced_motion(env.reduced_motion);
        log::info!(
            "[backdrop] mount mode={:?} offscreen={}x{} visible={}x{}",
            mode,
            layout.offscreen.width,
            layout.offscreen.height,
            layout.visible.width,
            layout.visible.height
        );
        let mut backdrop = Self {
            config,
            noise: SimplexNoise::default(),
            palette: Palette::brand(),
            blobs: spawn_blobs(rng),
            pointer: PointerState::default(),
            scroll: ScrollState::new(env.scroll_y),
            viewport: env.viewport,
            device_pixel_ratio: env.device_pixel_ratio,
            layout,
            target,
            scheduler,
            frames: FrameLoop::new(mode),
            frames_drawn: 0,
        };
        let action = backdrop.frames.start(&mut backdrop.scheduler);
        backdrop.apply(action);
        backdrop
    }

    /// Scheduled frame callback.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        let action = self.frames.on_callback(&mut self.scheduler, timestamp_ms);
        self.apply(action);
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        if self.frames.is_torn_down() {
            return;
        }
        self.pointer.on_move(client_x, client_y, self.viewport);
    }

    pub fn scrolled(&mut self, scroll_y: f64) {
        if self.frames.is_torn_down() {
            return;
        }
        self.scroll
            .on_scroll(scroll_y, self.viewport.height, self.config.energy_gain());
    }

    pub fn resize(&mut self, viewport: Viewport, device_pixel_ratio: f64) {
        if self.frames.is_torn_down() {
            return;
        }
        self.viewport = viewport;
        self.device_pixel_ratio = device_pixel_ratio;
        self.layout = compute_layout(viewport, device_pixel_ratio, self.config.quality());
        self.target.resize(self.layout);
        log::debug!(
            "[backdrop] resize offscreen={}x{} visible={}x{}",
            self.layout.offscreen.width,
            self.layout.offscreen.height,
            self.layout.visible.width,
            self.layout.visible.height
        );
        let action = self.frames.on_resize();
        self.apply(action);
    }

    pub fn set_reduced_motion(&mut self, reduce: bool) {
        let action = self
            .frames
            .set_mode(&mut self.scheduler, MotionMode::from_reduced_motion(reduce));
        self.apply(action);
    }

    /// Cancel the pending frame. Every later call is a no-op.
    pub fn unmount(&mut self) {
        if self.frames.is_torn_down() {
            return;
        }
        self.frames.teardown(&mut self.scheduler);
        log::info!("[backdrop] unmount after {} frames", self.frames_drawn);
    }

    pub fn is_mounted(&self) -> bool {
        !self.frames.is_torn_down()
    }

    pub fn mode(&self) -> MotionMode {
        self.frames.mode()
    }

    pub fn pending_frame(&self) -> Option<S::Handle> {
        self.frames.pending()
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn energy(&self) -> f64 {
        self.scroll.energy()
    }

    pub fn blobs(&self) -> &BlobSet {
        &self.blobs
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn apply(&mut self, action: FrameAction) {
        match action {
            FrameAction::Animate(ts) => self.draw(ts * TIME_SCALE * self.config.speed()),
            FrameAction::RenderStatic => {
                self.target.clear();
                self.draw(0.0);
            }
            FrameAction::Idle => {}
        }
    }

    fn draw(&mut self, time: f64) {
        let started = Instant::now();
        let surface = self.layout.offscreen.as_dvec2();
        let inputs = FieldInputs {
            time,
            pointer: self.pointer.pos,
            energy: self.scroll.energy(),
            intensity: self.config.intensity(),
            surface,
        };
        let world_y_off = world_y_offset(
            self.scroll.offset,
            self.config.parallax(),
            surface.y,
            self.viewport.height,
        );
        let samples = sample_field(&self.noise, &self.palette, &self.blobs, inputs);
        compose_frame(&mut self.target, self.layout, samples, world_y_off, &self.config);
        self.frames_drawn += 1;

        let took = started.elapsed();
        if took > SLOW_FRAME {
            log::debug!("[backdrop] slow frame {:?}", took);
        }
    }
}
