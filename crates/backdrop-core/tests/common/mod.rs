#![allow(dead_code)]

use backdrop_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize(SurfaceLayout),
    Clear,
    Trail(f64),
    Glow(RadialGlow),
    Present(PresentFilter),
}

/// Spy target that records every call it receives.
#[derive(Default, Debug)]
pub struct RecordingTarget {
    pub calls: Vec<DrawCall>,
}

impl RecordingTarget {
    pub fn presents(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Present(_)))
            .count()
    }

    pub fn glows(&self) -> Vec<RadialGlow> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Glow(g) => Some(*g),
                _ => None,
            })
            .collect()
    }

    pub fn resizes(&self) -> Vec<SurfaceLayout> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Resize(l) => Some(*l),
                _ => None,
            })
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn resize(&mut self, layout: SurfaceLayout) {
        self.calls.push(DrawCall::Resize(layout));
    }
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }
    fn trail_fill(&mut self, alpha: f64) {
        self.calls.push(DrawCall::Trail(alpha));
    }
    fn radial_glow(&mut self, glow: &RadialGlow) {
        self.calls.push(DrawCall::Glow(*glow));
    }
    fn present(&mut self, filter: &PresentFilter) {
        self.calls.push(DrawCall::Present(*filter));
    }
}

/// Scheduler driven by hand from tests.
#[derive(Default, Debug)]
pub struct ManualScheduler {
    next: u32,
    pub pending: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub scheduled: u32,
}

impl ManualScheduler {
    /// Pop the oldest outstanding request, as a display refresh would.
    pub fn take_due(&mut self) -> Option<u32> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn schedule(&mut self) -> Option<u32> {
        self.next += 1;
        self.scheduled += 1;
        self.pending.push(self.next);
        Some(self.next)
    }

    fn cancel(&mut self, handle: u32) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

pub fn env(width: f64, height: f64, reduced_motion: bool) -> Environment {
    Environment {
        viewport: Viewport::new(width, height),
        device_pixel_ratio: 1.0,
        scroll_y: 0.0,
        reduced_motion,
    }
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Fire the next display refresh if a frame is pending. Returns whether one fired.
pub fn tick<T: RenderTarget>(b: &mut Backdrop<T, ManualScheduler>, timestamp_ms: f64) -> bool {
    if b.scheduler_mut().take_due().is_some() {
        b.on_frame(timestamp_ms);
        true
    } else {
        false
    }
}
