// Host-side tests for the environment-reading helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use backdrop_core::Viewport;
use input::*;

#[test]
fn sanitize_px_keeps_positive_finite_values() {
    assert_eq!(sanitize_px(Some(1280.0)), 1280.0);
    assert_eq!(sanitize_px(Some(0.5)), 0.5);
}

#[test]
fn sanitize_px_rejects_missing_and_bogus_values() {
    assert_eq!(sanitize_px(None), 0.0);
    assert_eq!(sanitize_px(Some(f64::NAN)), 0.0);
    assert_eq!(sanitize_px(Some(f64::INFINITY)), 0.0);
    assert_eq!(sanitize_px(Some(-10.0)), 0.0);
}

#[test]
fn viewport_from_window_dimensions() {
    assert_eq!(
        viewport_from(Some(1024.0), Some(768.0)),
        Viewport::new(1024.0, 768.0)
    );
    assert_eq!(viewport_from(None, Some(768.0)), Viewport::new(0.0, 768.0));
}

#[test]
fn scroll_allows_overscroll_but_not_nan() {
    assert_eq!(sanitize_scroll(Some(-12.0)), -12.0);
    assert_eq!(sanitize_scroll(Some(350.0)), 350.0);
    assert_eq!(sanitize_scroll(Some(f64::NAN)), 0.0);
    assert_eq!(sanitize_scroll(None), 0.0);
}

#[test]
fn unsupported_media_query_means_no_preference() {
    assert!(!reduced_motion_from(None));
    assert!(!reduced_motion_from(Some(false)));
    assert!(reduced_motion_from(Some(true)));
}
