use backdrop_core::Viewport;

// ---------------- Environment readings ----------------
// Browser values arrive as loosely typed numbers; these keep them finite.

#[inline]
pub fn sanitize_px(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

#[inline]
pub fn viewport_from(inner_width: Option<f64>, inner_height: Option<f64>) -> Viewport {
    Viewport::new(sanitize_px(inner_width), sanitize_px(inner_height))
}

/// Scroll offsets may be negative during overscroll bounce; only NaN is discarded.
#[inline]
pub fn sanitize_scroll(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// A missing or failing media query counts as "no preference".
#[inline]
pub fn reduced_motion_from(matches: Option<bool>) -> bool {
    matches.unwrap_or(false)
}
