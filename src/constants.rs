// DOM wiring constants for the web front end.

// Element the module mounts onto automatically at start, if present
pub const AUTO_MOUNT_CANVAS_ID: &str = "bg-canvas";

// Accessibility preference that freezes the animation
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Window events the background listens to
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_SCROLL: &str = "scroll";
pub const EVENT_RESIZE: &str = "resize";
// MediaQueryList event
pub const EVENT_MEDIA_CHANGE: &str = "change";

// Composite operations used on the offscreen surface
pub const COMPOSITE_SOURCE_OVER: &str = "source-over";
pub const COMPOSITE_LIGHTER: &str = "lighter";

// Context acquisition is retried once per animation frame; log the wait once
// it has gone on this long.
pub const CONTEXT_WAIT_WARN_MS: u64 = 1000;
