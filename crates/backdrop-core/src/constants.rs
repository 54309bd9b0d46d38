// Tuning constants for the background field.

// Blob set
pub const BLOB_COUNT: usize = 6;
pub const BLOB_PHASE_SPAN: f64 = 1000.0; // phases drawn from [0, span)
pub const BLOB_RADIUS_MIN: f64 = 0.22; // base radius as a fraction of min(w, h)
pub const BLOB_RADIUS_SPAN: f64 = 0.18;

// Noise sampling
pub const NOISE_SEED: i32 = 1337;
pub const NOISE_X_INDEX_SCALE: f64 = 1.2;
pub const NOISE_Y_INDEX_SCALE: f64 = 1.5;

// Orbit around the surface centre
pub const ORBIT_RADIUS: f64 = 0.3;
pub const POINTER_PULL: f64 = 0.08;

// Radius breathing and scroll boost
pub const RADIUS_BASE_GAIN: f64 = 0.85;
pub const RADIUS_WAVE_GAIN: f64 = 0.35;
pub const RADIUS_WAVE_FREQ: f64 = 1.2;
pub const RADIUS_ENERGY_BOOST: f64 = 0.25;

// Colour cycling
pub const COLOR_WAVE_FREQ: f64 = 0.65;

// Per-blob alpha = (base + energy * gain) * intensity
pub const ALPHA_BASE: f64 = 0.10;
pub const ALPHA_ENERGY_GAIN: f64 = 0.05;

// Animation clock: time = timestamp_ms * TIME_SCALE * speed
pub const TIME_SCALE: f64 = 0.00022;

// Scroll energy
pub const ENERGY_RETAIN: f64 = 0.9;
pub const ENERGY_IMPULSE: f64 = 0.6;

// Compositing
pub const TRAIL_ALPHA: f64 = 0.06; // black veil laid over the offscreen each frame
pub const GRADIENT_INNER_RATIO: f64 = 0.2;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const MIN_OFFSCREEN_EDGE: u32 = 2;

// Brand palette, in blend order
pub const BRAND_BLUE: &str = "#0198fd";
pub const BRAND_BLEND: &str = "#764cf6";
pub const BRAND_MAGENTA: &str = "#ec00ef";
