// Renderer-side cosmetic constants. Behavioral tuning lives in fx-core.

// Circuit grid palette
pub const GRID_LINE_COLOR: &str = "rgba(128, 128, 128, 0.08)";
pub const SIGNAL_CORE_COLOR: &str = "rgba(126, 58, 183, 0.85)";
pub const SIGNAL_GLOW_COLOR: &str = "rgba(88, 28, 135, 0.25)";
pub const SIGNAL_SHADOW_COLOR: &str = "rgba(88, 28, 135, 0.35)";

// Stroke widths (css px)
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const SIGNAL_GLOW_WIDTH: f64 = 4.0;
pub const SIGNAL_CORE_WIDTH: f64 = 1.5;
pub const SIGNAL_SHADOW_BLUR: f64 = 6.0;
pub const CONNECTION_WIDTH: f64 = 1.0;

// Particle palette
pub const CONNECTION_RGB: &str = "139, 92, 246";
pub const PARTICLE_ALPHA: f64 = 0.6;
pub const PARTICLE_HIGHLIGHT_COLOR: &str = "rgba(255, 255, 255, 0.3)";

// The particle canvas is throttled to a 30 fps budget.
pub const PARTICLE_FRAME_INTERVAL_SEC: f32 = 1.0 / 30.0;

// Canvas element ids in the landing pages
pub const CIRCUIT_CANVAS_ID: &str = "circuit-canvas";
pub const TEAM_CANVAS_ID: &str = "teamCanvas";
