// Shared tuning constants used by both animation subsystems and the web
// frontend. Cosmetic values (colors) live with the renderer.

// Circuit grid
pub const GRID_SPACING: f32 = 30.0; // px between grid intersections
pub const SIGNAL_SPEED: f32 = 120.0; // px per second, constant for all signals
pub const SIGNAL_COUNT: usize = 5; // steady-state concurrent signals
pub const TRAIL_LENGTH: f32 = 120.0; // visible px behind the signal head
pub const TURN_PROBABILITY: f32 = 0.15; // chance to turn at an intersection
pub const MIN_STEPS_BEFORE_TURN: u32 = 4; // straight run-up before turns unlock
pub const MAX_PATH_STEPS: u32 = 200; // hard cap on path generation

// Hover effect on grid dots
pub const HOVER_RADIUS: f32 = 120.0; // effect radius in px
pub const HOVER_SCALE_MAX: f32 = 1.4; // max dot scale multiplier
pub const HOVER_BRIGHTEN_MAX: f32 = 0.6; // max grey-to-white blend
pub const POINTER_SMOOTHING: f32 = 0.08; // per-frame easing toward the raw pointer
pub const OFFSCREEN: f32 = -1000.0; // parked pointer position

// Grid dot styling inputs (the renderer turns these into rgba)
pub const DOT_BASE_RADIUS: f32 = 1.5;
pub const DOT_BASE_GREY: f32 = 128.0;
pub const DOT_BASE_ALPHA: f32 = 0.15;
pub const DOT_ALPHA_SPAN: f32 = 0.35;

// Particle field
pub const PARTICLE_WIDTH_DIVISOR: f32 = 40.0; // one particle per this many px of width
pub const PARTICLE_MAX_COUNT: usize = 20;
pub const CONNECT_DISTANCE: f32 = 80.0; // px within which particles link up
pub const CONNECT_ALPHA_MAX: f32 = 0.2;
pub const WALL_DAMPING: f32 = 0.8; // velocity kept after bouncing off a wall
pub const PARTICLE_REF_FPS: f32 = 30.0; // frame budget the spawn speeds are tuned against

// Frame loop
pub const MAX_FRAME_DT: f32 = 0.1; // seconds; survives background-tab gaps
pub const RESIZE_DEBOUNCE_MS: i32 = 150;
