//! Circuit-grid state: signal population scheduling and pointer reaction.
//!
//! All mutable state lives in [`CircuitField`], owned by one renderer
//! instance and driven through `tick`. Nothing here touches a drawing
//! surface, so the whole update path runs under plain host tests.

use crate::constants::*;
use crate::grid::{ConfigError, GridDims};
use crate::path::{generate_path, TurnRule};
use crate::signal::Signal;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct CircuitConfig {
    pub spacing: f32,
    pub signal_speed: f32,
    pub signal_count: usize,
    pub trail_length: f32,
    pub turn_rule: TurnRule,
    pub hover_radius: f32,
    pub hover_scale_max: f32,
    pub hover_brighten_max: f32,
    pub pointer_smoothing: f32,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            spacing: GRID_SPACING,
            signal_speed: SIGNAL_SPEED,
            signal_count: SIGNAL_COUNT,
            trail_length: TRAIL_LENGTH,
            turn_rule: TurnRule {
                probability: TURN_PROBABILITY,
                min_steps_before_turn: MIN_STEPS_BEFORE_TURN,
                max_steps: MAX_PATH_STEPS,
            },
            hover_radius: HOVER_RADIUS,
            hover_scale_max: HOVER_SCALE_MAX,
            hover_brighten_max: HOVER_BRIGHTEN_MAX,
            pointer_smoothing: POINTER_SMOOTHING,
        }
    }
}

/// Raw pointer target plus the smoothed position the renderer reads.
/// Smoothing decouples rendered falloff from input jitter; when the pointer
/// leaves the viewport the target parks off-screen and the smoothed position
/// decays toward it.
#[derive(Clone, Copy, Debug)]
pub struct Pointer {
    pub target: Vec2,
    pub smoothed: Vec2,
}

impl Default for Pointer {
    fn default() -> Self {
        let parked = Vec2::splat(OFFSCREEN);
        Self {
            target: parked,
            smoothed: parked,
        }
    }
}

impl Pointer {
    pub fn set_target(&mut self, pos: Vec2) {
        self.target = pos;
    }

    pub fn clear_target(&mut self) {
        self.target = Vec2::splat(OFFSCREEN);
    }

    /// One frame of exponential easing toward the target.
    pub fn step(&mut self, alpha: f32) {
        self.smoothed += (self.target - self.smoothed) * alpha;
    }
}

/// Cosine ease from 1 at the pointer to 0 at the hover radius edge.
#[inline]
pub fn hover_falloff(dist: f32, radius: f32) -> f32 {
    if dist >= radius {
        return 0.0;
    }
    let t = 1.0 - dist / radius;
    (1.0 - (t * std::f32::consts::PI).cos()) / 2.0
}

/// Per-dot styling derived from pointer proximity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotStyle {
    pub scale: f32,
    /// Grey-to-white blend amount in [0, hover_brighten_max].
    pub brighten: f32,
}

impl CircuitConfig {
    pub fn dot_style(&self, dist_to_pointer: f32) -> DotStyle {
        let ease = hover_falloff(dist_to_pointer, self.hover_radius);
        DotStyle {
            scale: 1.0 + (self.hover_scale_max - 1.0) * ease,
            brighten: self.hover_brighten_max * ease,
        }
    }
}

/// Grey channel value and alpha for a dot at the given brighten amount.
#[inline]
pub fn dot_grey_alpha(brighten: f32) -> (u8, f32) {
    let grey = (DOT_BASE_GREY + (255.0 - DOT_BASE_GREY) * brighten).round() as u8;
    (grey, DOT_BASE_ALPHA + DOT_ALPHA_SPAN * brighten)
}

/// Owner of the circuit-grid animation state.
pub struct CircuitField {
    pub dims: GridDims,
    pub config: CircuitConfig,
    pub signals: Vec<Signal>,
    pub pointer: Pointer,
    rng: StdRng,
}

impl CircuitField {
    pub fn new(
        width: f32,
        height: f32,
        config: CircuitConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let dims = GridDims::from_viewport(width, height, config.spacing)?;
        let mut field = Self {
            dims,
            config,
            signals: Vec::with_capacity(config.signal_count),
            pointer: Pointer::default(),
            rng: StdRng::seed_from_u64(seed),
        };
        // Stagger the initial population partway along their paths so the
        // first frame is not five signals leaving the same edge distance.
        for _ in 0..field.config.signal_count {
            let mut signal = field.spawn_signal();
            signal.progress = field.rng.gen::<f32>() * signal.total_len() * 0.5;
            field.signals.push(signal);
        }
        Ok(field)
    }

    fn spawn_signal(&mut self) -> Signal {
        let path = generate_path(&self.dims, &self.config.turn_rule, &mut self.rng);
        Signal::from_path(&path, &self.dims)
    }

    /// Recompute dimensions for a new viewport and rebuild the population.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.dims = GridDims::from_viewport(width, height, self.config.spacing)?;
        self.signals.clear();
        while self.signals.len() < self.config.signal_count {
            let signal = self.spawn_signal();
            self.signals.push(signal);
        }
        Ok(())
    }

    /// One frame of pure state update: smooth the pointer, advance every
    /// signal at constant speed, cull exited signals, refill to the target
    /// count. After every tick the active count equals the configured target.
    pub fn tick(&mut self, dt_sec: f32) {
        self.pointer.step(self.config.pointer_smoothing);

        let travel = self.config.signal_speed * dt_sec;
        let trail = self.config.trail_length;
        for signal in &mut self.signals {
            signal.advance(travel);
        }
        self.signals.retain(|s| !s.is_expired(trail));
        while self.signals.len() < self.config.signal_count {
            let signal = self.spawn_signal();
            self.signals.push(signal);
        }
    }
}
