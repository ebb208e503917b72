//! Random-walk particle field with proximity-based connecting lines.
//!
//! Velocities and pulse rates are stored per second. The spawn ranges are
//! tuned against a 30 fps frame budget and scaled by that reference rate
//! once, so `tick` is frame-rate independent after that.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// HSL hue in degrees, violet band.
    pub hue: f32,
    /// HSL lightness percentage.
    pub lightness: f32,
    pulse: f32,
    pulse_rate: f32,
}

impl Particle {
    /// Size multiplier from the pulse phase, oscillating around 1.
    #[inline]
    pub fn pulse_scale(&self) -> f32 {
        self.pulse.sin() * 0.3 + 1.0
    }
}

/// A line between two particles close enough to connect, with its alpha.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        };
        field.respawn();
        field
    }

    /// Particle count scales with viewport width, capped for wide screens.
    pub fn target_count(width: f32) -> usize {
        ((width / PARTICLE_WIDTH_DIVISOR) as usize).min(PARTICLE_MAX_COUNT)
    }

    fn respawn(&mut self) {
        let count = Self::target_count(self.width);
        self.particles.clear();
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.width,
                self.rng.gen::<f32>() * self.height,
            );
            let vel = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * 0.5,
                (self.rng.gen::<f32>() - 0.5) * 0.5,
            ) * PARTICLE_REF_FPS;
            self.particles.push(Particle {
                pos,
                vel,
                radius: self.rng.gen::<f32>() * 3.0 + 1.5,
                hue: self.rng.gen::<f32>() * 30.0 + 270.0,
                lightness: self.rng.gen::<f32>() * 20.0 + 60.0,
                pulse: 0.0,
                pulse_rate: (self.rng.gen::<f32>() * 0.015 + 0.008) * PARTICLE_REF_FPS,
            });
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.respawn();
    }

    /// Integrate positions, bounce off the viewport walls with damping, and
    /// advance each particle's pulse phase.
    pub fn tick(&mut self, dt_sec: f32) {
        for p in &mut self.particles {
            p.pos += p.vel * dt_sec;
            p.pulse += p.pulse_rate * dt_sec;

            if p.pos.x < 0.0 || p.pos.x > self.width {
                p.vel.x *= -WALL_DAMPING;
            }
            if p.pos.y < 0.0 || p.pos.y > self.height {
                p.vel.y *= -WALL_DAMPING;
            }
            p.pos.x = p.pos.x.clamp(0.0, self.width);
            p.pos.y = p.pos.y.clamp(0.0, self.height);
        }
    }

    /// All particle pairs within connecting distance, alpha fading linearly
    /// with separation.
    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = a.pos.distance(b.pos);
                if dist < CONNECT_DISTANCE {
                    out.push(Connection {
                        a: a.pos,
                        b: b.pos,
                        alpha: (CONNECT_DISTANCE - dist) / CONNECT_DISTANCE * CONNECT_ALPHA_MAX,
                    });
                }
            }
        }
        out
    }
}
