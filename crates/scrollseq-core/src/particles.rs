//! Celebratory particle burst played while the trigger is active.

use crate::constants::{
    BURST_DRAG_PER_SEC, BURST_GRAVITY, BURST_PALETTE, BURST_SIZE_MAX, BURST_SIZE_MIN,
    BURST_SPEED_MAX, BURST_SPEED_MIN, MAX_FRAME_DT_SEC,
};
use crate::value::Rgb;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

/// Particles in the burst's local space (pixels, origin at the burst
/// center, +y down).
#[derive(Clone, Debug)]
pub struct ParticleBurst {
    pub particles: Vec<Particle>,
    age_sec: f32,
    lifetime_sec: f32,
}

impl ParticleBurst {
    pub fn spawn(count: usize, lifetime_sec: f32, rng: &mut StdRng) -> Self {
        let particles = (0..count)
            .map(|_| {
                let angle = rng.gen::<f32>() * TAU;
                let speed = rng.gen_range(BURST_SPEED_MIN..BURST_SPEED_MAX);
                let [r, g, b] = *BURST_PALETTE.choose(rng).unwrap_or(&BURST_PALETTE[0]);
                Particle {
                    position: Vec2::ZERO,
                    velocity: Vec2::from_angle(angle) * speed,
                    radius: rng.gen_range(BURST_SIZE_MIN..BURST_SIZE_MAX),
                    color: Rgb::new(r, g, b),
                }
            })
            .collect();
        Self {
            particles,
            age_sec: 0.0,
            lifetime_sec: lifetime_sec.max(f32::EPSILON),
        }
    }

    pub fn step(&mut self, dt_sec: f32) {
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let drag = (-BURST_DRAG_PER_SEC * dt).exp();
        for p in &mut self.particles {
            p.velocity.y += BURST_GRAVITY * dt;
            p.velocity *= drag;
            p.position += p.velocity * dt;
        }
        self.age_sec += dt_sec.max(0.0);
    }

    /// Linear fade from 1 at spawn to 0 at the end of the lifetime.
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age_sec / self.lifetime_sec).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.age_sec >= self.lifetime_sec
    }
}
