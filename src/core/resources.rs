//! Core domain: shared resources for the session clock, randomness, and viewport.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Monotonic session clock in milliseconds, plus a frame counter.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SkyClock {
    pub now_ms: u64,
    pub frame: u64,
}

impl SkyClock {
    /// Advance to the given elapsed time. Never moves backwards.
    pub fn advance_to(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.max(elapsed_ms);
        self.frame += 1;
    }
}

/// Session-wide random source. Seeded once at startup.
#[derive(Resource, Debug)]
pub struct SkyRng {
    pub seed: u64,
    rng: ChaCha8Rng,
}

impl SkyRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Default for SkyRng {
    fn default() -> Self {
        Self::from_seed(rand::rng().random())
    }
}

/// Drawable area in viewport coordinates (origin top-left, y down).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Degenerate sizes are clamped to 1x1 rather than rejected.
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.max(1.0) } else { 1.0 };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True if `point` lies outside the viewport by more than `margin`.
    pub fn is_outside(&self, point: Vec2, margin: f32) -> bool {
        point.x < -margin
            || point.y < -margin
            || point.x > self.width + margin
            || point.y > self.height + margin
    }

    /// Uniformly random point inside the viewport.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random::<f32>() * self.width,
            rng.random::<f32>() * self.height,
        )
    }

    /// Map a viewport point to 2D world space for a centred `Camera2d`.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width * 0.5, self.height * 0.5 - point.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Mute toggle. Only the flag is tracked.
#[derive(Resource, Debug, Default)]
pub struct MuteState {
    pub muted: bool,
}

impl MuteState {
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// Slow drifting observer shown in the HUD telemetry readout.
#[derive(Resource, Debug, Clone, Default)]
pub struct ObserverDrift {
    pub universe_time: f32,
    pub position: Vec2,
}

impl ObserverDrift {
    pub const TIME_SPEED: f32 = 0.2;

    pub fn advance(&mut self) {
        self.universe_time += Self::TIME_SPEED;
        self.position.x += (self.universe_time * 0.01).sin() * 0.1;
        self.position.y += (self.universe_time * 0.015).cos() * 0.1;
    }

    pub fn curvature(&self) -> f32 {
        ((self.position.x * 0.01).sin()
            * (self.position.y * 0.01).cos()
            * (self.universe_time * 0.001).sin())
        .abs()
    }

    /// Coordinates formatted as five zero-padded digits each.
    pub fn coordinates_label(&self) -> (String, String) {
        let fmt = |v: f32| format!("{:05}", (v * 10.0).floor() as i64);
        (fmt(self.position.x), fmt(self.position.y))
    }

    pub fn epoch(&self) -> u64 {
        (self.universe_time / 20.0).floor() as u64
    }
}
