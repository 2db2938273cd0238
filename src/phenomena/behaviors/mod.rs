//! Phenomena domain: per-kind step behaviours behind a single dispatch.
//!
//! A step advances and draws one instance for the current frame and reports
//! whether it should stay alive. Steps may perturb stars only through the
//! StarField's `*_within` capability.

mod bodies;
mod bursts;
mod clouds;

use bevy::prelude::*;
use rand::Rng;

use crate::canvas::Canvas;
use crate::content::EventKind;
use crate::core::Viewport;
use crate::phenomena::error::StepError;
use crate::phenomena::instance::EventInstance;
use crate::starfield::StarField;

/// Everything a step may touch during one frame
pub struct StepContext<'a, R: Rng> {
    pub now_ms: u64,
    pub viewport: Viewport,
    pub stars: &'a mut StarField,
    pub canvas: &'a mut Canvas,
    pub rng: &'a mut R,
    /// Set by a step that wants another random spawn (still cooldown-gated)
    pub spawn_requested: bool,
}

impl<'a, R: Rng> StepContext<'a, R> {
    pub fn new(
        now_ms: u64,
        viewport: Viewport,
        stars: &'a mut StarField,
        canvas: &'a mut Canvas,
        rng: &'a mut R,
    ) -> Self {
        Self {
            now_ms,
            viewport,
            stars,
            canvas,
            rng,
            spawn_requested: false,
        }
    }
}

/// Advance and draw `instance`. `Ok(false)` ends it early.
pub fn step<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    match instance.kind {
        EventKind::Supernova => bursts::supernova(instance, ctx),
        EventKind::Blackhole => bursts::blackhole(instance, ctx),
        EventKind::Pulsar => bursts::pulsar(instance, ctx),
        EventKind::GravitationalWave => bursts::gravitational_wave(instance, ctx),
        EventKind::QuantumFluctuation => bursts::quantum_fluctuation(instance, ctx),
        EventKind::PlasmaStorm => bursts::plasma_storm(instance, ctx),
        EventKind::FtlNeutrinos => bursts::ftl_neutrinos(instance, ctx),
        EventKind::Comet => bodies::comet(instance, ctx),
        EventKind::Planet => bodies::planet(instance, ctx),
        EventKind::Spaceship => bodies::spaceship(instance, ctx),
        EventKind::Nebula => clouds::nebula(instance, ctx),
        EventKind::InterstellarDust => clouds::interstellar_dust(instance, ctx),
        EventKind::DarkMatter => clouds::dark_matter(instance, ctx),
        EventKind::StarBirth => clouds::star_birth(instance, ctx),
    }
}

/// `sin(now * rate)` computed in f64 so long sessions keep their precision.
fn wave(now_ms: u64, rate: f64) -> f32 {
    (now_ms as f64 * rate).sin() as f32
}

/// Random 0-255 channel in `base..=255`
fn channel(rng: &mut impl Rng, base: u8) -> u8 {
    rng.random_range(base..=255)
}

fn jitter(rng: &mut impl Rng, half_extent: f32) -> Vec2 {
    Vec2::new(
        (rng.random::<f32>() * 2.0 - 1.0) * half_extent,
        (rng.random::<f32>() * 2.0 - 1.0) * half_extent,
    )
}
