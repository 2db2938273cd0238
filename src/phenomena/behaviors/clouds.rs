//! Particle clouds and the phenomena that wash or reshape the whole sky.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::PI;

use super::{StepContext, jitter};
use crate::canvas::rgba;
use crate::core::Viewport;
use crate::phenomena::error::StepError;
use crate::phenomena::instance::{EventInstance, Particle, Scratch};

const NEBULA_PARTICLES: usize = 50;
const DUST_PARTICLES: usize = 100;
const DUST_BOX: f32 = 60.0;
const DARK_MATTER_RADIUS: f32 = 50.0;
/// Dimming marks are refreshed every frame and lapse shortly after the cloud ends
const DARK_MATTER_HOLD_MS: u64 = 100;
const BIRTH_PARTICLES: usize = 200;

fn seed_nebula(origin: Vec2, rng: &mut impl Rng) -> Vec<Particle> {
    (0..NEBULA_PARTICLES)
        .map(|_| {
            let speed = 0.05 + rng.random::<f32>() * 0.1;
            Particle {
                position: origin + jitter(rng, 20.0),
                velocity: Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5) * speed,
                size: 1.0 + rng.random::<f32>() * 2.0,
                alpha: 0.2 + rng.random::<f32>() * 0.3,
                life: rng.random(),
                species: rng.random_range(0..3),
            }
        })
        .collect()
}

pub(super) fn nebula<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    if instance.scratch.is_empty() {
        instance.scratch = Scratch::Nebula {
            particles: seed_nebula(instance.origin, ctx.rng),
            size: 60.0,
        };
    }
    let p = instance.progress(ctx.now_ms);
    let origin = instance.origin;
    let mismatch = StepError::mismatch(instance);
    let Scratch::Nebula { particles, size } = &mut instance.scratch else {
        return Err(mismatch);
    };

    ctx.canvas.disc(origin, *size, rgba(157, 101, 255, 0.12));
    ctx.canvas.disc(origin, *size * 0.5, rgba(157, 101, 255, 0.3));

    for particle in particles.iter_mut() {
        particle.position += particle.velocity;

        let (decay, [r, g, b]) = match particle.species {
            // ionised hydrogen
            0 => (0.99, [255, 100, 255]),
            // dust
            1 => (0.98, [200, 150, 50]),
            _ => (0.97, [0, 255, 255]),
        };
        particle.alpha *= decay;
        let color = rgba(r, g, b, particle.alpha);

        if particle.life > 0.5 {
            ctx.canvas.dot(particle.position, particle.size, color);
        } else {
            ctx.canvas
                .disc(particle.position, particle.size / 2.0, color);
        }
        particle.life -= 0.001;
    }

    *size = 60.0 + (p * PI).sin() * 20.0;

    Ok(true)
}

pub(super) fn interstellar_dust<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let origin = instance.origin;
    if instance.scratch.is_empty() {
        let rng = &mut *ctx.rng;
        let particles = (0..DUST_PARTICLES)
            .map(|_| Particle {
                position: origin + jitter(rng, 50.0),
                velocity: Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5) * 0.5,
                size: if rng.random::<f32>() > 0.8 { 2.0 } else { 1.0 },
                alpha: rng.random::<f32>() * 0.5 + 0.2,
                life: 1.0,
                species: 0,
            })
            .collect();
        instance.scratch = Scratch::Dust { particles };
    }
    let mismatch = StepError::mismatch(instance);
    let Scratch::Dust { particles } = &mut instance.scratch else {
        return Err(mismatch);
    };

    for particle in particles.iter_mut() {
        particle.position += particle.velocity;

        let offset = particle.position - origin;
        if offset.x.abs() > DUST_BOX {
            particle.velocity.x = -particle.velocity.x;
        }
        if offset.y.abs() > DUST_BOX {
            particle.velocity.y = -particle.velocity.y;
        }

        ctx.canvas.dot(
            particle.position,
            particle.size,
            rgba(204, 204, 204, particle.alpha),
        );
    }

    Ok(true)
}

pub(super) fn dark_matter<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let p = instance.progress(ctx.now_ms);
    let alpha = 0.4 * (1.0 - (p - 0.5).abs() * 2.0);
    let Viewport { width, height } = ctx.viewport;

    ctx.canvas.wash(rgba(51, 0, 102, alpha * 0.5));

    let drift = (ctx.now_ms as f64 * 0.001) as f32;
    let band = rgba(51, 0, 102, alpha);
    let mut y = 0.0;
    while y < height {
        let offset = (y * 0.01 + drift).sin() * 15.0;
        ctx.canvas
            .line(Vec2::new(offset, y), Vec2::new(width + offset, y), band);
        y += 20.0;
    }

    ctx.stars.dim_within(
        ctx.viewport.center(),
        DARK_MATTER_RADIUS,
        0.5 + 0.5 * p,
        ctx.now_ms + DARK_MATTER_HOLD_MS,
    );

    Ok(true)
}

fn seed_inflow(center: Vec2, viewport: Viewport, rng: &mut impl Rng) -> Vec<Particle> {
    (0..BIRTH_PARTICLES)
        .map(|_| {
            let position = viewport.random_point(rng);
            Particle {
                position,
                velocity: (center - position) * 0.002,
                size: rng.random::<f32>() * 2.0 + 0.5,
                alpha: rng.random::<f32>() * 0.5 + 0.2,
                life: rng.random(),
                species: 0,
            }
        })
        .collect()
}

pub(super) fn star_birth<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let center = instance.origin;
    if instance.scratch.is_empty() {
        instance.scratch = Scratch::StarBirth {
            particles: seed_inflow(center, ctx.viewport, ctx.rng),
            flash_triggered: false,
        };
    }
    let p = instance.progress(ctx.now_ms);
    let mismatch = StepError::mismatch(instance);
    let Scratch::StarBirth {
        particles,
        flash_triggered,
    } = &mut instance.scratch
    else {
        return Err(mismatch);
    };

    ctx.canvas
        .disc(center, 100.0 * p * 1.2, rgba(255, 255, 255, 0.08));
    ctx.canvas
        .disc(center, 20.0 * (1.0 - p * 0.8), rgba(255, 255, 102, 0.8));

    let color = |alpha: f32| rgba(255, 255, 102, alpha * (0.5 + p * 0.5));
    for particle in particles.iter_mut() {
        particle.position += particle.velocity * (1.0 - p);
        ctx.canvas.disc(
            particle.position,
            particle.size * (1.0 + p * 0.5),
            color(particle.alpha),
        );
    }

    if p > 0.9 && !*flash_triggered {
        *flash_triggered = true;
        ctx.canvas.wash(rgba(255, 255, 255, 0.3));
        ctx.stars.ignite(center, ctx.rng);
        info!("A new star ignited at ({:.0}, {:.0})", center.x, center.y);
    }

    Ok(true)
}
