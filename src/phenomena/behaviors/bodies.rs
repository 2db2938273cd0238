//! Travelling and orbiting bodies.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use super::{StepContext, channel, wave};
use crate::canvas::rgba;
use crate::phenomena::error::StepError;
use crate::phenomena::instance::{EventInstance, PlanetState, Satellite, Scratch};

/// How far outside the viewport a comet head may travel before it ends
const COMET_EXIT_MARGIN: f32 = 20.0;
/// Comet duration carries a 1.2x tail-off window on top of its base travel time
const COMET_TRAVEL_SPAN: f32 = 1.2;

pub(super) fn comet<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    if instance.scratch.is_empty() {
        let heading = Vec2::from_angle(ctx.rng.random::<f32>() * TAU);
        let travel = ctx.viewport.size().length() * 0.5;
        instance.scratch = Scratch::Comet {
            start: instance.origin,
            end: instance.origin + heading * travel,
        };
    }
    let Scratch::Comet { start, end } = instance.scratch else {
        return Err(StepError::mismatch(instance));
    };

    let t = instance.progress(ctx.now_ms) * COMET_TRAVEL_SPAN;
    let head = start.lerp(end, t);
    if ctx.viewport.is_outside(head, COMET_EXIT_MARGIN) {
        return Ok(false);
    }

    ctx.canvas.dot_centered(head, 4.0, Color::WHITE);

    let dir = (end - start).normalize_or_zero();
    let tail_length = 50.0 + wave(ctx.now_ms, 0.005) * 15.0;
    let segments = tail_length as usize;
    for i in 1..=segments {
        let fade = i as f32 / tail_length;
        ctx.canvas.dot_centered(
            head - dir * i as f32 * 2.0,
            3.0 - fade * 1.5,
            rgba(136, 255, 136, (1.0 - fade * 0.8) * 0.5),
        );
    }

    if ctx.rng.random::<f32>() < 0.2 {
        let back = 10.0 + ctx.rng.random::<f32>() * tail_length;
        let alpha = 0.3 + ctx.rng.random::<f32>() * 0.4;
        ctx.canvas
            .dot(head - dir * back, 1.0, rgba(255, 255, 150, alpha));
    }

    Ok(true)
}

fn seed_planet(rng: &mut impl Rng) -> PlanetState {
    let radius = 20.0 + rng.random::<f32>() * 15.0;
    let ring_radius = radius * (1.8 + rng.random::<f32>() * 0.4);
    let count = rng.random_range(2..=4);
    let satellites = (0..count)
        .map(|_| Satellite {
            angle: rng.random::<f32>() * TAU,
            distance: ring_radius * (0.6 + rng.random::<f32>() * 0.3),
            size: 2.0 + rng.random::<f32>() * 2.0,
            speed: 0.002 + rng.random::<f32>() * 0.003,
        })
        .collect();

    PlanetState {
        radius,
        ring_radius,
        rotation: 0.0,
        rotation_speed: rng.random::<f32>() * 0.01 + 0.005,
        satellites,
    }
}

pub(super) fn planet<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    if instance.scratch.is_empty() {
        instance.scratch = Scratch::Planet(seed_planet(ctx.rng));
    }
    let origin = instance.origin;
    let mismatch = StepError::mismatch(instance);
    let Scratch::Planet(planet) = &mut instance.scratch else {
        return Err(mismatch);
    };

    ctx.canvas.disc(origin, planet.radius, rgba(85, 170, 255, 1.0));
    ctx.canvas
        .circle(origin, planet.radius * 1.2, rgba(51, 136, 204, 0.3));

    // Surface features are re-rolled every frame
    for _ in 0..10 {
        let angle = ctx.rng.random::<f32>() * TAU;
        let dist = ctx.rng.random::<f32>() * planet.radius * 0.7;
        let size = 1.0 + ctx.rng.random::<f32>() * 2.0;
        ctx.canvas.dot_centered(
            origin + Vec2::from_angle(angle) * dist,
            size,
            rgba(51, 136, 204, 1.0),
        );
    }

    ctx.canvas.ellipse(
        origin,
        Vec2::new(planet.ring_radius, planet.ring_radius * 0.3),
        planet.rotation,
        rgba(136, 204, 255, 1.0),
    );

    let spin = Vec2::from_angle(planet.rotation);
    for satellite in &mut planet.satellites {
        satellite.angle += satellite.speed;
        let local = Vec2::from_angle(satellite.angle) * satellite.distance;
        ctx.canvas
            .disc(origin + spin.rotate(local), satellite.size, Color::WHITE);
    }

    planet.rotation += planet.rotation_speed;

    Ok(true)
}

/// Quadratic Bezier point and tangent at `t`
fn bezier(path: &[Vec2; 3], t: f32) -> (Vec2, Vec2) {
    let [p0, p1, p2] = *path;
    let u = 1.0 - t;
    let point = p0 * u * u + p1 * 2.0 * u * t + p2 * t * t;
    let tangent = (p1 - p0) * 2.0 * u + (p2 - p1) * 2.0 * t;
    (point, tangent)
}

pub(super) fn spaceship<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    if instance.scratch.is_empty() {
        let size = ctx.viewport.size();
        instance.scratch = Scratch::Spaceship {
            path: [
                Vec2::new(-50.0, size.y / 2.0),
                Vec2::new(size.x / 3.0, size.y / 3.0),
                Vec2::new(size.x + 50.0, size.y / 2.0),
            ],
        };
    }
    let Scratch::Spaceship { path } = instance.scratch else {
        return Err(StepError::mismatch(instance));
    };

    let t = instance.progress(ctx.now_ms);
    if t >= 1.0 {
        return Ok(false);
    }

    let (pos, tangent) = bezier(&path, t);
    let angle = tangent.to_angle();
    let facing = Vec2::from_angle(angle);
    let doppler = 1.0 + angle.cos() * 0.2;

    ctx.canvas
        .ellipse(pos, Vec2::new(10.0, 6.0), angle, rgba(255, 85, 85, 1.0));
    ctx.canvas.disc(pos, 4.0, rgba(255, 85, 85, 1.0));
    ctx.canvas
        .line(pos, pos + facing * 10.0, rgba(255, 153, 153, 1.0));

    let flicker = wave(ctx.now_ms, 0.01) * 4.0;

    if ctx.rng.random::<f32>() < 0.3 {
        let green = channel(ctx.rng, 100);
        ctx.canvas.circle(
            pos + facing.rotate(Vec2::new(-15.0, 0.0)),
            8.0 + flicker,
            rgba(255, green, 0, 0.8 * doppler),
        );
    }

    if ctx.rng.random::<f32>() < 0.5 {
        let flame = 8.0 + flicker;
        let red = (255.0 - (doppler * 100.0).floor()).max(0.0) as u8;
        let green = channel(ctx.rng, 100);
        ctx.canvas.line(
            pos + facing.rotate(Vec2::new(-10.0, 0.0)),
            pos + facing.rotate(Vec2::new(-10.0 - flame, 0.0)),
            rgba(red, green, 0, 0.8 * doppler),
        );

        if ctx.rng.random::<f32>() < 0.3 {
            let spark = Vec2::new(
                -15.0 - ctx.rng.random::<f32>() * 10.0,
                -2.0 + ctx.rng.random::<f32>() * 4.0,
            );
            let size = 1.0 + ctx.rng.random::<f32>() * 2.0;
            let alpha = ctx.rng.random::<f32>() * 0.5;
            ctx.canvas
                .dot(pos + facing.rotate(spark), size, rgba(red, 200, 0, alpha));
        }
    }

    Ok(true)
}
