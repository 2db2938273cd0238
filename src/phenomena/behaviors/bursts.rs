//! Short-lived radiant phenomena anchored at their origin.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use super::{StepContext, channel, jitter, wave};
use crate::canvas::rgba;
use crate::phenomena::error::StepError;
use crate::phenomena::instance::EventInstance;

const LENSING_RADIUS: f32 = 200.0;
const RIPPLE_RADIUS: f32 = 150.0;
const QUANTUM_RADIUS: f32 = 60.0;
const QUANTUM_HOLD_MS: u64 = 500;
const PULSE_PERIOD_MS: u64 = 1000;

pub(super) fn supernova<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let p = instance.progress(ctx.now_ms);
    let origin = instance.origin;

    ctx.canvas
        .dot_centered(origin, 6.0, rgba(255, 255, 255, 1.0 - p * 0.5));

    let shock = rgba(255, 0, 255, 0.7 * (1.0 - p));
    for i in 0..3 {
        ctx.canvas.circle(origin, p * 50.0 + i as f32 * 8.0, shock);
    }

    for _ in 0..15 {
        let angle = ctx.rng.random::<f32>() * TAU;
        let dist = p * 50.0 * ctx.rng.random::<f32>().sqrt();
        let green = channel(ctx.rng, 100);
        ctx.canvas.dot(
            origin + Vec2::from_angle(angle) * dist,
            1.0,
            rgba(255, green, 255, 0.5 * (1.0 - p)),
        );
    }

    Ok(true)
}

pub(super) fn blackhole<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let p = instance.progress(ctx.now_ms);
    let origin = instance.origin;
    let radius = 30.0 * (0.5 + (p * PI).sin() * 0.5);

    ctx.canvas.disc(origin, radius, rgba(0, 0, 51, 1.0));
    let twist = wave(ctx.now_ms, 0.005) * 5.0;
    ctx.canvas.circle(
        origin,
        radius + 5.0 + twist,
        rgba(255, 153, 0, 1.0 - p * 0.7),
    );

    if p > 0.3 && p < 0.7 {
        let distortion = (p - 0.3) * 2.5;
        let canvas = &mut *ctx.canvas;
        ctx.stars.visit_within(origin, LENSING_RADIUS, |star, dist| {
            let angle = (star.position - origin).to_angle();
            let bend = (LENSING_RADIUS - dist) / LENSING_RADIUS * distortion * 15.0
                / (dist / 50.0 + 1.0);
            let bend_angle = (dist * 0.01).sin() * distortion;
            canvas.dot(
                star.position + Vec2::from_angle(angle + bend_angle) * bend,
                star.size,
                rgba(255, 255, 255, star.brightness * 0.7),
            );
        });
    }

    Ok(true)
}

/// Repeating 1000 ms pulse, independent of the overall duration.
pub(super) fn pulsar<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let elapsed = instance.elapsed_ms(ctx.now_ms);
    let pulse = (elapsed % PULSE_PERIOD_MS) as f32 / PULSE_PERIOD_MS as f32;
    let origin = instance.origin;

    ctx.canvas.dot_centered(origin, 6.0, Color::WHITE);

    if pulse < 0.5 {
        let beam = 80.0 + (pulse * TAU).sin() * 20.0;
        let angle = elapsed as f32 * 0.005;
        ctx.canvas.line(
            origin,
            origin + Vec2::from_angle(angle) * beam,
            rgba(0, 255, 0, pulse * 2.0 * 0.7),
        );
    }

    for i in 0..3 {
        let phase = (pulse + i as f32 * 0.3) % 1.0;
        let swell = (phase * PI).sin();
        ctx.canvas
            .circle(origin, 10.0 + swell * 8.0, rgba(0, 255, 0, swell * 0.5));
    }

    Ok(true)
}

pub(super) fn gravitational_wave<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let p = instance.progress(ctx.now_ms);
    let origin = instance.origin;
    let drift = (ctx.now_ms as f64 * 0.002) as f32;

    for i in 0..3 {
        let ring = p * 100.0 + i as f32 * 20.0;
        let color = rgba(0, 255, 204, 0.7 - p * 0.7 + i as f32 * 0.2);
        let distortion = (ring * 0.1).sin() * 5.0 * (1.0 - p);

        for spoke in 0..32 {
            let angle = spoke as f32 * PI / 16.0;
            let dir = Vec2::from_angle(angle);
            let wobble = Vec2::new((angle + drift).sin(), (angle + drift).cos()) * distortion;
            ctx.canvas
                .line(origin + dir * ring, origin + dir * (ring + 10.0) + wobble, color);
        }
    }

    // Displaced copies only; the stars themselves are left alone
    if p > 0.2 && p < 0.7 {
        let canvas = &mut *ctx.canvas;
        ctx.stars.visit_within(origin, RIPPLE_RADIUS, |star, dist| {
            let angle = (star.position - origin).to_angle();
            let pull = (1.0 - p) * (RIPPLE_RADIUS - dist) / RIPPLE_RADIUS
                * 10.0
                * ((dist * 0.05 - p * TAU).sin() + 1.0);
            canvas.dot(
                star.position + Vec2::from_angle(angle) * pull,
                star.size,
                rgba(255, 255, 255, star.brightness * 0.8),
            );
        });
    }

    Ok(true)
}

pub(super) fn quantum_fluctuation<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let p = instance.progress(ctx.now_ms);
    let origin = instance.origin;

    if instance.stabilized {
        ctx.canvas.circle(origin, 40.0, rgba(0, 153, 255, 0.6));
        ctx.canvas.disc(origin, 3.0, rgba(0, 204, 255, 0.8));
        return Ok(true);
    }

    ctx.canvas
        .circle(origin, p * 80.0, rgba(0, 153, 255, 0.3 * (1.0 - p)));

    if ctx.rng.random::<f32>() < 0.05 {
        ctx.stars.mark_quantum_within(
            origin,
            QUANTUM_RADIUS,
            ctx.now_ms + QUANTUM_HOLD_MS,
            0.3,
            ctx.rng,
        );
    }

    if ctx.rng.random::<f32>() < 0.3 {
        let sparkle = origin + jitter(ctx.rng, 20.0);
        let alpha = ctx.rng.random::<f32>() * 0.8 + 0.2;
        ctx.canvas.dot(sparkle, 1.0, rgba(0, 204, 255, alpha));
    }

    Ok(true)
}

pub(super) fn plasma_storm<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let p = instance.progress(ctx.now_ms);
    let center = instance.origin;
    let reach = ctx.viewport.size() * p;

    if ctx.rng.random::<f32>() < 0.3 {
        let offset = jitter(ctx.rng, 2.0);
        ctx.canvas.shake(offset);
    }

    let alpha = 0.6 * (1.0 - p);
    for _ in 0..20 {
        let dir = Vec2::from_angle(ctx.rng.random::<f32>() * TAU);
        let size = ctx.rng.random::<f32>() * 3.0 + 1.0;
        let green = ctx.rng.random_range(51..=153);
        ctx.canvas
            .disc(center + dir * reach, size, rgba(255, green, 0, alpha));
    }

    if p > 0.3 && p < 0.7 && ctx.rng.random::<f32>() < 0.02 {
        ctx.spawn_requested = true;
    }

    Ok(true)
}

pub(super) fn ftl_neutrinos<R: Rng>(
    instance: &mut EventInstance,
    ctx: &mut StepContext<'_, R>,
) -> Result<bool, StepError> {
    let p = instance.progress(ctx.now_ms);
    let trail = rgba(0, 204, 255, 1.0);

    let trails = ctx.rng.random_range(5..=8);
    for _ in 0..trails {
        let start = ctx.viewport.random_point(ctx.rng);
        let end = ctx.viewport.random_point(ctx.rng);
        let phase = ctx.rng.random::<f32>() * TAU;

        let mut prev = start;
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            let swing = t * TAU + phase;
            let point = start.lerp(end, t) + Vec2::new(swing.sin(), swing.cos()) * 5.0;
            ctx.canvas.line(prev, point, trail);
            prev = point;
        }
    }

    if ctx.rng.random::<f32>() < 0.7 {
        let intensity = (p * PI * 4.0).sin() * 0.5 + 0.5;
        ctx.canvas.wash(rgba(0, 204, 255, intensity * 0.3));
    }

    Ok(true)
}
