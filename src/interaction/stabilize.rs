//! Interaction domain: clicking a quantum fluctuation to stabilize it.

use bevy::prelude::*;
use rand::Rng;

use crate::content::EventKind;
use crate::phenomena::ActiveEvents;
use crate::starfield::StarField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilizeResult {
    Stabilized { id: u64 },
    Unstable { id: u64 },
}

/// Try to stabilize every quantum fluctuation within `radius` of `point`.
///
/// Each attempt succeeds with probability `chance`. A success marks the instance
/// stabilized and returns every quantum-marked star to normal. A stabilized
/// instance is still attempted and a failed roll never unsets the flag.
pub fn attempt_stabilization(
    point: Vec2,
    radius: f32,
    chance: f32,
    active: &mut ActiveEvents,
    stars: &mut StarField,
    rng: &mut impl Rng,
) -> Vec<StabilizeResult> {
    let mut results = Vec::new();

    for instance in active
        .iter_mut()
        .filter(|i| i.kind == EventKind::QuantumFluctuation && i.origin.distance(point) < radius)
    {
        if rng.random::<f32>() < chance {
            instance.stabilized = true;
            stars.restore_quantum();
            results.push(StabilizeResult::Stabilized { id: instance.id });
        } else {
            results.push(StabilizeResult::Unstable { id: instance.id });
        }
    }

    results
}
