//! Phenomena domain: messages for spawning and discovery.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::content::EventKind;

/// Who asked for a spawn outside the per-frame autonomous roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSource {
    ClickCadence,
    PlasmaStorm,
    DevTools,
}

/// Request a spawn. Still subject to the cooldown.
#[derive(Debug, Clone)]
pub struct SpawnRequestEvent {
    /// Specific kind, or `None` to let the scheduler select one
    pub kind: Option<EventKind>,
    pub source: SpawnSource,
}

impl Message for SpawnRequestEvent {}

/// Fired for every instance that enters the live set
#[derive(Debug, Clone)]
pub struct EventSpawnedEvent {
    pub id: u64,
    pub kind: EventKind,
    pub origin: Vec2,
}

impl Message for EventSpawnedEvent {}

/// Fired the first time a kind spawns in this session
#[derive(Debug, Clone)]
pub struct DiscoveryEvent {
    pub kind: EventKind,
    pub name: String,
}

impl Message for DiscoveryEvent {}
