//! Phenomena domain: live event instances and their private scratch state.

use bevy::prelude::*;

use crate::content::EventKind;

/// One drifting particle owned by a nebula, dust cloud, or star birth
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub alpha: f32,
    /// Remaining life in 0..=1 (nebula only)
    pub life: f32,
    /// Species index, selects colour and fade rate (nebula only)
    pub species: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub angle: f32,
    pub distance: f32,
    pub size: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetState {
    pub radius: f32,
    pub ring_radius: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub satellites: Vec<Satellite>,
}

/// Per-instance state, shaped by the instance's kind.
///
/// Starts `Empty` and is lazily filled by the first step. Only the
/// instance's own step reads or writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Scratch {
    #[default]
    Empty,
    Comet {
        start: Vec2,
        end: Vec2,
    },
    Nebula {
        particles: Vec<Particle>,
        size: f32,
    },
    Planet(PlanetState),
    Dust {
        particles: Vec<Particle>,
    },
    Spaceship {
        path: [Vec2; 3],
    },
    StarBirth {
        particles: Vec<Particle>,
        flash_triggered: bool,
    },
}

impl Scratch {
    pub fn is_empty(&self) -> bool {
        matches!(self, Scratch::Empty)
    }
}

/// A time-bounded occurrence of one catalogued kind
#[derive(Debug, Clone)]
pub struct EventInstance {
    pub id: u64,
    pub kind: EventKind,
    pub origin: Vec2,
    pub spawned_at_ms: u64,
    /// Effective duration after any per-kind override
    pub duration_ms: u64,
    /// Set by a successful quantum stabilization click
    pub stabilized: bool,
    pub(crate) scratch: Scratch,
}

impl EventInstance {
    pub fn new(id: u64, kind: EventKind, origin: Vec2, spawned_at_ms: u64, duration_ms: u64) -> Self {
        Self {
            id,
            kind,
            origin,
            spawned_at_ms,
            duration_ms,
            stabilized: false,
            scratch: Scratch::Empty,
        }
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.spawned_at_ms)
    }

    /// `elapsed / duration`, 1.0 for a zero duration
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.elapsed_ms(now_ms) as f32 / self.duration_ms as f32
    }

    /// Hard ceiling: an instance at or past its duration is never kept.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= self.duration_ms
    }
}
