//! Phenomena domain: spawn gating, kind selection, and discovery.

use bevy::prelude::*;
use rand::Rng;

use crate::content::{Anchor, EventCatalog, EventKind, SpawnTuning};
use crate::core::Viewport;
use crate::phenomena::discovery::DiscoveryRecord;
use crate::phenomena::instance::EventInstance;

/// Inputs a spawn attempt reads
pub struct SpawnContext<'a, R: Rng> {
    pub catalog: &'a EventCatalog,
    pub viewport: Viewport,
    pub tuning: &'a SpawnTuning,
    pub rng: &'a mut R,
}

/// A successful spawn
#[derive(Debug, Clone)]
pub struct SpawnOutcome {
    pub instance: EventInstance,
    /// True if this was the first spawn of the kind this session
    pub newly_discovered: bool,
}

#[derive(Resource, Debug, Default)]
pub struct EventScheduler {
    last_spawn_at: Option<u64>,
    next_id: u64,
    discovery: DiscoveryRecord,
}

impl EventScheduler {
    /// Per-frame autonomous trigger. Rolls the auto-spawn chance, then spawns a selected kind.
    pub fn maybe_auto_spawn<R: Rng>(
        &mut self,
        now_ms: u64,
        ctx: &mut SpawnContext<'_, R>,
    ) -> Option<SpawnOutcome> {
        if ctx.rng.random::<f32>() >= ctx.tuning.auto_spawn_chance {
            return None;
        }
        self.spawn_explicit(None, now_ms, ctx)
    }

    /// Spawn `kind`, or a selected kind when `None`.
    ///
    /// Attempts inside the cooldown window are dropped, as are all attempts
    /// against an empty catalog.
    pub fn spawn_explicit<R: Rng>(
        &mut self,
        kind: Option<EventKind>,
        now_ms: u64,
        ctx: &mut SpawnContext<'_, R>,
    ) -> Option<SpawnOutcome> {
        if ctx.catalog.is_empty() {
            return None;
        }

        if !self.cooldown_elapsed(now_ms, ctx.tuning.cooldown_ms) {
            debug!(
                "Spawn attempt at {} ms dropped by cooldown (last spawn {:?})",
                now_ms, self.last_spawn_at
            );
            return None;
        }

        let kind = match kind {
            Some(kind) => kind,
            None => self.select_kind(ctx.catalog, ctx.tuning.uncollected_bias, ctx.rng)?,
        };

        let descriptor = match ctx.catalog.get(kind) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };

        let origin = match kind.anchor() {
            Anchor::Center => ctx.viewport.center(),
            Anchor::Random => ctx.viewport.random_point(ctx.rng),
        };
        let duration_ms = kind.effective_duration_ms(descriptor.duration_ms);

        let instance = EventInstance::new(self.next_id, kind, origin, now_ms, duration_ms);
        self.next_id += 1;
        self.last_spawn_at = Some(now_ms);
        let newly_discovered = self.discovery.mark(kind);

        Some(SpawnOutcome {
            instance,
            newly_discovered,
        })
    }

    /// True when no spawn has happened yet or at least `cooldown_ms` has passed.
    pub fn cooldown_elapsed(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        match self.last_spawn_at {
            Some(last) => now_ms.saturating_sub(last) >= cooldown_ms,
            None => true,
        }
    }

    /// Pick a kind, restricting the draw to uncollected kinds with probability `bias`.
    pub fn select_kind(
        &self,
        catalog: &EventCatalog,
        bias: f32,
        rng: &mut impl Rng,
    ) -> Option<EventKind> {
        let all: Vec<EventKind> = catalog.all_type_ids().collect();
        let uncollected: Vec<EventKind> = all
            .iter()
            .copied()
            .filter(|kind| !self.discovery.is_collected(*kind))
            .collect();

        let pool = if !uncollected.is_empty() && rng.random::<f32>() < bias {
            &uncollected
        } else {
            &all
        };

        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.random_range(0..pool.len())])
    }

    pub fn discovery(&self) -> &DiscoveryRecord {
        &self.discovery
    }

    pub fn last_spawn_at(&self) -> Option<u64> {
        self.last_spawn_at
    }

    #[cfg(test)]
    pub(crate) fn discovery_mut(&mut self) -> &mut DiscoveryRecord {
        &mut self.discovery
    }
}
