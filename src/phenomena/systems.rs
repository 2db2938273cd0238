//! Phenomena domain: lifecycle pass and spawning systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::canvas::Canvas;
use crate::content::{EventCatalog, SkyTuning};
use crate::core::{NotificationEvent, SkyClock, SkyRng, Viewport};
use crate::phenomena::behaviors::StepContext;
use crate::phenomena::events::{
    DiscoveryEvent, EventSpawnedEvent, SpawnRequestEvent, SpawnSource,
};
use crate::phenomena::lifecycle::{ActiveEvents, ExpiryCause};
use crate::phenomena::scheduler::{EventScheduler, SpawnContext, SpawnOutcome};
use crate::starfield::StarField;

/// Advance every live instance once and prune the finished ones.
pub(crate) fn tick_active_events(
    clock: Res<SkyClock>,
    viewport: Res<Viewport>,
    mut rng: ResMut<SkyRng>,
    mut stars: ResMut<StarField>,
    mut canvas: ResMut<Canvas>,
    mut active: ResMut<ActiveEvents>,
    mut requests: MessageWriter<SpawnRequestEvent>,
) {
    let mut ctx = StepContext::new(
        clock.now_ms,
        *viewport,
        &mut stars,
        &mut canvas,
        rng.rng(),
    );

    for expired in active.tick(&mut ctx) {
        if expired.cause != ExpiryCause::Elapsed {
            debug!(
                "{} #{} ended early ({:?})",
                expired.kind, expired.id, expired.cause
            );
        }
    }

    if ctx.spawn_requested {
        requests.write(SpawnRequestEvent {
            kind: None,
            source: SpawnSource::PlasmaStorm,
        });
    }
}

/// Serve queued spawn requests, then roll the autonomous trigger.
pub(crate) fn spawn_events(
    clock: Res<SkyClock>,
    viewport: Res<Viewport>,
    catalog: Res<EventCatalog>,
    tuning: Res<SkyTuning>,
    mut rng: ResMut<SkyRng>,
    mut scheduler: ResMut<EventScheduler>,
    mut active: ResMut<ActiveEvents>,
    mut requests: MessageReader<SpawnRequestEvent>,
    mut spawned: MessageWriter<EventSpawnedEvent>,
    mut discoveries: MessageWriter<DiscoveryEvent>,
    mut notifications: MessageWriter<NotificationEvent>,
) {
    let now_ms = clock.now_ms;
    let mut ctx = SpawnContext {
        catalog: &catalog,
        viewport: *viewport,
        tuning: &tuning.spawn,
        rng: rng.rng(),
    };

    let mut outcomes: Vec<SpawnOutcome> = Vec::new();
    for request in requests.read() {
        debug!("Spawn requested by {:?}", request.source);
        outcomes.extend(scheduler.spawn_explicit(request.kind, now_ms, &mut ctx));
    }
    outcomes.extend(scheduler.maybe_auto_spawn(now_ms, &mut ctx));

    for SpawnOutcome {
        instance,
        newly_discovered,
    } in outcomes
    {
        info!(
            "Spawned {} #{} at ({:.0}, {:.0}) for {} ms",
            instance.kind, instance.id, instance.origin.x, instance.origin.y, instance.duration_ms
        );

        if newly_discovered {
            let name = catalog
                .get(instance.kind)
                .map(|d| d.name.clone())
                .unwrap_or_else(|_| instance.kind.to_string());
            info!("Discovered {}", name);
            notifications.write(NotificationEvent::new(format!(
                "New event discovered: {}",
                name
            )));
            discoveries.write(DiscoveryEvent {
                kind: instance.kind,
                name,
            });
        }

        spawned.write(EventSpawnedEvent {
            id: instance.id,
            kind: instance.kind,
            origin: instance.origin,
        });
        active.push(instance);
    }
}
