//! Progress domain: collection completion derived from discoveries.

#[cfg(test)]
mod tests;
mod tracker;

pub use tracker::{CollectionEntry, ProgressSnapshot, ProgressTracker};

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::EventCatalog;
use crate::core::SkySet;
use crate::phenomena::{DiscoveryEvent, EventScheduler};

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgressTracker>()
            .add_systems(Startup, init_progress)
            .add_systems(Update, refresh_progress.in_set(SkySet::Present));
    }
}

fn init_progress(
    scheduler: Res<EventScheduler>,
    catalog: Res<EventCatalog>,
    mut tracker: ResMut<ProgressTracker>,
) {
    tracker.refresh(scheduler.discovery(), &catalog);
}

fn refresh_progress(
    mut discoveries: MessageReader<DiscoveryEvent>,
    scheduler: Res<EventScheduler>,
    catalog: Res<EventCatalog>,
    mut tracker: ResMut<ProgressTracker>,
) {
    if discoveries.read().count() == 0 {
        return;
    }
    tracker.refresh(scheduler.discovery(), &catalog);

    let snapshot = tracker.snapshot();
    if snapshot.is_complete() {
        info!("Every phenomenon collected");
    }
}
