//! Phenomena domain: live event instances, their step behaviours, and the spawn scheduler.

mod behaviors;
mod discovery;
mod error;
mod events;
mod instance;
mod lifecycle;
mod scheduler;
mod systems;

pub use behaviors::{StepContext, step};
pub use discovery::DiscoveryRecord;
pub use error::StepError;
pub use events::{DiscoveryEvent, EventSpawnedEvent, SpawnRequestEvent, SpawnSource};
pub use instance::{EventInstance, Particle, PlanetState, Satellite, Scratch};
pub use lifecycle::{ActiveEvents, ExpiredInstance, ExpiryCause};
pub use scheduler::{EventScheduler, SpawnContext, SpawnOutcome};

use bevy::prelude::*;

use crate::core::{SkySet, SkyState};
use crate::phenomena::systems::{spawn_events, tick_active_events};

pub struct PhenomenaPlugin;

impl Plugin for PhenomenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveEvents>()
            .init_resource::<EventScheduler>()
            .add_message::<SpawnRequestEvent>()
            .add_message::<EventSpawnedEvent>()
            .add_message::<DiscoveryEvent>()
            .add_systems(
                Update,
                tick_active_events
                    .in_set(SkySet::Events)
                    .run_if(in_state(SkyState::Running)),
            )
            .add_systems(
                Update,
                spawn_events
                    .in_set(SkySet::Spawn)
                    .run_if(in_state(SkyState::Running)),
            );
    }
}
