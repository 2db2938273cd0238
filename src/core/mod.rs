//! Core domain: session clock, randomness, viewport, deferred tasks, and frame ordering.

mod events;
mod resources;
mod state;
mod systems;
#[cfg(test)]
mod tests;
mod timers;

pub use events::{CutsceneTriggeredEvent, NotificationEvent};
pub use resources::{MuteState, ObserverDrift, SkyClock, SkyRng, Viewport};
pub use state::SkyState;
pub use timers::{DeferredTasks, TaskFiredEvent, TaskKey};

use bevy::prelude::*;

use crate::core::systems::{
    advance_clock, advance_observer, fire_due_tasks, init_viewport, setup_camera,
};

/// Frame phases, in execution order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SkySet {
    /// Clock advance and deferred task dispatch
    Clock,
    /// Pointer, keyboard, and window input
    Input,
    /// Star field flicker and drawing
    Stars,
    /// Live event instance lifecycle
    Events,
    /// Autonomous spawning
    Spawn,
    /// Drawing and HUD refresh
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SkyState>()
            .init_resource::<SkyClock>()
            .init_resource::<SkyRng>()
            .init_resource::<Viewport>()
            .init_resource::<DeferredTasks>()
            .init_resource::<MuteState>()
            .init_resource::<ObserverDrift>()
            .add_message::<TaskFiredEvent>()
            .add_message::<NotificationEvent>()
            .add_message::<CutsceneTriggeredEvent>()
            .configure_sets(
                Update,
                (
                    SkySet::Clock,
                    SkySet::Input,
                    SkySet::Stars,
                    SkySet::Events,
                    SkySet::Spawn,
                    SkySet::Present,
                )
                    .chain(),
            )
            .add_systems(PreStartup, init_viewport)
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (advance_clock, fire_due_tasks).chain().in_set(SkySet::Clock),
            )
            .add_systems(
                Update,
                advance_observer
                    .in_set(SkySet::Events)
                    .run_if(in_state(SkyState::Running)),
            );
    }
}
