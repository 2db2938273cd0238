//! Interaction domain: clicks, streaks, quantum stabilization, and the mute key.

mod click;
mod events;
mod stabilize;
mod systems;
#[cfg(test)]
mod tests;

pub use click::{ClickOutcome, ClickState};
pub use events::{ClickEvent, ClickMarkerEvent};
pub use stabilize::{StabilizeResult, attempt_stabilization};
pub use systems::ui_claims_press;

use bevy::prelude::*;

use crate::core::{SkySet, SkyState};
use crate::interaction::systems::{
    expire_idle_streak, read_pointer_clicks, spawn_click_effects, stabilize_quantum,
    toggle_mute, update_click_streak,
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickState>()
            .add_message::<ClickEvent>()
            .add_message::<ClickMarkerEvent>()
            .add_systems(
                Update,
                (
                    read_pointer_clicks,
                    update_click_streak,
                    stabilize_quantum,
                    spawn_click_effects,
                )
                    .chain()
                    .in_set(SkySet::Input)
                    .run_if(in_state(SkyState::Running)),
            )
            // The idle timeout may come due while the cutscene holds the sky
            .add_systems(
                Update,
                (expire_idle_streak.before(read_pointer_clicks), toggle_mute)
                    .in_set(SkySet::Input),
            );
    }
}
