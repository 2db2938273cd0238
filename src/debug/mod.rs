//! Dev tools for fast iteration on phenomena.
//!
//! Features:
//! - Spawn any phenomenon kind (still subject to the spawn cooldown)
//! - Live overlay with clock, star counts, and active instances

mod state;
mod systems;
mod ui;

pub use state::{DebugAction, DebugState, RECENT_SPAWN_LIMIT, SpawnRecord, hotkey_action};

use bevy::prelude::*;

use crate::core::SkySet;
use crate::debug::systems::{
    handle_debug_buttons, handle_debug_hotkeys, record_spawns, toggle_debug_ui,
    update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    toggle_debug_ui,
                    handle_debug_hotkeys,
                    handle_debug_buttons,
                    update_status_message,
                )
                    .chain()
                    .in_set(SkySet::Input),
            )
            .add_systems(
                Update,
                (record_spawns, update_debug_info_overlay)
                    .chain()
                    .in_set(SkySet::Present),
            );
    }
}
