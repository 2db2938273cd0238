//! UI domain: HUD, streak panel, notifications, click markers, collection panel, and cutscene.

mod collection;
mod cutscene;
mod hud;
mod markers;
mod streak;
#[cfg(test)]
mod tests;
mod toast;

pub use collection::{CollectionPanelState, collection_row};
pub use cutscene::{CutscenePlayback, cancel_cutscene_tasks, cutscene_timeline, flash_alpha};
pub use hud::{mute_label, telemetry_label};
pub use markers::marker_origin;
pub use streak::meter_percent;
pub use toast::toast_alpha;

use bevy::prelude::*;

use crate::core::SkySet;
use crate::ui::collection::toggle_collection_panel;
use crate::ui::cutscene::{run_cutscene_timeline, start_cutscene, update_cutscene_overlay};
use crate::ui::hud::{spawn_sky_hud, update_mute_text, update_progress_text, update_telemetry_text};
use crate::ui::markers::{despawn_expired_markers, spawn_click_markers};
use crate::ui::streak::{spawn_streak_panel, update_streak_panel};
use crate::ui::toast::{fade_toast, hide_faded_toast, show_notifications, spawn_toast};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CollectionPanelState>()
            .init_resource::<CutscenePlayback>()
            .add_systems(Startup, (spawn_sky_hud, spawn_streak_panel, spawn_toast))
            .add_systems(
                Update,
                (
                    update_progress_text,
                    update_telemetry_text,
                    update_mute_text,
                    update_streak_panel,
                    (hide_faded_toast, show_notifications, fade_toast).chain(),
                    (spawn_click_markers, despawn_expired_markers).chain(),
                    toggle_collection_panel,
                    (start_cutscene, run_cutscene_timeline, update_cutscene_overlay).chain(),
                )
                    .in_set(SkySet::Present),
            );
    }
}
