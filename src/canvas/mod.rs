//! Canvas domain: the immediate-mode render surface shared by stars and phenomena.

mod surface;
mod systems;

pub use surface::{Canvas, Shape, rgba};
pub use systems::SKY_COLOR;

use bevy::prelude::*;

use crate::canvas::systems::{
    apply_camera_shake, clear_canvas, flush_canvas, spawn_wash_overlay, update_wash_overlay,
};
use crate::core::{SkySet, SkyState};

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Canvas>()
            .insert_resource(ClearColor(SKY_COLOR))
            .add_systems(Startup, spawn_wash_overlay)
            .add_systems(
                Update,
                clear_canvas
                    .in_set(SkySet::Clock)
                    .run_if(in_state(SkyState::Running)),
            )
            .add_systems(
                Update,
                (flush_canvas, update_wash_overlay, apply_camera_shake).in_set(SkySet::Present),
            );
    }
}
