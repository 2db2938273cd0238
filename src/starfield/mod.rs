//! Starfield domain: background stars, constellation flicker, and the perturbation capability.

mod field;
mod star;
mod systems;
#[cfg(test)]
mod tests;

pub use field::{ResizeOutcome, StarField, star_count};
pub use star::{Constellation, Dimming, Star, StarClass};

use bevy::prelude::*;

use crate::core::{SkySet, SkyState};
use crate::starfield::systems::{init_starfield, settle_resize, tick_starfield, track_window_resize};

pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarField>()
            .add_systems(Startup, init_starfield)
            .add_systems(
                Update,
                (track_window_resize, settle_resize)
                    .chain()
                    .in_set(SkySet::Input),
            )
            .add_systems(
                Update,
                tick_starfield
                    .in_set(SkySet::Stars)
                    .run_if(in_state(SkyState::Running)),
            );
    }
}
