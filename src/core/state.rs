//! Core domain: simulation state for the sky loop.

use bevy::prelude::*;

/// Whether the sky simulation is advancing or frozen behind the cutscene overlay.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum SkyState {
    #[default]
    Running,
    Cutscene,
}
