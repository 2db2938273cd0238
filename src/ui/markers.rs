//! UI domain: transient click markers.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{TaskFiredEvent, TaskKey};
use crate::interaction::ClickMarkerEvent;

pub const CLICK_MARKER_SIZE: f32 = 20.0;

/// A ring shown where the player clicked, removed when its task fires
#[derive(Component, Debug)]
pub struct ClickMarkerUI {
    pub id: u64,
}

/// Top-left corner of a marker centred on `position`
pub fn marker_origin(position: Vec2) -> Vec2 {
    position - Vec2::splat(CLICK_MARKER_SIZE / 2.0)
}

pub(crate) fn spawn_click_markers(
    mut commands: Commands,
    mut markers: MessageReader<ClickMarkerEvent>,
) {
    for marker in markers.read() {
        let origin = marker_origin(marker.position);
        commands.spawn((
            ClickMarkerUI { id: marker.id },
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(origin.x),
                top: Val::Px(origin.y),
                width: Val::Px(CLICK_MARKER_SIZE),
                height: Val::Px(CLICK_MARKER_SIZE),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::srgba(0.6, 0.85, 1.0, 0.8)),
            ZIndex(50),
        ));
    }
}

pub(crate) fn despawn_expired_markers(
    mut commands: Commands,
    mut fired: MessageReader<TaskFiredEvent>,
    markers: Query<(Entity, &ClickMarkerUI)>,
) {
    for event in fired.read() {
        let TaskKey::ClickMarker(id) = event.key else {
            continue;
        };
        for (entity, marker) in &markers {
            if marker.id == id {
                commands.entity(entity).despawn();
            }
        }
    }
}
