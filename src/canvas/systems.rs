//! Canvas domain: flush the draw list to gizmos, the wash overlay, and camera shake.

use bevy::prelude::*;

use crate::canvas::surface::{Canvas, Shape};
use crate::core::{SkyState, Viewport};

/// Background colour behind the star field
pub const SKY_COLOR: Color = Color::srgb(0.039, 0.039, 0.165);

/// Marker for the full-viewport tint sprite
#[derive(Component, Debug)]
pub struct WashOverlay;

pub(crate) fn spawn_wash_overlay(mut commands: Commands, viewport: Res<Viewport>) {
    commands.spawn((
        WashOverlay,
        Sprite {
            color: Color::NONE,
            custom_size: Some(viewport.size()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));
}

pub(crate) fn clear_canvas(mut canvas: ResMut<Canvas>) {
    canvas.clear();
}

pub(crate) fn flush_canvas(canvas: Res<Canvas>, viewport: Res<Viewport>, mut gizmos: Gizmos) {
    for shape in canvas.shapes() {
        match *shape {
            Shape::Dot { pos, size, color } => {
                let center = viewport.to_world(pos + Vec2::splat(size * 0.5));
                // Nested outlines read as a filled square at star scale
                let mut side = size.max(1.0);
                while side > 0.0 {
                    gizmos.rect_2d(Isometry2d::from_translation(center), Vec2::splat(side), color);
                    side -= 1.0;
                }
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                gizmos.circle_2d(
                    Isometry2d::from_translation(viewport.to_world(center)),
                    radius,
                    color,
                );
            }
            Shape::Disc {
                center,
                radius,
                color,
            } => {
                let center = Isometry2d::from_translation(viewport.to_world(center));
                let mut r = radius;
                while r > 0.0 {
                    gizmos.circle_2d(center, r, color);
                    r -= 1.5;
                }
            }
            Shape::Line { from, to, color } => {
                gizmos.line_2d(viewport.to_world(from), viewport.to_world(to), color);
            }
            Shape::Ellipse {
                center,
                half_size,
                rotation,
                color,
            } => {
                // Viewport y points down, world y points up
                let isometry = Isometry2d::new(viewport.to_world(center), Rot2::radians(-rotation));
                gizmos.ellipse_2d(isometry, half_size, color);
            }
        }
    }
}

pub(crate) fn update_wash_overlay(
    canvas: Res<Canvas>,
    viewport: Res<Viewport>,
    state: Res<State<SkyState>>,
    mut overlays: Query<&mut Sprite, With<WashOverlay>>,
) {
    let color = match state.get() {
        SkyState::Running => canvas.wash_color().unwrap_or(Color::NONE),
        SkyState::Cutscene => Color::NONE,
    };

    for mut sprite in &mut overlays {
        sprite.color = color;
        sprite.custom_size = Some(viewport.size());
    }
}

pub(crate) fn apply_camera_shake(
    canvas: Res<Canvas>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let offset = canvas.shake_offset().unwrap_or(Vec2::ZERO);
    for mut transform in &mut cameras {
        transform.translation.x = offset.x;
        transform.translation.y = -offset.y;
    }
}
