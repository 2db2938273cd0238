//! UI domain: progress line, observer telemetry, and mute indicator.

use bevy::prelude::*;

use crate::core::{MuteState, ObserverDrift};
use crate::progress::ProgressTracker;

pub(crate) const HUD_PADDING: f32 = 16.0;

const HUD_TEXT: Color = Color::srgb(0.75, 0.85, 1.0);
const HUD_MUTED_TEXT: Color = Color::srgb(0.5, 0.55, 0.7);

/// Marker for the HUD container
#[derive(Component)]
pub struct SkyHudUI;

/// Marker for the collection progress text
#[derive(Component)]
pub struct ProgressText;

/// Marker for the observer telemetry text
#[derive(Component)]
pub struct TelemetryText;

/// Marker for the mute indicator text
#[derive(Component)]
pub struct MuteText;

pub fn telemetry_label(drift: &ObserverDrift) -> String {
    let (x, y) = drift.coordinates_label();
    format!(
        "Observer X:{} Y:{}\nCurvature: {:.2}\nUniverse time: {}",
        x,
        y,
        drift.curvature(),
        drift.epoch()
    )
}

pub fn mute_label(mute: &MuteState) -> &'static str {
    if mute.muted { "Sound off [M]" } else { "Sound on [M]" }
}

pub(crate) fn spawn_sky_hud(mut commands: Commands) {
    commands
        .spawn((
            SkyHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.1, 0.5)),
            ZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                ProgressText,
                Text::new("Collected 0/0 (0%)"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(HUD_TEXT),
            ));

            parent.spawn((
                TelemetryText,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(HUD_MUTED_TEXT),
            ));

            parent.spawn((
                MuteText,
                Text::new("Sound on [M]"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(HUD_MUTED_TEXT),
            ));
        });
}

pub(crate) fn update_progress_text(
    tracker: Res<ProgressTracker>,
    mut query: Query<&mut Text, With<ProgressText>>,
) {
    if tracker.is_changed() {
        for mut text in &mut query {
            **text = tracker.snapshot().label();
        }
    }
}

pub(crate) fn update_telemetry_text(
    drift: Res<ObserverDrift>,
    mut query: Query<&mut Text, With<TelemetryText>>,
) {
    if drift.is_changed() {
        for mut text in &mut query {
            **text = telemetry_label(&drift);
        }
    }
}

pub(crate) fn update_mute_text(mute: Res<MuteState>, mut query: Query<&mut Text, With<MuteText>>) {
    if mute.is_changed() {
        for mut text in &mut query {
            **text = mute_label(&mute).to_string();
        }
    }
}
