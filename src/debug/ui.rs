//! Debug domain: dev panel and sky overlay layout.

use bevy::prelude::*;

use crate::content::{EventCatalog, EventKind};
use crate::debug::state::DebugAction;

/// Phenomenon families, grouped the way their behaviours are
pub const KIND_FAMILIES: [(&str, &[EventKind]); 3] = [
    (
        "Bursts",
        &[
            EventKind::Supernova,
            EventKind::Blackhole,
            EventKind::Pulsar,
            EventKind::GravitationalWave,
            EventKind::QuantumFluctuation,
            EventKind::PlasmaStorm,
            EventKind::FtlNeutrinos,
        ],
    ),
    (
        "Bodies",
        &[EventKind::Comet, EventKind::Planet, EventKind::Spaceship],
    ),
    (
        "Clouds",
        &[
            EventKind::Nebula,
            EventKind::InterstellarDust,
            EventKind::DarkMatter,
            EventKind::StarBirth,
        ],
    ),
];

const PANEL_BG: Color = Color::srgba(0.02, 0.03, 0.1, 0.95);
const PANEL_BORDER: Color = Color::srgb(0.2, 0.35, 0.5);
const PANEL_TITLE: Color = Color::srgb(0.5, 0.8, 1.0);
const PANEL_TEXT: Color = Color::srgb(0.9, 0.9, 0.95);
const PANEL_HINT: Color = Color::srgb(0.55, 0.6, 0.7);
const NEUTRAL_BUTTON: Color = Color::srgb(0.15, 0.18, 0.3);

/// Marker for the debug UI root
#[derive(Component, Debug)]
pub struct DebugUI;

/// Marker for the sky overlay root
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Marker for the sky overlay text
#[derive(Component, Debug)]
pub struct DebugInfoText;

/// Marker for status message text
#[derive(Component, Debug)]
pub struct DebugStatusMessage;

/// Debug panel button
#[derive(Component, Debug)]
pub struct DebugButton {
    pub action: DebugAction,
}

/// Button caption for a kind, with its Ctrl hotkey when it has one
pub fn kind_button_label(kind: EventKind) -> String {
    match EventKind::ALL.iter().position(|k| *k == kind) {
        Some(index) if index < 9 => format!("{} [{}]", kind, index + 1),
        _ => kind.to_string(),
    }
}

pub(crate) fn spawn_debug_ui(commands: &mut Commands, catalog: &EventCatalog) {
    commands
        .spawn((
            DebugUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                top: Val::Px(20.0),
                width: Val::Px(320.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            BorderColor::all(PANEL_BORDER),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new("DEV TOOLS"),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(PANEL_TITLE),
                    ));
                    spawn_action_button(row, "X", DebugAction::Close, NEUTRAL_BUTTON);
                });

            parent.spawn((
                Text::new("F1 or ` to toggle | Ctrl+digit spawns | spawns share the cooldown"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(PANEL_HINT),
            ));

            parent.spawn((
                DebugStatusMessage,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.9, 0.5)),
                Node {
                    min_height: Val::Px(16.0),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|row| {
                    spawn_action_button(
                        row,
                        "Random [0]",
                        DebugAction::SpawnRandom,
                        NEUTRAL_BUTTON,
                    );
                    spawn_action_button(row, "Sky info [D]", DebugAction::ToggleInfo, NEUTRAL_BUTTON);
                });

            for (family, kinds) in KIND_FAMILIES {
                spawn_family(parent, family, kinds, catalog);
            }
        });
}

/// One titled row of spawn buttons, each tinted with its kind's catalog colour
fn spawn_family(
    parent: &mut ChildSpawnerCommands,
    family: &str,
    kinds: &[EventKind],
    catalog: &EventCatalog,
) {
    parent.spawn((
        Text::new(family),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(PANEL_TITLE),
        Node {
            margin: UiRect::top(Val::Px(6.0)),
            ..default()
        },
    ));

    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|row| {
            for kind in kinds {
                let tint = catalog
                    .get(*kind)
                    .map(|d| d.color_with_alpha(0.35))
                    .unwrap_or(NEUTRAL_BUTTON);
                spawn_action_button(row, &kind_button_label(*kind), DebugAction::Spawn(*kind), tint);
            }
        });
}

fn spawn_action_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    action: DebugAction,
    tint: Color,
) {
    parent
        .spawn((
            DebugButton { action },
            Button,
            Node {
                padding: UiRect::axes(Val::Px(6.0), Val::Px(3.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(tint),
            BorderColor::all(PANEL_BORDER),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 11.0,
                ..default()
            },
            TextColor(PANEL_TEXT),
        ));
}

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands
        .spawn((
            DebugInfoOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(4.0),
                border: UiRect::left(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.05, 0.75)),
            BorderColor::all(PANEL_TITLE),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("SKY"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(PANEL_TITLE),
            ));
            parent.spawn((
                DebugInfoText,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.9, 0.8)),
            ));
        });
}

pub(crate) fn despawn_debug_ui(commands: &mut Commands, existing_ui: &Query<Entity, With<DebugUI>>) {
    for entity in existing_ui.iter() {
        commands.entity(entity).despawn();
    }
}
