//! UI domain: collection panel listing every phenomenon kind.

use bevy::prelude::*;

use crate::progress::{CollectionEntry, ProgressTracker};

/// Whether the collection panel is open
#[derive(Resource, Debug, Default)]
pub struct CollectionPanelState {
    pub open: bool,
}

/// Marker for the collection panel root
#[derive(Component)]
pub struct CollectionPanelUI;

/// Icon and text for one panel row. Uncollected kinds stay hidden.
pub fn collection_row(entry: &CollectionEntry) -> (String, String) {
    if entry.collected {
        (
            entry.icon.clone(),
            format!("{}: {}", entry.name, entry.description),
        )
    } else {
        ("?".to_string(), "?".to_string())
    }
}

pub(crate) fn toggle_collection_panel(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tracker: Res<ProgressTracker>,
    mut panel: ResMut<CollectionPanelState>,
    existing: Query<Entity, With<CollectionPanelUI>>,
) {
    let toggled = keyboard.just_pressed(KeyCode::KeyC);
    if !toggled && !(panel.open && tracker.is_changed()) {
        return;
    }
    if toggled {
        panel.open = !panel.open;
    }

    // Despawn and respawn to pick up new discoveries
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    if panel.open {
        spawn_collection_panel(&mut commands, &tracker);
    }
}

fn spawn_collection_panel(commands: &mut Commands, tracker: &ProgressTracker) {
    let title_color = Color::srgb(0.6, 0.8, 1.0);
    let text_color = Color::srgb(0.85, 0.9, 0.95);
    let hidden_color = Color::srgb(0.4, 0.4, 0.5);

    commands
        .spawn((
            CollectionPanelUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(20.0),
                right: Val::Percent(20.0),
                top: Val::Px(60.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(6.0),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.1, 0.92)),
            BorderColor::all(Color::srgb(0.2, 0.3, 0.5)),
            ZIndex(150),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Collection - {}", tracker.snapshot().label())),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
            ));

            for entry in tracker.entries() {
                let (icon, text) = collection_row(entry);
                let color = if entry.collected {
                    text_color
                } else {
                    hidden_color
                };

                parent
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(10.0),
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Text::new(icon),
                            TextFont {
                                font_size: 16.0,
                                ..default()
                            },
                            TextColor(color),
                            Node {
                                width: Val::Px(24.0),
                                ..default()
                            },
                        ));
                        row.spawn((
                            Text::new(text),
                            TextFont {
                                font_size: 14.0,
                                ..default()
                            },
                            TextColor(color),
                        ));
                    });
            }

            parent.spawn((
                Text::new("Press [C] to close"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hidden_color),
                Node {
                    margin: UiRect::top(Val::Px(8.0)),
                    ..default()
                },
            ));
        });
}
