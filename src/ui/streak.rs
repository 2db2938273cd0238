//! UI domain: click streak counter and meter.

use bevy::prelude::*;

use crate::content::SkyTuning;
use crate::interaction::ClickState;
use crate::ui::hud::HUD_PADDING;

const STREAK_METER_WIDTH: f32 = 160.0;
const STREAK_METER_HEIGHT: f32 = 8.0;

/// Marker for the streak panel container
#[derive(Component)]
pub struct StreakPanelUI;

/// Marker for the streak count text
#[derive(Component)]
pub struct StreakCountText;

/// Marker for the streak meter fill element
#[derive(Component)]
pub struct StreakMeterFill;

/// Meter width in percent, capped at full
pub fn meter_percent(state: &ClickState, threshold: u32) -> f32 {
    (state.meter_fraction(threshold) * 100.0).min(100.0)
}

pub(crate) fn spawn_streak_panel(mut commands: Commands) {
    commands
        .spawn((
            StreakPanelUI,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(HUD_PADDING),
                bottom: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::End,
                row_gap: Val::Px(4.0),
                display: Display::None,
                ..default()
            },
            ZIndex(10),
        ))
        .with_children(|parent| {
            parent.spawn((
                StreakCountText,
                Text::new("0"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.0, 0.8, 1.0)),
            ));

            parent
                .spawn((
                    Node {
                        width: Val::Px(STREAK_METER_WIDTH),
                        height: Val::Px(STREAK_METER_HEIGHT),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.2, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.4, 0.6)),
                ))
                .with_children(|meter| {
                    meter.spawn((
                        StreakMeterFill,
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.0, 0.8, 1.0)),
                    ));
                });
        });
}

pub(crate) fn update_streak_panel(
    click_state: Res<ClickState>,
    tuning: Res<SkyTuning>,
    mut panels: Query<&mut Node, (With<StreakPanelUI>, Without<StreakMeterFill>)>,
    mut counters: Query<&mut Text, With<StreakCountText>>,
    mut fills: Query<&mut Node, (With<StreakMeterFill>, Without<StreakPanelUI>)>,
) {
    if !click_state.is_changed() {
        return;
    }

    for mut node in &mut panels {
        node.display = if click_state.streak_active {
            Display::Flex
        } else {
            Display::None
        };
    }
    for mut text in &mut counters {
        **text = click_state.streak.to_string();
    }
    let percent = meter_percent(&click_state, tuning.clicks.cutscene_threshold);
    for mut node in &mut fills {
        node.width = Val::Percent(percent);
    }
}
