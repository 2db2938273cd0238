//! UI domain: notification toast. A newer notification replaces the one on screen.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::SkyTuning;
use crate::core::{DeferredTasks, NotificationEvent, SkyClock, TaskFiredEvent, TaskKey};

/// Time before the fade task fires over which the toast fades out
const TOAST_FADE_MS: u64 = 300;

const TOAST_COLOR: Color = Color::srgb(0.85, 0.95, 1.0);

/// Marker for the notification toast text
#[derive(Component)]
pub struct ToastText;

/// Toast opacity at `now_ms` given when its fade task is due.
pub fn toast_alpha(now_ms: u64, fade_due: Option<u64>) -> f32 {
    let Some(due) = fade_due else {
        return 0.0;
    };
    let remaining = due.saturating_sub(now_ms);
    (remaining as f32 / TOAST_FADE_MS as f32).min(1.0)
}

pub(crate) fn spawn_toast(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(24.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                ToastText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TOAST_COLOR.with_alpha(0.0)),
                Node {
                    padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                    ..default()
                },
                Visibility::Hidden,
            ));
        });
}

pub(crate) fn show_notifications(
    mut notifications: MessageReader<NotificationEvent>,
    clock: Res<SkyClock>,
    tuning: Res<SkyTuning>,
    mut tasks: ResMut<DeferredTasks>,
    mut toasts: Query<(&mut Text, &mut Visibility), With<ToastText>>,
) {
    let Some(latest) = notifications.read().last() else {
        return;
    };

    tasks.schedule(
        TaskKey::NotificationFade,
        clock.now_ms + tuning.ui.notification_ms,
    );
    for (mut text, mut visibility) in &mut toasts {
        **text = latest.text.clone();
        *visibility = Visibility::Visible;
    }
}

pub(crate) fn fade_toast(
    clock: Res<SkyClock>,
    tasks: Res<DeferredTasks>,
    mut toasts: Query<&mut TextColor, With<ToastText>>,
) {
    let alpha = toast_alpha(clock.now_ms, tasks.due_at(TaskKey::NotificationFade));
    for mut color in &mut toasts {
        color.0 = TOAST_COLOR.with_alpha(alpha);
    }
}

pub(crate) fn hide_faded_toast(
    mut fired: MessageReader<TaskFiredEvent>,
    mut toasts: Query<&mut Visibility, With<ToastText>>,
) {
    for event in fired.read() {
        if event.key != TaskKey::NotificationFade {
            continue;
        }
        for mut visibility in &mut toasts {
            *visibility = Visibility::Hidden;
        }
    }
}
