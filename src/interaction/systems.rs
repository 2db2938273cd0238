//! Interaction domain: pointer and keyboard systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::SkyTuning;
use crate::core::{
    CutsceneTriggeredEvent, DeferredTasks, MuteState, NotificationEvent, SkyClock, SkyRng,
    TaskFiredEvent, TaskKey,
};
use crate::interaction::click::ClickState;
use crate::interaction::events::{ClickEvent, ClickMarkerEvent};
use crate::interaction::stabilize::{StabilizeResult, attempt_stabilization};
use crate::phenomena::{ActiveEvents, SpawnRequestEvent, SpawnSource};
use crate::starfield::StarField;

/// Turn a left-button press into a click at the cursor. Presses that land on a UI button stay with the UI.
pub(crate) fn read_pointer_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    interactions: Query<&Interaction>,
    clock: Res<SkyClock>,
    mut clicks: MessageWriter<ClickEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) || ui_claims_press(&interactions) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(position) = window.cursor_position() else {
        return;
    };

    clicks.write(ClickEvent {
        position,
        at_ms: clock.now_ms,
    });
}

/// Whether any interactive UI node is being pressed this frame
pub fn ui_claims_press<'a>(interactions: impl IntoIterator<Item = &'a Interaction>) -> bool {
    interactions
        .into_iter()
        .any(|interaction| *interaction == Interaction::Pressed)
}

pub(crate) fn expire_idle_streak(
    mut fired: MessageReader<TaskFiredEvent>,
    mut click_state: ResMut<ClickState>,
) {
    for event in fired.read() {
        if event.key == TaskKey::StreakIdle {
            click_state.expire_streak();
        }
    }
}

/// Streak bookkeeping, the click cadence spawn roll, and the one-shot cutscene trigger.
pub(crate) fn update_click_streak(
    mut clicks: MessageReader<ClickEvent>,
    tuning: Res<SkyTuning>,
    mut rng: ResMut<SkyRng>,
    mut click_state: ResMut<ClickState>,
    mut tasks: ResMut<DeferredTasks>,
    mut spawn_requests: MessageWriter<SpawnRequestEvent>,
    mut cutscenes: MessageWriter<CutsceneTriggeredEvent>,
) {
    for click in clicks.read() {
        let outcome = click_state.on_click(click.at_ms, &tuning.clicks, rng.rng());
        tasks.schedule(
            TaskKey::StreakIdle,
            click.at_ms + tuning.clicks.streak_idle_ms,
        );

        if outcome.request_spawn {
            spawn_requests.write(SpawnRequestEvent {
                kind: None,
                source: SpawnSource::ClickCadence,
            });
        }

        if outcome.cutscene {
            info!("Click streak reached {}", outcome.streak);
            cutscenes.write(CutsceneTriggeredEvent {
                streak: outcome.streak,
            });
        }
    }
}

pub(crate) fn stabilize_quantum(
    mut clicks: MessageReader<ClickEvent>,
    tuning: Res<SkyTuning>,
    mut rng: ResMut<SkyRng>,
    mut active: ResMut<ActiveEvents>,
    mut stars: ResMut<StarField>,
    mut notifications: MessageWriter<NotificationEvent>,
) {
    for click in clicks.read() {
        let results = attempt_stabilization(
            click.position,
            tuning.clicks.stabilize_radius,
            tuning.clicks.stabilize_chance,
            &mut active,
            &mut stars,
            rng.rng(),
        );

        for result in results {
            match result {
                StabilizeResult::Stabilized { id } => {
                    info!("Quantum fluctuation #{} stabilized", id);
                    notifications.write(NotificationEvent::new("Quantum state recorded!"));
                }
                StabilizeResult::Unstable { .. } => {
                    notifications.write(NotificationEvent::new(
                        "Quantum field unstable, keep trying...",
                    ));
                }
            }
        }
    }
}

/// Twinkle boost around the click plus a short-lived marker.
pub(crate) fn spawn_click_effects(
    mut clicks: MessageReader<ClickEvent>,
    tuning: Res<SkyTuning>,
    mut stars: ResMut<StarField>,
    mut tasks: ResMut<DeferredTasks>,
    mut markers: MessageWriter<ClickMarkerEvent>,
    mut next_marker: Local<u64>,
) {
    for click in clicks.read() {
        stars.boost_within(
            click.position,
            tuning.clicks.boost_radius,
            tuning.clicks.boost_intensity,
            click.at_ms + tuning.clicks.boost_duration_ms,
        );

        let id = *next_marker;
        *next_marker += 1;
        tasks.schedule(TaskKey::ClickMarker(id), click.at_ms + tuning.ui.click_marker_ms);
        markers.write(ClickMarkerEvent {
            id,
            position: click.position,
        });
    }
}

pub(crate) fn toggle_mute(keyboard: Res<ButtonInput<KeyCode>>, mut mute: ResMut<MuteState>) {
    if keyboard.just_pressed(KeyCode::KeyM) {
        let muted = mute.toggle();
        info!("Sound {}", if muted { "muted" } else { "unmuted" });
    }
}
