//! Debug domain: panel toggling, spawn hotkeys, and the live sky overlay.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::EventCatalog;
use crate::core::{SkyClock, SkyRng, SkyState};
use crate::debug::state::{DebugAction, DebugState, SpawnRecord, hotkey_action};
use crate::debug::ui::{
    DebugButton, DebugInfoOverlay, DebugInfoText, DebugStatusMessage, DebugUI, despawn_debug_ui,
    spawn_debug_info_overlay, spawn_debug_ui,
};
use crate::phenomena::{
    ActiveEvents, EventScheduler, EventSpawnedEvent, SpawnRequestEvent, SpawnSource,
};
use crate::starfield::StarField;

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Toggle debug UI with F1 or backtick key
pub(crate) fn toggle_debug_ui(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    catalog: Res<EventCatalog>,
    mut debug_state: ResMut<DebugState>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.ui_visible = !debug_state.ui_visible;

        if debug_state.ui_visible {
            spawn_debug_ui(&mut commands, &catalog);
        } else {
            despawn_debug_ui(&mut commands, &existing_ui);
        }
    }
}

/// Handle keyboard shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut spawn_requests: MessageWriter<SpawnRequestEvent>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    for (digit, key) in DIGIT_KEYS.iter().enumerate() {
        if !keyboard.just_pressed(*key) {
            continue;
        }
        if let Some(action) = hotkey_action(digit as u8) {
            apply_action(
                action,
                &mut commands,
                &mut debug_state,
                &mut spawn_requests,
                &existing_ui,
            );
        }
    }

    // Ctrl+D: Toggle sky info overlay
    if keyboard.just_pressed(KeyCode::KeyD) {
        apply_action(
            DebugAction::ToggleInfo,
            &mut commands,
            &mut debug_state,
            &mut spawn_requests,
            &existing_ui,
        );
    }
}

/// Handle button clicks in debug UI
pub(crate) fn handle_debug_buttons(
    mut commands: Commands,
    mut debug_state: ResMut<DebugState>,
    mut spawn_requests: MessageWriter<SpawnRequestEvent>,
    button_query: Query<(&DebugButton, &Interaction), Changed<Interaction>>,
    existing_ui: Query<Entity, With<DebugUI>>,
) {
    for (button, interaction) in &button_query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        apply_action(
            button.action,
            &mut commands,
            &mut debug_state,
            &mut spawn_requests,
            &existing_ui,
        );
    }
}

fn apply_action(
    action: DebugAction,
    commands: &mut Commands,
    debug_state: &mut DebugState,
    spawn_requests: &mut MessageWriter<SpawnRequestEvent>,
    existing_ui: &Query<Entity, With<DebugUI>>,
) {
    match action {
        DebugAction::Spawn(kind) => {
            spawn_requests.write(SpawnRequestEvent {
                kind: Some(kind),
                source: SpawnSource::DevTools,
            });
            debug_state.set_message(format!("Requested {}", kind), 2.0);
            info!("[DEBUG] Spawn requested: {}", kind);
        }
        DebugAction::SpawnRandom => {
            spawn_requests.write(SpawnRequestEvent {
                kind: None,
                source: SpawnSource::DevTools,
            });
            debug_state.set_message("Requested random phenomenon", 2.0);
            info!("[DEBUG] Random spawn requested");
        }
        DebugAction::ToggleInfo => {
            debug_state.show_info = !debug_state.show_info;
            let msg = if debug_state.show_info {
                "Sky Info ON"
            } else {
                "Sky Info OFF"
            };
            debug_state.set_message(msg, 2.0);
            info!("[DEBUG] {}", msg);
        }
        DebugAction::Close => {
            debug_state.ui_visible = false;
            despawn_debug_ui(commands, existing_ui);
        }
    }
}

/// Update status message timer and the panel's status line
pub(crate) fn update_status_message(
    time: Res<Time>,
    mut debug_state: ResMut<DebugState>,
    mut status_query: Query<&mut Text, With<DebugStatusMessage>>,
) {
    debug_state.tick_message(time.delta_secs());

    let message = debug_state
        .status_message
        .as_ref()
        .map(|(msg, _)| msg.as_str())
        .unwrap_or("");
    for mut text in &mut status_query {
        if text.as_str() != message {
            **text = message.to_string();
        }
    }
}

pub(crate) fn record_spawns(
    mut spawned: MessageReader<EventSpawnedEvent>,
    mut debug_state: ResMut<DebugState>,
) {
    for event in spawned.read() {
        debug_state.record_spawn(SpawnRecord {
            id: event.id,
            kind: event.kind,
            origin: event.origin,
        });
    }
}

/// Keep the sky info overlay in step with `show_info`
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    clock: Res<SkyClock>,
    rng: Res<SkyRng>,
    sky_state: Res<State<SkyState>>,
    stars: Res<StarField>,
    active: Res<ActiveEvents>,
    scheduler: Res<EventScheduler>,
    mut overlay_query: Query<&mut Text, With<DebugInfoText>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let live: Vec<String> = active
        .iter()
        .map(|instance| {
            format!(
                "#{} {} {:.0}%",
                instance.id,
                instance.kind,
                instance.progress(clock.now_ms) * 100.0
            )
        })
        .collect();
    let recent: Vec<String> = debug_state
        .recent_spawns
        .iter()
        .rev()
        .map(|r| format!("#{} {} ({:.0}, {:.0})", r.id, r.kind, r.origin.x, r.origin.y))
        .collect();

    if let Ok(mut text) = overlay_query.single_mut() {
        **text = format!(
            "Clock: {} ms (frame {})\nSeed: {}\nState: {:?}\nStars: {} ({} visible)\nLast spawn: {}\nRecent: {}\nLive: {}",
            clock.now_ms,
            clock.frame,
            rng.seed,
            sky_state.get(),
            stars.len(),
            stars.visible_count(),
            scheduler
                .last_spawn_at()
                .map(|at| format!("{} ms", at))
                .unwrap_or_else(|| "never".to_string()),
            if recent.is_empty() {
                "none".to_string()
            } else {
                recent.join(", ")
            },
            if live.is_empty() {
                "none".to_string()
            } else {
                live.join(", ")
            }
        );
    }
}
