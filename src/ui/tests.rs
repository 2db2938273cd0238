//! UI domain: tests for HUD labels, meter, toast fade, and the cutscene timeline.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cutscene::{CAPTIONS, FLASH_COLORS, pick_caption, pick_flash_color};
use super::{
    CutscenePlayback, cancel_cutscene_tasks, collection_row, cutscene_timeline, flash_alpha,
    marker_origin, meter_percent, mute_label, telemetry_label, toast_alpha,
};
use crate::content::EventKind;
use crate::core::{DeferredTasks, MuteState, ObserverDrift, TaskKey};
use crate::interaction::ClickState;
use crate::progress::CollectionEntry;

// -----------------------------------------------------------------------------
// HUD tests
// -----------------------------------------------------------------------------

#[test]
fn test_telemetry_label_formats_readout() {
    assert_eq!(
        telemetry_label(&ObserverDrift::default()),
        "Observer X:00000 Y:00000\nCurvature: 0.00\nUniverse time: 0"
    );

    let drift = ObserverDrift {
        universe_time: 400.0,
        position: Vec2::new(12.34, 5.0),
    };
    let label = telemetry_label(&drift);
    assert!(label.starts_with("Observer X:00123 Y:00050\n"));
    assert!(label.ends_with("Universe time: 20"));
}

#[test]
fn test_mute_label_follows_flag() {
    let mut mute = MuteState::default();
    assert_eq!(mute_label(&mute), "Sound on [M]");
    mute.toggle();
    assert_eq!(mute_label(&mute), "Sound off [M]");
}

#[test]
fn test_meter_percent_caps_at_hundred() {
    let mut state = ClickState {
        streak: 33,
        ..default()
    };
    assert!((meter_percent(&state, 99) - 100.0 / 3.0).abs() < 1e-3);

    state.streak = 150;
    assert_eq!(meter_percent(&state, 99), 100.0);
}

// -----------------------------------------------------------------------------
// Toast and marker tests
// -----------------------------------------------------------------------------

#[test]
fn test_toast_fades_out_before_task_fires() {
    assert_eq!(toast_alpha(0, None), 0.0);
    assert_eq!(toast_alpha(0, Some(2000)), 1.0);
    assert!((toast_alpha(1850, Some(2000)) - 0.5).abs() < 1e-6);
    assert_eq!(toast_alpha(2000, Some(2000)), 0.0);
    assert_eq!(toast_alpha(2500, Some(2000)), 0.0);
}

#[test]
fn test_marker_is_centred_on_click() {
    assert_eq!(marker_origin(Vec2::new(100.0, 50.0)), Vec2::new(90.0, 40.0));
}

// -----------------------------------------------------------------------------
// Collection panel tests
// -----------------------------------------------------------------------------

fn entry(collected: bool) -> CollectionEntry {
    CollectionEntry {
        kind: EventKind::Pulsar,
        name: "Pulsar".to_string(),
        description: "A spinning neutron star.".to_string(),
        icon: "*".to_string(),
        collected,
    }
}

#[test]
fn test_collection_row_hides_uncollected_kinds() {
    assert_eq!(
        collection_row(&entry(true)),
        ("*".to_string(), "Pulsar: A spinning neutron star.".to_string())
    );
    assert_eq!(
        collection_row(&entry(false)),
        ("?".to_string(), "?".to_string())
    );
}

// -----------------------------------------------------------------------------
// Cutscene tests
// -----------------------------------------------------------------------------

#[test]
fn test_cutscene_timeline_offsets() {
    assert_eq!(
        cutscene_timeline(500, 10_000),
        [
            (TaskKey::CutsceneFlash(0), 1500),
            (TaskKey::CutsceneCaption, 2000),
            (TaskKey::CutsceneFlash(1), 3500),
            (TaskKey::CutsceneEnd, 10_500),
        ]
    );
}

#[test]
fn test_flash_holds_then_fades() {
    assert_eq!(flash_alpha(0), 1.0);
    assert_eq!(flash_alpha(100), 1.0);
    assert!((flash_alpha(250) - 0.5).abs() < 1e-6);
    assert_eq!(flash_alpha(400), 0.0);
    assert_eq!(flash_alpha(5000), 0.0);
}

#[test]
fn test_playback_backdrop_clears_after_first_flash() {
    let mut playback = CutscenePlayback::default();
    assert_eq!(playback.background(0), Color::BLACK.with_alpha(1.0));

    playback.start_flash(Color::WHITE, 1000);
    assert_eq!(playback.background(1050), Color::WHITE.with_alpha(1.0));
    assert_eq!(playback.background(2000), Color::BLACK.with_alpha(0.0));
}

#[test]
fn test_cutscene_picks_from_fixed_sets() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let (caption, glow) = pick_caption(&mut rng);
        assert!(CAPTIONS.contains(&caption));
        assert!(FLASH_COLORS.contains(&glow));
        assert!(FLASH_COLORS.contains(&pick_flash_color(&mut rng)));
    }
}

#[test]
fn test_short_cutscene_drops_later_beats() {
    let mut tasks = DeferredTasks::default();
    for (key, due) in cutscene_timeline(0, 2000) {
        tasks.schedule(key, due);
    }
    tasks.schedule(TaskKey::StreakIdle, 4000);

    assert_eq!(
        tasks.drain_due(2000),
        vec![
            TaskKey::CutsceneFlash(0),
            TaskKey::CutsceneCaption,
            TaskKey::CutsceneEnd
        ]
    );
    assert!(tasks.is_pending(TaskKey::CutsceneFlash(1)));

    cancel_cutscene_tasks(&mut tasks);
    assert!(!tasks.is_pending(TaskKey::CutsceneFlash(1)));
    assert!(tasks.is_pending(TaskKey::StreakIdle));
}
