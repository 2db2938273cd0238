//! Interaction domain: tests for click streaks, cadence spawns, and stabilization.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{ClickState, StabilizeResult, attempt_stabilization, ui_claims_press};
use crate::content::{ClickTuning, EventKind};
use crate::core::Viewport;
use crate::phenomena::{ActiveEvents, EventInstance};
use crate::starfield::{Star, StarField};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(11)
}

fn quantum_at(id: u64, x: f32, y: f32) -> EventInstance {
    EventInstance::new(id, EventKind::QuantumFluctuation, Vec2::new(x, y), 0, 6000)
}

// -----------------------------------------------------------------------------
// Streak tests
// -----------------------------------------------------------------------------

#[test]
fn test_streak_counts_significant_clicks() {
    let tuning = ClickTuning::default();
    let mut state = ClickState::default();
    let mut rng = rng();

    let streaks: Vec<(bool, u32)> = [0, 1000, 2000]
        .into_iter()
        .map(|t| {
            let outcome = state.on_click(t, &tuning, &mut rng);
            (outcome.significant, outcome.streak)
        })
        .collect();
    assert_eq!(streaks, vec![(false, 1), (true, 2), (true, 3)]);

    let late = state.on_click(10_000, &tuning, &mut rng);
    assert!(!late.significant);
    assert_eq!(late.streak, 1);
    assert_eq!(state.normal_clicks, 2);
}

#[test]
fn test_significant_window_is_exclusive() {
    let tuning = ClickTuning::default();
    let mut state = ClickState::default();
    let mut rng = rng();

    state.on_click(0, &tuning, &mut rng);
    assert!(state.on_click(4999, &tuning, &mut rng).significant);
    assert!(!state.on_click(9999, &tuning, &mut rng).significant);
}

#[test]
fn test_idle_expiry_hides_and_resets_streak() {
    let tuning = ClickTuning::default();
    let mut state = ClickState::default();
    let mut rng = rng();

    state.on_click(0, &tuning, &mut rng);
    state.on_click(100, &tuning, &mut rng);
    assert!(state.streak_active);

    state.expire_streak();
    assert_eq!(state.streak, 0);
    assert!(!state.streak_active);

    assert_eq!(state.on_click(5100, &tuning, &mut rng).streak, 1);
    assert!(state.streak_active);
}

#[test]
fn test_cutscene_fires_once_per_session() {
    let tuning = ClickTuning::default();
    let mut state = ClickState::default();
    let mut rng = rng();
    let mut fired = 0;
    let mut now = 0;

    for _ in 0..2 {
        for _ in 0..120 {
            if state.on_click(now, &tuning, &mut rng).cutscene {
                fired += 1;
            }
            now += 100;
        }
        now += 20_000;
    }

    assert_eq!(fired, 1);
    assert!(state.cutscene_fired);
}

#[test]
fn test_cutscene_fires_on_threshold_click() {
    let tuning = ClickTuning::default();
    let mut state = ClickState::default();
    let mut rng = rng();

    for i in 0..98u64 {
        assert!(!state.on_click(i * 10, &tuning, &mut rng).cutscene);
    }
    let outcome = state.on_click(980, &tuning, &mut rng);
    assert_eq!(outcome.streak, 99);
    assert!(outcome.cutscene);
}

#[test]
fn test_cadence_spawn_only_on_twentieth_normal_click() {
    let tuning = ClickTuning {
        spawn_chance: 1.0,
        ..default()
    };
    let mut state = ClickState::default();
    let mut rng = rng();

    let mut requests = Vec::new();
    for i in 0..40u64 {
        // Far apart so every click is a normal click
        let outcome = state.on_click(i * 10_000, &tuning, &mut rng);
        if outcome.request_spawn {
            requests.push(state.normal_clicks);
        }
    }
    assert_eq!(requests, vec![20, 40]);
}

#[test]
fn test_significant_clicks_never_roll_cadence() {
    let tuning = ClickTuning {
        spawn_chance: 1.0,
        spawn_cadence: 1,
        ..default()
    };
    let mut state = ClickState::default();
    let mut rng = rng();

    assert!(state.on_click(0, &tuning, &mut rng).request_spawn);
    for i in 1..50u64 {
        assert!(!state.on_click(i * 100, &tuning, &mut rng).request_spawn);
    }
}

#[test]
fn test_cadence_spawn_rate_is_about_half() {
    let tuning = ClickTuning::default();
    let mut state = ClickState::default();
    let mut rng = rng();

    let mut requests = 0;
    for i in 0..20_000u64 {
        if state.on_click(i * 10_000, &tuning, &mut rng).request_spawn {
            requests += 1;
        }
    }

    // 1000 cadence rolls at 50%
    assert!((400..=600).contains(&requests), "got {requests}");
}

#[test]
fn test_meter_fraction_caps_at_full() {
    let mut state = ClickState {
        streak: 33,
        ..default()
    };
    assert!((state.meter_fraction(99) - 1.0 / 3.0).abs() < 1e-6);

    state.streak = 150;
    assert_eq!(state.meter_fraction(99), 1.0);
}

// -----------------------------------------------------------------------------
// Stabilization tests
// -----------------------------------------------------------------------------

#[test]
fn test_stabilization_success_rate_near_thirty_percent() {
    let mut rng = rng();
    let trials = 5000;
    let mut successes = 0;

    for _ in 0..trials {
        let mut active = ActiveEvents::default();
        active.push(quantum_at(1, 100.0, 100.0));
        let mut stars = StarField::default();

        let results = attempt_stabilization(
            Vec2::new(110.0, 105.0),
            40.0,
            0.3,
            &mut active,
            &mut stars,
            &mut rng,
        );
        assert_eq!(results.len(), 1);
        if matches!(results[0], StabilizeResult::Stabilized { .. }) {
            successes += 1;
        }
    }

    let rate = successes as f64 / trials as f64;
    assert!((0.26..=0.34).contains(&rate), "rate was {rate}");
}

#[test]
fn test_far_click_never_attempts() {
    let mut rng = rng();
    let mut active = ActiveEvents::default();
    active.push(quantum_at(1, 100.0, 100.0));
    let mut stars = StarField::default();

    for _ in 0..100 {
        let results = attempt_stabilization(
            Vec2::new(300.0, 300.0),
            40.0,
            0.3,
            &mut active,
            &mut stars,
            &mut rng,
        );
        assert!(results.is_empty());
    }
    assert!(!active.iter().any(|i| i.stabilized));
}

#[test]
fn test_stabilization_restores_quantum_stars() {
    let mut rng = rng();
    let star = Star::random(Vec2::new(100.0, 100.0), 0, &mut rng);
    let mut stars = StarField::from_stars(vec![star], Viewport::new(800.0, 600.0));
    stars.mark_quantum_within(Vec2::new(100.0, 100.0), 60.0, 10_000, 0.0, &mut rng);
    assert!(!stars.stars()[0].visible);

    let mut active = ActiveEvents::default();
    active.push(quantum_at(1, 100.0, 100.0));

    let results =
        attempt_stabilization(Vec2::new(100.0, 100.0), 40.0, 1.0, &mut active, &mut stars, &mut rng);

    assert_eq!(results, vec![StabilizeResult::Stabilized { id: 1 }]);
    assert!(stars.stars()[0].visible);
    assert!(!stars.stars()[0].is_quantum());
    assert!(active.iter().all(|i| i.stabilized));
}

#[test]
fn test_stabilization_ignores_other_kinds() {
    let mut rng = rng();
    let mut active = ActiveEvents::default();
    active.push(EventInstance::new(
        1,
        EventKind::Pulsar,
        Vec2::new(100.0, 100.0),
        0,
        1000,
    ));
    let mut stars = StarField::default();

    let results =
        attempt_stabilization(Vec2::new(100.0, 100.0), 40.0, 1.0, &mut active, &mut stars, &mut rng);
    assert!(results.is_empty());
}

#[test]
fn test_stabilized_fluctuation_is_still_attempted() {
    let mut rng = rng();
    let mut active = ActiveEvents::default();
    let mut stabilized = quantum_at(1, 100.0, 100.0);
    stabilized.stabilized = true;
    active.push(stabilized);
    let mut stars = StarField::default();

    let failed =
        attempt_stabilization(Vec2::new(100.0, 100.0), 40.0, 0.0, &mut active, &mut stars, &mut rng);
    assert_eq!(failed, vec![StabilizeResult::Unstable { id: 1 }]);
    assert!(active.iter().all(|i| i.stabilized));

    let recorded =
        attempt_stabilization(Vec2::new(100.0, 100.0), 40.0, 1.0, &mut active, &mut stars, &mut rng);
    assert_eq!(recorded, vec![StabilizeResult::Stabilized { id: 1 }]);
}

// -----------------------------------------------------------------------------
// Pointer tests
// -----------------------------------------------------------------------------

#[test]
fn test_pressed_ui_button_claims_the_click() {
    let nothing: [Interaction; 0] = [];
    assert!(!ui_claims_press(&nothing));
    assert!(!ui_claims_press(&[Interaction::None, Interaction::Hovered]));
    assert!(ui_claims_press(&[Interaction::Hovered, Interaction::Pressed]));
}
