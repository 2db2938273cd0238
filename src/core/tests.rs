//! Core domain: tests for deferred tasks, viewport clamping, and the clock.

use bevy::prelude::Vec2;

use super::{DeferredTasks, ObserverDrift, SkyClock, TaskKey, Viewport};

// -----------------------------------------------------------------------------
// DeferredTasks tests
// -----------------------------------------------------------------------------

#[test]
fn test_task_not_due_before_deadline() {
    let mut tasks = DeferredTasks::default();
    tasks.schedule(TaskKey::StreakIdle, 5000);

    assert!(tasks.drain_due(4999).is_empty());
    assert!(tasks.is_pending(TaskKey::StreakIdle));
}

#[test]
fn test_task_fires_once_at_deadline() {
    let mut tasks = DeferredTasks::default();
    tasks.schedule(TaskKey::StreakIdle, 5000);

    assert_eq!(tasks.drain_due(5000), vec![TaskKey::StreakIdle]);
    assert!(tasks.drain_due(9000).is_empty());
}

#[test]
fn test_rescheduling_same_key_replaces_predecessor() {
    let mut tasks = DeferredTasks::default();
    tasks.schedule(TaskKey::StreakIdle, 5000);
    tasks.schedule(TaskKey::StreakIdle, 8000);

    assert!(tasks.drain_due(6000).is_empty());
    assert_eq!(tasks.due_at(TaskKey::StreakIdle), Some(8000));
    assert_eq!(tasks.drain_due(8000), vec![TaskKey::StreakIdle]);
}

#[test]
fn test_distinct_keys_are_independent() {
    let mut tasks = DeferredTasks::default();
    tasks.schedule(TaskKey::ClickMarker(1), 600);
    tasks.schedule(TaskKey::ClickMarker(2), 700);
    tasks.schedule(TaskKey::NotificationFade, 650);

    assert_eq!(
        tasks.drain_due(700),
        vec![
            TaskKey::ClickMarker(1),
            TaskKey::NotificationFade,
            TaskKey::ClickMarker(2)
        ]
    );
}

#[test]
fn test_due_at_reads_deadline_until_fired() {
    let mut tasks = DeferredTasks::default();
    tasks.schedule(TaskKey::NotificationFade, 2000);

    assert_eq!(tasks.due_at(TaskKey::NotificationFade), Some(2000));
    tasks.drain_due(2000);
    assert_eq!(tasks.due_at(TaskKey::NotificationFade), None);
}

#[test]
fn test_cancel_removes_pending_task() {
    let mut tasks = DeferredTasks::default();
    tasks.schedule(TaskKey::ResizeSettle, 500);

    assert!(tasks.cancel(TaskKey::ResizeSettle));
    assert!(!tasks.cancel(TaskKey::ResizeSettle));
    assert!(tasks.drain_due(1000).is_empty());
}

// -----------------------------------------------------------------------------
// Viewport tests
// -----------------------------------------------------------------------------

#[test]
fn test_viewport_clamps_degenerate_sizes() {
    let viewport = Viewport::new(0.0, -20.0);
    assert_eq!(viewport.width, 1.0);
    assert_eq!(viewport.height, 1.0);

    let viewport = Viewport::new(f32::NAN, 300.0);
    assert_eq!(viewport.width, 1.0);
    assert_eq!(viewport.height, 300.0);
}

#[test]
fn test_viewport_outside_margin() {
    let viewport = Viewport::new(800.0, 600.0);
    assert!(!viewport.is_outside(Vec2::new(-20.0, 300.0), 20.0));
    assert!(viewport.is_outside(Vec2::new(-20.5, 300.0), 20.0));
    assert!(viewport.is_outside(Vec2::new(400.0, 621.0), 20.0));
}

#[test]
fn test_viewport_to_world_centres_origin() {
    let viewport = Viewport::new(800.0, 600.0);
    assert_eq!(viewport.to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    assert_eq!(viewport.to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
}

// -----------------------------------------------------------------------------
// Clock and telemetry tests
// -----------------------------------------------------------------------------

#[test]
fn test_clock_is_monotonic() {
    let mut clock = SkyClock::default();
    clock.advance_to(100);
    clock.advance_to(50);

    assert_eq!(clock.now_ms, 100);
    assert_eq!(clock.frame, 2);
}

#[test]
fn test_observer_drift_epoch_advances() {
    let mut drift = ObserverDrift::default();
    for _ in 0..110 {
        drift.advance();
    }

    assert_eq!(drift.epoch(), 1);
    assert!(drift.curvature() >= 0.0);
    let (x, y) = drift.coordinates_label();
    assert!(x.len() >= 5 && y.len() >= 5);
}
