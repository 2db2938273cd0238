//! Core domain: clock, timer dispatch, and camera setup.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::resources::{ObserverDrift, SkyClock, Viewport};
use crate::core::timers::{DeferredTasks, TaskFiredEvent};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Size the viewport from the primary window before anything is laid out.
pub(crate) fn init_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    if let Ok(window) = windows.single() {
        *viewport = Viewport::new(window.width(), window.height());
    }
}

pub(crate) fn advance_clock(time: Res<Time>, mut clock: ResMut<SkyClock>) {
    clock.advance_to(time.elapsed().as_millis() as u64);
}

/// Fire every deferred task that came due this frame.
pub(crate) fn fire_due_tasks(
    clock: Res<SkyClock>,
    mut tasks: ResMut<DeferredTasks>,
    mut fired: MessageWriter<TaskFiredEvent>,
) {
    for key in tasks.drain_due(clock.now_ms) {
        fired.write(TaskFiredEvent { key });
    }
}

pub(crate) fn advance_observer(mut drift: ResMut<ObserverDrift>) {
    drift.advance();
}
