//! Starfield domain: startup population, per-frame tick, and debounced resize.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::canvas::Canvas;
use crate::content::SkyTuning;
use crate::core::{DeferredTasks, SkyClock, SkyRng, TaskFiredEvent, TaskKey, Viewport};
use crate::starfield::field::{ResizeOutcome, StarField};

pub(crate) fn init_starfield(
    mut commands: Commands,
    viewport: Res<Viewport>,
    tuning: Res<SkyTuning>,
    mut rng: ResMut<SkyRng>,
) {
    let field = StarField::initialize(*viewport, &tuning.stars, rng.rng());
    info!(
        "Star field populated with {} stars for {}x{}",
        field.len(),
        viewport.width,
        viewport.height
    );
    commands.insert_resource(field);
}

pub(crate) fn tick_starfield(
    clock: Res<SkyClock>,
    mut rng: ResMut<SkyRng>,
    mut field: ResMut<StarField>,
    mut canvas: ResMut<Canvas>,
) {
    field.tick(clock.now_ms, rng.rng());
    field.render(clock.now_ms, &mut canvas);
}

/// The canvas follows the window immediately; the star layout waits for the size to settle.
pub(crate) fn track_window_resize(
    mut resized: MessageReader<WindowResized>,
    clock: Res<SkyClock>,
    tuning: Res<SkyTuning>,
    mut viewport: ResMut<Viewport>,
    mut tasks: ResMut<DeferredTasks>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };

    *viewport = Viewport::new(last.width, last.height);
    tasks.schedule(
        TaskKey::ResizeSettle,
        clock.now_ms + tuning.stars.resize_debounce_ms,
    );
}

pub(crate) fn settle_resize(
    mut fired: MessageReader<TaskFiredEvent>,
    viewport: Res<Viewport>,
    tuning: Res<SkyTuning>,
    mut rng: ResMut<SkyRng>,
    mut field: ResMut<StarField>,
) {
    for event in fired.read() {
        if event.key != TaskKey::ResizeSettle {
            continue;
        }

        match field.resize(*viewport, &tuning.stars, rng.rng()) {
            ResizeOutcome::Ignored => {}
            outcome => debug!(
                "Star field {:?} to {}x{} ({} stars)",
                outcome,
                viewport.width,
                viewport.height,
                field.len()
            ),
        }
    }
}
