mod canvas;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod interaction;
mod phenomena;
mod progress;
mod starfield;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stargazer".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        canvas::CanvasPlugin,
        starfield::StarfieldPlugin,
        phenomena::PhenomenaPlugin,
        interaction::InteractionPlugin,
        progress::ProgressPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
