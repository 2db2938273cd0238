//! UI domain: the one-shot cutscene overlay and its timeline.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::content::SkyTuning;
use crate::core::{
    CutsceneTriggeredEvent, DeferredTasks, SkyClock, SkyRng, SkyState, TaskFiredEvent, TaskKey,
};

pub const FIRST_FLASH_MS: u64 = 1000;
pub const CAPTION_MS: u64 = 1500;
pub const SECOND_FLASH_MS: u64 = 3000;

/// Full-strength flash before it starts fading
const FLASH_HOLD_MS: u64 = 100;
const FLASH_FADE_MS: u64 = 300;

pub const CAPTIONS: [&str; 2] = ["The universe flickers for you.", "Do not answer!"];

pub const FLASH_COLORS: [Color; 2] = [Color::srgb(0.0, 0.8, 1.0), Color::WHITE];

/// Marker for the cutscene overlay
#[derive(Component)]
pub struct CutsceneOverlay;

/// Marker for the cutscene caption text
#[derive(Component)]
pub struct CutsceneCaptionText;

/// Flash and backdrop state for the overlay while the cutscene plays
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CutscenePlayback {
    pub flash: Option<(Color, u64)>,
    /// Backdrop opacity outside a flash. Opaque until the first flash.
    pub backdrop_alpha: f32,
}

impl Default for CutscenePlayback {
    fn default() -> Self {
        Self {
            flash: None,
            backdrop_alpha: 1.0,
        }
    }
}

impl CutscenePlayback {
    pub fn start_flash(&mut self, color: Color, now_ms: u64) {
        self.flash = Some((color, now_ms));
        self.backdrop_alpha = 0.0;
    }

    /// Overlay colour at `now_ms`
    pub fn background(&self, now_ms: u64) -> Color {
        if let Some((color, started)) = self.flash {
            let alpha = flash_alpha(now_ms.saturating_sub(started));
            if alpha > 0.0 {
                return color.with_alpha(alpha);
            }
        }
        Color::BLACK.with_alpha(self.backdrop_alpha)
    }
}

/// Flash opacity `elapsed_ms` after it started
pub fn flash_alpha(elapsed_ms: u64) -> f32 {
    if elapsed_ms <= FLASH_HOLD_MS {
        return 1.0;
    }
    let fading = (elapsed_ms - FLASH_HOLD_MS) as f32 / FLASH_FADE_MS as f32;
    (1.0 - fading).max(0.0)
}

/// Every task the cutscene needs, relative to its start.
pub fn cutscene_timeline(start_ms: u64, total_ms: u64) -> [(TaskKey, u64); 4] {
    [
        (TaskKey::CutsceneFlash(0), start_ms + FIRST_FLASH_MS),
        (TaskKey::CutsceneCaption, start_ms + CAPTION_MS),
        (TaskKey::CutsceneFlash(1), start_ms + SECOND_FLASH_MS),
        (TaskKey::CutsceneEnd, start_ms + total_ms),
    ]
}

/// Drop every cutscene beat still pending. A short tuned cutscene can end before its later beats.
pub fn cancel_cutscene_tasks(tasks: &mut DeferredTasks) {
    for (key, _) in cutscene_timeline(0, 0) {
        tasks.cancel(key);
    }
}

pub fn pick_caption(rng: &mut impl Rng) -> (&'static str, Color) {
    let caption = CAPTIONS[rng.random_range(0..CAPTIONS.len())];
    let glow = FLASH_COLORS[rng.random_range(0..FLASH_COLORS.len())];
    (caption, glow)
}

pub fn pick_flash_color(rng: &mut impl Rng) -> Color {
    FLASH_COLORS[rng.random_range(0..FLASH_COLORS.len())]
}

pub(crate) fn start_cutscene(
    mut commands: Commands,
    mut triggered: MessageReader<CutsceneTriggeredEvent>,
    clock: Res<SkyClock>,
    tuning: Res<SkyTuning>,
    mut tasks: ResMut<DeferredTasks>,
    mut playback: ResMut<CutscenePlayback>,
    mut next_state: ResMut<NextState<SkyState>>,
) {
    if triggered.read().count() == 0 || tasks.is_pending(TaskKey::CutsceneEnd) {
        return;
    }

    *playback = CutscenePlayback::default();
    for (key, due) in cutscene_timeline(clock.now_ms, tuning.ui.cutscene_ms) {
        tasks.schedule(key, due);
    }
    next_state.set(SkyState::Cutscene);
    spawn_cutscene_overlay(&mut commands);
}

fn spawn_cutscene_overlay(commands: &mut Commands) {
    commands
        .spawn((
            CutsceneOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            ZIndex(300),
        ))
        .with_children(|parent| {
            parent.spawn((
                CutsceneCaptionText,
                Text::new(""),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub(crate) fn run_cutscene_timeline(
    mut commands: Commands,
    mut fired: MessageReader<TaskFiredEvent>,
    clock: Res<SkyClock>,
    mut rng: ResMut<SkyRng>,
    mut tasks: ResMut<DeferredTasks>,
    mut playback: ResMut<CutscenePlayback>,
    mut next_state: ResMut<NextState<SkyState>>,
    overlays: Query<Entity, With<CutsceneOverlay>>,
    mut captions: Query<(&mut Text, &mut TextColor), With<CutsceneCaptionText>>,
) {
    for event in fired.read() {
        match event.key {
            TaskKey::CutsceneFlash(_) => {
                playback.start_flash(pick_flash_color(rng.rng()), clock.now_ms);
            }
            TaskKey::CutsceneCaption => {
                let (caption, glow) = pick_caption(rng.rng());
                for (mut text, mut color) in &mut captions {
                    **text = caption.to_string();
                    color.0 = glow;
                }
            }
            TaskKey::CutsceneEnd => {
                cancel_cutscene_tasks(&mut tasks);
                for entity in &overlays {
                    commands.entity(entity).despawn();
                }
                *playback = CutscenePlayback::default();
                next_state.set(SkyState::Running);
                info!("Cutscene finished, sky resumes");
            }
            _ => {}
        }
    }
}

pub(crate) fn update_cutscene_overlay(
    clock: Res<SkyClock>,
    playback: Res<CutscenePlayback>,
    mut overlays: Query<&mut BackgroundColor, With<CutsceneOverlay>>,
) {
    for mut background in &mut overlays {
        background.0 = playback.background(clock.now_ms);
    }
}
