//! Debug domain: state and action definitions for dev tooling.

use bevy::prelude::*;

use crate::content::EventKind;

/// Resource tracking dev tool state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the debug panel is visible
    pub ui_visible: bool,
    /// Whether to show the live sky overlay (clock, stars, active events)
    pub show_info: bool,
    /// Message to display temporarily in the debug panel
    pub status_message: Option<(String, f32)>,
    /// Latest spawns, oldest first
    pub recent_spawns: Vec<SpawnRecord>,
}

pub const RECENT_SPAWN_LIMIT: usize = 5;

/// One spawn as seen by the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRecord {
    pub id: u64,
    pub kind: EventKind,
    pub origin: Vec2,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    pub fn record_spawn(&mut self, record: SpawnRecord) {
        self.recent_spawns.push(record);
        if self.recent_spawns.len() > RECENT_SPAWN_LIMIT {
            let excess = self.recent_spawns.len() - RECENT_SPAWN_LIMIT;
            self.recent_spawns.drain(..excess);
        }
    }

    /// Count down the status message, clearing it once its time is up.
    pub fn tick_message(&mut self, delta_secs: f32) {
        if let Some((_, ref mut remaining)) = self.status_message {
            *remaining -= delta_secs;
            if *remaining <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Actions that can be triggered from the debug panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    Spawn(EventKind),
    SpawnRandom,
    ToggleInfo,
    Close,
}

/// Ctrl+digit hotkeys: 1-9 map to the first nine kinds, 0 to a random draw.
pub fn hotkey_action(digit: u8) -> Option<DebugAction> {
    match digit {
        0 => Some(DebugAction::SpawnRandom),
        1..=9 => EventKind::ALL
            .get(usize::from(digit) - 1)
            .map(|kind| DebugAction::Spawn(*kind)),
        _ => None,
    }
}
