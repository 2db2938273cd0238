//! Core domain: messages shared across the sky domains.

use bevy::ecs::message::Message;

/// Informational toast for the player (never an error report)
#[derive(Debug, Clone)]
pub struct NotificationEvent {
    pub text: String,
}

impl NotificationEvent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Message for NotificationEvent {}

/// Fired once per session when the click streak reaches the cutscene threshold
#[derive(Debug)]
pub struct CutsceneTriggeredEvent {
    pub streak: u32,
}

impl Message for CutsceneTriggeredEvent {}
