//! Interaction domain: pointer messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A primary-button click in viewport coordinates
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    pub position: Vec2,
    pub at_ms: u64,
}

impl Message for ClickEvent {}

/// Show a transient marker where the player clicked
#[derive(Debug, Clone, Copy)]
pub struct ClickMarkerEvent {
    pub id: u64,
    pub position: Vec2,
}

impl Message for ClickMarkerEvent {}
