//! EventCatalog resource providing ordered lookups for phenomenon descriptors.

use bevy::prelude::*;

use super::data::{EventKind, EventTypeDescriptor};
use super::error::SkyError;

/// Registry of every phenomenon type, built once at startup and never mutated.
/// Iteration order is registration order.
#[derive(Resource, Debug, Clone, Default)]
pub struct EventCatalog {
    descriptors: Vec<EventTypeDescriptor>,
}

impl EventCatalog {
    /// Build from descriptors in registration order. Later duplicates of a kind are dropped.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = EventTypeDescriptor>) -> Self {
        let mut unique: Vec<EventTypeDescriptor> = Vec::new();
        for descriptor in descriptors {
            if !unique.iter().any(|d| d.kind == descriptor.kind) {
                unique.push(descriptor);
            }
        }
        Self {
            descriptors: unique,
        }
    }

    pub fn get(&self, kind: EventKind) -> Result<&EventTypeDescriptor, SkyError> {
        self.descriptors
            .iter()
            .find(|d| d.kind == kind)
            .ok_or_else(|| SkyError::UnknownType {
                id: kind.id().to_string(),
            })
    }

    #[cfg(test)]
    pub fn get_by_id(&self, id: &str) -> Result<&EventTypeDescriptor, SkyError> {
        EventKind::from_id(id)
            .and_then(|kind| self.get(kind).ok())
            .ok_or_else(|| SkyError::UnknownType { id: id.to_string() })
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.descriptors.iter().any(|d| d.kind == kind)
    }

    /// Registered kinds in registration order.
    pub fn all_type_ids(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.descriptors.iter().map(|d| d.kind)
    }

    pub fn descriptors(&self) -> &[EventTypeDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Returns a summary of loaded kinds for logging.
    pub fn summary(&self) -> String {
        let ids: Vec<&str> = self.all_type_ids().map(EventKind::id).collect();
        format!("EventCatalog loaded {} kinds: {}", self.len(), ids.join(", "))
    }
}
