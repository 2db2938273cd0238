//! Validation for catalog completeness and descriptor sanity.

use bevy::prelude::Srgba;

use super::data::EventKind;
use super::registry::EventCatalog;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("catalog is missing event type '{0}'")]
    MissingKind(EventKind),

    #[error("event type '{kind}' has invalid colour '{color}'")]
    BadColor { kind: EventKind, color: String },

    #[error("event type '{0}' has a zero duration")]
    ZeroDuration(EventKind),

    #[error("event type '{0}' has an empty name")]
    EmptyName(EventKind),
}

/// Validate every descriptor and that every kind is registered.
/// Returns a list of validation errors, empty if the catalog is usable.
pub fn validate_catalog(catalog: &EventCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for kind in EventKind::ALL {
        if !catalog.contains(kind) {
            errors.push(ValidationError::MissingKind(kind));
        }
    }

    for descriptor in catalog.descriptors() {
        if Srgba::hex(&descriptor.color).is_err() {
            errors.push(ValidationError::BadColor {
                kind: descriptor.kind,
                color: descriptor.color.clone(),
            });
        }
        if descriptor.duration_ms == 0 {
            errors.push(ValidationError::ZeroDuration(descriptor.kind));
        }
        if descriptor.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName(descriptor.kind));
        }
    }

    errors
}
