//! Content domain: tests for catalog lookup, validation, and shipped data files.

use std::path::Path;

use super::loader::{parse_data_file, parse_single};
use super::{
    EventCatalog, EventKind, EventTypeDescriptor, SkyError, SkyTuning, ValidationError,
    builtin_catalog, validate_catalog,
};

const SHIPPED_CATALOG: &str = include_str!("../../assets/data/phenomena.ron");
const SHIPPED_TUNING: &str = include_str!("../../assets/data/sky_tuning.ron");

fn descriptor(kind: EventKind, color: &str, duration_ms: u64) -> EventTypeDescriptor {
    EventTypeDescriptor {
        kind,
        name: kind.id().to_string(),
        description: String::new(),
        color: color.to_string(),
        duration_ms,
        icon: "?".to_string(),
    }
}

// -----------------------------------------------------------------------------
// EventCatalog tests
// -----------------------------------------------------------------------------

#[test]
fn test_builtin_catalog_is_complete_and_valid() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.len(), EventKind::ALL.len());
    assert!(validate_catalog(&catalog).is_empty());
}

#[test]
fn test_all_type_ids_follow_registration_order() {
    let catalog = builtin_catalog();
    let ids: Vec<EventKind> = catalog.all_type_ids().collect();
    assert_eq!(ids, EventKind::ALL.to_vec());
}

#[test]
fn test_get_returns_descriptor() {
    let catalog = builtin_catalog();
    let pulsar = catalog.get(EventKind::Pulsar).unwrap();
    assert_eq!(pulsar.name, "Pulsar");
    assert_eq!(pulsar.duration_ms, 1000);

    let by_id = catalog.get_by_id("quantum_fluctuation").unwrap();
    assert_eq!(by_id.kind, EventKind::QuantumFluctuation);
}

#[test]
fn test_get_unknown_type_fails() {
    let catalog = EventCatalog::from_descriptors([descriptor(EventKind::Comet, "#88ff88", 3500)]);

    assert_eq!(
        catalog.get(EventKind::Nebula).unwrap_err(),
        SkyError::UnknownType {
            id: "nebula".to_string()
        }
    );
    assert!(matches!(
        catalog.get_by_id("wormhole"),
        Err(SkyError::UnknownType { .. })
    ));
}

#[test]
fn test_duplicate_kinds_keep_first_registration() {
    let catalog = EventCatalog::from_descriptors([
        descriptor(EventKind::Comet, "#88ff88", 3500),
        descriptor(EventKind::Comet, "#000000", 1),
    ]);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(EventKind::Comet).unwrap().duration_ms, 3500);
}

#[test]
fn test_event_kind_ids_round_trip_through_lookup() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(EventKind::from_id("blackhole_merger"), None);
}

#[test]
fn test_effective_duration_overrides() {
    assert_eq!(EventKind::QuantumFluctuation.effective_duration_ms(9999), 6000);
    assert_eq!(EventKind::Comet.effective_duration_ms(3500), 4200);
    assert_eq!(EventKind::Nebula.effective_duration_ms(8000), 8000);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_validation_reports_missing_and_bad_entries() {
    let catalog = EventCatalog::from_descriptors([
        descriptor(EventKind::Supernova, "not-a-colour", 1500),
        descriptor(EventKind::Pulsar, "#00ff00", 0),
    ]);

    let errors = validate_catalog(&catalog);
    assert!(errors.contains(&ValidationError::MissingKind(EventKind::Comet)));
    assert!(errors.contains(&ValidationError::BadColor {
        kind: EventKind::Supernova,
        color: "not-a-colour".to_string(),
    }));
    assert!(errors.contains(&ValidationError::ZeroDuration(EventKind::Pulsar)));
}

// -----------------------------------------------------------------------------
// Shipped data file tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_catalog_matches_builtin() {
    let items =
        parse_data_file::<EventTypeDescriptor>(SHIPPED_CATALOG, Path::new("phenomena.ron"))
            .unwrap();
    let shipped = EventCatalog::from_descriptors(items);
    let builtin = builtin_catalog();

    assert!(validate_catalog(&shipped).is_empty());
    for (a, b) in shipped.descriptors().iter().zip(builtin.descriptors()) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.name, b.name);
        assert_eq!(a.color, b.color);
        assert_eq!(a.duration_ms, b.duration_ms);
    }
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let tuning = parse_single::<SkyTuning>(SHIPPED_TUNING, Path::new("sky_tuning.ron")).unwrap();
    let defaults = SkyTuning::default();

    assert_eq!(tuning.spawn.cooldown_ms, defaults.spawn.cooldown_ms);
    assert_eq!(tuning.clicks.cutscene_threshold, 99);
    assert_eq!(tuning.stars.resize_debounce_ms, 500);
    assert_eq!(tuning.seed, None);
}

#[test]
fn test_partial_tuning_fills_defaults() {
    let tuning =
        parse_single::<SkyTuning>("(seed: Some(7), spawn: (cooldown_ms: 100))", Path::new("x"))
            .unwrap();

    assert_eq!(tuning.seed, Some(7));
    assert_eq!(tuning.spawn.cooldown_ms, 100);
    assert_eq!(tuning.spawn.uncollected_bias, 0.7);
    assert_eq!(tuning.clicks.significant_window_ms, 5000);
}

#[test]
fn test_malformed_tuning_is_parse_error() {
    let err = parse_single::<SkyTuning>("(spawn: [1, 2", Path::new("bad.ron")).unwrap_err();
    assert!(!err.is_missing());
    assert!(err.to_string().contains("bad.ron"));
}
