//! Progress domain: tests for the collection read model.

use super::{ProgressSnapshot, ProgressTracker};
use crate::content::{EventKind, builtin_catalog};
use crate::phenomena::DiscoveryRecord;

#[test]
fn test_snapshot_counts_collected_kinds() {
    let catalog = builtin_catalog();
    let mut record = DiscoveryRecord::default();
    record.mark(EventKind::Comet);
    record.mark(EventKind::Nebula);
    record.mark(EventKind::Comet);

    let snapshot = ProgressSnapshot::from_record(&record, &catalog);
    assert_eq!(snapshot.collected, 2);
    assert_eq!(snapshot.total, 14);
    assert_eq!(snapshot.percent(), 14);
    assert_eq!(snapshot.label(), "Collected 2/14 (14%)");
    assert!(!snapshot.is_complete());
}

#[test]
fn test_percent_rounds_down_and_handles_empty() {
    let snapshot = ProgressSnapshot {
        collected: 13,
        total: 14,
    };
    assert_eq!(snapshot.percent(), 92);

    assert_eq!(ProgressSnapshot::default().percent(), 0);
    assert!(!ProgressSnapshot::default().is_complete());
}

#[test]
fn test_full_collection_is_complete() {
    let catalog = builtin_catalog();
    let mut record = DiscoveryRecord::default();
    for kind in EventKind::ALL {
        record.mark(kind);
    }

    let snapshot = ProgressSnapshot::from_record(&record, &catalog);
    assert_eq!(snapshot.percent(), 100);
    assert!(snapshot.is_complete());
}

#[test]
fn test_entries_follow_catalog_order() {
    let catalog = builtin_catalog();
    let mut record = DiscoveryRecord::default();
    record.mark(EventKind::FtlNeutrinos);

    let mut tracker = ProgressTracker::default();
    tracker.refresh(&record, &catalog);

    let kinds: Vec<EventKind> = tracker.entries().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, EventKind::ALL.to_vec());

    let collected: Vec<EventKind> = tracker
        .entries()
        .iter()
        .filter(|e| e.collected)
        .map(|e| e.kind)
        .collect();
    assert_eq!(collected, vec![EventKind::FtlNeutrinos]);
    assert_eq!(tracker.snapshot().collected, 1);
}
