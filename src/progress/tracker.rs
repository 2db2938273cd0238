//! Progress domain: collection stats derived from the discovery record.

use bevy::prelude::*;

use crate::content::{EventCatalog, EventKind, EventTypeDescriptor};
use crate::phenomena::DiscoveryRecord;

/// Collected vs. total kinds at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub collected: usize,
    pub total: usize,
}

impl ProgressSnapshot {
    pub fn from_record(record: &DiscoveryRecord, catalog: &EventCatalog) -> Self {
        let collected = catalog
            .all_type_ids()
            .filter(|kind| record.is_collected(*kind))
            .count();
        Self {
            collected,
            total: catalog.len(),
        }
    }

    /// Whole percent, rounded down
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.collected * 100 / self.total) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.collected == self.total
    }

    pub fn label(&self) -> String {
        format!(
            "Collected {}/{} ({}%)",
            self.collected,
            self.total,
            self.percent()
        )
    }
}

/// One row of the collection panel
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEntry {
    pub kind: EventKind,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub collected: bool,
}

impl CollectionEntry {
    fn new(descriptor: &EventTypeDescriptor, collected: bool) -> Self {
        Self {
            kind: descriptor.kind,
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            icon: descriptor.icon.clone(),
            collected,
        }
    }
}

/// Read model for the progress display and collection panel.
#[derive(Resource, Debug, Default, Clone)]
pub struct ProgressTracker {
    snapshot: ProgressSnapshot,
    entries: Vec<CollectionEntry>,
}

impl ProgressTracker {
    /// Rebuild from the current record. Rows follow catalog registration order.
    pub fn refresh(&mut self, record: &DiscoveryRecord, catalog: &EventCatalog) {
        self.snapshot = ProgressSnapshot::from_record(record, catalog);
        self.entries = catalog
            .descriptors()
            .iter()
            .map(|d| CollectionEntry::new(d, record.is_collected(d.kind)))
            .collect();
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }
}
