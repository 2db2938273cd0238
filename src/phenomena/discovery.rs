//! Phenomena domain: append-only record of collected kinds.

use crate::content::EventKind;

/// Which kinds have spawned at least once this session, in discovery order.
///
/// There is no way to un-collect a kind.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryRecord {
    collected: Vec<EventKind>,
}

impl DiscoveryRecord {
    /// Mark `kind` collected. Returns true only the first time.
    pub fn mark(&mut self, kind: EventKind) -> bool {
        if self.is_collected(kind) {
            return false;
        }
        self.collected.push(kind);
        true
    }

    pub fn is_collected(&self, kind: EventKind) -> bool {
        self.collected.contains(&kind)
    }

    pub fn collected_count(&self) -> usize {
        self.collected.len()
    }

    /// Collected kinds in the order they were first seen
    pub fn collected(&self) -> &[EventKind] {
        &self.collected
    }
}
