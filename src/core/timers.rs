//! Core domain: cancellable fire-once tasks keyed by purpose.

use bevy::prelude::*;
use std::collections::HashMap;

/// Purpose of a deferred task. Scheduling a key that is already pending replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    StreakIdle,
    NotificationFade,
    ResizeSettle,
    ClickMarker(u64),
    CutsceneFlash(u8),
    CutsceneCaption,
    CutsceneEnd,
}

/// Pending deferred tasks, each due at an absolute session time in ms.
///
/// Deadlines are `SkyClock` timestamps rather than ticking `Timer`s, so callers can read
/// a due time back with [`DeferredTasks::due_at`] and compare it against `now_ms`.
#[derive(Resource, Debug, Default)]
pub struct DeferredTasks {
    pending: HashMap<TaskKey, u64>,
}

impl DeferredTasks {
    /// Schedule `key` to fire at `due_ms`, cancelling any pending task with the same key.
    pub fn schedule(&mut self, key: TaskKey, due_ms: u64) {
        self.pending.insert(key, due_ms);
    }

    pub fn cancel(&mut self, key: TaskKey) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn due_at(&self, key: TaskKey) -> Option<u64> {
        self.pending.get(&key).copied()
    }

    /// Remove and return every task due at or before `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<TaskKey> {
        let mut due: Vec<(u64, TaskKey)> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now_ms)
            .map(|(key, at)| (*at, *key))
            .collect();
        due.sort_by_key(|(at, _)| *at);

        for (_, key) in &due {
            self.pending.remove(key);
        }

        due.into_iter().map(|(_, key)| key).collect()
    }
}

/// Fired when a deferred task comes due.
#[derive(Debug, Clone, Copy)]
pub struct TaskFiredEvent {
    pub key: TaskKey,
}

impl bevy::ecs::message::Message for TaskFiredEvent {}
