//! Phenomena domain: the live instance set and its per-frame pass.

use bevy::prelude::*;
use rand::Rng;

use crate::content::EventKind;
use crate::phenomena::behaviors::{StepContext, step};
use crate::phenomena::instance::EventInstance;

/// Why an instance left the live set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryCause {
    /// Elapsed time reached the effective duration
    Elapsed,
    /// The kind's step reported it was done
    Finished,
    /// The step failed and the instance was dropped
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiredInstance {
    pub id: u64,
    pub kind: EventKind,
    pub cause: ExpiryCause,
}

/// Live instances in spawn order
#[derive(Resource, Debug, Default)]
pub struct ActiveEvents {
    instances: Vec<EventInstance>,
}

impl ActiveEvents {
    pub fn push(&mut self, instance: EventInstance) {
        self.instances.push(instance);
    }

    /// Step every live instance once, in spawn order, and drop the finished ones.
    ///
    /// The elapsed-time ceiling is checked before stepping, so nothing at or past
    /// its duration survives the pass. A failing step expires only its own instance.
    pub fn tick<R: Rng>(&mut self, ctx: &mut StepContext<'_, R>) -> Vec<ExpiredInstance> {
        let now_ms = ctx.now_ms;
        let mut expired = Vec::new();

        self.instances.retain_mut(|instance| {
            let cause = if instance.is_expired(now_ms) {
                ExpiryCause::Elapsed
            } else {
                match step(instance, ctx) {
                    Ok(true) => return true,
                    Ok(false) => ExpiryCause::Finished,
                    Err(e) => {
                        warn!("{}; expiring instance", e);
                        ExpiryCause::Failed
                    }
                }
            };

            expired.push(ExpiredInstance {
                id: instance.id,
                kind: instance.kind,
                cause,
            });
            false
        });

        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventInstance> {
        self.instances.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EventInstance> {
        self.instances.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
