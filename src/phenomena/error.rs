//! Phenomena domain: step failures caught by the lifecycle manager.

use thiserror::Error;

use crate::content::EventKind;
use crate::phenomena::instance::EventInstance;

#[derive(Debug, Error, PartialEq)]
pub enum StepError {
    #[error("scratch state of instance {id} does not match kind '{kind}'")]
    ScratchMismatch { id: u64, kind: EventKind },
}

impl StepError {
    pub fn mismatch(instance: &EventInstance) -> Self {
        StepError::ScratchMismatch {
            id: instance.id,
            kind: instance.kind,
        }
    }
}
