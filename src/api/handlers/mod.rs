// src/api/handlers/mod.rs
use crate::error::{EngineError, Result};

pub mod generator;
pub mod passphrase;
pub mod strength;
pub mod system;

/// Run an engine operation, retrying exactly once if the entropy source
/// fails. Policy errors are deterministic and never retried.
pub(crate) fn with_entropy_retry<T>(mut op: impl FnMut() -> Result<T>) -> Result<T> {
    match op() {
        Err(EngineError::EntropyUnavailable(_)) => op(),
        other => other,
    }
}
