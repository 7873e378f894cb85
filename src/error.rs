// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
