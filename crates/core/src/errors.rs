//! Core error types for the award allocation engine.
//!
//! Allocation-specific failures live in [`AllocationError`]; malformed session
//! data is reported through [`ValidationError`]. Both convert into the root
//! [`Error`] so callers can use a single `Result` alias.

use thiserror::Error;

use crate::allocation::AllocationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the award engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Allocation operation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Session was modified concurrently: expected version {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Failed to load award data: {0}")]
    DataProvider(String),
}

/// Validation errors for session data and user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Suppliers '{first}' and '{second}' share rank {rank}")]
    DuplicateRank {
        rank: u32,
        first: String,
        second: String,
    },

    #[error("Negative amount for {0}")]
    NegativeAmount(String),

    #[error("Score out of range (0-100) for {0}")]
    ScoreOutOfRange(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::DataProvider(err.to_string())
    }
}
