//! Error types for the collaborator-facing edges of the crate.
//!
//! Engine transitions never fail; rejected commands are reported through
//! `battle::Rejection`. The errors here cover configuration loading,
//! card pool lookups and session bookkeeping.

use thiserror::Error;

/// Invalid or unreadable battle configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse battle config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("deck size must be at least 1")]
    EmptyDeck,

    #[error("starting lives must be at least 1")]
    NoLives,

    #[error("damage variance range [{low}, {high}] is invalid")]
    InvalidVariance { low: f64, high: f64 },
}

/// Card pool lookup failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("unknown circle {0}")]
    UnknownSide(String),

    #[error("no cards found for circle {0}")]
    EmptyRoster(String),
}

/// Session-level failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no battle has been started in this session")]
    NotStarted,

    #[error("stale command: expected turn {expected}, battle is at turn {actual}")]
    StaleTurn { expected: u32, actual: u32 },

    #[error("card pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}
