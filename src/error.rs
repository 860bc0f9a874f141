//! Error types for timekeeper

use thiserror::Error;

/// Recoverable timer and registry errors.
///
/// Misusing a single [`DurationTimer`](crate::budget::DurationTimer) (querying it
/// before it starts, starting it twice) is a bug in the caller and panics instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("budget must not be negative, got {0}ms")]
    NegativeBudget(i64),

    #[error("timer id must not be empty")]
    InvalidId,

    #[error("timer not found: {0}")]
    NotFound(String),

    #[error("timer already exists: {0}")]
    AlreadyExists(String),

    #[error("timer already started: {0}")]
    AlreadyStarted(String),

    #[error("timer not started: {0}")]
    NotStarted(String),

    #[error("registry is full ({0} timers)")]
    CapacityExceeded(usize),
}

/// Errors raised while loading [`ServerConfig`](crate::config::ServerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid listen address {0:?}")]
    ListenAddr(String),
}

pub type Result<T> = std::result::Result<T, TimerError>;
