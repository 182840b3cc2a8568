//! Unified error handling for the client runtime.
//!
//! No error here is fatal to the process: a network failure aborts one
//! sync round, a format failure rejects one import, and a storage failure
//! leaves the in-memory collection correct but unpersisted. Every failure
//! path returns control with the collection in its last-known-good state.

use thiserror::Error;

/// Application error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or non-success response from the remote.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed quote data: an invalid import file or a corrupt
    /// persisted collection.
    #[error("format error: {0}")]
    Format(#[from] serde_json::Error),

    /// Local persistence failed; in-memory state remains correct but
    /// will not survive a restart.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Validation failure from the deterministic core.
    #[error("engine error: {0}")]
    Engine(#[from] epigram_engine::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
