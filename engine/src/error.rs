//! Error types for the Epigram engine.

use thiserror::Error;

/// All possible errors from the Epigram engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("quote text must not be empty")]
    EmptyText,

    #[error("quote category must not be empty")]
    EmptyCategory,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
