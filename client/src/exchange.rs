//! Import and export of quote files.
//!
//! The exchange format is a JSON array of `{text, category}` objects, the
//! same shape the store persists. Imports are all-or-nothing: a file that
//! is not valid JSON, or whose top level is not an array, is rejected
//! without touching the collection.

use crate::error::Result;
use epigram_engine::Quote;
use std::path::Path;

/// Read a quote file.
///
/// Fails with a format error on invalid JSON or a non-array top level.
pub async fn read_quotes_file(path: impl AsRef<Path>) -> Result<Vec<Quote>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let quotes = serde_json::from_str(&raw)?;
    Ok(quotes)
}

/// Write quotes as pretty-printed JSON.
pub async fn write_quotes_file(quotes: &[Quote], path: impl AsRef<Path>) -> Result<()> {
    let raw = serde_json::to_string_pretty(quotes)?;
    tokio::fs::write(path, raw).await?;
    Ok(())
}
