//! Configuration management for the sync agent.

use std::env;
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

/// Default remote endpoint (the reference public test API).
const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default directory for the persistent store.
const DEFAULT_DATA_DIR: &str = "epigram-data";

/// Default period between reconciliation rounds.
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;

/// Default upper bound on one fetch round trip.
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Agent configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote endpoint serving the shared quote list
    pub server_url: String,
    /// Directory holding the persisted collection and sync state
    pub data_dir: PathBuf,
    /// Period between reconciliation rounds
    pub sync_interval: Duration,
    /// Upper bound on a single fetch round trip
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url =
            env::var("EPIGRAM_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let data_dir = env::var("EPIGRAM_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string())
            .into();

        let sync_interval = secs_var(
            "EPIGRAM_SYNC_INTERVAL_SECS",
            DEFAULT_SYNC_INTERVAL_SECS,
            ConfigError::InvalidSyncInterval,
        )?;

        let fetch_timeout = secs_var(
            "EPIGRAM_FETCH_TIMEOUT_SECS",
            DEFAULT_FETCH_TIMEOUT_SECS,
            ConfigError::InvalidFetchTimeout,
        )?;

        Ok(Self {
            server_url,
            data_dir,
            sync_interval,
            fetch_timeout,
        })
    }
}

/// Read a positive whole-second duration from the environment.
fn secs_var(var: &str, default: u64, invalid: ConfigError) -> Result<Duration, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .parse::<NonZeroU64>()
            .map(|secs| Duration::from_secs(secs.get()))
            .map_err(|_| invalid),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid EPIGRAM_SYNC_INTERVAL_SECS value (want a positive number of seconds)")]
    InvalidSyncInterval,

    #[error("Invalid EPIGRAM_FETCH_TIMEOUT_SECS value (want a positive number of seconds)")]
    InvalidFetchTimeout,
}
