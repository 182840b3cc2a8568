//! Epigram client - the sync runtime around the deterministic engine.
//!
//! This crate wires the pure [`epigram_engine`] core to the outside world:
//! a file-backed persistent store, an HTTP client for the remote quote
//! list, the reconciler that runs fetch-merge-persist rounds, and the
//! interval scheduler that drives them. The UI stays external and is
//! reached through the [`Frontend`] trait plus collection snapshots.

pub mod config;
pub mod error;
pub mod exchange;
pub mod frontend;
pub mod reconciler;
pub mod remote;
pub mod scheduler;
pub mod store;

pub use config::Config;
pub use error::{ClientError, Result};
pub use frontend::{Frontend, LogFrontend};
pub use reconciler::{Reconciler, SyncOutcome};
pub use remote::{RemoteClient, SERVER_CATEGORY};
pub use scheduler::Scheduler;
pub use store::{FileStore, ALL_CATEGORIES};
