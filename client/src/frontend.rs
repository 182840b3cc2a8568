//! Frontend collaborator interface.
//!
//! The UI is external to the core. The reconciler pushes sync
//! notifications and category refreshes through this trait; everything
//! else the UI shows (quote display, random selection, filter widgets) is
//! driven by reading collection snapshots on its own schedule.

use epigram_engine::Category;
use std::collections::BTreeSet;

/// Sink for the core's side-channel messages to the UI.
pub trait Frontend: Send + Sync {
    /// Show a transient message to the user.
    fn notify(&self, message: &str);

    /// Rebuild the category filter options, keeping `selected` current.
    fn refresh_categories(&self, categories: &BTreeSet<Category>, selected: &str);
}

/// Frontend for headless embeddings: everything goes to the log.
#[derive(Debug, Default)]
pub struct LogFrontend;

impl Frontend for LogFrontend {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn refresh_categories(&self, categories: &BTreeSet<Category>, selected: &str) {
        tracing::debug!(?categories, selected, "category filter refreshed");
    }
}
