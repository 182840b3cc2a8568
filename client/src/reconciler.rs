//! Reconciliation of the local collection with the remote list.
//!
//! The reconciler owns the collection; every other party works through a
//! handle to it. One sync round is a single fetch-merge-persist cycle:
//! fetch the remote list, merge it with the local quotes keyed by text,
//! persist the result, notify the frontend. A failed fetch aborts the
//! round with no state change and no notification. Rounds are serialized;
//! a round that fires while another is in flight is skipped.

use crate::error::Result;
use crate::frontend::Frontend;
use crate::remote::RemoteClient;
use crate::store::FileStore;
use epigram_engine::{bulk_merge, Category, Quote, QuoteCollection};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Notification shown after a successful round.
const SYNCED_MESSAGE: &str = "Quotes synced with server!";

/// Outcome of one sync round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Remote list fetched, merged, and persisted.
    Synced,
    /// Fetch failed; collection untouched, no notification emitted.
    Failed,
    /// Another round was already in flight.
    Skipped,
}

/// Owner of the quote collection and driver of sync rounds.
pub struct Reconciler {
    collection: Mutex<QuoteCollection>,
    store: FileStore,
    remote: RemoteClient,
    frontend: Arc<dyn Frontend>,
    /// Advisory guard held for the duration of one sync round.
    in_flight: Mutex<()>,
}

impl Reconciler {
    /// Build a reconciler around an already loaded collection.
    pub fn new(
        collection: QuoteCollection,
        store: FileStore,
        remote: RemoteClient,
        frontend: Arc<dyn Frontend>,
    ) -> Self {
        Self {
            collection: Mutex::new(collection),
            store,
            remote,
            frontend,
            in_flight: Mutex::new(()),
        }
    }

    /// Load the persisted collection, falling back to the seed set when
    /// the store is empty or unreadable.
    pub async fn open(store: FileStore, remote: RemoteClient, frontend: Arc<dyn Frontend>) -> Self {
        let collection = match store.load().await {
            Ok(Some(collection)) => collection,
            Ok(None) => {
                tracing::info!("No persisted quotes, starting from the seed set");
                QuoteCollection::seeded()
            }
            Err(err) => {
                tracing::warn!(
                    "Could not read persisted quotes, starting from the seed set: {}",
                    err
                );
                QuoteCollection::seeded()
            }
        };

        Self::new(collection, store, remote, frontend)
    }

    /// Run one sync round: fetch, merge, persist, notify.
    pub async fn sync(&self) -> SyncOutcome {
        let _round = match self.in_flight.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::debug!("Sync round already in flight, skipping");
                return SyncOutcome::Skipped;
            }
        };

        let remote = match self.remote.fetch_quotes().await {
            Ok(quotes) => quotes,
            Err(err) => {
                tracing::warn!("Sync round aborted: {}", err);
                return SyncOutcome::Failed;
            }
        };

        tracing::debug!("Fetched {} remote quotes", remote.len());

        let categories = {
            let mut collection = self.collection.lock().await;
            let existing = std::mem::take(&mut *collection).into_quotes();
            *collection = QuoteCollection::from_quotes(bulk_merge(remote, existing));
            self.persist(&collection).await;
            collection.categories()
        };

        self.frontend.notify(SYNCED_MESSAGE);
        self.refresh_frontend_categories(&categories).await;

        SyncOutcome::Synced
    }

    /// Add a locally entered quote: validate, append, persist, then push
    /// it to the remote best-effort.
    pub async fn add_quote(&self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text, category)?;

        let categories = {
            let mut collection = self.collection.lock().await;
            collection.push(quote.clone());
            self.persist(&collection).await;
            collection.categories()
        };

        self.refresh_frontend_categories(&categories).await;
        self.remote.post_quote(quote.clone());

        Ok(quote)
    }

    /// Bulk-append imported quotes without merge or dedupe.
    ///
    /// Returns the number of appended entries; duplicates collapse on the
    /// next sync round.
    pub async fn import(&self, quotes: Vec<Quote>) -> usize {
        let count = quotes.len();

        let categories = {
            let mut collection = self.collection.lock().await;
            collection.extend_raw(quotes);
            self.persist(&collection).await;
            collection.categories()
        };

        self.refresh_frontend_categories(&categories).await;
        count
    }

    /// A point-in-time copy of the collection for display.
    pub async fn snapshot(&self) -> QuoteCollection {
        self.collection.lock().await.clone()
    }

    /// The distinct categories currently present.
    pub async fn categories(&self) -> BTreeSet<Category> {
        self.collection.lock().await.categories()
    }

    /// The persisted category filter.
    pub async fn last_category(&self) -> String {
        self.store.load_last_category().await
    }

    /// Persist a new category filter selection.
    pub async fn set_last_category(&self, category: &str) {
        if let Err(err) = self.store.save_last_category(category).await {
            tracing::warn!("Could not persist category filter: {}", err);
        }
    }

    async fn persist(&self, collection: &QuoteCollection) {
        if let Err(err) = self.store.save(collection).await {
            tracing::warn!("Could not persist quotes, memory is ahead of disk: {}", err);
        }
    }

    async fn refresh_frontend_categories(&self, categories: &BTreeSet<Category>) {
        let selected = self.store.load_last_category().await;
        self.frontend.refresh_categories(categories, &selected);
    }
}
