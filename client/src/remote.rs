//! HTTP client for the remote quote list.
//!
//! Remote rows are mapped into quotes under the fixed server-origin
//! category; the remote's own categorization is discarded. Posting a
//! locally added quote is best-effort: a failure is logged, never retried,
//! and never surfaced to the caller.

use crate::error::Result;
use epigram_engine::Quote;
use serde::Deserialize;
use std::time::Duration;

/// Category assigned to every quote derived from the remote endpoint.
pub const SERVER_CATEGORY: &str = "server";

/// A row from the remote list. Only the title is used.
#[derive(Debug, Deserialize)]
struct RemotePost {
    title: String,
}

/// Client for the remote quote endpoint.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    url: String,
}

impl RemoteClient {
    /// Build a client with a bounded request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Fetch the remote list and map it into quote records.
    ///
    /// Transport failures, non-success statuses, and malformed bodies all
    /// surface as network errors; the caller treats the round as a no-op.
    pub async fn fetch_quotes(&self) -> Result<Vec<Quote>> {
        let posts: Vec<RemotePost> = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let quotes = posts
            .into_iter()
            .filter_map(|post| match Quote::new(post.title, SERVER_CATEGORY) {
                Ok(quote) => Some(quote),
                Err(err) => {
                    tracing::warn!("Dropping remote row: {}", err);
                    None
                }
            })
            .collect();

        Ok(quotes)
    }

    /// Post a locally added quote to the remote, fire-and-forget.
    ///
    /// The remote write is not on the critical path of local correctness;
    /// the spawned task only logs the outcome.
    pub fn post_quote(&self, quote: Quote) {
        let http = self.http.clone();
        let url = self.url.clone();

        tokio::spawn(async move {
            let sent = http.post(&url).json(&quote).send().await;
            match sent.and_then(|response| response.error_for_status()) {
                Ok(_) => tracing::debug!("Quote posted to server"),
                Err(err) => tracing::warn!("Failed to post quote to server: {}", err),
            }
        });
    }
}
