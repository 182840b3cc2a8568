//! The in-memory quote collection.

use crate::{Category, Quote};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered sequence of quotes.
///
/// Insertion order is irrelevant for querying but preserved for display
/// determinism. Serializes transparently as a JSON array of quotes, which
/// is also the persisted on-disk format.
///
/// Duplicate texts are permitted here; the invariant that no two entries
/// share a text holds only after a [`bulk_merge`](crate::bulk_merge) pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// The collection used when no persisted data exists.
    pub fn seeded() -> Self {
        Self {
            quotes: vec![
                Quote {
                    text: "The best way to predict the future is to invent it.".into(),
                    category: "inspiration".into(),
                },
                Quote {
                    text: "Do not be afraid to give up the good to go for the great.".into(),
                    category: "motivation".into(),
                },
                Quote {
                    text: "You miss 100% of the shots you don't take.".into(),
                    category: "sports".into(),
                },
            ],
        }
    }

    /// Build a collection from an already ordered sequence.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Append a single quote. No uniqueness check.
    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Bulk-append quotes in their given order, without merge or dedupe.
    ///
    /// This is the import path; duplicates last until the next merge.
    pub fn extend_raw(&mut self, incoming: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(incoming);
    }

    /// All quotes in display order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Consume the collection, yielding the ordered quotes.
    pub fn into_quotes(self) -> Vec<Quote> {
        self.quotes
    }

    /// Iterate over quotes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Count of quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if the collection holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// The distinct category values present, in a stable order.
    pub fn categories(&self) -> BTreeSet<Category> {
        self.quotes.iter().map(|q| q.category.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a QuoteCollection {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}
