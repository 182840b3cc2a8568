//! # Epigram Engine
//!
//! The deterministic core of Epigram, a local-first quote manager.
//!
//! This crate holds the pure logic: quote records, the ordered collection,
//! and the keyed merge that reconciles a remotely fetched list with the
//! locally known one. The same inputs always produce the same outputs.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of files, network, or platform
//! - **Deterministic**: Same inputs always produce same outputs
//! - **Testable**: Pure logic, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Quotes
//!
//! A [`Quote`] is a text/category pair. The text is the identity key:
//! after a reconciliation pass no two quotes in a collection share the
//! same text. Quotes are immutable once created; merges replace colliding
//! entries wholesale.
//!
//! ### Collection
//!
//! A [`QuoteCollection`] is an ordered sequence of quotes. Order is
//! irrelevant for querying but preserved for display determinism. Local
//! additions and raw imports may introduce duplicate texts; they last
//! until the next merge.
//!
//! ### Merge
//!
//! [`bulk_merge`] combines a remote and a local sequence into one, keyed
//! by text. Entries seen later override earlier ones, so locally known
//! quotes win over same-text remote quotes.
//!
//! ## Quick Start
//!
//! ```rust
//! use epigram_engine::{bulk_merge, Quote, QuoteCollection};
//!
//! // Local state starts from the built-in seed set.
//! let local = QuoteCollection::seeded();
//!
//! // Two quotes discovered remotely.
//! let remote = vec![
//!     Quote::new("You miss 100% of the shots you don't take.", "server").unwrap(),
//!     Quote::new("Stay hungry, stay foolish.", "server").unwrap(),
//! ];
//!
//! let merged = QuoteCollection::from_quotes(bulk_merge(remote, local.into_quotes()));
//!
//! // The colliding seed quote kept its local category and its
//! // remote-discovered position; the new remote quote landed as well.
//! assert_eq!(merged.len(), 4);
//! assert_eq!(merged.quotes()[0].category, "sports");
//! ```

pub mod collection;
pub mod error;
pub mod merge;
pub mod quote;

// Re-export main types at crate root
pub use collection::QuoteCollection;
pub use error::Error;
pub use merge::bulk_merge;
pub use quote::Quote;

/// Type alias for clarity
pub type Category = String;
