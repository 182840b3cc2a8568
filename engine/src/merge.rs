//! Deterministic merge of remote and local quote sequences.
//!
//! This is the core of determinism. Given the quotes discovered remotely
//! and the quotes known locally, produce a single sequence with no
//! duplicate texts.
//!
//! # Algorithm
//!
//! 1. Walk `incoming` first, then `existing`, keying each quote by text
//! 2. The first sight of a key fixes its position in the output
//! 3. A later entry with the same key replaces the earlier one in place
//!
//! Because `existing` is applied after `incoming`, locally known quotes
//! override same-text remote quotes. The output lists remote-discovered
//! keys first, followed by purely-local keys in their original relative
//! order. This decides which category label survives for a given text.

use crate::Quote;
use std::collections::HashMap;

/// Merge `incoming` and `existing` into one sequence keyed by text.
///
/// On a key collision the later insertion wins, so entries from
/// `existing` replace same-text entries from `incoming`.
pub fn bulk_merge(incoming: Vec<Quote>, existing: Vec<Quote>) -> Vec<Quote> {
    let mut merged: Vec<Quote> = Vec::with_capacity(incoming.len() + existing.len());
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(merged.capacity());

    for quote in incoming.into_iter().chain(existing) {
        match slots.get(&quote.text) {
            Some(&slot) => merged[slot] = quote,
            None => {
                slots.insert(quote.text.clone(), merged.len());
                merged.push(quote);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str, category: &str) -> Quote {
        Quote::new(text, category).unwrap()
    }

    #[test]
    fn empty_incoming_is_identity() {
        let existing = vec![quote("A", "one"), quote("B", "two")];

        let merged = bulk_merge(Vec::new(), existing.clone());

        assert_eq!(merged, existing);
    }

    #[test]
    fn empty_existing_keeps_incoming() {
        let incoming = vec![quote("A", "server"), quote("B", "server")];

        let merged = bulk_merge(incoming.clone(), Vec::new());

        assert_eq!(merged, incoming);
    }

    #[test]
    fn existing_wins_on_collision() {
        let incoming = vec![quote("A", "server")];
        let existing = vec![quote("A", "local")];

        let merged = bulk_merge(incoming, existing);

        assert_eq!(merged, vec![quote("A", "local")]);
    }

    #[test]
    fn remote_order_first_then_local_tail() {
        let incoming = vec![quote("R1", "server"), quote("Shared", "server"), quote("R2", "server")];
        let existing = vec![quote("L1", "local"), quote("Shared", "local"), quote("L2", "local")];

        let merged = bulk_merge(incoming, existing);

        // Shared keeps its remote-discovered position but the local entry's
        // category; purely-local keys follow in their original order.
        assert_eq!(
            merged,
            vec![
                quote("R1", "server"),
                quote("Shared", "local"),
                quote("R2", "server"),
                quote("L1", "local"),
                quote("L2", "local"),
            ]
        );
    }

    #[test]
    fn duplicate_texts_within_existing_collapse_to_last() {
        // A transient local duplicate (append then import of the same text)
        // collapses on the next merge, keeping the later entry.
        let existing = vec![quote("A", "first"), quote("A", "second")];

        let merged = bulk_merge(Vec::new(), existing);

        assert_eq!(merged, vec![quote("A", "second")]);
    }

    #[test]
    fn merge_is_idempotent() {
        let incoming = vec![quote("R1", "server"), quote("Shared", "server")];
        let existing = vec![quote("Shared", "local"), quote("L1", "local")];

        let once = bulk_merge(incoming.clone(), existing);
        let twice = bulk_merge(incoming, once.clone());

        assert_eq!(once, twice);
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        fn arb_quote() -> impl Strategy<Value = Quote> {
            ("[a-e]{1,3}", prop_oneof![Just("server"), Just("local")]).prop_map(
                |(text, category)| Quote {
                    text,
                    category: category.to_string(),
                },
            )
        }

        fn arb_quotes() -> impl Strategy<Value = Vec<Quote>> {
            proptest::collection::vec(arb_quote(), 0..20)
        }

        proptest! {
            #[test]
            fn prop_merge_deterministic(incoming in arb_quotes(), existing in arb_quotes()) {
                let first = bulk_merge(incoming.clone(), existing.clone());
                let second = bulk_merge(incoming, existing);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn prop_output_texts_unique(incoming in arb_quotes(), existing in arb_quotes()) {
                let merged = bulk_merge(incoming, existing);
                let texts: HashSet<_> = merged.iter().map(|q| q.text.clone()).collect();
                prop_assert_eq!(texts.len(), merged.len());
            }

            #[test]
            fn prop_no_foreign_keys(incoming in arb_quotes(), existing in arb_quotes()) {
                let inputs: HashSet<_> = incoming
                    .iter()
                    .chain(existing.iter())
                    .map(|q| q.text.clone())
                    .collect();

                let merged = bulk_merge(incoming, existing);

                // Every input key survives and nothing else appears.
                prop_assert_eq!(merged.len(), inputs.len());
                prop_assert!(merged.iter().all(|q| inputs.contains(&q.text)));
            }

            #[test]
            fn prop_existing_wins(incoming in arb_quotes(), existing in arb_quotes()) {
                let merged = bulk_merge(incoming, existing.clone());

                for quote in &merged {
                    // The winner for any text present in `existing` is the
                    // last `existing` entry with that text.
                    if let Some(last) = existing.iter().rev().find(|e| e.text == quote.text) {
                        prop_assert_eq!(quote, last);
                    }
                }
            }
        }
    }
}
