//! Quote records.

use crate::{error::Result, Category, Error};
use serde::{Deserialize, Serialize};

/// A single quote: a text/category pair.
///
/// The text is the identity key used by the merge. Both fields are
/// non-empty when constructed through [`Quote::new`]; deserialization of
/// externally supplied data is structural only and does not re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text (identity key)
    pub text: String,
    /// The category label
    pub category: Category,
}

impl Quote {
    /// Create a validated quote.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let category = category.into();

        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        if category.trim().is_empty() {
            return Err(Error::EmptyCategory);
        }

        Ok(Self { text, category })
    }
}
