//! File-backed persistent store.
//!
//! The store is the durable key-value namespace for one device: one file
//! per logical key under a single data directory. The quote collection
//! lives in `quotes.json` as a pretty-printed JSON array; the last
//! selected category filter lives in `last_category` as a plain string.
//! Each write is atomic for its own key (temp file + rename) but writes
//! are not coordinated across keys.

use crate::error::Result;
use epigram_engine::QuoteCollection;
use std::path::PathBuf;

/// File name for the serialized quote collection.
const QUOTES_KEY: &str = "quotes.json";

/// File name for the last-selected category filter.
const LAST_CATEGORY_KEY: &str = "last_category";

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// A store rooted at one data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Load the persisted collection, or `None` when nothing was saved yet.
    ///
    /// A file that exists but does not parse is a format error; the caller
    /// decides the fallback (the reconciler falls back to the seed set).
    pub async fn load(&self) -> Result<Option<QuoteCollection>> {
        let raw = match tokio::fs::read_to_string(self.dir.join(QUOTES_KEY)).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let collection = serde_json::from_str(&raw)?;
        Ok(Some(collection))
    }

    /// Persist the collection. Atomic for this key only.
    pub async fn save(&self, collection: &QuoteCollection) -> Result<()> {
        let raw = serde_json::to_string_pretty(collection)?;
        self.write_key(QUOTES_KEY, &raw).await
    }

    /// The last category filter, or the `"all"` sentinel when unset or
    /// unreadable.
    pub async fn load_last_category(&self) -> String {
        match tokio::fs::read_to_string(self.dir.join(LAST_CATEGORY_KEY)).await {
            Ok(raw) if !raw.is_empty() => raw,
            _ => ALL_CATEGORIES.to_string(),
        }
    }

    /// Persist the last category filter.
    pub async fn save_last_category(&self, category: &str) -> Result<()> {
        self.write_key(LAST_CATEGORY_KEY, category).await
    }

    async fn write_key(&self, key: &str, contents: &str) -> Result<()> {
        let tmp = self.dir.join(format!("{key}.tmp"));
        tokio::fs::write(&tmp, contents).await?;
        tokio::fs::rename(&tmp, self.dir.join(key)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use epigram_engine::Quote;

    async fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn load_empty_store() {
        let (_dir, store) = temp_store().await;
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_load_roundtrip() {
        let (_dir, store) = temp_store().await;

        let mut collection = QuoteCollection::seeded();
        collection.push(Quote::new("Extra", "misc").unwrap());
        store.save(&collection).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, collection);
    }

    #[tokio::test]
    async fn persisted_bytes_are_stable() {
        let (dir, store) = temp_store().await;
        store.save(&QuoteCollection::seeded()).await.unwrap();

        let quotes_path = dir.path().join("quotes.json");
        let first = tokio::fs::read(&quotes_path).await.unwrap();

        // save(load()) must be a no-op on the persisted bytes.
        let loaded = store.load().await.unwrap().unwrap();
        store.save(&loaded).await.unwrap();
        let second = tokio::fs::read(&quotes_path).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn corrupt_collection_is_a_format_error() {
        let (dir, store) = temp_store().await;
        tokio::fs::write(dir.path().join("quotes.json"), "{not json")
            .await
            .unwrap();

        assert!(matches!(store.load().await, Err(ClientError::Format(_))));
    }

    #[tokio::test]
    async fn last_category_defaults_to_all() {
        let (_dir, store) = temp_store().await;
        assert_eq!(store.load_last_category().await, ALL_CATEGORIES);
    }

    #[tokio::test]
    async fn last_category_roundtrip() {
        let (_dir, store) = temp_store().await;

        store.save_last_category("sports").await.unwrap();
        assert_eq!(store.load_last_category().await, "sports");

        // The two keys are independent: the collection is still absent.
        assert!(store.load().await.unwrap().is_none());
    }
}
