//! Lazily loaded, evictable word list cache
//!
//! The cache holds an optional strong reference to the loaded [`WordList`].
//! Readers take the lock-free path while the list is present; the load lock
//! is only taken when the slot is observed empty and the slot is re-checked
//! once the lock is held, so concurrent first callers load exactly once.
//! [`WordListCache::evict`] drops the list to release memory and the next
//! access reloads it from the resource.

use super::{WordList, ENGLISH_RESOURCE};
use crate::Result;
use arc_swap::ArcSwapOption;
use cryypt_common::LoggingTransformer;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

type Loader = Box<dyn Fn() -> Result<WordList> + Send + Sync>;

static ENGLISH: Lazy<WordListCache> =
    Lazy::new(|| WordListCache::with_loader(|| WordList::from_text(ENGLISH_RESOURCE)));

/// Cache owning the process-wide word list
///
/// Callers must not keep the returned `Arc` beyond the operation at hand;
/// every access goes back through [`WordListCache::get`].
pub struct WordListCache {
    slot: ArcSwapOption<WordList>,
    load_lock: Mutex<()>,
    loader: Loader,
    loads: AtomicUsize,
}

impl WordListCache {
    /// Create an empty cache that loads through `loader` on first access
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> Result<WordList> + Send + Sync + 'static,
    {
        Self {
            slot: ArcSwapOption::empty(),
            load_lock: Mutex::new(()),
            loader: Box::new(loader),
            loads: AtomicUsize::new(0),
        }
    }

    /// The process-wide cache of the embedded English list
    pub fn global() -> &'static Self {
        &ENGLISH
    }

    /// Get the word list, loading it if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the loader fails; the cache stays empty and the
    /// next call retries.
    pub fn get(&self) -> Result<Arc<WordList>> {
        if let Some(list) = self.slot.load_full() {
            return Ok(list);
        }

        let _guard = self
            .load_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // another caller may have loaded it while we waited
        if let Some(list) = self.slot.load_full() {
            return Ok(list);
        }

        let list = match (self.loader)() {
            Ok(list) => Arc::new(list),
            Err(e) => {
                cryypt_common::log_crypto_safe!(ERROR, "word list load", e);
                return Err(e);
            }
        };

        let previous_loads = self.loads.fetch_add(1, Ordering::AcqRel);
        let event = if previous_loads == 0 {
            "loaded"
        } else {
            "reloaded"
        };
        LoggingTransformer::log_cache_event("word list", event, Some(list.len()));

        self.slot.store(Some(Arc::clone(&list)));
        Ok(list)
    }

    /// Drop the cached list; the next access reloads it
    pub fn evict(&self) {
        if self.slot.swap(None).is_some() {
            LoggingTransformer::log_cache_event("word list", "evicted", None);
        }
    }

    /// Whether a list is currently held
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slot.load().is_some()
    }

    /// Number of successful loads since creation
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for WordListCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordListCache")
            .field("loaded", &self.is_loaded())
            .field("loads", &self.load_count())
            .finish_non_exhaustive()
    }
}
