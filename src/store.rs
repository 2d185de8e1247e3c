//! Lazily loaded word store
//!
//! The store starts empty and downloads its word list the first time any
//! operation needs it. Concurrent first callers are serialised on a mutex
//! so the list is fetched at most once, and readers only ever see a fully
//! parsed list. A failed or empty download leaves the store empty, so the
//! next call tries again.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::{info, warn};

use crate::error::Error;
use crate::fetch::Fetch;
use crate::word_list::WordList;

/// In-memory cache of a downloaded word list
#[derive(Debug)]
pub struct WordStore<F> {
    fetcher: F,
    words: OnceLock<Arc<WordList>>,
    loading: Mutex<()>,
}

impl<F: Fetch> WordStore<F> {
    /// Creates an empty store backed by the given fetcher
    pub const fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            words: OnceLock::new(),
            loading: Mutex::new(()),
        }
    }

    /// Loads the word list unless it is already present
    ///
    /// Only the first successful caller performs the fetch; everyone else
    /// either returns immediately or waits for that fetch to finish.
    ///
    /// # Errors
    ///
    /// * `Error::Fetch` - The download failed; the store stays empty
    pub fn ensure_loaded(&self) -> Result<Arc<WordList>, Error> {
        if let Some(words) = self.words.get() {
            return Ok(Arc::clone(words));
        }

        // the guard protects nothing but the fetch itself
        let _guard = self.loading.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(words) = self.words.get() {
            return Ok(Arc::clone(words));
        }

        let body = self.fetcher.fetch()?;
        let list = Arc::new(WordList::parse(&body));
        if list.is_empty() {
            warn!("fetched word list is empty");
            return Ok(list);
        }

        info!(count = list.len(), "word list loaded");
        Ok(Arc::clone(self.words.get_or_init(|| list)))
    }

    /// Returns a copy of every word in the store, loading it first if needed
    ///
    /// # Errors
    ///
    /// * `Error::Fetch` - The download failed
    pub fn words(&self) -> Result<Vec<String>, Error> {
        Ok(self.ensure_loaded()?.words().to_vec())
    }

    /// Returns true once a non-empty list has been cached
    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// Number of cached words, without triggering a load
    pub fn loaded_len(&self) -> usize {
        self.words.get().map_or(0, |words| words.len())
    }
}
