//! # Wordfetch
//!
//! On-demand access to a large English word list downloaded from a fixed
//! remote location. The list is fetched once per process, on first use,
//! and kept in memory. Random words can be drawn from it, optionally
//! restricted by length, prefix and suffix.
//!
//! The free functions at the crate root share one process-wide store. Use
//! [`WordStore`] directly to supply a different [`Fetch`] implementation.
//!
//! All operations block while the list is downloaded. Async callers should
//! run them on their runtime's blocking pool.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

use std::sync::LazyLock;

pub mod constants;
pub mod error;
pub mod fetch;
pub mod predicate;
pub mod selector;
pub mod store;
pub mod word_list;

pub use error::{Error, FetchError};
pub use fetch::{Fetch, HttpFetcher};
pub use predicate::Predicates;
pub use store::WordStore;
pub use word_list::WordList;

static STORE: LazyLock<WordStore<HttpFetcher>> =
    LazyLock::new(|| WordStore::new(HttpFetcher::default()));

/// Downloads the shared word list unless it is already loaded
///
/// # Errors
///
/// * `Error::Fetch` - The download failed; a later call retries it
pub fn load_words() -> Result<(), Error> {
    STORE.ensure_loaded().map(|_| ())
}

/// Returns a copy of the full shared word list
///
/// # Errors
///
/// * `Error::Fetch` - The download failed
pub fn get_words() -> Result<Vec<String>, Error> {
    STORE.words()
}

/// Returns a uniformly random word from the shared list
///
/// # Errors
///
/// * `Error::Fetch` - The download failed
/// * `Error::EmptyStore` - The downloaded list has no entries
pub fn get_random_word() -> Result<String, Error> {
    STORE.random_word()
}

/// Returns a random word from the shared list satisfying every active
/// predicate
///
/// A length of zero or less and a blank affix leave that predicate
/// inactive.
///
/// # Errors
///
/// * `Error::Fetch` - The download failed
/// * `Error::EmptyStore` - The downloaded list has no entries
/// * `Error::NoMatch` - No word satisfies the predicates
pub fn get_random_word_conditional(
    max_length: i64,
    starts_with: &str,
    ends_with: &str,
    exact_length: i64,
) -> Result<String, Error> {
    STORE.random_word_conditional(max_length, starts_with, ends_with, exact_length)
}
