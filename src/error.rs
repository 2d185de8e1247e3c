//! Errors raised while loading and sampling the word list

use serde::Serialize;
use thiserror::Error;

/// Failures while downloading the word list
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The host could not be reached or the connection broke
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("unexpected status code {0}")]
    Status(u16),
    /// The response body could not be read as text
    #[error("unreadable response body: {0}")]
    Body(String),
}

/// Errors surfaced by the store and selector operations
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The word list could not be fetched; the store is left empty
    #[error("failed to fetch word list: {0}")]
    Fetch(#[from] FetchError),
    /// The word list was fetched but contained no words
    #[error("word list is empty")]
    EmptyStore,
    /// No word satisfies the requested predicates
    #[error("no word matches the requested predicates")]
    NoMatch,
}
