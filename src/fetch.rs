//! Word list retrieval
//!
//! The store never talks to the network directly. It goes through the
//! [`Fetch`] trait so the download can be swapped out, which is how the
//! tests count fetches and simulate failures.

use std::io::Read;
use std::time::Duration;

use tracing::{debug, warn};

use crate::constants::fetch::{DEFAULT_TIMEOUT_SECS, WORD_LIST_URL};
use crate::error::FetchError;

/// Source of the raw, newline-delimited word list text
pub trait Fetch: Send + Sync {
    /// Retrieves the full word list body
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the resource could not be retrieved
    /// or read as text.
    fn fetch(&self) -> Result<String, FetchError>;
}

impl<F> Fetch for F
where
    F: Fn() -> Result<String, FetchError> + Send + Sync,
{
    fn fetch(&self) -> Result<String, FetchError> {
        self()
    }
}

/// Downloads the word list with a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    url: String,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher for the given URL with the default timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Replaces the overall request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the URL this fetcher downloads from
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpFetcher {
    /// Fetcher for the built-in English word list
    fn default() -> Self {
        Self::new(WORD_LIST_URL)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "fetching word list");
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();

        let response = agent.get(&self.url).call().map_err(|e| {
            warn!(url = %self.url, error = %e, "word list request failed");
            match e {
                ureq::Error::Status(code, _) => FetchError::Status(code),
                ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
            }
        })?;

        // into_string caps bodies at 10 MB
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
