//! Configuration constants for the word list
//!
//! This module contains the fixed locations and limits used when
//! downloading the word list and selecting words from it.

/// Word list download configuration constants
pub mod fetch {
    /// Plain-text, newline-delimited English word list
    pub const WORD_LIST_URL: &str =
        "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";
    /// Default timeout in seconds for the whole download
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Random selection configuration constants
pub mod selector {
    /// Number of random draws tried before falling back to a full scan
    pub const REJECTION_ATTEMPTS: usize = 64;
}
