//! Predicate sets for conditional word selection
//!
//! Each constraint is optional. Length bounds are active when greater than
//! zero and affixes are active when they contain a non-whitespace
//! character. A word matches when every active constraint holds.

use serde::{Deserialize, Serialize};

/// Combination of optional length, prefix and suffix constraints
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Predicates {
    /// Inclusive upper bound on the word length, in characters
    max_length: usize,
    /// Required word length, in characters
    exact_length: usize,
    /// Required prefix
    starts_with: String,
    /// Required suffix
    ends_with: String,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Predicates {
    /// Creates a predicate set with every constraint inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a predicate set from the loosely typed arguments of
    /// [`crate::get_random_word_conditional`]
    ///
    /// Non-positive lengths and blank affixes leave the corresponding
    /// constraint inactive.
    pub fn from_args(
        max_length: i64,
        starts_with: &str,
        ends_with: &str,
        exact_length: i64,
    ) -> Self {
        Self {
            max_length: usize::try_from(max_length).unwrap_or(0),
            exact_length: usize::try_from(exact_length).unwrap_or(0),
            starts_with: starts_with.to_owned(),
            ends_with: ends_with.to_owned(),
        }
    }

    /// Sets the inclusive maximum length; zero disables the constraint
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the exact length; zero disables the constraint
    #[must_use]
    pub fn exact_length(mut self, exact_length: usize) -> Self {
        self.exact_length = exact_length;
        self
    }

    /// Sets the required prefix; a blank prefix disables the constraint
    #[must_use]
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = prefix.into();
        self
    }

    /// Sets the required suffix; a blank suffix disables the constraint
    #[must_use]
    pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = suffix.into();
        self
    }

    /// Returns true if at least one constraint is active
    pub fn is_active(&self) -> bool {
        self.max_length > 0
            || self.exact_length > 0
            || !is_blank(&self.starts_with)
            || !is_blank(&self.ends_with)
    }

    /// Checks a word against every active constraint
    pub fn matches(&self, word: &str) -> bool {
        let needs_length = self.max_length > 0 || self.exact_length > 0;
        let length = if needs_length { word.chars().count() } else { 0 };

        (self.max_length == 0 || length <= self.max_length)
            && (self.exact_length == 0 || length == self.exact_length)
            && (is_blank(&self.starts_with) || word.starts_with(&self.starts_with))
            && (is_blank(&self.ends_with) || word.ends_with(&self.ends_with))
    }
}
