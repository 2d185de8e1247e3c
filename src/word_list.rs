//! Parsed, immutable word list

/// An ordered list of words, fixed once parsed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parses a newline-delimited body into a word list
    ///
    /// Carriage returns are stripped everywhere and the text is split on
    /// line feeds, one entry per line. Empty interior lines are kept as
    /// empty entries. The empty entry left behind by a terminating newline
    /// is dropped.
    pub fn parse(data: &str) -> Self {
        let cleaned = data.replace('\r', "");
        let body = cleaned.strip_suffix('\n').unwrap_or(&cleaned);
        if body.is_empty() {
            return Self::default();
        }
        Self {
            words: body.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Returns the words in their original order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Picks an entry uniformly at random
    pub fn random_choice(&self) -> Option<&str> {
        fastrand::choice(&self.words).map(String::as_str)
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}
