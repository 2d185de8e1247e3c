//! Random word selection
//!
//! Filtered selection starts with a bounded run of rejection sampling,
//! which is cheap when matches are common. If that run finds nothing, the
//! whole list is filtered once and a match is drawn uniformly from the
//! candidates, so every call terminates and rare matches are still found.
//! Both phases draw uniformly among matching entries.

use itertools::Itertools;
use tracing::trace;

use crate::constants::selector::REJECTION_ATTEMPTS;
use crate::error::Error;
use crate::fetch::Fetch;
use crate::predicate::Predicates;
use crate::store::WordStore;
use crate::word_list::WordList;

/// Draws a uniformly random word matching every active predicate
///
/// # Errors
///
/// * `Error::EmptyStore` - The list has no entries
/// * `Error::NoMatch` - No entry satisfies the predicates
pub fn choose(list: &WordList, predicates: &Predicates) -> Result<String, Error> {
    let first = list.random_choice().ok_or(Error::EmptyStore)?;
    if predicates.matches(first) {
        return Ok(first.to_owned());
    }

    for _ in 1..REJECTION_ATTEMPTS {
        if let Some(word) = list.random_choice().filter(|w| predicates.matches(w)) {
            return Ok(word.to_owned());
        }
    }

    trace!(
        attempts = REJECTION_ATTEMPTS,
        "rejection sampling exhausted, scanning word list"
    );
    let matching = candidates(list, predicates);
    fastrand::choice(&matching)
        .map(|word| (*word).to_owned())
        .ok_or(Error::NoMatch)
}

/// Returns every entry matching the predicates, in list order
pub fn candidates<'a>(list: &'a WordList, predicates: &Predicates) -> Vec<&'a str> {
    list.words()
        .iter()
        .map(String::as_str)
        .filter(|word| predicates.matches(word))
        .collect_vec()
}

impl<F: Fetch> WordStore<F> {
    /// Returns a uniformly random word, loading the list first if needed
    ///
    /// # Errors
    ///
    /// * `Error::Fetch` - The download failed
    /// * `Error::EmptyStore` - The loaded list has no entries
    pub fn random_word(&self) -> Result<String, Error> {
        let list = self.ensure_loaded()?;
        list.random_choice()
            .map(str::to_owned)
            .ok_or(Error::EmptyStore)
    }

    /// Returns a uniformly random word satisfying the given predicates
    ///
    /// # Errors
    ///
    /// * `Error::Fetch` - The download failed
    /// * `Error::EmptyStore` - The loaded list has no entries
    /// * `Error::NoMatch` - No word satisfies the predicates
    pub fn random_word_matching(&self, predicates: &Predicates) -> Result<String, Error> {
        let list = self.ensure_loaded()?;
        choose(&list, predicates)
    }

    /// Returns a random word using loosely typed predicate arguments
    ///
    /// Non-positive lengths and blank affixes are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`WordStore::random_word_matching`].
    pub fn random_word_conditional(
        &self,
        max_length: i64,
        starts_with: &str,
        ends_with: &str,
        exact_length: i64,
    ) -> Result<String, Error> {
        self.random_word_matching(&Predicates::from_args(
            max_length,
            starts_with,
            ends_with,
            exact_length,
        ))
    }

    /// Returns every stored word satisfying the predicates
    ///
    /// # Errors
    ///
    /// * `Error::Fetch` - The download failed
    pub fn candidates(&self, predicates: &Predicates) -> Result<Vec<String>, Error> {
        let list = self.ensure_loaded()?;
        Ok(candidates(&list, predicates)
            .into_iter()
            .map(str::to_owned)
            .collect_vec())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::store::tests::ScriptedFetcher;

    const WORDS: [&str; 4] = ["cat", "car", "dog", "apple"];

    fn store() -> WordStore<ScriptedFetcher> {
        WordStore::new(ScriptedFetcher::words(&WORDS))
    }

    #[test]
    fn test_random_word_is_member() {
        let store = store();
        let words = store.words().unwrap();
        for _ in 0..200 {
            let word = store.random_word().unwrap();
            assert!(words.contains(&word));
        }
    }

    #[test]
    fn test_random_word_covers_list() {
        let store = store();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(store.random_word().unwrap());
        }
        assert_eq!(seen.len(), WORDS.len());
    }

    #[test]
    fn test_random_word_empty_store() {
        let store = WordStore::new(ScriptedFetcher::new(vec![Ok("\n".to_string())]));
        assert_eq!(store.random_word(), Err(Error::EmptyStore));
    }

    #[test]
    fn test_random_word_fetch_failure() {
        let store = WordStore::new(ScriptedFetcher::new(vec![Err(FetchError::Status(404))]));
        assert_eq!(
            store.random_word(),
            Err(Error::Fetch(FetchError::Status(404)))
        );
    }

    #[test]
    fn test_conditional_prefix_and_max_length() {
        let store = store();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let word = store.random_word_conditional(3, "ca", "", 0).unwrap();
            assert!(word == "cat" || word == "car", "unexpected word {word}");
            seen.insert(word);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_conditional_single_match() {
        let store = store();
        for _ in 0..200 {
            assert_eq!(store.random_word_conditional(3, "ca", "t", 0).unwrap(), "cat");
        }
    }

    #[test]
    fn test_conditional_exact_length() {
        let store = store();
        for _ in 0..200 {
            assert_eq!(store.random_word_conditional(0, "", "", 5).unwrap(), "apple");
        }
    }

    #[test]
    fn test_conditional_max_length_bound() {
        let store = store();
        for _ in 0..200 {
            let word = store.random_word_conditional(3, "", "", 0).unwrap();
            assert!(word.chars().count() <= 3);
        }
    }

    #[test]
    fn test_conditional_suffix() {
        let store = store();
        for _ in 0..200 {
            let word = store.random_word_conditional(0, "", "r", 0).unwrap();
            assert_eq!(word, "car");
        }
    }

    #[test]
    fn test_conditional_inactive_predicates() {
        let store = store();
        let word = store.random_word_conditional(-1, " ", "", 0).unwrap();
        assert!(WORDS.contains(&word.as_str()));
    }

    #[test]
    fn test_conditional_no_match_terminates() {
        let store = store();
        assert_eq!(
            store.random_word_conditional(0, "zzz", "", 3),
            Err(Error::NoMatch)
        );
        assert_eq!(
            store.random_word_matching(&Predicates::new().exact_length(5).max_length(3)),
            Err(Error::NoMatch)
        );
    }

    #[test]
    fn test_rare_match_found_by_scan() {
        let mut words: Vec<String> = (0..5000).map(|i| format!("filler{i}")).collect();
        words.push("needle".to_string());
        let list = WordList::from(words);

        let predicates = Predicates::new().starts_with("needle");
        for _ in 0..20 {
            assert_eq!(choose(&list, &predicates).unwrap(), "needle");
        }
    }

    #[test]
    fn test_candidates_in_order() {
        let store = store();
        let predicates = Predicates::new().max_length(3);
        assert_eq!(store.candidates(&predicates).unwrap(), vec!["cat", "car", "dog"]);
        assert!(store.candidates(&Predicates::new().starts_with("x")).unwrap().is_empty());
    }
}
