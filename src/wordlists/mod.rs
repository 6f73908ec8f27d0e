//! Dictionaries for the guessing game
//!
//! Provides the embedded default dictionary and the ordered, de-duplicated
//! [`Dictionary`] type used by game sessions.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Ordered set of normalized words
///
/// Order matters: it breaks similarity ties when ranking.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from raw entries, skipping blanks and repeated words
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for entry in entries {
            if let Ok(word) = Word::new(entry) {
                dictionary.push(word);
            }
        }
        dictionary
    }

    fn push(&mut self, word: Word) {
        if self.lookup.insert(word.clone()) {
            self.words.push(word);
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_words_are_normalized() {
        for &entry in DICTIONARY {
            assert!(!entry.is_empty(), "Blank entry in embedded dictionary");
            assert_eq!(
                crate::core::normalize(entry),
                entry,
                "Entry '{entry}' is not normalized"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let dictionary = loader::dictionary_from_slice(DICTIONARY);
        assert_eq!(dictionary.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_starts_with_fruit() {
        assert_eq!(&DICTIONARY[..4], ["apple", "banana", "cherry", "date"]);
    }

    #[test]
    fn contains_uses_normalized_form() {
        let dictionary: Dictionary = ["Apple", "banana"].into_iter().collect();
        assert!(dictionary.contains(&Word::new(" APPLE ").unwrap()));
        assert!(!dictionary.contains(&Word::new("cherry").unwrap()));
    }
}
