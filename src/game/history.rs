//! Guess history bookkeeping

use crate::core::Word;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a guessed word
///
/// `Unranked` marks words that are in the dictionary but have no computed
/// rank (no vector). It orders after every `At(n)` and has no numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum Rank {
    At(usize),
    Unranked,
}

impl Rank {
    #[must_use]
    pub const fn value(self) -> Option<usize> {
        match self {
            Self::At(rank) => Some(rank),
            Self::Unranked => None,
        }
    }

    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::At(1))
    }
}

impl From<Option<usize>> for Rank {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Unranked, Self::At)
    }
}

impl From<Rank> for Option<usize> {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(rank) => write!(f, "{rank}"),
            Self::Unranked => write!(f, "∞"),
        }
    }
}

/// A submitted guess and its rank at submission time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: Word,
    pub rank: Rank,
}

/// Guesses of the current game, best rank first
///
/// Unique by word. Equal ranks (only possible for `Unranked`) keep submission
/// order.
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    records: Vec<GuessRecord>,
    words: FxHashSet<Word>,
}

impl GuessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a guess, keeping the history sorted
    ///
    /// Returns `false` (and changes nothing) if the word was already guessed.
    pub fn insert(&mut self, word: Word, rank: Rank) -> bool {
        if !self.words.insert(word.clone()) {
            return false;
        }

        let at = self.records.partition_point(|r| r.rank <= rank);
        self.records.insert(at, GuessRecord { word, rank });
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Best guess so far
    #[must_use]
    pub fn best(&self) -> Option<&GuessRecord> {
        self.records.first()
    }

    /// Best numeric rank so far, `None` if nothing ranked was guessed
    #[must_use]
    pub fn best_rank(&self) -> Option<usize> {
        self.best().and_then(|r| r.rank.value())
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.best().is_some_and(|r| r.rank.is_exact())
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.words.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn order(history: &GuessHistory) -> Vec<&str> {
        history.records().iter().map(|r| r.word.text()).collect()
    }

    #[test]
    fn rank_ordering() {
        assert!(Rank::At(1) < Rank::At(2));
        assert!(Rank::At(usize::MAX) < Rank::Unranked);
    }

    #[test]
    fn rank_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Rank::At(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Rank::Unranked).unwrap(), "null");
        assert_eq!(serde_json::from_str::<Rank>("null").unwrap(), Rank::Unranked);
    }

    #[test]
    fn insert_keeps_sorted() {
        let mut history = GuessHistory::new();
        history.insert(word("cherry"), Rank::At(3));
        history.insert(word("date"), Rank::At(4));
        history.insert(word("banana"), Rank::At(2));

        assert_eq!(order(&history), ["banana", "cherry", "date"]);
        assert_eq!(history.best_rank(), Some(2));
    }

    #[test]
    fn unranked_guesses_go_last_in_submission_order() {
        let mut history = GuessHistory::new();
        history.insert(word("ghost"), Rank::Unranked);
        history.insert(word("cherry"), Rank::At(3));
        history.insert(word("phantom"), Rank::Unranked);

        assert_eq!(order(&history), ["cherry", "ghost", "phantom"]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut history = GuessHistory::new();
        assert!(history.insert(word("cherry"), Rank::At(3)));
        assert!(!history.insert(word("cherry"), Rank::At(3)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn best_rank_ignores_unranked() {
        let mut history = GuessHistory::new();
        history.insert(word("ghost"), Rank::Unranked);

        assert!(history.best().is_some());
        assert_eq!(history.best_rank(), None);
        assert!(!history.is_won());
    }

    #[test]
    fn won_when_rank_one_present() {
        let mut history = GuessHistory::new();
        history.insert(word("banana"), Rank::At(2));
        history.insert(word("apple"), Rank::At(1));
        assert!(history.is_won());
    }

    #[test]
    fn clear_allows_reguessing() {
        let mut history = GuessHistory::new();
        history.insert(word("apple"), Rank::At(1));
        history.clear();

        assert!(history.is_empty());
        assert!(history.insert(word("apple"), Rank::At(1)));
    }
}
