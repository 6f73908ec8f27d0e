//! Full-dictionary ranking relative to a secret word
//!
//! Every dictionary word that has a vector gets a rank in `1..=K`, ordered by
//! descending cosine similarity to the secret. The secret itself is rank 1.

mod engine;

pub use engine::{RankError, compute_ranks};

use crate::core::Word;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A word and its 1-based rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub word: Word,
    pub rank: usize,
}

/// Total order of the vectorizable dictionary relative to one secret
///
/// Entries are stored in rank order, so `entries()[i].rank == i + 1`.
#[derive(Debug, Clone)]
pub struct Ranking {
    secret: Word,
    entries: Vec<RankEntry>,
    index: FxHashMap<Word, usize>,
}

impl Ranking {
    /// Build a ranking from words already in rank order
    pub(crate) fn from_ordered(secret: Word, ordered: Vec<Word>) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(ordered.len());

        let entries = ordered
            .into_iter()
            .enumerate()
            .map(|(i, word)| {
                index.insert(word.clone(), i + 1);
                RankEntry { word, rank: i + 1 }
            })
            .collect();

        Self {
            secret,
            entries,
            index,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Rank of a word, or `None` if it was not ranked
    #[inline]
    #[must_use]
    pub fn rank_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Entry holding the given rank
    #[inline]
    #[must_use]
    pub fn entry_at_rank(&self, rank: usize) -> Option<&RankEntry> {
        rank.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// All entries in ascending rank order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    /// The `n` best-ranked entries
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of ranked words (K)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
