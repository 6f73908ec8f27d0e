//! Rank computation
//!
//! Similarities are computed in parallel, then sorted on a single thread with
//! an explicit tie-break so results are deterministic for identical inputs.

use super::Ranking;
use crate::core::{SimilarityError, Vector, Word};
use crate::vectors::VectorStore;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;
use thiserror::Error;

/// Errors from rank computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("No vector for secret word '{0}'")]
    SecretVectorMissing(String),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}

struct Scored<'a> {
    position: usize,
    word: &'a Word,
    similarity: f64,
    is_secret: bool,
}

/// Rank every vectorizable dictionary word by similarity to `secret`
///
/// Words without a vector are left out of the ranking. Ties are broken by
/// position in `dictionary`; repeated dictionary words keep their first
/// position. The secret always receives rank 1 when it appears in
/// `dictionary`.
///
/// # Errors
/// - `RankError::SecretVectorMissing` if the store has no vector for `secret`
/// - `RankError::Similarity` if stored vectors disagree on dimension
///
/// # Examples
/// ```
/// use semantle_rank::core::{Vector, Word};
/// use semantle_rank::ranking::compute_ranks;
/// use semantle_rank::vectors::VectorStore;
///
/// let mut store = VectorStore::new(2);
/// let words: Vec<Word> = ["north", "east", "northeast"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// store.insert(words[0].clone(), Vector::new(vec![0.0, 1.0])).unwrap();
/// store.insert(words[1].clone(), Vector::new(vec![1.0, 0.0])).unwrap();
/// store.insert(words[2].clone(), Vector::new(vec![1.0, 1.0])).unwrap();
///
/// let ranking = compute_ranks(&words[0], &words, &store).unwrap();
/// assert_eq!(ranking.rank_of(&words[0]), Some(1));
/// assert_eq!(ranking.rank_of(&words[2]), Some(2));
/// assert_eq!(ranking.rank_of(&words[1]), Some(3));
/// ```
pub fn compute_ranks(
    secret: &Word,
    dictionary: &[Word],
    store: &VectorStore,
) -> Result<Ranking, RankError> {
    let start = Instant::now();

    let secret_vector = store
        .get(secret)
        .ok_or_else(|| RankError::SecretVectorMissing(secret.text().to_string()))?;

    let mut seen = FxHashSet::default();
    let candidates: Vec<(usize, &Word, &Vector)> = dictionary
        .iter()
        .enumerate()
        .filter(|(_, word)| seen.insert(*word))
        .filter_map(|(position, word)| store.get(word).map(|vector| (position, word, vector)))
        .collect();

    let mut scored: Vec<Scored<'_>> = candidates
        .par_iter()
        .map(|&(position, word, vector)| {
            secret_vector.cosine(vector).map(|similarity| Scored {
                position,
                word,
                similarity,
                is_secret: word == secret,
            })
        })
        .collect::<Result<_, _>>()?;

    // Secret first regardless of rounding, then similarity, then dictionary order
    scored.sort_by(|a, b| {
        b.is_secret
            .cmp(&a.is_secret)
            .then_with(|| b.similarity.total_cmp(&a.similarity))
            .then_with(|| a.position.cmp(&b.position))
    });

    let ordered = scored.into_iter().map(|s| s.word.clone()).collect::<Vec<_>>();
    let ranking = Ranking::from_ordered(secret.clone(), ordered);

    log::debug!(
        "Ranked {} of {} dictionary words in {:.1?}",
        ranking.len(),
        dictionary.len(),
        start.elapsed()
    );

    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Store where each word's similarity to [1, 0] is its given cosine
    fn store_with_similarities(pairs: &[(&str, f32)]) -> (Vec<Word>, VectorStore) {
        let mut store = VectorStore::new(2);
        let mut words = Vec::new();
        for &(text, cos) in pairs {
            let sin = (1.0 - cos * cos).max(0.0).sqrt();
            store
                .insert(word(text), Vector::new(vec![cos, sin]))
                .unwrap();
            words.push(word(text));
        }
        (words, store)
    }

    #[test]
    fn ranks_by_descending_similarity() {
        let (words, store) = store_with_similarities(&[
            ("date", 0.1),
            ("apple", 1.0),
            ("cherry", 0.5),
            ("banana", 0.8),
        ]);

        let ranking = compute_ranks(&word("apple"), &words, &store).unwrap();

        assert_eq!(ranking.rank_of(&word("apple")), Some(1));
        assert_eq!(ranking.rank_of(&word("banana")), Some(2));
        assert_eq!(ranking.rank_of(&word("cherry")), Some(3));
        assert_eq!(ranking.rank_of(&word("date")), Some(4));
    }

    #[test]
    fn ties_follow_dictionary_order() {
        let (words, store) = store_with_similarities(&[
            ("apple", 1.0),
            ("kiwi", 0.5),
            ("fig", 0.5),
            ("lime", 0.5),
        ]);

        let ranking = compute_ranks(&word("apple"), &words, &store).unwrap();
        let order: Vec<&str> = ranking.entries().iter().map(|e| e.word.text()).collect();

        assert_eq!(order, ["apple", "kiwi", "fig", "lime"]);
    }

    #[test]
    fn secret_wins_ties_with_identical_vectors() {
        let (words, store) = store_with_similarities(&[("twin", 1.0), ("apple", 1.0)]);

        let ranking = compute_ranks(&word("apple"), &words, &store).unwrap();

        assert_eq!(ranking.rank_of(&word("apple")), Some(1));
        assert_eq!(ranking.rank_of(&word("twin")), Some(2));
    }

    #[test]
    fn words_without_vectors_are_excluded() {
        let (mut words, store) = store_with_similarities(&[("apple", 1.0), ("banana", 0.3)]);
        words.insert(1, word("ghost"));

        let ranking = compute_ranks(&word("apple"), &words, &store).unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking.rank_of(&word("ghost")), None);
        assert_eq!(ranking.rank_of(&word("banana")), Some(2));
    }

    #[test]
    fn duplicate_dictionary_words_ranked_once() {
        let (mut words, store) = store_with_similarities(&[("apple", 1.0), ("banana", 0.3)]);
        words.push(word("banana"));

        let ranking = compute_ranks(&word("apple"), &words, &store).unwrap();
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn missing_secret_vector_fails() {
        let (words, store) = store_with_similarities(&[("apple", 1.0)]);

        assert_eq!(
            compute_ranks(&word("ghost"), &words, &store).unwrap_err(),
            RankError::SecretVectorMissing("ghost".to_string())
        );
    }

    #[test]
    fn zero_secret_vector_keeps_dictionary_order() {
        let mut store = VectorStore::new(2);
        let words = vec![word("a"), word("b"), word("c")];
        store.insert(word("b"), Vector::new(vec![0.0, 0.0])).unwrap();
        store.insert(word("a"), Vector::new(vec![1.0, 0.0])).unwrap();
        store.insert(word("c"), Vector::new(vec![0.0, 1.0])).unwrap();

        let ranking = compute_ranks(&word("b"), &words, &store).unwrap();
        let order: Vec<&str> = ranking.entries().iter().map(|e| e.word.text()).collect();

        assert_eq!(order, ["b", "a", "c"]);
    }
}
