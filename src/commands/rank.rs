//! Ranking inspection command
//!
//! Ranks the dictionary around a chosen secret and reports the closest words.

use crate::core::Word;
use crate::game::GameError;
use crate::ranking::{RankEntry, compute_ranks};
use crate::vectors::VectorStore;
use crate::wordlists::Dictionary;
use serde::Serialize;

/// Result of ranking a dictionary around a secret
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub secret: Word,
    pub total_words: usize,
    pub ranked_words: usize,
    pub top: Vec<RankReportEntry>,
}

/// One line of a rank report
#[derive(Debug, Clone, Serialize)]
pub struct RankReportEntry {
    #[serde(flatten)]
    pub entry: RankEntry,
    pub similarity: f64,
}

/// Rank `dictionary` around `secret` and keep the `top` closest words
///
/// # Errors
///
/// Returns an error if:
/// - The secret is blank (`InvalidInput`)
/// - The secret is not in the dictionary (`UnknownWord`)
/// - The secret has no vector (`Rank`)
pub fn rank_around(
    secret: &str,
    dictionary: &Dictionary,
    store: &VectorStore,
    top: usize,
) -> Result<RankReport, GameError> {
    let secret = Word::new(secret).map_err(|_| GameError::InvalidInput)?;
    if !dictionary.contains(&secret) {
        return Err(GameError::UnknownWord(secret.text().to_string()));
    }

    let ranking = compute_ranks(&secret, dictionary.words(), store)?;

    let top = ranking
        .top(top)
        .iter()
        .map(|entry| {
            let similarity = store
                .similarity(&secret, &entry.word)
                .map_err(crate::ranking::RankError::from)?;
            Ok(RankReportEntry {
                entry: entry.clone(),
                similarity,
            })
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    Ok(RankReport {
        total_words: dictionary.len(),
        ranked_words: ranking.len(),
        secret,
        top,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vector;

    fn setup() -> (Dictionary, VectorStore) {
        let dictionary = Dictionary::from_words(["north", "east", "northeast", "ghost"]);
        let mut store = VectorStore::new(2);
        for (text, v) in [
            ("north", [0.0, 1.0]),
            ("east", [1.0, 0.0]),
            ("northeast", [1.0, 1.0]),
        ] {
            store
                .insert(Word::new(text).unwrap(), Vector::new(v.to_vec()))
                .unwrap();
        }
        (dictionary, store)
    }

    #[test]
    fn rank_report_lists_closest_first() {
        let (dictionary, store) = setup();
        let report = rank_around("North", &dictionary, &store, 10).unwrap();

        assert_eq!(report.secret.text(), "north");
        assert_eq!(report.total_words, 4);
        assert_eq!(report.ranked_words, 3);

        let words: Vec<&str> = report.top.iter().map(|e| e.entry.word.text()).collect();
        assert_eq!(words, ["north", "northeast", "east"]);
        assert!((report.top[0].similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rank_report_respects_top() {
        let (dictionary, store) = setup();
        let report = rank_around("north", &dictionary, &store, 1).unwrap();
        assert_eq!(report.top.len(), 1);
    }

    #[test]
    fn unknown_secret_rejected() {
        let (dictionary, store) = setup();
        assert_eq!(
            rank_around("south", &dictionary, &store, 5).unwrap_err(),
            GameError::UnknownWord("south".to_string())
        );
    }

    #[test]
    fn secret_without_vector_rejected() {
        let (dictionary, store) = setup();
        assert!(matches!(
            rank_around("ghost", &dictionary, &store, 5),
            Err(GameError::Rank(_))
        ));
    }

    #[test]
    fn report_serializes_flat_entries() {
        let (dictionary, store) = setup();
        let report = rank_around("north", &dictionary, &store, 1).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["top"][0]["word"], "north");
        assert_eq!(json["top"][0]["rank"], 1);
    }
}
