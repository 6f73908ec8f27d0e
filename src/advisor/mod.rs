//! Hint and tip selection
//!
//! Advisors look at the ranking and the guess history and pick one word to
//! reveal. They never modify the history; submitting the suggestion as a guess
//! is up to the caller.

mod hint;
pub mod strategy;
mod tip;

pub use hint::HintStrategy;
pub use strategy::{Advisor, AdvisorType};
pub use tip::TipStrategy;

use crate::game::GuessHistory;
use crate::ranking::{RankEntry, Ranking};

/// Result of asking an advisor for help
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    /// A word to try next
    Suggest(RankEntry),
    /// The secret has already been found, nothing to suggest
    AlreadyWon,
    /// Every candidate is already guessed (or is the secret)
    Exhausted,
}

impl Advice {
    /// `false` only when no word could be found
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Exhausted)
    }

    #[must_use]
    pub const fn entry(&self) -> Option<&RankEntry> {
        match self {
            Self::Suggest(entry) => Some(entry),
            Self::AlreadyWon | Self::Exhausted => None,
        }
    }
}

/// Everything an advisor may look at
pub struct AdviceContext<'a> {
    pub ranking: &'a Ranking,
    pub history: &'a GuessHistory,
    /// Caller-supplied best rank, overriding the history's best
    pub best_rank_override: Option<usize>,
}

impl<'a> AdviceContext<'a> {
    #[must_use]
    pub const fn new(ranking: &'a Ranking, history: &'a GuessHistory) -> Self {
        Self {
            ranking,
            history,
            best_rank_override: None,
        }
    }

    #[must_use]
    pub const fn with_best_rank(mut self, best_rank: Option<usize>) -> Self {
        self.best_rank_override = best_rank;
        self
    }

    /// Best rank to improve on: caller's value, else best ranked guess
    #[must_use]
    pub fn best_rank(&self) -> Option<usize> {
        self.best_rank_override.or_else(|| self.history.best_rank())
    }

    /// Whether an entry may be revealed: not the secret and not guessed
    #[must_use]
    pub fn is_revealable(&self, entry: &RankEntry) -> bool {
        entry.word != *self.ranking.secret() && !self.history.contains(&entry.word)
    }

    /// First revealable entry in rank order, regardless of direction
    #[must_use]
    pub fn first_revealable(&self) -> Option<&'a RankEntry> {
        self.ranking
            .entries()
            .iter()
            .find(|entry| self.is_revealable(entry))
    }
}

/// Ask an advisor for a suggestion
///
/// Returns [`Advice::AlreadyWon`] when the best rank is already 1, otherwise
/// whatever the advisor finds.
#[must_use]
pub fn advise<A: Advisor + ?Sized>(advisor: &A, ctx: &AdviceContext<'_>) -> Advice {
    if ctx.history.is_won() || ctx.best_rank_override == Some(1) {
        return Advice::AlreadyWon;
    }

    advisor
        .suggest(ctx)
        .map_or(Advice::Exhausted, |entry| Advice::Suggest(entry.clone()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::Word;
    use crate::game::{GuessHistory, Rank};
    use crate::ranking::Ranking;

    /// Ranking where `words[0]` is the secret and order is rank order
    pub fn ranking(words: &[&str]) -> Ranking {
        let ordered: Vec<Word> = words.iter().map(|w| Word::new(w).unwrap()).collect();
        Ranking::from_ordered(ordered[0].clone(), ordered)
    }

    /// Ranking of `n` synthetic words `w1..wn`, `w1` being the secret
    pub fn numbered_ranking(n: usize) -> Ranking {
        let ordered: Vec<Word> = (1..=n)
            .map(|i| Word::new(format!("w{i}")).unwrap())
            .collect();
        Ranking::from_ordered(ordered[0].clone(), ordered)
    }

    pub fn history_of(ranking: &Ranking, guesses: &[&str]) -> GuessHistory {
        let mut history = GuessHistory::new();
        for guess in guesses {
            let word = Word::new(guess).unwrap();
            let rank = Rank::from(ranking.rank_of(&word));
            history.insert(word, rank);
        }
        history
    }
}
