//! Fine-grained tips
//!
//! A tip aims a fixed fraction closer to the secret than the current best
//! rank, so repeated tips converge without jumping straight to rank 2.

use super::AdviceContext;
use super::strategy::Advisor;
use crate::ranking::RankEntry;

/// Proportional-improvement tip strategy
pub struct TipStrategy {
    /// Best rank assumed when nothing ranked has been guessed
    pub fallback_rank: usize,
    /// Fraction of the best rank to improve by (at least one rank)
    pub improvement_fraction: f64,
}

impl TipStrategy {
    #[must_use]
    pub const fn new(fallback_rank: usize, improvement_fraction: f64) -> Self {
        Self {
            fallback_rank,
            improvement_fraction,
        }
    }

    /// Rank a tip aims for when the best rank is `best`
    ///
    /// Never below 2, so the secret itself is never the target.
    #[must_use]
    pub fn target_rank(&self, best: usize) -> usize {
        let improvement = ((best as f64 * self.improvement_fraction).floor() as usize).max(1);
        best.saturating_sub(improvement).max(2)
    }
}

impl Default for TipStrategy {
    fn default() -> Self {
        Self::new(1000, 0.25)
    }
}

impl Advisor for TipStrategy {
    fn suggest<'a>(&self, ctx: &AdviceContext<'a>) -> Option<&'a RankEntry> {
        let best = ctx.best_rank().unwrap_or(self.fallback_rank);
        let target = self.target_rank(best);
        let entries = ctx.ranking.entries();

        // min_by_key keeps the first of equally close candidates
        entries
            .iter()
            .filter(|entry| entry.rank < best && entry.rank >= 2 && ctx.is_revealable(entry))
            .min_by_key(|entry| entry.rank.abs_diff(target))
            .or_else(|| {
                entries
                    .iter()
                    .find(|entry| entry.rank < best && ctx.is_revealable(entry))
            })
            .or_else(|| ctx.first_revealable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::fixtures::{history_of, numbered_ranking, ranking};
    use crate::game::GuessHistory;

    fn tip<'a>(ctx: &AdviceContext<'a>) -> Option<&'a RankEntry> {
        TipStrategy::default().suggest(ctx)
    }

    #[test]
    fn target_rank_math() {
        let strategy = TipStrategy::default();
        assert_eq!(strategy.target_rank(1000), 750);
        assert_eq!(strategy.target_rank(100), 75);
        assert_eq!(strategy.target_rank(7), 6); // floor(1.75) = 1
        assert_eq!(strategy.target_rank(3), 2);
        assert_eq!(strategy.target_rank(2), 2);
    }

    #[test]
    fn caller_best_rank_three_picks_rank_two() {
        let r = ranking(&["apple", "banana", "cherry", "date"]);
        let history = GuessHistory::new();
        let ctx = AdviceContext::new(&r, &history).with_best_rank(Some(3));

        assert_eq!(tip(&ctx).unwrap().word.text(), "banana");
    }

    #[test]
    fn no_guesses_aims_at_fallback_target() {
        let r = numbered_ranking(2000);
        let history = GuessHistory::new();
        let ctx = AdviceContext::new(&r, &history);

        assert_eq!(tip(&ctx).unwrap().rank, 750);
    }

    #[test]
    fn uses_history_best_rank() {
        let r = numbered_ranking(200);
        let history = history_of(&r, &["w100", "w150"]);
        let ctx = AdviceContext::new(&r, &history);

        assert_eq!(tip(&ctx).unwrap().rank, 75);
    }

    #[test]
    fn closest_unguessed_candidate_wins() {
        let r = numbered_ranking(200);
        let history = history_of(&r, &["w100", "w75"]);
        let ctx = AdviceContext::new(&r, &history);

        // best = 75, target = 57
        assert_eq!(tip(&ctx).unwrap().rank, 57);

        let history = history_of(&r, &["w100", "w75", "w57"]);
        let ctx = AdviceContext::new(&r, &history);

        // best = 57, target = 43
        assert_eq!(tip(&ctx).unwrap().rank, 43);
    }

    #[test]
    fn tie_goes_to_first_in_rank_order() {
        let r = numbered_ranking(20);
        // best = 10, target = 8; rank 8 guessed so 7 and 9 are equally close
        let history = history_of(&r, &["w10", "w8"]);
        let ctx = AdviceContext::new(&r, &history).with_best_rank(Some(10));

        assert_eq!(tip(&ctx).unwrap().rank, 7);
    }

    #[test]
    fn small_dictionary_below_fallback() {
        let r = ranking(&["apple", "banana", "cherry", "date"]);
        let history = GuessHistory::new();
        let ctx = AdviceContext::new(&r, &history);

        // best = 1000 → target 750; closest available is date (4)
        assert_eq!(tip(&ctx).unwrap().word.text(), "date");
    }

    #[test]
    fn falls_back_to_any_unguessed_word() {
        let r = ranking(&["apple", "banana", "cherry", "date"]);
        let history = history_of(&r, &["banana"]);
        let ctx = AdviceContext::new(&r, &history);

        // Nothing non-secret beats rank 2, so take the best word left
        assert_eq!(tip(&ctx).unwrap().word.text(), "cherry");
    }

    #[test]
    fn never_returns_secret() {
        let r = ranking(&["apple", "banana"]);
        let history = history_of(&r, &["banana"]);
        let ctx = AdviceContext::new(&r, &history);

        assert!(tip(&ctx).is_none());
    }
}
