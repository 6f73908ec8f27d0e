//! Coarse hints
//!
//! With no ranked guess, reveal a word around a fixed anchor rank. Afterwards,
//! reveal the best-ranked word the player has not found yet.

use super::AdviceContext;
use super::strategy::Advisor;
use crate::ranking::RankEntry;

/// Fixed-anchor hint strategy
pub struct HintStrategy {
    /// First hint lands at `min(anchor_rank, K / 2)`
    pub anchor_rank: usize,
}

impl HintStrategy {
    #[must_use]
    pub const fn new(anchor_rank: usize) -> Self {
        Self { anchor_rank }
    }

    fn opening_hint<'a>(&self, ctx: &AdviceContext<'a>) -> Option<&'a RankEntry> {
        let ranking = ctx.ranking;
        let total = ranking.len();
        let target = self.anchor_rank.min(total / 2);

        ranking
            .entry_at_rank(target)
            .or_else(|| {
                (total > 1)
                    .then(|| ranking.entries().get(target.min(total - 1)))
                    .flatten()
            })
            .filter(|entry| ctx.is_revealable(entry))
    }
}

impl Default for HintStrategy {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Advisor for HintStrategy {
    fn suggest<'a>(&self, ctx: &AdviceContext<'a>) -> Option<&'a RankEntry> {
        let found = match ctx.best_rank() {
            None => self.opening_hint(ctx),
            Some(best) => ctx
                .ranking
                .entries()
                .iter()
                .take_while(|entry| entry.rank < best)
                .find(|entry| ctx.is_revealable(entry)),
        };

        if found.is_some() || ctx.ranking.len() <= 1 {
            return found;
        }

        // Everything better is already guessed: give the best word left
        ctx.first_revealable()
    }
}
