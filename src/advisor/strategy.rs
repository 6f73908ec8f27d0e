//! Advisor strategies
//!
//! Defines the Advisor trait and the runtime-selectable wrapper.

use super::{AdviceContext, HintStrategy, TipStrategy};
use crate::game::GameConfig;
use crate::ranking::RankEntry;

/// A strategy for picking the next word to reveal
pub trait Advisor {
    /// Pick a ranking entry to suggest
    ///
    /// Returns `None` if no entry qualifies. Implementations must never
    /// return the secret or an already guessed word.
    fn suggest<'a>(&self, ctx: &AdviceContext<'a>) -> Option<&'a RankEntry>;
}

/// Enum wrapper for all advisor types
///
/// Allows runtime selection while keeping static dispatch.
pub enum AdvisorType {
    /// Coarse, fixed-anchor hints
    Hint(HintStrategy),
    /// Fine, proportional-improvement tips
    Tip(TipStrategy),
}

impl Advisor for AdvisorType {
    fn suggest<'a>(&self, ctx: &AdviceContext<'a>) -> Option<&'a RankEntry> {
        match self {
            Self::Hint(s) => s.suggest(ctx),
            Self::Tip(s) => s.suggest(ctx),
        }
    }
}

impl AdvisorType {
    /// Create an advisor from its name, configured from `config`
    ///
    /// Supported names: "hint", "tip". Defaults to tip if unrecognized.
    #[must_use]
    pub fn from_name(name: &str, config: &GameConfig) -> Self {
        match name {
            "hint" => Self::Hint(HintStrategy::new(config.hint_anchor_rank)),
            _ => Self::Tip(TipStrategy::new(
                config.tip_fallback_rank,
                config.tip_improvement_fraction,
            )),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hint(_) => "hint",
            Self::Tip(_) => "tip",
        }
    }
}
