//! Formatting utilities for terminal output

use crate::game::Rank;

/// How close a guess is, bucketed by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    Found,
    Burning,
    Hot,
    Warm,
    Cold,
    Frozen,
}

impl Temperature {
    #[must_use]
    pub const fn from_rank(rank: Rank) -> Self {
        match rank {
            Rank::At(1) => Self::Found,
            Rank::At(r) if r <= 10 => Self::Burning,
            Rank::At(r) if r <= 100 => Self::Hot,
            Rank::At(r) if r <= 1000 => Self::Warm,
            Rank::At(_) => Self::Cold,
            Rank::Unranked => Self::Frozen,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Found => "🎯",
            Self::Burning => "🔥",
            Self::Hot => "🌶",
            Self::Warm => "☀",
            Self::Cold => "🌧",
            Self::Frozen => "🧊",
        }
    }
}

/// Fraction of the ranked words that a guess beats
///
/// Rank 1 is 1.0 and the last rank is 0.0. Unranked guesses are 0.0.
#[must_use]
pub fn closeness(rank: Rank, total: usize) -> f64 {
    match rank {
        Rank::At(r) if total > 1 => {
            let r = r.clamp(1, total);
            (total - r) as f64 / (total - 1) as f64
        }
        Rank::At(_) => 1.0,
        Rank::Unranked => 0.0,
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format rank closeness as a bar
#[must_use]
pub fn closeness_bar(rank: Rank, total: usize, width: usize) -> String {
    create_progress_bar(closeness(rank, total), 1.0, width)
}
