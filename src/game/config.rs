//! Game configuration

use crate::vectors::DEFAULT_DIMENSION;

/// Tunable constants for a game session
///
/// Defaults match the classic game: 100-dimensional vectors, a first hint
/// around rank 1000 and tips that close a quarter of the remaining distance.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Vector dimension D shared by every vector in the store
    pub dimension: usize,
    /// Upper bound on the rank of the first hint when nothing was guessed
    pub hint_anchor_rank: usize,
    /// Best rank assumed by tips when no ranked guess exists
    pub tip_fallback_rank: usize,
    /// Fraction of the current best rank a tip tries to improve by
    pub tip_improvement_fraction: f64,
}

impl GameConfig {
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            hint_anchor_rank: 1000,
            tip_fallback_rank: 1000,
            tip_improvement_fraction: 0.25,
        }
    }
}
