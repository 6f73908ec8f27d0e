use crate::ranking::RankError;
use thiserror::Error;

/// Errors returned by [`GameSession`](super::GameSession) operations
///
/// Input errors (`InvalidInput`, `UnknownWord`, `DuplicateGuess`) leave the
/// session untouched and are safe to show to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game not initialized")]
    NotInitialized,

    #[error("Invalid guess")]
    InvalidInput,

    #[error("Word not in dictionary: '{0}'")]
    UnknownWord(String),

    #[error("Word already guessed: '{0}'")]
    DuplicateGuess(String),

    #[error("No words with vectors available")]
    NoVectorizableWords,

    #[error("Ranks not calculated")]
    EmptyRanking,

    #[error("Failed to rank dictionary: {0}")]
    Rank(#[from] RankError),
}

impl GameError {
    /// Whether the player caused this error and can simply try again
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::UnknownWord(_) | Self::DuplicateGuess(_)
        )
    }
}
