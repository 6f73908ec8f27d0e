//! Game sessions
//!
//! A [`GameSession`] owns the secret, its ranking and the guess history of one
//! game, and exposes the new-game, guess, hint and tip operations.

mod config;
mod error;
mod history;
mod session;

pub use config::GameConfig;
pub use error::GameError;
pub use history::{GuessHistory, GuessRecord, Rank};
pub use session::{GameSession, GuessOutcome, NewGameSummary, SessionSnapshot};
