//! Semantic word-rank guessing game
//!
//! A secret word is picked from a dictionary and every other word is ranked by
//! cosine similarity of its embedding to the secret's. Guesses are scored by
//! rank (1 = the secret). Hint and tip advisors suggest better words without
//! giving the secret away.
//!
//! # Quick Start
//!
//! ```rust
//! use semantle_rank::game::{GameConfig, GameSession};
//! use semantle_rank::wordlists::Dictionary;
//!
//! let mut session = GameSession::seeded(GameConfig::with_dimension(16), 7);
//! let summary = session
//!     .new_game(Dictionary::from_words(["apple", "banana", "cherry", "date"]))
//!     .unwrap();
//! assert_eq!(summary.total_words, 4);
//!
//! let outcome = session.submit_guess("cherry").unwrap();
//! println!("cherry is rank {}", outcome.rank);
//! ```

// Core domain types
pub mod core;

// Word vectors
pub mod vectors;

// Similarity ranking
pub mod ranking;

// Game sessions
pub mod game;

// Hint and tip advisors
pub mod advisor;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
