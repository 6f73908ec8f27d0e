//! Dictionary word representation
//!
//! A Word is a trimmed, lowercased, non-empty token. Every word that enters the
//! game (dictionary lines, guesses, vector-table keys) goes through [`normalize`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A normalized dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word is empty after trimming whitespace")]
    Empty,
}

/// Normalize raw text into the canonical word form
///
/// Trims surrounding whitespace and lowercases. Idempotent:
/// `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
/// ```
/// use semantle_rank::core::normalize;
///
/// assert_eq!(normalize("  Apple \n"), "apple");
/// assert_eq!(normalize(&normalize(" ÉTÉ ")), normalize(" ÉTÉ "));
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use semantle_rank::core::Word;
    ///
    /// let word = Word::new("  Cherry ").unwrap();
    /// assert_eq!(word.text(), "cherry");
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
