//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from files or use the embedded list.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a text file, one word per line
///
/// Blank lines are skipped, words are normalized and repeated words keep
/// their first position.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use semantle_rank::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.lines()))
}

/// Build a dictionary from a string slice (e.g. the embedded list)
///
/// # Examples
/// ```
/// use semantle_rank::wordlists::loader::dictionary_from_slice;
/// use semantle_rank::wordlists::DICTIONARY;
///
/// let dictionary = dictionary_from_slice(DICTIONARY);
/// assert_eq!(dictionary.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().copied())
}
