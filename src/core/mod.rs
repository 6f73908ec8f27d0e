//! Core domain types
//!
//! Words, vectors and the similarity primitive. Everything here is pure and
//! has no knowledge of games or sessions.

mod vector;
mod word;

pub use vector::{SimilarityError, Vector, cosine_similarity};
pub use word::{Word, WordError, normalize};
