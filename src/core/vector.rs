//! Word vectors and cosine similarity
//!
//! Vectors are stored as `f32` and compared with `f64` accumulators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for vector comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("Vector dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// A fixed-dimension embedding vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    components: Vec<f32>,
}

impl Vector {
    #[must_use]
    pub const fn new(components: Vec<f32>) -> Self {
        Self { components }
    }

    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.components
    }

    /// Cosine similarity against another vector
    ///
    /// # Errors
    /// Returns `SimilarityError::DimensionMismatch` if the lengths differ.
    pub fn cosine(&self, other: &Self) -> Result<f64, SimilarityError> {
        cosine_similarity(&self.components, &other.components)
    }
}

impl From<Vec<f32>> for Vector {
    fn from(components: Vec<f32>) -> Self {
        Self::new(components)
    }
}

/// Compute cosine similarity between two vectors
///
/// Returns a value in `[-1, 1]`. If either vector has zero magnitude, or the
/// inputs hold non-finite components, the similarity is defined as `0.0`.
///
/// # Errors
/// Returns `SimilarityError::DimensionMismatch` if `a.len() != b.len()`.
///
/// # Examples
/// ```
/// use semantle_rank::core::cosine_similarity;
///
/// let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
/// assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
///
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap(), 0.0);
/// assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
    // Non-finite components give NaN; keep the result inside [-1, 1]
    if similarity.is_nan() {
        return Ok(0.0);
    }
    Ok(similarity.clamp(-1.0, 1.0))
}
