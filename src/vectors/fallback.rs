//! Placeholder vector generation
//!
//! Used only when no precomputed table exists. Generated vectors are uniform
//! noise in `[-1, 1)` per component: rankings built on them are structurally
//! valid but carry no semantic meaning.

use crate::core::{Vector, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of vectors for words missing from the store
pub trait VectorGenerator {
    /// Produce a vector of exactly `dimension` components for `word`
    fn generate(&mut self, word: &Word, dimension: usize) -> Vector;
}

/// Uniform random vectors
///
/// Seed it for reproducible games and tests.
pub struct RandomVectorGenerator {
    rng: StdRng,
}

impl RandomVectorGenerator {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from `seed` if given, otherwise from the thread RNG
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::default, Self::seeded)
    }
}

impl Default for RandomVectorGenerator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl VectorGenerator for RandomVectorGenerator {
    fn generate(&mut self, _word: &Word, dimension: usize) -> Vector {
        (0..dimension)
            .map(|_| self.rng.random_range(-1.0_f32..1.0))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_dimension() {
        let mut generator = RandomVectorGenerator::seeded(42);
        let word = Word::new("apple").unwrap();

        for dimension in [0, 1, 16, 100] {
            assert_eq!(generator.generate(&word, dimension).dimension(), dimension);
        }
    }

    #[test]
    fn components_in_range() {
        let mut generator = RandomVectorGenerator::seeded(9);
        let vector = generator.generate(&Word::new("pear").unwrap(), 256);

        assert!(vector.as_slice().iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn same_seed_same_vectors() {
        let word = Word::new("plum").unwrap();
        let a = RandomVectorGenerator::seeded(5).generate(&word, 10);
        let b = RandomVectorGenerator::seeded(5).generate(&word, 10);
        assert_eq!(a, b);
    }
}
