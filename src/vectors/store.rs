//! In-memory word → vector mapping

use super::error::VectorError;
use super::fallback::VectorGenerator;
use super::table::VectorTable;
use crate::core::{SimilarityError, Vector, Word};
use rustc_hash::FxHashMap;

/// Where the vectors in a store came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorSource {
    /// Nothing loaded yet
    Empty,
    /// Precomputed table (real embeddings)
    Table,
    /// Placeholder vectors from a [`VectorGenerator`]
    Fallback,
}

/// Mapping from normalized word to its vector
///
/// All vectors share [`VectorStore::dimension`]. The store is populated once,
/// either from a [`VectorTable`] or through [`VectorStore::ensure_initialized`],
/// and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct VectorStore {
    dimension: usize,
    vectors: FxHashMap<Word, Vector>,
    source: VectorSource,
}

impl VectorStore {
    /// Create an empty store for vectors of the given dimension
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: FxHashMap::default(),
            source: VectorSource::Empty,
        }
    }

    /// Populate a store from a precomputed table
    ///
    /// Keys are normalized on the way in; when two keys normalize to the same
    /// word the later one (in key order) wins.
    ///
    /// # Errors
    /// - `VectorError::EmptyKey` if a key is blank
    /// - `VectorError::DimensionMismatch` if a vector is not `dimension` long
    pub fn load(table: VectorTable, dimension: usize) -> Result<Self, VectorError> {
        let mut store = Self::new(dimension);

        for (key, components) in table.into_entries() {
            let word = Word::new(&key).map_err(|_| VectorError::EmptyKey)?;
            store.insert(word, Vector::new(components))?;
        }

        if !store.is_empty() {
            store.source = VectorSource::Table;
        }
        log::info!(
            "Loaded {} word vectors (dimension {}) from table",
            store.len(),
            store.dimension
        );

        Ok(store)
    }

    /// Fill the store with placeholder vectors if it is still empty
    ///
    /// No-op once the store holds any vector, so repeated calls never
    /// re-populate. Otherwise one vector per dictionary word is drawn from
    /// `generator`. Generated vectors carry no semantic meaning; they only keep
    /// the game playable without a real embedding table.
    ///
    /// Returns the number of vectors generated.
    pub fn ensure_initialized<G: VectorGenerator + ?Sized>(
        &mut self,
        dictionary: &[Word],
        generator: &mut G,
    ) -> usize {
        if !self.is_empty() {
            return 0;
        }

        log::warn!(
            "No vector table loaded, generating {} placeholder vectors (rankings are not meaningful)",
            dictionary.len()
        );

        for word in dictionary {
            if self.vectors.contains_key(word) {
                continue;
            }
            let vector = generator.generate(word, self.dimension);
            debug_assert_eq!(vector.dimension(), self.dimension);
            self.vectors.insert(word.clone(), vector);
        }

        if !self.is_empty() {
            self.source = VectorSource::Fallback;
        }
        self.len()
    }

    /// Insert or replace a single vector
    ///
    /// # Errors
    /// - `VectorError::DimensionMismatch` if the vector length differs from the
    ///   store's dimension
    /// - `VectorError::NonFinite` if a component is NaN or infinite
    pub fn insert(&mut self, word: Word, vector: Vector) -> Result<(), VectorError> {
        if vector.dimension() != self.dimension {
            return Err(VectorError::DimensionMismatch {
                word: word.text().to_string(),
                expected: self.dimension,
                found: vector.dimension(),
            });
        }
        if !vector.as_slice().iter().all(|x| x.is_finite()) {
            return Err(VectorError::NonFinite {
                word: word.text().to_string(),
            });
        }

        self.vectors.insert(word, vector);
        Ok(())
    }

    /// Look up a word's vector
    #[inline]
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&Vector> {
        self.vectors.get(word)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.vectors.contains_key(word)
    }

    /// Cosine similarity between two stored words
    ///
    /// Returns `0.0` when either word has no vector.
    ///
    /// # Errors
    /// Propagates `SimilarityError::DimensionMismatch`.
    pub fn similarity(&self, a: &Word, b: &Word) -> Result<f64, SimilarityError> {
        match (self.get(a), self.get(b)) {
            (Some(va), Some(vb)) => va.cosine(vb),
            _ => Ok(0.0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> VectorSource {
        self.source
    }

    /// Iterate over all stored (word, vector) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Word, &Vector)> {
        self.vectors.iter()
    }
}
