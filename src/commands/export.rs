//! Vector table export command
//!
//! Writes the session's vectors to disk so placeholder vectors (or a filtered
//! table) can be reused as a precomputed table.

use crate::core::Word;
use crate::vectors::table::save_table;
use crate::vectors::{VectorError, VectorGenerator, VectorStore, VectorTable};
use std::path::Path;

/// Fill `store` for `dictionary` if needed and write it to `path`
///
/// Returns the number of vectors written.
///
/// # Errors
///
/// Returns an error if the table cannot be written.
pub fn export_vectors<G: VectorGenerator + ?Sized>(
    store: &mut VectorStore,
    dictionary: &[Word],
    generator: &mut G,
    path: &Path,
) -> Result<usize, VectorError> {
    store.ensure_initialized(dictionary, generator);

    let table = VectorTable::from_store(store);
    save_table(path, &table)?;
    Ok(table.len())
}
