//! Precomputed vector tables on disk
//!
//! A table is a JSON object mapping each word to an array of floats:
//!
//! ```json
//! { "apple": [0.12, -0.4, ...], "banana": [0.08, 0.31, ...] }
//! ```

use super::error::VectorError;
use super::store::VectorStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Default location of the precomputed table, relative to the working directory
pub const DEFAULT_TABLE_PATH: &str = "data/word_vectors.json";

/// Raw key → vector table as stored on disk
///
/// Keys are kept as written; normalization happens in [`VectorStore::load`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorTable {
    entries: BTreeMap<String, Vec<f32>>,
}

impl VectorTable {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<f32>)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Snapshot every vector held by a store
    #[must_use]
    pub fn from_store(store: &VectorStore) -> Self {
        Self::from_entries(
            store
                .iter()
                .map(|(word, vector)| (word.text().to_string(), vector.as_slice().to_vec())),
        )
    }

    /// Dimension of the first entry, if any
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.entries.values().next().map(Vec::len)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, Vec<f32>)> {
        self.entries.into_iter()
    }
}

/// Parse a table from any reader
///
/// # Errors
/// Returns `VectorError::Json` if the content is not a word → float-array object.
pub fn read_table<R: Read>(reader: R) -> Result<VectorTable, VectorError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a table from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<VectorTable, VectorError> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

/// Load a table only if the file exists
///
/// A missing file is not an error (the caller falls back to generated
/// vectors); a file that exists but fails to parse is.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_table_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<VectorTable>, VectorError> {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("No vector table at {}", path.display());
        return Ok(None);
    }
    load_table(path).map(Some)
}

/// Write a table to disk atomically
///
/// The JSON is written to a temporary file in the destination directory and
/// renamed over `path`, so readers never observe a half-written table.
///
/// # Errors
/// Returns an error if the directory cannot be created or the write fails.
pub fn save_table<P: AsRef<Path>>(path: P, table: &VectorTable) -> Result<(), VectorError> {
    let path = path.as_ref();
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer(&mut writer, table)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| VectorError::Io(e.error))?;
    log::info!("Saved {} word vectors to {}", table.len(), path.display());
    Ok(())
}
