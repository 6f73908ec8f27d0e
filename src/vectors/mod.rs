//! Word vector storage
//!
//! The store is filled from a precomputed table when one exists, and from a
//! placeholder generator otherwise.

mod error;
pub mod fallback;
mod store;
pub mod table;

pub use error::VectorError;
pub use fallback::{RandomVectorGenerator, VectorGenerator};
pub use store::{VectorSource, VectorStore};
pub use table::VectorTable;

/// Default vector dimension when none is configured
pub const DEFAULT_DIMENSION: usize = 100;
