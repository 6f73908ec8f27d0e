//! Command implementations

pub mod benchmark;
pub mod export;
pub mod rank;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use export::export_vectors;
pub use rank::{RankReport, rank_around};
pub use simple::run_simple;
