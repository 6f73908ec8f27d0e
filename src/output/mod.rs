//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and logging.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{
    print_advice, print_benchmark_result, print_guess_outcome, print_history, print_rank_report,
};
