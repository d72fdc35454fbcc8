//! Command implementations

pub mod batch;
pub mod evaluate;
pub mod simple;

pub use batch::{BatchResult, load_pairs, parse_pairs, run_batch};
pub use evaluate::evaluate_names;
pub use simple::run_simple;
