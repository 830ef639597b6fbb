//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use neighbors::{NeighborReport, list_neighbors};
pub use simple::{run_session, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_pair};
