//! Core domain types for word ladders
//!
//! This module contains the fundamental domain primitives with no knowledge of indexing or search.
//! All types here are pure, testable, and have clear mathematical properties.

mod alphabet;
mod distance;

pub use alphabet::Alphabet;
pub use distance::{differs_by_one, hamming_distance};
