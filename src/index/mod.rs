//! Neighbor index over a dictionary
//!
//! Groups words by (length, position, letter) so that the words one substitution
//! away from any query word can be found by intersecting a handful of groups.

mod language;
mod neighbors;

pub use language::Language;
pub use neighbors::Neighbors;
