//! Shortest-ladder search
//!
//! A best-first search over the implicit graph whose edges are single-letter
//! substitutions, ordered so that it behaves exactly like breadth-first search.

mod ladder;
mod problem;
pub mod tie_break;

pub use ladder::{Ladder, SearchStats};
pub use problem::{ChangelingProblem, solve};
pub use tie_break::{FarthestFirstTieBreak, HammingTieBreak, NoTieBreak, TieBreak, TieBreakType};
