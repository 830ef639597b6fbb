//! Ladder solving command
//!
//! Solves one start/target pair and returns the ladder with timing and search statistics.

use crate::error::Result;
use crate::index::Language;
use crate::solver::{ChangelingProblem, Ladder, SearchStats, TieBreakType};
use std::time::{Duration, Instant};

/// Configuration for solving one pair
pub struct SolveConfig {
    pub start: String,
    pub target: String,
    pub tie_break: TieBreakType,
}

impl SolveConfig {
    #[must_use]
    pub fn new(start: String, target: String) -> Self {
        Self {
            start,
            target,
            tie_break: TieBreakType::default(),
        }
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreakType) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Result of solving one pair
pub struct SolveResult {
    pub start: String,
    pub target: String,
    pub ladder: Option<Ladder>,
    pub stats: SearchStats,
    pub duration: Duration,
    pub start_indexed: bool,
    pub target_indexed: bool,
}

impl SolveResult {
    /// True if a ladder was found
    #[must_use]
    pub const fn success(&self) -> bool {
        self.ladder.is_some()
    }
}

/// Solve a start/target pair against an index
///
/// # Errors
///
/// Returns `LadderError::LengthMismatch` if the words differ in length.
pub fn solve_pair(config: &SolveConfig, language: &Language) -> Result<SolveResult> {
    let start = config.start.trim();
    let target = config.target.trim();

    let timer = Instant::now();
    let (ladder, stats) = ChangelingProblem::new(language, start, target)?
        .with_tie_break(config.tie_break)
        .solve_with_stats();

    Ok(SolveResult {
        start: start.to_string(),
        target: target.to_string(),
        ladder,
        stats,
        duration: timer.elapsed(),
        start_indexed: language.contains(start),
        target_indexed: language.contains(target),
    })
}
