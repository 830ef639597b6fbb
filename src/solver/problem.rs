//! One start-to-target query
//!
//! A `ChangelingProblem` owns the frontier and visited set for a single query
//! and is consumed by solving it.

use super::ladder::{Ladder, SearchStats};
use super::tie_break::{HammingTieBreak, TieBreak};
use crate::error::{LadderError, Result};
use crate::index::Language;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A path waiting in the frontier
///
/// Field order is the priority order: length first, then the tie-break
/// estimate, then the words themselves so the heap has a total order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Pending<'a> {
    length: usize,
    estimate: usize,
    path: Vec<&'a str>,
}

/// Search state for finding the shortest ladder from `start` to `target`
pub struct ChangelingProblem<'a, T: TieBreak = HammingTieBreak> {
    language: &'a Language,
    start: &'a str,
    target: &'a str,
    tie_break: T,
    marked: FxHashSet<&'a str>,
    frontier: BinaryHeap<Reverse<Pending<'a>>>,
    stats: SearchStats,
}

impl<'a> ChangelingProblem<'a> {
    /// Create a query using the Hamming-distance tie-break
    ///
    /// # Errors
    ///
    /// Returns `LadderError::LengthMismatch` if `start` and `target` have
    /// different lengths.
    pub fn new(language: &'a Language, start: &'a str, target: &'a str) -> Result<Self> {
        if start.chars().count() != target.chars().count() {
            return Err(LadderError::length_mismatch(start, target));
        }

        Ok(Self {
            language,
            start,
            target,
            tie_break: HammingTieBreak,
            marked: FxHashSet::default(),
            frontier: BinaryHeap::new(),
            stats: SearchStats::default(),
        })
    }
}

impl<'a, T: TieBreak> ChangelingProblem<'a, T> {
    /// Replace the secondary ordering of equally long paths
    #[must_use]
    pub fn with_tie_break<U: TieBreak>(self, tie_break: U) -> ChangelingProblem<'a, U> {
        ChangelingProblem {
            language: self.language,
            start: self.start,
            target: self.target,
            tie_break,
            marked: self.marked,
            frontier: self.frontier,
            stats: self.stats,
        }
    }

    /// Find the shortest ladder, or `None` if the target is unreachable
    #[must_use]
    pub fn solve(self) -> Option<Ladder> {
        self.solve_with_stats().0
    }

    /// Find the shortest ladder and report how much work the search did
    #[must_use]
    pub fn solve_with_stats(mut self) -> (Option<Ladder>, SearchStats) {
        let ladder = self.search();
        debug!(
            "{} -> {}: {} (expanded {}, enqueued {}, examined {})",
            self.start,
            self.target,
            ladder
                .as_ref()
                .map_or_else(|| "no ladder".to_string(), |l| format!("{} steps", l.steps())),
            self.stats.expanded,
            self.stats.enqueued,
            self.stats.examined
        );
        (ladder, self.stats)
    }

    fn search(&mut self) -> Option<Ladder> {
        if self.start == self.target {
            return Some(Ladder::new(&[self.start]));
        }

        let language = self.language;
        self.enqueue(vec![self.start]);

        while let Some(Reverse(Pending { path, .. })) = self.frontier.pop() {
            self.stats.expanded += 1;
            let Some(&cursor) = path.last() else {
                continue;
            };
            trace!("expanding {} at depth {}", cursor, path.len());

            for neighbor in language.find_neighbors(cursor) {
                self.stats.examined += 1;

                if neighbor == self.target {
                    let mut ladder = path.clone();
                    ladder.push(neighbor);
                    return Some(Ladder::new(&ladder));
                }
                if self.marked.contains(neighbor) {
                    continue;
                }

                let mut next_path = path.clone();
                next_path.push(neighbor);
                self.enqueue(next_path);
            }
        }

        None
    }

    /// Admit a path unless its endpoint has already been admitted
    ///
    /// Paths leave the frontier in length order, so the first path to reach a
    /// word is never longer than any later one.
    fn enqueue(&mut self, path: Vec<&'a str>) {
        let Some(&end) = path.last() else {
            return;
        };
        if !self.marked.insert(end) {
            return;
        }

        self.stats.enqueued += 1;
        self.frontier.push(Reverse(Pending {
            length: path.len(),
            estimate: self.tie_break.estimate(end, self.target),
            path,
        }));
    }
}

/// Solve one instance of the changelings problem
///
/// In the given language, find the shortest sequence of valid words from
/// `start` to `target` by exchanging one letter at a time. Returns `Ok(None)`
/// if no ladder exists.
///
/// # Errors
///
/// Returns `LadderError::LengthMismatch` if `start` and `target` have
/// different lengths.
///
/// # Examples
/// ```
/// use changelings::index::Language;
/// use changelings::solver::solve;
///
/// let language = Language::new(["cat", "cot", "cog", "dog"]);
/// let ladder = solve(&language, "cat", "dog").unwrap().unwrap();
/// assert_eq!(ladder.words(), ["cat", "cot", "cog", "dog"]);
/// ```
pub fn solve(language: &Language, start: &str, target: &str) -> Result<Option<Ladder>> {
    Ok(ChangelingProblem::new(language, start, target)?.solve())
}
