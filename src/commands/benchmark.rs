//! Benchmark command
//!
//! Solves many random pairs against one shared index, in parallel.

use crate::error::{LadderError, Result};
use crate::index::Language;
use crate::solver::{ChangelingProblem, Ladder, TieBreakType};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random pairs to solve
    pub count: usize,
    /// Word length to sample; the most common length if `None`
    pub length: Option<usize>,
    /// RNG seed; random if `None`
    pub seed: Option<u64>,
    pub tie_break: TieBreakType,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            length: None,
            seed: None,
            tie_break: TieBreakType::default(),
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub length: usize,
    pub seed: u64,
    pub total_pairs: usize,
    pub solved: usize,
    pub unsolved: usize,
    pub average_steps: f64,
    pub longest: Option<Ladder>,
    /// Steps -> number of solved pairs
    pub distribution: HashMap<usize, usize>,
    pub nodes_expanded: usize,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Run a benchmark of random pairs drawn from the index
///
/// # Errors
///
/// Returns `LadderError::EmptyDictionary` if the index holds no words of the
/// requested length.
pub fn run_benchmark(language: &Language, config: &BenchmarkConfig) -> Result<BenchmarkResult> {
    let length = match config.length {
        Some(length) => length,
        None => most_common_length(language).ok_or(LadderError::EmptyDictionary(0))?,
    };

    let words: Vec<&str> = language.words_of_length(length).collect();
    if words.is_empty() {
        return Err(LadderError::EmptyDictionary(length));
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<(&str, &str)> = (0..config.count)
        .filter_map(|_| Some((*words.choose(&mut rng)?, *words.choose(&mut rng)?)))
        .collect();

    info!(
        "benchmarking {} pairs of length {length} from {} words (seed {seed})",
        pairs.len(),
        words.len()
    );

    let pb = if config.show_progress {
        ProgressBar::new(pairs.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes = pairs
        .par_iter()
        .map(|&(from, to)| {
            let outcome = ChangelingProblem::new(language, from, to)
                .map(|problem| problem.with_tie_break(config.tie_break).solve_with_stats());
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>>>()?;
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut nodes_expanded = 0;
    let mut total_steps = 0;
    let mut longest: Option<Ladder> = None;

    for (ladder, stats) in outcomes {
        nodes_expanded += stats.expanded;
        let Some(ladder) = ladder else {
            continue;
        };
        total_steps += ladder.steps();
        *distribution.entry(ladder.steps()).or_insert(0) += 1;
        if longest.as_ref().is_none_or(|l| ladder.steps() > l.steps()) {
            longest = Some(ladder);
        }
    }

    let total_pairs = pairs.len();
    let solved: usize = distribution.values().sum();

    Ok(BenchmarkResult {
        length,
        seed,
        total_pairs,
        solved,
        unsolved: total_pairs - solved,
        average_steps: if solved > 0 {
            total_steps as f64 / solved as f64
        } else {
            0.0
        },
        longest,
        distribution,
        nodes_expanded,
        duration,
        pairs_per_second: total_pairs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// The word length with the most indexed words; ties go to the shorter length
fn most_common_length(language: &Language) -> Option<usize> {
    language
        .word_lengths()
        .into_iter()
        .max_by_key(|&length| {
            (
                language.words_of_length(length).count(),
                std::cmp::Reverse(length),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    fn seeded(count: usize, seed: u64) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(count);
        config.seed = Some(seed);
        config
    }

    #[test]
    fn benchmark_runs() {
        let language = Language::new(WORDS);
        let result = run_benchmark(&language, &seeded(20, 7)).unwrap();

        assert_eq!(result.total_pairs, 20);
        assert_eq!(result.solved + result.unsolved, 20);
        assert_eq!(result.seed, 7);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let language = Language::new(WORDS);
        let result = run_benchmark(&language, &seeded(30, 11)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let language = Language::new(WORDS);
        let a = run_benchmark(&language, &seeded(15, 42)).unwrap();
        let b = run_benchmark(&language, &seeded(15, 42)).unwrap();

        assert_eq!(a.solved, b.solved);
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.longest, b.longest);
    }

    #[test]
    fn benchmark_defaults_to_most_common_length() {
        let language = Language::new(["at", "be", "cat", "cot", "cut", "dog"]);
        let result = run_benchmark(&language, &seeded(5, 1)).unwrap();
        assert_eq!(result.length, 3);
    }

    #[test]
    fn benchmark_longest_matches_distribution() {
        let language = Language::new(WORDS);
        let result = run_benchmark(&language, &seeded(25, 3)).unwrap();

        if let Some(longest) = &result.longest {
            let max_steps = result.distribution.keys().copied().max().unwrap();
            assert_eq!(longest.steps(), max_steps);
            assert!(result.average_steps <= max_steps as f64);
        } else {
            assert_eq!(result.solved, 0);
        }
    }

    #[test]
    fn benchmark_rejects_missing_length() {
        let language = Language::new(WORDS);
        let mut config = seeded(5, 1);
        config.length = Some(9);

        let result = run_benchmark(&language, &config);
        assert!(matches!(result, Err(LadderError::EmptyDictionary(9))));
    }

    #[test]
    fn benchmark_rejects_empty_dictionary() {
        let language = Language::new(Vec::<&str>::new());
        let result = run_benchmark(&language, &seeded(5, 1));
        assert!(matches!(result, Err(LadderError::EmptyDictionary(_))));
    }

    #[test]
    fn benchmark_zero_pairs() {
        let language = Language::new(WORDS);
        let result = run_benchmark(&language, &seeded(0, 1)).unwrap();

        assert_eq!(result.total_pairs, 0);
        assert_eq!(result.solved, 0);
        assert!(result.longest.is_none());
    }
}
