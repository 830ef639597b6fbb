//! Search results

use crate::core::differs_by_one;
use crate::index::Language;
use std::fmt;

/// An ordered chain of words, each one letter away from the previous
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<String>,
}

impl Ladder {
    pub(super) fn new<S: AsRef<str>>(path: &[S]) -> Self {
        Self {
            words: path.iter().map(|w| w.as_ref().to_string()).collect(),
        }
    }

    /// The words of the ladder, start first and target last
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume the ladder, returning its words
    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of words, including start and target
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True only for a ladder with no words, which the search never produces
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-letter edits
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// First word
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Last word
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// Check that every word after the first is indexed in `language` and
    /// one letter away from its predecessor
    ///
    /// The start word itself need not be indexed.
    #[must_use]
    pub fn is_valid_in(&self, language: &Language) -> bool {
        self.words
            .windows(2)
            .all(|pair| differs_by_one(&pair[0], &pair[1]) && language.contains(&pair[1]))
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

/// Counters describing how much work one query did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths removed from the frontier and expanded
    pub expanded: usize,
    /// Paths admitted into the frontier, including the start
    pub enqueued: usize,
    /// Neighbors produced by the index across all expansions
    pub examined: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_is_one_less_than_len() {
        let ladder = Ladder::new(&["cat", "cot", "cog", "dog"]);
        assert_eq!(ladder.len(), 4);
        assert_eq!(ladder.steps(), 3);
        assert_eq!(ladder.start(), Some("cat"));
        assert_eq!(ladder.target(), Some("dog"));
    }

    #[test]
    fn single_word_ladder_has_zero_steps() {
        let ladder = Ladder::new(&["cat"]);
        assert_eq!(ladder.steps(), 0);
        assert!(!ladder.is_empty());
    }

    #[test]
    fn display_joins_with_arrows() {
        let ladder = Ladder::new(&["cat", "cot", "dot"]);
        assert_eq!(ladder.to_string(), "cat -> cot -> dot");
    }

    #[test]
    fn validity_checks_each_rung() {
        let language = Language::new(["cat", "cot", "cog", "dog"]);
        assert!(Ladder::new(&["cat", "cot", "cog", "dog"]).is_valid_in(&language));
        assert!(!Ladder::new(&["cat", "cog", "dog"]).is_valid_in(&language));
        assert!(!Ladder::new(&["cat", "cut"]).is_valid_in(&language));
    }
}
