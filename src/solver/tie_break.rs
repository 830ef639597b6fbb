//! Secondary ordering of the search frontier
//!
//! Defines the TieBreak trait and concrete implementations. Paths are always
//! ordered by length first; a tie-break only decides which of several
//! equally long paths is expanded first, so it can change which shortest
//! ladder is found but never its length.

use crate::core::hamming_distance;
use log::warn;

/// A secondary key for ordering equally long paths
pub trait TieBreak {
    /// Score the endpoint of a path; lower scores are expanded first
    fn estimate(&self, word: &str, target: &str) -> usize;
}

/// Enum wrapper for all tie-break types
///
/// Allows runtime selection of the tie-break while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreakType {
    /// Fewest differing positions first (default)
    Hamming(HammingTieBreak),
    /// No preference; falls through to lexicographic path order
    Lexicographic(NoTieBreak),
    /// Most differing positions first
    FarthestFirst(FarthestFirstTieBreak),
}

impl TieBreak for TieBreakType {
    fn estimate(&self, word: &str, target: &str) -> usize {
        match self {
            Self::Hamming(t) => t.estimate(word, target),
            Self::Lexicographic(t) => t.estimate(word, target),
            Self::FarthestFirst(t) => t.estimate(word, target),
        }
    }
}

impl TieBreakType {
    /// Create a tie-break from its name
    ///
    /// Supported names: "hamming", "none", "lexicographic", "farthest".
    /// Defaults to hamming, with a warning, if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!("unknown tie-break '{name}', using hamming");
            Self::default()
        })
    }

    /// Look up a tie-break by name, `None` if the name is unrecognized
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "hamming" => Some(Self::Hamming(HammingTieBreak)),
            "none" | "lexicographic" => Some(Self::Lexicographic(NoTieBreak)),
            "farthest" | "farthest-first" => Some(Self::FarthestFirst(FarthestFirstTieBreak)),
            _ => None,
        }
    }
}

impl Default for TieBreakType {
    fn default() -> Self {
        Self::Hamming(HammingTieBreak)
    }
}

/// Prefer paths whose endpoint is closest to the target
///
/// The Hamming distance is an admissible lower bound on the edits still needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HammingTieBreak;

impl TieBreak for HammingTieBreak {
    fn estimate(&self, word: &str, target: &str) -> usize {
        hamming_distance(word, target)
    }
}

/// Give every path the same score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTieBreak;

impl TieBreak for NoTieBreak {
    fn estimate(&self, _word: &str, _target: &str) -> usize {
        0
    }
}

/// Prefer paths whose endpoint is farthest from the target
///
/// Deliberately unhelpful; useful for checking that ladder length does not
/// depend on the tie-break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FarthestFirstTieBreak;

impl TieBreak for FarthestFirstTieBreak {
    fn estimate(&self, word: &str, target: &str) -> usize {
        word.chars()
            .count()
            .saturating_sub(hamming_distance(word, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamming_scores_by_distance() {
        assert_eq!(HammingTieBreak.estimate("cat", "dog"), 3);
        assert_eq!(HammingTieBreak.estimate("cog", "dog"), 1);
        assert_eq!(HammingTieBreak.estimate("dog", "dog"), 0);
    }

    #[test]
    fn no_tie_break_is_constant() {
        assert_eq!(NoTieBreak.estimate("cat", "dog"), 0);
        assert_eq!(NoTieBreak.estimate("cog", "dog"), 0);
    }

    #[test]
    fn farthest_first_inverts_hamming() {
        let far = FarthestFirstTieBreak.estimate("cat", "dog");
        let near = FarthestFirstTieBreak.estimate("cog", "dog");
        assert!(far < near);
        assert_eq!(FarthestFirstTieBreak.estimate("dog", "dog"), 3);
    }

    #[test]
    fn from_name_recognises_aliases() {
        assert_eq!(TieBreakType::from_name("none"), TieBreakType::Lexicographic(NoTieBreak));
        assert_eq!(
            TieBreakType::from_name("lexicographic"),
            TieBreakType::Lexicographic(NoTieBreak)
        );
        assert_eq!(
            TieBreakType::from_name("farthest"),
            TieBreakType::FarthestFirst(FarthestFirstTieBreak)
        );
        assert_eq!(
            TieBreakType::from_name("hamming"),
            TieBreakType::Hamming(HammingTieBreak)
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(TieBreakType::parse("hamm"), None);
        assert_eq!(TieBreakType::parse(""), None);
        assert_eq!(
            TieBreakType::parse("farthest-first"),
            Some(TieBreakType::FarthestFirst(FarthestFirstTieBreak))
        );
    }

    #[test]
    fn from_name_defaults_to_hamming() {
        assert_eq!(TieBreakType::from_name("bogus"), TieBreakType::default());
    }

    #[test]
    fn enum_dispatches_to_inner() {
        let t = TieBreakType::from_name("hamming");
        assert_eq!(t.estimate("cat", "cot"), 1);
    }
}
