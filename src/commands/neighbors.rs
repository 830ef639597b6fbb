//! Neighbor listing command
//!
//! Lists the words one substitution away from a given word.

use crate::index::Language;

/// Result of listing the neighbors of a word
pub struct NeighborReport {
    pub word: String,
    pub indexed: bool,
    pub legal: bool,
    pub neighbors: Vec<String>,
}

/// Collect the neighbors of `word`, sorted alphabetically
#[must_use]
pub fn list_neighbors(word: &str, language: &Language) -> NeighborReport {
    let word = word.trim();
    let mut neighbors: Vec<String> = language
        .find_neighbors(word)
        .map(str::to_string)
        .collect();
    neighbors.sort_unstable();

    NeighborReport {
        word: word.to_string(),
        indexed: language.contains(word),
        legal: language.alphabet().is_legal_word(word),
        neighbors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sorted_neighbors() {
        let language = Language::new(["cot", "cat", "bat", "dog"]);
        let report = list_neighbors("cat", &language);

        assert!(report.indexed);
        assert!(report.legal);
        assert_eq!(report.neighbors, vec!["bat", "cot"]);
    }

    #[test]
    fn illegal_word_has_no_neighbors() {
        let language = Language::new(["cat", "cot"]);
        let report = list_neighbors("cAt", &language);

        assert!(!report.legal);
        assert!(!report.indexed);
        assert!(report.neighbors.is_empty());
    }

    #[test]
    fn unindexed_word_can_have_neighbors() {
        let language = Language::new(["cat", "cot"]);
        let report = list_neighbors("cut", &language);

        assert!(!report.indexed);
        assert_eq!(report.neighbors, vec!["cat", "cot"]);
    }
}
