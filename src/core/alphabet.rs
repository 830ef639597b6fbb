//! Legal letter sets
//!
//! An `Alphabet` decides which dictionary entries are admitted into an index.

use rustc_hash::FxHashSet;
use std::fmt;

/// The set of letters a word may be built from
///
/// Defaults to lowercase ASCII `a`-`z`. Any `char` may be a letter, so
/// non-Latin alphabets work the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: FxHashSet<char>,
}

impl Alphabet {
    /// Create an alphabet from the letters of a string
    ///
    /// Duplicate letters are harmless.
    ///
    /// # Examples
    /// ```
    /// use changelings::core::Alphabet;
    ///
    /// let binary = Alphabet::new("01");
    /// assert!(binary.is_legal_word("0110"));
    /// assert!(!binary.is_legal_word("0120"));
    /// ```
    #[must_use]
    pub fn new(letters: &str) -> Self {
        Self {
            letters: letters.chars().collect(),
        }
    }

    /// Lowercase ASCII letters
    #[must_use]
    pub fn ascii_lowercase() -> Self {
        Self {
            letters: ('a'..='z').collect(),
        }
    }

    /// Check whether a single letter is legal
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Check whether every letter of `word` is legal
    ///
    /// The empty word is vacuously legal.
    #[must_use]
    pub fn is_legal_word(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    /// Number of distinct letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True if no letter is legal
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii_lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<char> = self.letters.iter().copied().collect();
        letters.sort_unstable();
        letters.into_iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascii_lowercase() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.contains('a'));
        assert!(alphabet.contains('z'));
        assert!(!alphabet.contains('A'));
        assert!(!alphabet.contains('-'));
    }

    #[test]
    fn legal_word_checks_every_letter() {
        let alphabet = Alphabet::default();
        assert!(alphabet.is_legal_word("ladder"));
        assert!(!alphabet.is_legal_word("don't"));
        assert!(!alphabet.is_legal_word("Cat"));
        assert!(alphabet.is_legal_word(""));
    }

    #[test]
    fn custom_alphabet_allows_non_ascii() {
        let alphabet = Alphabet::new("абв");
        assert!(alphabet.is_legal_word("ба"));
        assert!(!alphabet.is_legal_word("bа"));
    }

    #[test]
    fn duplicate_letters_collapse() {
        let alphabet = Alphabet::new("aabbc");
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn display_is_sorted() {
        let alphabet = Alphabet::new("cab");
        assert_eq!(alphabet.to_string(), "abc");
    }
}
