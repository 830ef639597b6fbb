//! Dictionaries for word ladders
//!
//! Provides an embedded dictionary compiled into the binary and loaders for
//! dictionary files. A dictionary is just one word per line; blank lines are
//! skipped and surrounding whitespace is stripped before indexing.

mod embedded;
pub mod loader;
mod source;

pub use embedded::WORDS;
pub use source::WordlistSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercase_ascii() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn classic_ladder_words_present() {
        for word in ["cat", "cot", "cog", "dog", "cold", "cord", "card", "ward", "warm"] {
            assert!(WORDS.contains(&word), "'{word}' missing from dictionary");
        }
    }
}
