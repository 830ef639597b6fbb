//! The dictionary index
//!
//! A `Language` owns every admitted word exactly once and maps each
//! `NeighborGroup` key to the ids of the words that fall in it.

use super::neighbors::Neighbors;
use crate::core::Alphabet;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Dense id of an indexed word, its position in `Language::words`
pub(super) type WordId = usize;

/// Key for a group of potentially neighboring words
///
/// All words in the group have the same length and the same letter at the same
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct NeighborGroup {
    pub length: usize,
    pub index: usize,
    pub letter: char,
}

/// An immutable index of all valid words
///
/// Built once from a word list and read-only afterwards, so one instance can
/// be shared across any number of concurrent searches.
#[derive(Debug, Clone)]
pub struct Language {
    alphabet: Alphabet,
    words: Vec<String>,
    ids: FxHashMap<String, WordId>,
    groups: FxHashMap<NeighborGroup, FxHashSet<WordId>>,
    by_length: FxHashMap<usize, Vec<WordId>>,
}

impl Language {
    /// Index a word list over the default lowercase ASCII alphabet
    ///
    /// # Examples
    /// ```
    /// use changelings::index::Language;
    ///
    /// let language = Language::new(["cat", "cot", "dog"]);
    /// let neighbors: Vec<&str> = language.find_neighbors("cat").collect();
    /// assert_eq!(neighbors, vec!["cot"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_alphabet(words, Alphabet::default())
    }

    /// Index a word list, admitting only words spelled entirely from `alphabet`
    ///
    /// A word with any illegal letter is dropped as a whole, not just from the
    /// groups of its offending positions. Repeated words are stored once.
    pub fn with_alphabet<I, S>(words: I, alphabet: Alphabet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut language = Self {
            alphabet,
            words: Vec::new(),
            ids: FxHashMap::default(),
            groups: FxHashMap::default(),
            by_length: FxHashMap::default(),
        };

        let mut dropped = 0_usize;
        for word in words {
            let word = word.as_ref();
            if language.alphabet.is_legal_word(word) {
                language.insert(word);
            } else {
                dropped += 1;
            }
        }

        debug!(
            "indexed {} words into {} groups ({dropped} dropped for illegal letters)",
            language.words.len(),
            language.groups.len()
        );

        language
    }

    fn insert(&mut self, word: &str) {
        if self.ids.contains_key(word) {
            return;
        }

        let id = self.words.len();
        self.words.push(word.to_string());
        self.ids.insert(word.to_string(), id);

        let length = word.chars().count();
        for (index, letter) in word.chars().enumerate() {
            self.groups
                .entry(NeighborGroup {
                    length,
                    index,
                    letter,
                })
                .or_default()
                .insert(id);
        }
        self.by_length.entry(length).or_default().push(id);
    }

    /// Find all indexed words that can be made by exchanging one letter
    ///
    /// The sequence is lazy and single-pass; call again for a second traversal.
    /// A word is never its own neighbor. Querying a word that contains a letter
    /// outside the alphabet yields nothing.
    #[must_use]
    pub fn find_neighbors(&self, word: &str) -> Neighbors<'_> {
        if self.alphabet.is_legal_word(word) {
            Neighbors::new(self, word)
        } else {
            Neighbors::empty(self)
        }
    }

    /// Ids of the indexed words that match `letters` everywhere except at
    /// `excluded`, minus the query word itself, in ascending id order
    pub(super) fn matches_except(
        &self,
        letters: &[char],
        excluded: usize,
        query: &str,
    ) -> Vec<WordId> {
        let length = letters.len();

        let mut groups = Vec::with_capacity(length.saturating_sub(1));
        for (index, &letter) in letters.iter().enumerate() {
            if index == excluded {
                continue;
            }
            match self.groups.get(&NeighborGroup {
                length,
                index,
                letter,
            }) {
                Some(group) => groups.push(group),
                None => return Vec::new(),
            }
        }

        // Intersect starting from the smallest group; with no other positions
        // to match, every word of this length qualifies.
        let mut matches: Vec<WordId> = match groups.iter().min_by_key(|group| group.len()) {
            Some(smallest) => smallest
                .iter()
                .copied()
                .filter(|id| groups.iter().all(|group| group.contains(id)))
                .collect(),
            None => self.by_length.get(&length).cloned().unwrap_or_default(),
        };

        matches.retain(|&id| self.words[id] != query);
        matches.sort_unstable();
        matches
    }

    /// The word stored under `id`
    pub(super) fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// The alphabet this index was built with
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Check whether a word was admitted into the index
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(word)
    }

    /// Number of distinct indexed words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no word was admitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Indexed words of a given length, in the order they were first seen
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> {
        self.by_length
            .get(&length)
            .into_iter()
            .flatten()
            .map(|&id| self.word(id))
    }

    /// Distinct word lengths present in the index, ascending
    #[must_use]
    pub fn word_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}
