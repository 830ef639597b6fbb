//! Lazy neighbor enumeration

use super::language::{Language, WordId};
use std::iter::FusedIterator;

/// Iterator over the neighbors of one word, produced by [`Language::find_neighbors`]
///
/// Each excluded position is intersected only when the previous one has been
/// drained. Every neighbor differs from the query in exactly one position, so
/// it is produced under exactly one exclusion and appears once.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    language: &'a Language,
    query: String,
    letters: Vec<char>,
    excluded: usize,
    pending: std::vec::IntoIter<WordId>,
}

impl<'a> Neighbors<'a> {
    pub(super) fn new(language: &'a Language, word: &str) -> Self {
        Self {
            language,
            query: word.to_string(),
            letters: word.chars().collect(),
            excluded: 0,
            pending: Vec::new().into_iter(),
        }
    }

    pub(super) fn empty(language: &'a Language) -> Self {
        Self::new(language, "")
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(id) = self.pending.next() {
                return Some(self.language.word(id));
            }
            if self.excluded >= self.letters.len() {
                return None;
            }
            self.pending = self
                .language
                .matches_except(&self.letters, self.excluded, &self.query)
                .into_iter();
            self.excluded += 1;
        }
    }
}

impl FusedIterator for Neighbors<'_> {}
