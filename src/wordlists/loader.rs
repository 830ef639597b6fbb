//! Dictionary loading utilities
//!
//! Turns files or in-memory text into the stream of candidate words an index
//! is built from. Nothing here validates letters; that is the index's job.

use std::fs;
use std::io;
use std::path::Path;

/// Split dictionary text into entries
///
/// Each line is trimmed and blank lines are skipped. Order and duplicates are
/// preserved.
///
/// # Examples
/// ```
/// use changelings::wordlists::loader::words_from_lines;
///
/// let words: Vec<&str> = words_from_lines("cat\n\n  dog \n").collect();
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
pub fn words_from_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Load dictionary entries from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use changelings::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content).map(str::to_string).collect())
}
