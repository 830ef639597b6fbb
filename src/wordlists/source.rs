//! Choosing where a dictionary comes from

use super::WORDS;
use super::loader::load_from_file;
use crate::core::Alphabet;
use crate::error::Result;
use crate::index::Language;
use log::info;
use std::path::PathBuf;

/// Where to read dictionary entries from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// The dictionary compiled into the binary
    Embedded,
    /// One word per line in a text file
    File(PathBuf),
}

impl WordlistSource {
    /// Interpret a command-line value
    ///
    /// "embedded" or "default" select the built-in list; anything else is a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Read the entries and build an index over `alphabet`
    ///
    /// # Errors
    ///
    /// Returns `LadderError::Io` if a dictionary file cannot be read.
    pub fn load(&self, alphabet: Alphabet) -> Result<Language> {
        let language = match self {
            Self::Embedded => Language::with_alphabet(WORDS, alphabet),
            Self::File(path) => {
                let words = load_from_file(path)?;
                info!("read {} entries from {}", words.len(), path.display());
                Language::with_alphabet(words, alphabet)
            }
        };
        info!(
            "indexed {} words of lengths {:?}",
            language.len(),
            language.word_lengths()
        );
        Ok(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LadderError;
    use std::io::Write;

    #[test]
    fn from_arg_recognises_embedded() {
        assert_eq!(WordlistSource::from_arg("embedded"), WordlistSource::Embedded);
        assert_eq!(WordlistSource::from_arg("default"), WordlistSource::Embedded);
        assert_eq!(
            WordlistSource::from_arg("words.txt"),
            WordlistSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn embedded_source_indexes_every_word() {
        let language = WordlistSource::Embedded.load(Alphabet::default()).unwrap();
        assert_eq!(language.len(), WORDS.len());
        assert_eq!(language.word_lengths(), vec![3, 4]);
    }

    #[test]
    fn file_source_applies_alphabet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\nCAT\ncot\n\nc-t").unwrap();

        let source = WordlistSource::File(file.path().to_path_buf());
        let language = source.load(Alphabet::default()).unwrap();
        assert_eq!(language.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = WordlistSource::from_arg("/no/such/dictionary.txt");
        let err = source.load(Alphabet::default()).unwrap_err();
        assert!(matches!(err, LadderError::Io(_)));
    }
}
