//! Dictionary of accepted words
//!
//! The dictionary is the source of truth for both basis enumeration and
//! per-puzzle word filtering. It is held in canonical ascending order so that
//! every downstream stage inherits a deterministic word order.

pub mod loader;

use crate::core::{Word, WordError};
use std::fmt;
use std::io;

/// Error type for dictionary ingestion failures
///
/// Any of these is a fatal precondition failure: the generator refuses to
/// run rather than produce a silently empty or corrupt puzzle set.
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read dictionary: {e}"),
            Self::InvalidWord { line, text, source } => {
                write!(f, "Invalid dictionary word '{text}' on line {line}: {source}")
            }
            Self::Empty => write!(f, "Dictionary contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A deduplicated word list in canonical ascending order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// Sorts and deduplicates. An empty input yields an empty dictionary,
    /// which the engine treats as "no puzzles possible", not as an error;
    /// the file loader is the layer that rejects empty input.
    #[must_use]
    pub fn from_words(mut words: Vec<Word>) -> Self {
        words.sort_by(|a, b| a.text().cmp(b.text()));
        words.dedup_by(|a, b| a.text() == b.text());
        Self { words }
    }

    /// Iterate the words in ascending order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test against the full word list
    ///
    /// # Examples
    /// ```
    /// use letter_hive::dictionary::loader::from_slice;
    ///
    /// let dictionary = from_slice(&["beast", "beats"]).unwrap();
    /// assert!(dictionary.contains("beast"));
    /// assert!(!dictionary.contains("banter"));
    /// ```
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words
            .binary_search_by(|w| w.text().cmp(text))
            .is_ok()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
