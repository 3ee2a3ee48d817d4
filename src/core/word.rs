//! Dictionary word representation
//!
//! A Word stores a lowercase entry of at least four letters along with its
//! distinct-letter set, which drives pangram and alphabet checks.

use super::letters::LetterSet;
use super::{MIN_WORD_LENGTH, PUZZLE_LETTER_COUNT};
use std::fmt;

/// A lowercase dictionary word of at least four ASCII letters
///
/// Stores the text and a cached set of its distinct letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must be at least {MIN_WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is less than 4
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use letter_hive::core::Word;
    ///
    /// let word = Word::new("beast").unwrap();
    /// assert_eq!(word.text(), "beast");
    ///
    /// assert!(Word::new("cat").is_err());
    /// assert!(Word::new("be4st").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.chars().count() < MIN_WORD_LENGTH {
            return Err(WordError::TooShort(text.chars().count()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = LetterSet::from_text(&text);

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the word in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Words are at least four letters; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    /// Whether the word uses exactly seven distinct letters
    ///
    /// Such a word spans a full hive on its own: it seeds a letter basis
    /// during enumeration and earns the pangram bonus when scored.
    #[inline]
    #[must_use]
    pub const fn is_pangram(&self) -> bool {
        self.letters.len() == PUZZLE_LETTER_COUNT
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
