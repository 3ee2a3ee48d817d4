//! Dictionary loading utilities
//!
//! Loads word-list artifacts produced by the dictionary-ingestion tooling:
//! plain text, one lowercase word per line. Loading is strict: a word the
//! engine cannot accept fails the whole load, since a silently thinned
//! dictionary would corrupt every puzzle built from it.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read, contains an
/// invalid word, or yields no words at all.
///
/// # Examples
/// ```no_run
/// use letter_hive::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words_en.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse dictionary content: one word per line, blank lines skipped
///
/// # Errors
///
/// Returns `DictionaryError::InvalidWord` naming the first offending line,
/// or `DictionaryError::Empty` when no words remain.
///
/// # Examples
/// ```
/// use letter_hive::dictionary::loader::parse;
///
/// let dictionary = parse("beast\nbeats\n").unwrap();
/// assert_eq!(dictionary.len(), 2);
///
/// assert!(parse("be4st\n").is_err());
/// assert!(parse("").is_err());
/// ```
pub fn parse(content: &str) -> Result<Dictionary, DictionaryError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| DictionaryError::InvalidWord {
            line: index + 1,
            text: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }

    Ok(Dictionary::from_words(words))
}

/// Build a dictionary from string slices
///
/// Test and doctest convenience; entries are validated like file lines.
///
/// # Errors
///
/// Returns `DictionaryError` for invalid entries or an empty slice.
///
/// # Examples
/// ```
/// use letter_hive::dictionary::loader::from_slice;
///
/// let dictionary = from_slice(&["beast", "beats", "abet"]).unwrap();
/// assert_eq!(dictionary.len(), 3);
/// ```
pub fn from_slice(entries: &[&str]) -> Result<Dictionary, DictionaryError> {
    let mut words = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let word = Word::new(*entry).map_err(|source| DictionaryError::InvalidWord {
            line: index + 1,
            text: (*entry).to_string(),
            source,
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }

    Ok(Dictionary::from_words(words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_sorts_and_loads() {
        let dictionary = parse("tern\nbats\nnear\n").unwrap();
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["bats", "near", "tern"]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let dictionary = parse("beast\n\n  \nbeats\n").unwrap();
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn parse_rejects_invalid_word_with_line_number() {
        let result = parse("beast\nbe4st\nbeats\n");
        match result {
            Err(DictionaryError::InvalidWord { line, text, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(text, "be4st");
            }
            other => panic!("expected InvalidWord, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_short_word() {
        assert!(matches!(
            parse("beast\ncat\n"),
            Err(DictionaryError::InvalidWord { line: 2, .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_content() {
        assert!(matches!(parse(""), Err(DictionaryError::Empty)));
        assert!(matches!(parse("\n\n"), Err(DictionaryError::Empty)));
    }

    #[test]
    fn from_slice_builds_dictionary() {
        let dictionary = from_slice(&["beast", "beats"]).unwrap();
        assert!(dictionary.contains("beast"));
    }

    #[test]
    fn from_slice_rejects_empty() {
        assert!(matches!(from_slice(&[]), Err(DictionaryError::Empty)));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = load_from_file("/nonexistent/words.txt");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }

    #[test]
    fn load_from_file_round_trip() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "tern\nbats\nnear").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("tern"));
    }
}
