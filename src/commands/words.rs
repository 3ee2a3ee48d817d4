//! Word listing command
//!
//! Lists a hive's accepted words with their individual scores: either a
//! shipped puzzle read from the artifact, or an arbitrary seven-letter
//! choice rebuilt against the dictionary to see what it would admit.

use crate::core::{LetterSet, PUZZLE_LETTER_COUNT, PuzzleSet, word_score};
use crate::dictionary::loader;
use crate::engine::build_candidate;
use std::path::PathBuf;

/// Which hive to list
pub enum WordsSelection {
    /// A shipped puzzle, read from the artifact
    Id(u32),
    /// Seven letters (center first) tried fresh against the dictionary
    Letters([char; PUZZLE_LETTER_COUNT]),
}

/// Configuration for listing a hive's words
pub struct WordsConfig {
    pub puzzles_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub selection: WordsSelection,
}

/// One accepted word with its value
#[derive(Debug)]
pub struct WordEntry {
    pub text: String,
    pub score: u32,
    pub is_pangram: bool,
}

/// Result of listing a hive's words
#[derive(Debug)]
pub struct WordsResult {
    pub label: String,
    pub letters: [char; PUZZLE_LETTER_COUNT],
    pub entries: Vec<WordEntry>,
    pub max_score: u32,
    pub pangram_count: usize,
}

/// Parse user input into hive letters, first letter as center
///
/// # Errors
///
/// Returns an error unless the input is exactly seven distinct ASCII
/// letters. Uppercase input is lowercased.
///
/// # Examples
/// ```
/// use letter_hive::commands::hive_from_text;
///
/// let letters = hive_from_text("BANTERS").unwrap();
/// assert_eq!(letters, ['b', 'a', 'n', 't', 'e', 'r', 's']);
///
/// assert!(hive_from_text("beast").is_err());
/// assert!(hive_from_text("bananas").is_err());
/// ```
pub fn hive_from_text(text: &str) -> Result<[char; PUZZLE_LETTER_COUNT], String> {
    let text = text.to_lowercase();
    let chars: Vec<char> = text.chars().collect();

    let letters: [char; PUZZLE_LETTER_COUNT] = chars.as_slice().try_into().map_err(|_| {
        format!(
            "A hive needs exactly {PUZZLE_LETTER_COUNT} letters, got {}",
            chars.len()
        )
    })?;

    if let Some(bad) = letters.iter().copied().find(|c| !c.is_ascii_lowercase()) {
        return Err(format!("'{bad}' is not a hive letter"));
    }

    if LetterSet::from_text(&text).len() != PUZZLE_LETTER_COUNT {
        return Err(format!("Hive letters must be distinct, got '{text}'"));
    }

    Ok(letters)
}

/// List the accepted words for the selected hive
///
/// A puzzle id reads the artifact's stored word list. A letter choice loads
/// the dictionary and works out the list the generator would accept for that
/// center, which answers why a hive did or did not ship.
///
/// # Errors
///
/// Returns an error if the needed input (artifact or dictionary) cannot be
/// loaded, or the puzzle id is absent.
pub fn run_words(config: &WordsConfig) -> Result<WordsResult, String> {
    match config.selection {
        WordsSelection::Id(id) => {
            let puzzles = PuzzleSet::load(&config.puzzles_path).map_err(|e| e.to_string())?;
            let puzzle = puzzles.get(id).ok_or_else(|| {
                format!("No puzzle with id {id} (the set holds {})", puzzles.len())
            })?;

            Ok(list_words(
                format!("Puzzle {id}"),
                puzzle.letters,
                puzzle.words.iter().map(String::as_str),
            ))
        }
        WordsSelection::Letters(letters) => {
            let dictionary =
                loader::load_from_file(&config.dictionary_path).map_err(|e| e.to_string())?;
            let basis: LetterSet = letters.iter().copied().collect();
            let candidate = build_candidate(basis, letters[0], &dictionary);

            Ok(list_words(
                format!("Hive {}", candidate.signature()),
                candidate.letters,
                candidate.words.iter().map(|w| w.text()),
            ))
        }
    }
}

fn list_words<'a>(
    label: String,
    letters: [char; PUZZLE_LETTER_COUNT],
    words: impl Iterator<Item = &'a str>,
) -> WordsResult {
    let entries: Vec<WordEntry> = words
        .map(|word| WordEntry {
            text: word.to_string(),
            score: word_score(word),
            is_pangram: LetterSet::from_text(word).len() == PUZZLE_LETTER_COUNT,
        })
        .collect();

    WordsResult {
        label,
        letters,
        max_score: entries.iter().map(|e| e.score).sum(),
        pangram_count: entries.iter().filter(|e| e.is_pangram).count(),
        entries,
    }
}
