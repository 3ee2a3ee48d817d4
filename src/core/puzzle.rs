//! Puzzle and puzzle-set types
//!
//! A `Puzzle` is the finalized, immutable unit the game layer consumes; a
//! `PuzzleSet` is the generated artifact, serialized as a JSON map from
//! string ids to `{letters, words, maxScore}` records in ascending id order.

use super::PUZZLE_LETTER_COUNT;
use super::letters::LetterSet;
use chrono::{Datelike, NaiveDate};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Canonical dedup key for a hive: center letter, colon, outer letters sorted
///
/// Two puzzles built from the same seven letters and the same center collapse
/// to the same signature even when their outer-letter display order differs.
///
/// # Examples
/// ```
/// use letter_hive::core::puzzle_signature;
///
/// assert_eq!(
///     puzzle_signature(['b', 'e', 'a', 't', 's', 'n', 'r']),
///     "b:aenrst"
/// );
/// ```
#[must_use]
pub fn puzzle_signature(letters: [char; PUZZLE_LETTER_COUNT]) -> String {
    let mut others: Vec<char> = letters[1..].to_vec();
    others.sort_unstable();
    let mut signature = String::with_capacity(PUZZLE_LETTER_COUNT + 1);
    signature.push(letters[0]);
    signature.push(':');
    signature.extend(others);
    signature
}

/// A finalized letter-hive puzzle
///
/// `letters[0]` is the mandatory center letter; the remaining six are the
/// outer ring. `words` is the authoritative accepted-word list, sorted
/// ascending, and `max_score` is the sum of per-word scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Positional identifier assigned by the selector; the artifact map key
    #[serde(skip)]
    pub id: u32,
    pub letters: [char; PUZZLE_LETTER_COUNT],
    pub words: Vec<String>,
    #[serde(rename = "maxScore")]
    pub max_score: u32,
}

impl Puzzle {
    /// The mandatory center letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.letters[0]
    }

    /// The seven hive letters as a set
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.letters.iter().copied().collect()
    }

    /// Whether `word` is in this puzzle's accepted list
    ///
    /// Relies on `words` being sorted ascending, which the generator
    /// guarantees and the artifact contract requires.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// Number of accepted words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of accepted words using all seven letters
    #[must_use]
    pub fn pangram_count(&self) -> usize {
        self.words
            .iter()
            .filter(|w| LetterSet::from_text(w).len() == PUZZLE_LETTER_COUNT)
            .count()
    }

    /// The puzzle's dedup signature (see [`puzzle_signature`])
    #[must_use]
    pub fn signature(&self) -> String {
        puzzle_signature(self.letters)
    }
}

/// Error raised when a puzzle artifact cannot be read or written
#[derive(Debug)]
pub enum ArtifactError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to access puzzle artifact: {e}"),
            Self::Json(e) => write!(f, "Malformed puzzle artifact: {e}"),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for ArtifactError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// The generated artifact: puzzles addressable by id
///
/// Held sorted by id. Serialization writes a JSON object keyed by the
/// string form of each id in ascending numeric order, so repeated runs over
/// identical input produce byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

impl PuzzleSet {
    /// Wrap a list of puzzles already sorted by ascending id
    #[must_use]
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        debug_assert!(puzzles.windows(2).all(|w| w[0].id < w[1].id));
        Self { puzzles }
    }

    /// Number of puzzles in the set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Whether the set holds no puzzles (a valid, degenerate artifact)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Look up a puzzle by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Puzzle> {
        self.puzzles
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.puzzles[i])
    }

    /// Iterate puzzles in ascending id order
    pub fn iter(&self) -> std::slice::Iter<'_, Puzzle> {
        self.puzzles.iter()
    }

    /// Mean of `max_score` across the set, or 0.0 when empty
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.puzzles.is_empty() {
            return 0.0;
        }
        let total: u64 = self.puzzles.iter().map(|p| u64::from(p.max_score)).sum();
        total as f64 / self.puzzles.len() as f64
    }

    /// Id of the puzzle assigned to `date`, or `None` for an empty set
    ///
    /// Uses the calendar folding `year * 366 + month0 * 31 + day` modulo the
    /// set size, so every client picking "today's puzzle" lands on the same
    /// entry without coordination.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // set sizes fit comfortably in i64
    pub fn daily_id(&self, date: NaiveDate) -> Option<u32> {
        if self.puzzles.is_empty() {
            return None;
        }
        let fold = i64::from(date.year()) * 366
            + i64::from(date.month0()) * 31
            + i64::from(date.day());
        let index = fold.rem_euclid(self.puzzles.len() as i64) as usize;
        Some(self.puzzles[index].id)
    }

    /// Read an artifact from a JSON file
    ///
    /// # Errors
    /// Returns `ArtifactError` if the file cannot be read or does not parse
    /// as a puzzle map.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the artifact as pretty-printed JSON
    ///
    /// # Errors
    /// Returns `ArtifactError` if serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ArtifactError> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PuzzleSet {
    type Item = &'a Puzzle;
    type IntoIter = std::slice::Iter<'a, Puzzle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for PuzzleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.puzzles.len()))?;
        for puzzle in &self.puzzles {
            map.serialize_entry(&puzzle.id.to_string(), puzzle)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PuzzleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = PuzzleSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of integer puzzle ids to puzzles")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut puzzles: Vec<Puzzle> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((key, mut puzzle)) = access.next_entry::<String, Puzzle>()? {
                    let id: u32 = key.parse().map_err(|_| {
                        de::Error::custom(format!("puzzle id '{key}' is not an integer"))
                    })?;
                    puzzle.id = id;
                    puzzles.push(puzzle);
                }

                puzzles.sort_by_key(|p| p.id);
                if let Some(pair) = puzzles.windows(2).find(|w| w[0].id == w[1].id) {
                    return Err(de::Error::custom(format!(
                        "duplicate puzzle id {}",
                        pair[0].id
                    )));
                }

                Ok(PuzzleSet { puzzles })
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}
