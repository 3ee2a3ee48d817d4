//! Core domain types for letter-hive puzzles
//!
//! This module contains the fundamental domain types: words, letter sets,
//! scoring, and the finalized puzzle artifact. All types here are pure and
//! have clear invariants.

mod letters;
mod puzzle;
mod score;
mod word;

pub use letters::LetterSet;
pub use puzzle::{ArtifactError, Puzzle, PuzzleSet, puzzle_signature};
pub use score::{PANGRAM_BONUS, total_score, word_score};
pub use word::{Word, WordError};

/// Minimum length of an accepted word
pub const MIN_WORD_LENGTH: usize = 4;

/// Number of distinct letters in every hive
pub const PUZZLE_LETTER_COUNT: usize = 7;
