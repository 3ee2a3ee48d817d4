//! Candidate construction
//!
//! One basis and one center-letter choice yield one candidate: the subset of
//! dictionary words playable in that hive, plus the total score the hive is
//! worth. Candidates are transient; the selector decides which become puzzles.

use crate::core::{LetterSet, PUZZLE_LETTER_COUNT, Puzzle, Word, puzzle_signature, word_score};
use crate::dictionary::Dictionary;

/// One concrete puzzle attempt, before the acceptance window is applied
///
/// Borrows its word list from the dictionary; only candidates that survive
/// selection are materialized into owned [`Puzzle`] values.
#[derive(Debug, Clone)]
pub struct PuzzleCandidate<'a> {
    /// Hive letters: center first, then the outer six in ascending order
    pub letters: [char; PUZZLE_LETTER_COUNT],
    /// Playable words in ascending order, borrowed from the dictionary
    pub words: Vec<&'a Word>,
    /// Sum of per-word scores, pangram bonuses included
    pub score: u32,
    /// Playable words that span all seven letters
    pub pangram_count: usize,
}

impl PuzzleCandidate<'_> {
    /// The candidate's dedup signature (see [`puzzle_signature`])
    #[must_use]
    pub fn signature(&self) -> String {
        puzzle_signature(self.letters)
    }

    /// Number of playable words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Materialize the candidate into a finalized puzzle with the given id
    #[must_use]
    pub fn into_puzzle(self, id: u32) -> Puzzle {
        Puzzle {
            id,
            letters: self.letters,
            words: self.words.iter().map(|w| w.text().to_string()).collect(),
            max_score: self.score,
        }
    }
}

/// Build the candidate for one basis and one center letter
///
/// A dictionary word is playable iff it contains the center and draws every
/// letter from the basis. Entries are already lowercase and at least four
/// letters, so no further shape checks apply here. Playable words keep the
/// dictionary's ascending order, making the candidate a pure function of
/// its inputs.
///
/// # Examples
/// ```
/// use letter_hive::core::LetterSet;
/// use letter_hive::dictionary::loader::from_slice;
/// use letter_hive::engine::build_candidate;
///
/// let dictionary = from_slice(&["banters", "beast", "tide"]).unwrap();
/// let basis = LetterSet::from_text("banters");
///
/// let candidate = build_candidate(basis, 'b', &dictionary);
/// assert_eq!(candidate.word_count(), 2);
/// assert_eq!(candidate.pangram_count, 1);
/// ```
#[must_use]
pub fn build_candidate<'a>(
    basis: LetterSet,
    center: char,
    dictionary: &'a Dictionary,
) -> PuzzleCandidate<'a> {
    debug_assert!(basis.contains(center));

    let mut letters = [center; PUZZLE_LETTER_COUNT];
    for (slot, letter) in letters[1..]
        .iter_mut()
        .zip(basis.iter().filter(|&c| c != center))
    {
        *slot = letter;
    }

    let mut words = Vec::new();
    let mut score = 0;
    let mut pangram_count = 0;

    for word in dictionary {
        if word.has_letter(center) && basis.is_superset_of(word.letters()) {
            score += word_score(word.text());
            if word.is_pangram() {
                pangram_count += 1;
            }
            words.push(word);
        }
    }

    PuzzleCandidate {
        letters,
        words,
        score,
        pangram_count,
    }
}
