//! Live-play word validation
//!
//! The game layer checks every submission with the same rules the generator
//! used to build the puzzle, so a shipped puzzle never rejects its own
//! words. Rejection reasons are ordered; the first failing check wins, and
//! its message is what the player sees.

use crate::core::{LetterSet, MIN_WORD_LENGTH, PUZZLE_LETTER_COUNT, Puzzle, word_score};
use crate::dictionary::Dictionary;
use std::fmt;

/// Why a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Fewer than four letters
    TooShort,
    /// Does not contain the center letter
    MissingCenter,
    /// Contains a character outside the seven hive letters
    BadLetter,
    /// Not a dictionary word at all
    NotAWord,
    /// A real word, but not accepted for this particular puzzle
    NotInPuzzle,
    /// Already submitted earlier in the session
    AlreadyFound,
}

impl RejectReason {
    /// The player-facing message for this rejection
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "too short",
            Self::MissingCenter => "missing center",
            Self::BadLetter => "bad letter",
            Self::NotAWord => "not a valid word",
            Self::NotInPuzzle => "not in this puzzle's word list",
            Self::AlreadyFound => "already found",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The word counts; here is what it is worth
    Accepted { score: u32, is_pangram: bool },
    /// The word does not count, with the highest-priority reason
    Rejected(RejectReason),
}

impl Verdict {
    /// Whether the submission was accepted
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Validate a player submission against a puzzle
///
/// Input is lowercased first, then checked in priority order: length,
/// center letter, alphabet, word-list membership, then repeat submission.
/// Membership distinguishes a word absent from the dictionary entirely
/// from a real word that this puzzle happens not to accept.
///
/// Scoring on success matches the generator exactly: four-letter words are
/// worth one point, longer words their length, and a word spanning all
/// seven letters earns the pangram bonus on top.
///
/// # Examples
/// ```
/// use letter_hive::core::Puzzle;
/// use letter_hive::dictionary::loader::from_slice;
/// use letter_hive::validator::{RejectReason, Verdict, validate};
///
/// let puzzle = Puzzle {
///     id: 0,
///     letters: ['b', 'e', 'a', 't', 's', 'n', 'r'],
///     words: vec!["beast".to_string(), "beats".to_string()],
///     max_score: 10,
/// };
/// let dictionary = from_slice(&["beast", "beats", "stare"]).unwrap();
///
/// let verdict = validate("beast", &puzzle, &[], &dictionary);
/// assert_eq!(verdict, Verdict::Accepted { score: 5, is_pangram: false });
///
/// let verdict = validate("stare", &puzzle, &[], &dictionary);
/// assert_eq!(verdict, Verdict::Rejected(RejectReason::MissingCenter));
/// ```
#[must_use]
pub fn validate(
    submission: &str,
    puzzle: &Puzzle,
    already_found: &[String],
    dictionary: &Dictionary,
) -> Verdict {
    let word = submission.to_lowercase();

    if word.chars().count() < MIN_WORD_LENGTH {
        return Verdict::Rejected(RejectReason::TooShort);
    }

    if !word.contains(puzzle.center()) {
        return Verdict::Rejected(RejectReason::MissingCenter);
    }

    let hive = puzzle.letter_set();
    if !word.chars().all(|c| hive.contains(c)) {
        return Verdict::Rejected(RejectReason::BadLetter);
    }

    if !puzzle.contains_word(&word) {
        if dictionary.contains(&word) {
            return Verdict::Rejected(RejectReason::NotInPuzzle);
        }
        return Verdict::Rejected(RejectReason::NotAWord);
    }

    if already_found.contains(&word) {
        return Verdict::Rejected(RejectReason::AlreadyFound);
    }

    Verdict::Accepted {
        score: word_score(&word),
        is_pangram: LetterSet::from_text(&word).len() == PUZZLE_LETTER_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::from_slice;

    fn sample_puzzle() -> Puzzle {
        Puzzle {
            id: 0,
            letters: ['b', 'e', 'a', 't', 's', 'n', 'r'],
            words: vec![
                "banters".to_string(),
                "beast".to_string(),
                "beats".to_string(),
            ],
            max_score: 24,
        }
    }

    fn sample_dictionary() -> Dictionary {
        from_slice(&["banters", "baste", "beast", "beats", "stare"]).unwrap()
    }

    fn found(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn rejects_short_words() {
        let verdict = validate("cat", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::TooShort));
    }

    #[test]
    fn short_beats_every_other_reason() {
        // "tea" also lacks the center; length is checked first
        let verdict = validate("tea", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::TooShort));
    }

    #[test]
    fn rejects_missing_center() {
        let verdict = validate("stare", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::MissingCenter));
    }

    #[test]
    fn rejects_letters_outside_the_hive() {
        let verdict = validate("beastx", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::BadLetter));
    }

    #[test]
    fn rejects_non_letter_characters() {
        let verdict = validate("be-ast", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::BadLetter));
    }

    #[test]
    fn rejects_nonsense_words() {
        // Made of hive letters and centered, but in no word list
        let verdict = validate("brate", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::NotAWord));
    }

    #[test]
    fn distinguishes_real_words_outside_the_puzzle() {
        // "baste" is a dictionary word but not accepted for this hive
        let verdict = validate("baste", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::NotInPuzzle));
    }

    #[test]
    fn rejects_repeat_submissions() {
        let already = found(&["beast"]);
        let verdict = validate("beast", &sample_puzzle(), &already, &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::AlreadyFound));
    }

    #[test]
    fn membership_outranks_already_found() {
        // A repeat of a non-accepted word still reports the membership reason
        let already = found(&["baste"]);
        let verdict = validate("baste", &sample_puzzle(), &already, &sample_dictionary());
        assert_eq!(verdict, Verdict::Rejected(RejectReason::NotInPuzzle));
    }

    #[test]
    fn accepts_and_scores_plain_words() {
        let verdict = validate("beast", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(
            verdict,
            Verdict::Accepted {
                score: 5,
                is_pangram: false
            }
        );
        assert!(verdict.is_valid());
    }

    #[test]
    fn accepts_and_scores_pangrams() {
        let verdict = validate("banters", &sample_puzzle(), &[], &sample_dictionary());
        assert_eq!(
            verdict,
            Verdict::Accepted {
                score: 14,
                is_pangram: true
            }
        );
    }

    #[test]
    fn normalizes_case_before_checking() {
        let verdict = validate("BEAST", &sample_puzzle(), &[], &sample_dictionary());
        assert!(verdict.is_valid());
    }

    #[test]
    fn reason_messages_are_stable() {
        assert_eq!(RejectReason::TooShort.message(), "too short");
        assert_eq!(RejectReason::MissingCenter.message(), "missing center");
        assert_eq!(RejectReason::BadLetter.message(), "bad letter");
        assert_eq!(RejectReason::NotAWord.message(), "not a valid word");
        assert_eq!(
            RejectReason::NotInPuzzle.message(),
            "not in this puzzle's word list"
        );
        assert_eq!(RejectReason::AlreadyFound.message(), "already found");
        assert_eq!(format!("{}", RejectReason::BadLetter), "bad letter");
    }
}
