//! Word scoring
//!
//! One scoring rule shared by the generator and the runtime validator, so a
//! shipped puzzle's `maxScore` and live play can never disagree.

use super::letters::LetterSet;
use super::{MIN_WORD_LENGTH, PUZZLE_LETTER_COUNT};

/// Bonus awarded on top of length when a word uses all seven hive letters
pub const PANGRAM_BONUS: u32 = 7;

/// Score for a single accepted word
///
/// Four-letter words are worth 1 point; longer words are worth their length.
/// A word whose distinct letters number exactly seven earns the pangram
/// bonus on top.
///
/// # Examples
/// ```
/// use letter_hive::core::word_score;
///
/// assert_eq!(word_score("bats"), 1);
/// assert_eq!(word_score("beast"), 5);
/// assert_eq!(word_score("banters"), 7 + 7); // length + pangram bonus
/// ```
#[must_use]
pub fn word_score(word: &str) -> u32 {
    let length = word.chars().count();
    let base = if length == MIN_WORD_LENGTH {
        1
    } else {
        length as u32
    };

    if LetterSet::from_text(word).len() == PUZZLE_LETTER_COUNT {
        base + PANGRAM_BONUS
    } else {
        base
    }
}

/// Sum of per-word scores over an accepted word list
#[must_use]
pub fn total_score<'a, I>(words: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().map(word_score).sum()
}
