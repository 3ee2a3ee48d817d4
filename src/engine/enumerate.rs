//! Letter-basis enumeration
//!
//! Scans the dictionary for words spanning exactly seven distinct letters.
//! Each such combination is a basis: a hive that at least one word can
//! cover completely, so every puzzle built on it has a pangram available.

use crate::core::LetterSet;
use crate::dictionary::Dictionary;
use std::collections::BTreeMap;

/// Collect every distinct seven-letter basis in the dictionary
///
/// Bases are deduplicated by signature and returned in ascending signature
/// order, so equal dictionaries always enumerate equal basis lists.
///
/// An empty dictionary yields an empty list, which flows through the rest
/// of the pipeline as an empty puzzle set.
///
/// # Examples
/// ```
/// use letter_hive::dictionary::loader::from_slice;
/// use letter_hive::engine::enumerate_bases;
///
/// let dictionary = from_slice(&["banters", "beast"]).unwrap();
/// let bases = enumerate_bases(&dictionary);
///
/// assert_eq!(bases.len(), 1);
/// assert_eq!(bases[0].signature(), "abenrst");
/// ```
#[must_use]
pub fn enumerate_bases(dictionary: &Dictionary) -> Vec<LetterSet> {
    let mut bases: BTreeMap<String, LetterSet> = BTreeMap::new();

    for word in dictionary {
        if word.is_pangram() {
            let letters = word.letters();
            bases.entry(letters.signature()).or_insert(letters);
        }
    }

    bases.into_values().collect()
}
