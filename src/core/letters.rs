//! Letter set representation
//!
//! A `LetterSet` stores distinct lowercase ASCII letters as a 26-bit mask,
//! giving O(1) membership, superset, and cardinality checks.

use std::fmt;

/// A set of distinct letters `a..=z` backed by a `u32` bitmask
///
/// Bit 0 is `a`, bit 25 is `z`. Characters outside that range are ignored
/// on insertion and never reported as members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build the set of distinct letters appearing in `text`
    ///
    /// Characters outside `a..=z` contribute nothing.
    ///
    /// # Examples
    /// ```
    /// use letter_hive::core::LetterSet;
    ///
    /// let set = LetterSet::from_text("beast");
    /// assert_eq!(set.len(), 5);
    /// assert!(set.contains('b'));
    /// assert!(!set.contains('z'));
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::EMPTY;
        for c in text.chars() {
            set.insert(c);
        }
        set
    }

    /// Add a letter to the set; characters outside `a..=z` are ignored
    pub const fn insert(&mut self, letter: char) {
        if letter.is_ascii_lowercase() {
            self.0 |= 1 << (letter as u32 - 'a' as u32);
        }
    }

    /// Check whether a letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter as u32 - 'a' as u32)) != 0
    }

    /// Check whether every letter of `other` is in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset_of(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Number of distinct letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in ascending (`a` to `z`) order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('a'..='z').filter(move |&c| self.contains(c))
    }

    /// Canonical string form: the letters sorted ascending and joined
    ///
    /// Two sets are equal exactly when their signatures are equal, which
    /// makes the signature the deduplication key for letter combinations.
    ///
    /// # Examples
    /// ```
    /// use letter_hive::core::LetterSet;
    ///
    /// assert_eq!(LetterSet::from_text("beast").signature(), "abest");
    /// assert_eq!(LetterSet::from_text("stabe").signature(), "abest");
    /// ```
    #[must_use]
    pub fn signature(self) -> String {
        self.iter().collect()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}
