//! Generation pipeline
//!
//! Ties the stages together: enumerate bases, build a candidate per basis
//! and center letter, keep the viable ones, select the final set. The whole
//! run is a pure function of the dictionary and the configuration.

use super::builder::{PuzzleCandidate, build_candidate};
use super::enumerate::enumerate_bases;
use super::selector::{select_puzzles, within_window};
use crate::core::{LetterSet, PuzzleSet};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Generation-time tuning parameters
///
/// Word-count bounds and the pangram floor form the acceptance window;
/// the target score and puzzle count drive selection.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum number of puzzles to keep after ranking
    pub target_puzzle_count: usize,
    /// Fewest playable words a viable puzzle may have
    pub min_words: usize,
    /// Most playable words a viable puzzle may have
    pub max_words: usize,
    /// Fewest pangrams a viable puzzle may have
    pub min_pangrams: usize,
    /// Difficulty target; candidates are ranked by distance from it
    pub target_average_score: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_puzzle_count: 1000,
            min_words: 30,
            max_words: 80,
            min_pangrams: 1,
            target_average_score: 250,
        }
    }
}

/// Drives the full pipeline for one dictionary
///
/// The stages are exposed individually so callers can report progress
/// between them; [`Generator::run`] is the plain one-call form.
pub struct Generator<'a> {
    dictionary: &'a Dictionary,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Create a generator over a dictionary with the given parameters
    pub const fn new(dictionary: &'a Dictionary, config: GeneratorConfig) -> Self {
        Self { dictionary, config }
    }

    /// The parameters this generator runs with
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// All distinct seven-letter bases in the dictionary
    #[must_use]
    pub fn bases(&self) -> Vec<LetterSet> {
        enumerate_bases(self.dictionary)
    }

    /// Viable candidates for one basis, one per center letter
    ///
    /// Centers are tried in the basis's ascending letter order; candidates
    /// outside the acceptance window are dropped here.
    #[must_use]
    pub fn candidates_for_basis(&self, basis: LetterSet) -> Vec<PuzzleCandidate<'a>> {
        basis
            .iter()
            .map(|center| build_candidate(basis, center, self.dictionary))
            .filter(|candidate| within_window(candidate, &self.config))
            .collect()
    }

    /// Run the full pipeline and return the selected puzzle set
    ///
    /// Candidate building fans out across bases, but collecting into a
    /// `Vec` preserves the sequential order, so parallel and
    /// single-threaded runs emit identical artifacts.
    ///
    /// # Examples
    /// ```
    /// use letter_hive::dictionary::loader::from_slice;
    /// use letter_hive::engine::{Generator, GeneratorConfig};
    ///
    /// let dictionary = from_slice(&["banters", "beast", "beats"]).unwrap();
    /// let config = GeneratorConfig {
    ///     min_words: 1,
    ///     ..GeneratorConfig::default()
    /// };
    ///
    /// let puzzles = Generator::new(&dictionary, config).run();
    /// assert!(!puzzles.is_empty());
    /// ```
    #[must_use]
    pub fn run(&self) -> PuzzleSet {
        let bases = self.bases();

        let pool: Vec<PuzzleCandidate<'a>> = bases
            .par_iter()
            .flat_map_iter(|&basis| self.candidates_for_basis(basis))
            .collect();

        select_puzzles(pool, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::from_slice;

    fn test_dictionary() -> Dictionary {
        from_slice(&[
            "banters", "beast", "beats", "tern", "rent", "near", "bane", "sane", "rant", "bats",
            "nest",
        ])
        .unwrap()
    }

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            target_puzzle_count: 3,
            min_words: 1,
            max_words: 100,
            min_pangrams: 1,
            target_average_score: 20,
        }
    }

    #[test]
    fn run_selects_closest_to_target() {
        let dictionary = test_dictionary();
        let puzzles = Generator::new(&dictionary, test_config()).run();

        // Candidate scores by center: a=29, b=26, e=30, n=21, r=18, s=27, t=29
        assert_eq!(puzzles.len(), 3);
        let centers: Vec<char> = puzzles.iter().map(|p| p.letters[0]).collect();
        assert_eq!(centers, vec!['n', 'r', 'b']);

        let scores: Vec<u32> = puzzles.iter().map(|p| p.max_score).collect();
        assert_eq!(scores, vec![21, 18, 26]);
    }

    #[test]
    fn run_is_deterministic() {
        let dictionary = test_dictionary();

        let first = Generator::new(&dictionary, test_config()).run();
        let second = Generator::new(&dictionary, test_config()).run();
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn run_matches_sequential_composition() {
        let dictionary = test_dictionary();
        let generator = Generator::new(&dictionary, test_config());

        let pool: Vec<PuzzleCandidate> = generator
            .bases()
            .into_iter()
            .flat_map(|basis| generator.candidates_for_basis(basis))
            .collect();
        let sequential = select_puzzles(pool, generator.config());

        assert_eq!(generator.run(), sequential);
    }

    #[test]
    fn run_applies_acceptance_window() {
        let dictionary = test_dictionary();
        let config = GeneratorConfig {
            target_puzzle_count: 100,
            min_words: 6,
            max_words: 8,
            ..test_config()
        };

        let puzzles = Generator::new(&dictionary, config).run();

        // Word counts by center: a=8, b=5, e=9, n=8, r=5, s=6, t=8
        assert_eq!(puzzles.len(), 4);
        let centers: Vec<char> = puzzles.iter().map(|p| p.letters[0]).collect();
        assert_eq!(centers, vec!['n', 's', 'a', 't']);
    }

    #[test]
    fn run_without_pangram_words_is_empty() {
        let dictionary = from_slice(&["beast", "tern", "rent"]).unwrap();
        let puzzles = Generator::new(&dictionary, test_config()).run();
        assert!(puzzles.is_empty());
    }

    #[test]
    fn generated_puzzles_satisfy_their_own_invariants() {
        let dictionary = test_dictionary();
        let puzzles = Generator::new(&dictionary, test_config()).run();

        for puzzle in &puzzles {
            let hive = puzzle.letter_set();
            assert_eq!(hive.len(), crate::core::PUZZLE_LETTER_COUNT);
            assert!(puzzle.pangram_count() >= 1);

            let mut sorted = puzzle.words.clone();
            sorted.sort();
            assert_eq!(puzzle.words, sorted);

            for word in &puzzle.words {
                assert!(word.contains(puzzle.center()));
                assert!(word.chars().all(|c| hive.contains(c)));
                assert!(dictionary.contains(word));
            }

            let expected: u32 = puzzle.words.iter().map(|w| crate::core::word_score(w)).sum();
            assert_eq!(puzzle.max_score, expected);
        }
    }

    #[test]
    fn candidates_for_basis_tries_every_center() {
        let dictionary = test_dictionary();
        let generator = Generator::new(&dictionary, test_config());
        let basis = LetterSet::from_text("banters");

        let candidates = generator.candidates_for_basis(basis);
        assert_eq!(candidates.len(), 7);

        let centers: Vec<char> = candidates.iter().map(|c| c.letters[0]).collect();
        assert_eq!(centers, vec!['a', 'b', 'e', 'n', 'r', 's', 't']);
    }

    #[test]
    fn default_config_matches_shipped_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.target_puzzle_count, 1000);
        assert_eq!(config.min_words, 30);
        assert_eq!(config.max_words, 80);
        assert_eq!(config.min_pangrams, 1);
        assert_eq!(config.target_average_score, 250);
    }
}
