//! Acceptance window and final selection
//!
//! The window decides which candidates are viable at all; selection dedups
//! the survivors by hive signature, ranks them by closeness to the target
//! score, and assigns positional ids to the winners.

use super::builder::PuzzleCandidate;
use super::generator::GeneratorConfig;
use crate::core::PuzzleSet;
use rustc_hash::FxHashSet;

/// Whether a candidate is viable under the acceptance window
///
/// Viable means the playable-word count falls within the configured bounds
/// and enough pangrams are present. Everything else is discarded without
/// comment; most basis and center combinations fail here.
#[must_use]
pub fn within_window(candidate: &PuzzleCandidate<'_>, config: &GeneratorConfig) -> bool {
    let count = candidate.word_count();
    count >= config.min_words
        && count <= config.max_words
        && candidate.pangram_count >= config.min_pangrams
}

/// Rank the viable candidates and keep the best
///
/// Candidates are deduplicated by signature first, keeping the earliest
/// occurrence, then sorted by absolute distance from the target score. The
/// sort is stable, so candidates at equal distance stay in discovery order.
/// The top `target_puzzle_count` become puzzles with ids `0..k`.
///
/// An empty pool produces an empty set, which is a legitimate result left
/// for quality checks to flag.
#[must_use]
pub fn select_puzzles(candidates: Vec<PuzzleCandidate<'_>>, config: &GeneratorConfig) -> PuzzleSet {
    let mut taken_signatures = FxHashSet::default();
    let mut pool: Vec<PuzzleCandidate<'_>> = candidates
        .into_iter()
        .filter(|candidate| taken_signatures.insert(candidate.signature()))
        .collect();

    pool.sort_by_key(|candidate| candidate.score.abs_diff(config.target_average_score));
    pool.truncate(config.target_puzzle_count);

    PuzzleSet::new(
        pool.into_iter()
            .enumerate()
            .map(|(id, candidate)| candidate.into_puzzle(id as u32))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PUZZLE_LETTER_COUNT;
    use crate::dictionary::loader::from_slice;
    use crate::engine::build_candidate;

    fn config() -> GeneratorConfig {
        GeneratorConfig {
            target_puzzle_count: 10,
            min_words: 1,
            max_words: 100,
            min_pangrams: 1,
            target_average_score: 20,
        }
    }

    fn bare_candidate(center: char, score: u32) -> PuzzleCandidate<'static> {
        let mut letters = [center; PUZZLE_LETTER_COUNT];
        let outer: Vec<char> = ('a'..='z').filter(|&c| c != center).take(6).collect();
        letters[1..].copy_from_slice(&outer);

        PuzzleCandidate {
            letters,
            words: Vec::new(),
            score,
            pangram_count: 1,
        }
    }

    #[test]
    fn window_bounds_word_count() {
        let dictionary = from_slice(&["banters", "beast", "beats", "tern", "rent"]).unwrap();
        let basis = crate::core::LetterSet::from_text("banters");

        // Center 'b' admits 3 words, center 't' admits 5
        let b = build_candidate(basis, 'b', &dictionary);
        let t = build_candidate(basis, 't', &dictionary);

        let config = GeneratorConfig {
            min_words: 4,
            max_words: 10,
            ..config()
        };
        assert!(!within_window(&b, &config));
        assert!(within_window(&t, &config));

        let config = GeneratorConfig {
            min_words: 1,
            max_words: 4,
            ..self::config()
        };
        assert!(within_window(&b, &config));
        assert!(!within_window(&t, &config));
    }

    #[test]
    fn window_requires_pangrams() {
        let mut candidate = bare_candidate('a', 50);
        candidate.pangram_count = 0;

        let config = GeneratorConfig {
            min_words: 0,
            ..config()
        };
        assert!(!within_window(&candidate, &config));

        candidate.pangram_count = 1;
        assert!(within_window(&candidate, &config));
    }

    #[test]
    fn selection_ranks_by_distance_from_target() {
        let pool = vec![
            bare_candidate('a', 100),
            bare_candidate('b', 21),
            bare_candidate('c', 15),
        ];

        let set = select_puzzles(pool, &config());
        let centers: Vec<char> = set.iter().map(|p| p.letters[0]).collect();

        // Distances from 20: b=1, c=5, a=80
        assert_eq!(centers, vec!['b', 'c', 'a']);
    }

    #[test]
    fn selection_assigns_positional_ids() {
        let pool = vec![bare_candidate('a', 100), bare_candidate('b', 21)];

        let set = select_puzzles(pool, &config());
        let ids: Vec<u32> = set.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(set.get(0).unwrap().letters[0], 'b');
    }

    #[test]
    fn selection_breaks_ties_by_discovery_order() {
        // Both are 3 away from the target of 20
        let pool = vec![bare_candidate('x', 23), bare_candidate('y', 17)];

        let set = select_puzzles(pool, &config());
        let centers: Vec<char> = set.iter().map(|p| p.letters[0]).collect();
        assert_eq!(centers, vec!['x', 'y']);
    }

    #[test]
    fn selection_keeps_first_of_duplicate_signatures() {
        let first = bare_candidate('a', 30);
        let duplicate = bare_candidate('a', 20);
        let pool = vec![first, duplicate];

        let set = select_puzzles(pool, &config());
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).unwrap().max_score, 30);
    }

    #[test]
    fn selection_truncates_to_target_count() {
        let pool = vec![
            bare_candidate('a', 20),
            bare_candidate('b', 21),
            bare_candidate('c', 22),
        ];

        let config = GeneratorConfig {
            target_puzzle_count: 2,
            ..config()
        };
        let set = select_puzzles(pool, &config);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_pool_produces_empty_set() {
        let set = select_puzzles(Vec::new(), &config());
        assert!(set.is_empty());
    }
}
