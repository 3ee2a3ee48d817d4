//! Puzzle set quality checks
//!
//! Re-derives every contract a shipped artifact must honor: word-count
//! bounds, pangram floor, closed alphabet, dictionary containment, score
//! sums, ordering, and hive uniqueness, plus the set-level score target.

use crate::core::{PUZZLE_LETTER_COUNT, Puzzle, PuzzleSet, total_score};
use crate::dictionary::{Dictionary, loader};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a check run
pub struct CheckConfig {
    pub puzzles_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub min_words: usize,
    pub max_words: usize,
    pub min_pangrams: usize,
    pub target_average_score: u32,
    pub tolerance: f64,
}

/// One broken contract, tied to the puzzle that broke it
pub struct Violation {
    pub puzzle_id: u32,
    pub detail: String,
}

/// Result of checking a puzzle set
pub struct CheckResult {
    pub puzzle_count: usize,
    pub dictionary_words: usize,
    pub violations: Vec<Violation>,
    pub average_score: f64,
    pub average_in_band: bool,
    pub word_count_span: Option<(usize, usize)>,
    pub score_span: Option<(u32, u32)>,
    pub duration: Duration,
}

impl CheckResult {
    /// Whether the artifact is fit to ship
    #[must_use]
    pub fn passed(&self) -> bool {
        self.puzzle_count > 0 && self.violations.is_empty() && self.average_in_band
    }
}

/// Check a puzzle artifact against the dictionary it was generated from
///
/// # Errors
///
/// Returns an error if either the artifact or the dictionary cannot be
/// loaded. Contract breaches are reported in the result, not as errors.
pub fn run_check(config: &CheckConfig) -> Result<CheckResult, String> {
    let start = Instant::now();

    let puzzles = PuzzleSet::load(&config.puzzles_path).map_err(|e| e.to_string())?;
    let dictionary = loader::load_from_file(&config.dictionary_path).map_err(|e| e.to_string())?;

    let pb = ProgressBar::new(puzzles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Checking puzzles");

    let mut violations = Vec::new();
    let mut seen_signatures = FxHashSet::default();

    for puzzle in &puzzles {
        check_puzzle(puzzle, &dictionary, config, &mut violations);

        if !seen_signatures.insert(puzzle.signature()) {
            violations.push(Violation {
                puzzle_id: puzzle.id,
                detail: format!("duplicate hive signature {}", puzzle.signature()),
            });
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let average_score = puzzles.average_score();
    let average_in_band = !puzzles.is_empty()
        && (average_score - f64::from(config.target_average_score)).abs() <= config.tolerance;

    let word_count_span = span(puzzles.iter().map(Puzzle::word_count));
    let score_span = span(puzzles.iter().map(|p| p.max_score));

    Ok(CheckResult {
        puzzle_count: puzzles.len(),
        dictionary_words: dictionary.len(),
        violations,
        average_score,
        average_in_band,
        word_count_span,
        score_span,
        duration: start.elapsed(),
    })
}

fn span<T: Copy + Ord>(values: impl Iterator<Item = T> + Clone) -> Option<(T, T)> {
    let min = values.clone().min()?;
    let max = values.max()?;
    Some((min, max))
}

fn check_puzzle(
    puzzle: &Puzzle,
    dictionary: &Dictionary,
    config: &CheckConfig,
    violations: &mut Vec<Violation>,
) {
    let mut fail = |detail: String| {
        violations.push(Violation {
            puzzle_id: puzzle.id,
            detail,
        });
    };

    let hive = puzzle.letter_set();
    if hive.len() != PUZZLE_LETTER_COUNT {
        fail(format!("{} distinct letters in hive", hive.len()));
    }

    let count = puzzle.word_count();
    if count < config.min_words || count > config.max_words {
        fail(format!(
            "{} words outside [{}, {}]",
            count, config.min_words, config.max_words
        ));
    }

    let pangrams = puzzle.pangram_count();
    if pangrams < config.min_pangrams {
        fail(format!(
            "{} pangrams, need at least {}",
            pangrams, config.min_pangrams
        ));
    }

    if let Some(pair) = puzzle.words.windows(2).find(|w| w[0] >= w[1]) {
        fail(format!("words not strictly ascending near '{}'", pair[0]));
    }

    for word in &puzzle.words {
        if !word.contains(puzzle.center()) {
            fail(format!("'{word}' is missing the center letter"));
        }
        if let Some(stray) = word.chars().find(|&c| !hive.contains(c)) {
            fail(format!("'{word}' uses '{stray}' from outside the hive"));
        }
        if !dictionary.contains(word) {
            fail(format!("'{word}' is not a dictionary word"));
        }
    }

    let expected = total_score(puzzle.words.iter().map(String::as_str));
    if puzzle.max_score != expected {
        fail(format!(
            "maxScore {} but words sum to {}",
            puzzle.max_score, expected
        ));
    }
}
