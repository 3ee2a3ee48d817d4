//! Submission validation command
//!
//! Plays a batch of words against one puzzle the way a game session would:
//! words accepted earlier in the batch count as already found.

use crate::core::{PUZZLE_LETTER_COUNT, PuzzleSet};
use crate::dictionary::loader;
use crate::validator::{Verdict, validate};
use std::path::PathBuf;

/// Configuration for a validation run
pub struct ValidateConfig {
    pub puzzles_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub puzzle_id: u32,
    pub submissions: Vec<String>,
}

/// Result of validating a batch of submissions
pub struct ValidateResult {
    pub puzzle_id: u32,
    pub letters: [char; PUZZLE_LETTER_COUNT],
    pub verdicts: Vec<(String, Verdict)>,
    pub session_score: u32,
}

/// Validate submissions against a puzzle, in order
///
/// # Errors
///
/// Returns an error if the artifact or dictionary cannot be loaded, or the
/// puzzle id is absent.
pub fn run_validate(config: &ValidateConfig) -> Result<ValidateResult, String> {
    let puzzles = PuzzleSet::load(&config.puzzles_path).map_err(|e| e.to_string())?;
    let dictionary = loader::load_from_file(&config.dictionary_path).map_err(|e| e.to_string())?;

    let puzzle = puzzles.get(config.puzzle_id).ok_or_else(|| {
        format!(
            "No puzzle with id {} (the set holds {})",
            config.puzzle_id,
            puzzles.len()
        )
    })?;

    let mut found: Vec<String> = Vec::new();
    let mut session_score = 0;
    let mut verdicts = Vec::with_capacity(config.submissions.len());

    for submission in &config.submissions {
        let verdict = validate(submission, puzzle, &found, &dictionary);

        if let Verdict::Accepted { score, .. } = verdict {
            found.push(submission.to_lowercase());
            session_score += score;
        }

        verdicts.push((submission.clone(), verdict));
    }

    Ok(ValidateResult {
        puzzle_id: puzzle.id,
        letters: puzzle.letters,
        verdicts,
        session_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::validator::RejectReason;
    use std::fs;

    fn write_inputs(dir: &std::path::Path) -> (PathBuf, PathBuf) {
        let dictionary_path = dir.join("words.txt");
        fs::write(&dictionary_path, "banters\nbaste\nbeast\nbeats\n").unwrap();

        let puzzles_path = dir.join("puzzles.json");
        let puzzle = Puzzle {
            id: 0,
            letters: ['b', 'a', 'e', 'n', 'r', 's', 't'],
            words: vec![
                "banters".to_string(),
                "beast".to_string(),
                "beats".to_string(),
            ],
            max_score: 24,
        };
        PuzzleSet::new(vec![puzzle]).save(&puzzles_path).unwrap();

        (puzzles_path, dictionary_path)
    }

    #[test]
    fn batch_accumulates_found_words() {
        let dir = tempfile::tempdir().unwrap();
        let (puzzles_path, dictionary_path) = write_inputs(dir.path());

        let config = ValidateConfig {
            puzzles_path,
            dictionary_path,
            puzzle_id: 0,
            submissions: vec![
                "beast".to_string(),
                "beast".to_string(),
                "banters".to_string(),
            ],
        };

        let result = run_validate(&config).unwrap();
        assert_eq!(result.verdicts.len(), 3);

        assert!(result.verdicts[0].1.is_valid());
        assert_eq!(
            result.verdicts[1].1,
            Verdict::Rejected(RejectReason::AlreadyFound)
        );
        assert!(result.verdicts[2].1.is_valid());

        // beast (5) + banters (14)
        assert_eq!(result.session_score, 19);
    }

    #[test]
    fn rejections_carry_reasons() {
        let dir = tempfile::tempdir().unwrap();
        let (puzzles_path, dictionary_path) = write_inputs(dir.path());

        let config = ValidateConfig {
            puzzles_path,
            dictionary_path,
            puzzle_id: 0,
            submissions: vec!["cat".to_string(), "baste".to_string()],
        };

        let result = run_validate(&config).unwrap();
        assert_eq!(
            result.verdicts[0].1,
            Verdict::Rejected(RejectReason::TooShort)
        );
        assert_eq!(
            result.verdicts[1].1,
            Verdict::Rejected(RejectReason::NotInPuzzle)
        );
        assert_eq!(result.session_score, 0);
    }

    #[test]
    fn unknown_puzzle_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (puzzles_path, dictionary_path) = write_inputs(dir.path());

        let config = ValidateConfig {
            puzzles_path,
            dictionary_path,
            puzzle_id: 4,
            submissions: vec!["beast".to_string()],
        };

        assert!(run_validate(&config).is_err());
    }
}
