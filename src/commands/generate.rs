//! Puzzle set generation command
//!
//! Runs the full pipeline against a dictionary file and writes the selected
//! puzzles as a JSON artifact.

use crate::dictionary::loader;
use crate::engine::{Generator, GeneratorConfig, PuzzleCandidate, select_puzzles};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a generation run
pub struct GenerateConfig {
    pub dictionary_path: PathBuf,
    pub output_path: PathBuf,
    pub generator: GeneratorConfig,
}

/// Result of a generation run
#[derive(Debug)]
pub struct GenerateResult {
    pub dictionary_words: usize,
    pub base_count: usize,
    pub candidate_count: usize,
    pub puzzle_count: usize,
    pub average_score: f64,
    pub output_path: PathBuf,
    pub duration: Duration,
}

/// Generate a puzzle set and write it to disk
///
/// Candidate building is fanned out across bases with a progress bar; the
/// collected pool preserves basis order, so the written artifact is
/// identical run to run.
///
/// # Errors
///
/// Returns an error if:
/// - The dictionary cannot be loaded or contains an invalid word
/// - The artifact cannot be written
pub fn run_generate(config: &GenerateConfig) -> Result<GenerateResult, String> {
    let start = Instant::now();

    let dictionary = loader::load_from_file(&config.dictionary_path).map_err(|e| e.to_string())?;
    println!(
        "📖 Loaded {} words from {}",
        dictionary.len(),
        config.dictionary_path.display()
    );

    let generator = Generator::new(&dictionary, config.generator.clone());
    let bases = generator.bases();
    println!("🔤 Found {} seven-letter bases", bases.len());

    let pb = ProgressBar::new(bases.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Building candidates");

    let pool: Vec<PuzzleCandidate<'_>> = bases
        .par_iter()
        .flat_map_iter(|&basis| {
            let candidates = generator.candidates_for_basis(basis);
            pb.inc(1);
            candidates
        })
        .collect();

    pb.finish_with_message("Complete!");

    let candidate_count = pool.len();
    let puzzles = select_puzzles(pool, generator.config());

    puzzles.save(&config.output_path).map_err(|e| e.to_string())?;

    Ok(GenerateResult {
        dictionary_words: dictionary.len(),
        base_count: bases.len(),
        candidate_count,
        puzzle_count: puzzles.len(),
        average_score: puzzles.average_score(),
        output_path: config.output_path.clone(),
        duration: start.elapsed(),
    })
}
