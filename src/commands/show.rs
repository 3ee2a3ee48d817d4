//! Puzzle display command
//!
//! Picks one puzzle out of the artifact: by id, by calendar date (the daily
//! rotation every client agrees on), or at random.

use crate::core::{Puzzle, PuzzleSet};
use chrono::NaiveDate;
use rand::prelude::IndexedRandom;
use std::path::PathBuf;

/// How to pick the puzzle to display
pub enum ShowSelection {
    Id(u32),
    Date(NaiveDate),
    Random,
}

/// Configuration for showing a puzzle
pub struct ShowConfig {
    pub puzzles_path: PathBuf,
    pub selection: ShowSelection,
}

/// Result of picking a puzzle
#[derive(Debug)]
pub struct ShowResult {
    pub puzzle: Puzzle,
    pub set_size: usize,
    pub label: String,
}

/// Pick and return one puzzle from the artifact
///
/// # Errors
///
/// Returns an error if the artifact cannot be loaded, the requested id is
/// absent, or the set is empty.
pub fn run_show(config: &ShowConfig) -> Result<ShowResult, String> {
    let puzzles = PuzzleSet::load(&config.puzzles_path).map_err(|e| e.to_string())?;

    if puzzles.is_empty() {
        return Err("The puzzle set is empty".to_string());
    }

    let (id, label) = match config.selection {
        ShowSelection::Id(id) => {
            if puzzles.get(id).is_none() {
                return Err(format!(
                    "No puzzle with id {id} (the set holds {})",
                    puzzles.len()
                ));
            }
            (id, format!("Puzzle {id}"))
        }
        ShowSelection::Date(date) => {
            // Non-empty set, so the daily id exists
            let id = puzzles.daily_id(date).unwrap_or(0);
            (id, format!("Daily puzzle for {date} (id {id})"))
        }
        ShowSelection::Random => {
            let ids: Vec<u32> = puzzles.iter().map(|p| p.id).collect();
            let id = *ids.choose(&mut rand::rng()).unwrap_or(&0);
            (id, format!("Random pick (id {id})"))
        }
    };

    let puzzle = puzzles
        .get(id)
        .ok_or_else(|| format!("No puzzle with id {id}"))?;

    Ok(ShowResult {
        puzzle: puzzle.clone(),
        set_size: puzzles.len(),
        label,
    })
}
