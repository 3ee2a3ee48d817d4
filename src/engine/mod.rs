//! Puzzle generation engine
//!
//! The pipeline has four stages: enumerate the seven-letter bases present
//! in the dictionary, build a candidate per basis and center letter, keep
//! candidates inside the acceptance window, then rank and select the final
//! set. Every stage is deterministic for a given dictionary and config.

pub mod builder;
pub mod enumerate;
pub mod generator;
pub mod selector;

pub use builder::{PuzzleCandidate, build_candidate};
pub use enumerate::enumerate_bases;
pub use generator::{Generator, GeneratorConfig};
pub use selector::{select_puzzles, within_window};
