//! Letter Hive
//!
//! Generator, selector, and validator for letter-hive word puzzles: seven
//! distinct letters, one mandatory center, and every dictionary word those
//! letters admit.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_hive::dictionary::loader::from_slice;
//! use letter_hive::engine::{Generator, GeneratorConfig};
//!
//! let dictionary = from_slice(&["banters", "beast", "beats", "tern"]).unwrap();
//! let config = GeneratorConfig {
//!     min_words: 1,
//!     ..GeneratorConfig::default()
//! };
//!
//! let puzzles = Generator::new(&dictionary, config).run();
//! for puzzle in &puzzles {
//!     println!("{}: {} words worth {}", puzzle.id, puzzle.word_count(), puzzle.max_score);
//! }
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod dictionary;

// Generation pipeline
pub mod engine;

// Live-play submission checks
pub mod validator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
