//! Letter Hive - CLI
//!
//! Generates, checks, and inspects letter-hive puzzle sets, and validates
//! player submissions against them.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use letter_hive::commands::{
    CheckConfig, GenerateConfig, ShowConfig, ShowSelection, ValidateConfig, WordsConfig,
    WordsSelection, hive_from_text, run_check, run_generate, run_show, run_validate, run_words,
};
use letter_hive::engine::GeneratorConfig;
use letter_hive::output::{
    print_check_result, print_generate_result, print_show_result, print_validate_result,
    print_words_result,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "letter_hive",
    about = "Letter-hive puzzle generator: seven-letter hives with bounded, pangram-bearing word sets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary word list, one lowercase word per line
    #[arg(short = 'd', long, global = true, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Puzzle artifact path (written by generate, read by the rest)
    #[arg(short = 'p', long, global = true, default_value = "puzzles.json")]
    puzzles: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a puzzle set from the dictionary
    Generate {
        /// Number of puzzles to keep after ranking
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Fewest playable words a puzzle may have
        #[arg(long, default_value = "30")]
        min_words: usize,

        /// Most playable words a puzzle may have
        #[arg(long, default_value = "80")]
        max_words: usize,

        /// Fewest pangrams a puzzle may have
        #[arg(long, default_value = "1")]
        min_pangrams: usize,

        /// Preferred puzzle score; selection keeps the closest candidates
        #[arg(short = 't', long, default_value = "250")]
        target_score: u32,
    },

    /// Check a puzzle artifact against its quality contract
    Check {
        /// Fewest playable words a puzzle may have
        #[arg(long, default_value = "30")]
        min_words: usize,

        /// Most playable words a puzzle may have
        #[arg(long, default_value = "80")]
        max_words: usize,

        /// Fewest pangrams a puzzle may have
        #[arg(long, default_value = "1")]
        min_pangrams: usize,

        /// Score the set average is expected to sit near
        #[arg(short = 't', long, default_value = "250")]
        target_score: u32,

        /// Allowed distance between the average score and the target
        #[arg(long, default_value = "15")]
        tolerance: f64,
    },

    /// List a hive's accepted words with their scores
    Words {
        /// Puzzle id to read from the artifact
        id: Option<u32>,

        /// Seven hive letters (center first) to try against the dictionary
        #[arg(short, long, conflicts_with = "id")]
        letters: Option<String>,
    },

    /// Display one puzzle: by id, by date, or at random
    Show {
        /// Puzzle id
        id: Option<u32>,

        /// Daily puzzle for a date (YYYY-MM-DD; defaults to today)
        #[arg(long, conflicts_with = "id")]
        date: Option<String>,

        /// Pick a random puzzle instead
        #[arg(short, long, conflicts_with_all = ["id", "date"])]
        random: bool,
    },

    /// Validate word submissions against a puzzle
    Validate {
        /// Puzzle id
        id: u32,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            count,
            min_words,
            max_words,
            min_pangrams,
            target_score,
        } => {
            let generator = GeneratorConfig {
                target_puzzle_count: count,
                min_words,
                max_words,
                min_pangrams,
                target_average_score: target_score,
            };
            run_generate_command(cli.dictionary, cli.puzzles, generator)
        }
        Commands::Check {
            min_words,
            max_words,
            min_pangrams,
            target_score,
            tolerance,
        } => {
            let config = CheckConfig {
                puzzles_path: cli.puzzles,
                dictionary_path: cli.dictionary,
                min_words,
                max_words,
                min_pangrams,
                target_average_score: target_score,
                tolerance,
            };
            run_check_command(&config)
        }
        Commands::Words { id, letters } => {
            run_words_command(cli.puzzles, cli.dictionary, id, letters.as_deref())
        }
        Commands::Show { id, date, random } => {
            run_show_command(cli.puzzles, id, date.as_deref(), random)
        }
        Commands::Validate { id, words } => {
            run_validate_command(cli.puzzles, cli.dictionary, id, words)
        }
    }
}

fn run_generate_command(
    dictionary_path: PathBuf,
    output_path: PathBuf,
    generator: GeneratorConfig,
) -> Result<()> {
    let config = GenerateConfig {
        dictionary_path,
        output_path,
        generator,
    };

    let result = run_generate(&config).map_err(|e| anyhow::anyhow!(e))?;
    print_generate_result(&result);
    Ok(())
}

fn run_check_command(config: &CheckConfig) -> Result<()> {
    let result = run_check(config).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);

    if result.passed() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("puzzle set failed its quality contract"))
    }
}

fn run_words_command(
    puzzles_path: PathBuf,
    dictionary_path: PathBuf,
    id: Option<u32>,
    letters: Option<&str>,
) -> Result<()> {
    let selection = match (id, letters) {
        (Some(id), _) => WordsSelection::Id(id),
        (None, Some(text)) => {
            WordsSelection::Letters(hive_from_text(text).map_err(|e| anyhow::anyhow!(e))?)
        }
        (None, None) => return Err(anyhow::anyhow!("Give a puzzle id or --letters")),
    };

    let config = WordsConfig {
        puzzles_path,
        dictionary_path,
        selection,
    };

    let result = run_words(&config).map_err(|e| anyhow::anyhow!(e))?;
    print_words_result(&result);
    Ok(())
}

fn run_show_command(
    puzzles_path: PathBuf,
    id: Option<u32>,
    date: Option<&str>,
    random: bool,
) -> Result<()> {
    let selection = if random {
        ShowSelection::Random
    } else if let Some(id) = id {
        ShowSelection::Id(id)
    } else {
        let date = match date {
            Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("Invalid date '{text}': {e}"))?,
            None => chrono::Local::now().date_naive(),
        };
        ShowSelection::Date(date)
    };

    let config = ShowConfig {
        puzzles_path,
        selection,
    };

    let result = run_show(&config).map_err(|e| anyhow::anyhow!(e))?;
    print_show_result(&result);
    Ok(())
}

fn run_validate_command(
    puzzles_path: PathBuf,
    dictionary_path: PathBuf,
    id: u32,
    words: Vec<String>,
) -> Result<()> {
    let config = ValidateConfig {
        puzzles_path,
        dictionary_path,
        puzzle_id: id,
        submissions: words,
    };

    let result = run_validate(&config).map_err(|e| anyhow::anyhow!(e))?;
    print_validate_result(&result);
    Ok(())
}
