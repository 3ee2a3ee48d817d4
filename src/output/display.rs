//! Display functions for command results

use super::formatters::{hive_lines, score_bar};
use crate::commands::{CheckResult, GenerateResult, ShowResult, ValidateResult, WordsResult};
use crate::validator::Verdict;
use colored::Colorize;

/// Print the result of a generation run
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATION COMPLETE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Pipeline:".bright_cyan().bold());
    println!("   Dictionary words:  {}", result.dictionary_words);
    println!("   Letter bases:      {}", result.base_count);
    println!("   Viable candidates: {}", result.candidate_count);
    println!(
        "   Puzzles selected:  {}",
        result.puzzle_count.to_string().bright_yellow().bold()
    );
    println!(
        "   Average score:     {}",
        format!("{:.1}", result.average_score).bright_yellow()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    println!(
        "\n💾 Wrote {} puzzles to {}",
        result.puzzle_count,
        result.output_path.display().to_string().green()
    );
}

/// Print the result of a quality check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "QUALITY CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Puzzle set:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.puzzle_count);
    println!("   Dictionary words: {}", result.dictionary_words);
    if let Some((min, max)) = result.word_count_span {
        println!("   Words per puzzle: {min} to {max}");
    }
    if let Some((min, max)) = result.score_span {
        println!("   Score range:      {min} to {max}");
    }
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.puzzle_count == 0 {
        println!("\n{}", "❌ The puzzle set is empty".red().bold());
        return;
    }

    if result.average_in_band {
        println!("\n{}", "✅ Average score within tolerance".green());
    } else {
        println!("\n{}", "❌ Average score outside tolerance".red().bold());
    }

    if result.violations.is_empty() {
        println!("{}", "✅ Every puzzle honors its contract".green());
    } else {
        println!(
            "{}",
            format!("❌ {} contract violations", result.violations.len())
                .red()
                .bold()
        );
        for violation in result.violations.iter().take(20) {
            println!(
                "   puzzle {}: {}",
                violation.puzzle_id.to_string().yellow(),
                violation.detail
            );
        }
        if result.violations.len() > 20 {
            println!("   ... and {} more", result.violations.len() - 20);
        }
    }
}

/// Print one puzzle's hive and headline numbers
pub fn print_show_result(result: &ShowResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", result.label.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!();
    for line in hive_lines(result.puzzle.letters) {
        println!("   {line}");
    }

    println!("\n   Words:     {}", result.puzzle.word_count());
    println!("   Max score: {}", result.puzzle.max_score);
    println!("   Pangrams:  {}", result.puzzle.pangram_count());
    println!("   Set size:  {}", result.set_size);
}

/// Print a hive's accepted words with scores
pub fn print_words_result(result: &WordsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} ",
        format!("{} word list", result.label).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    for line in hive_lines(result.letters) {
        println!("   {line}");
    }
    println!();

    let best = result.entries.iter().map(|e| e.score).max().unwrap_or(0);
    for entry in &result.entries {
        let bar = score_bar(entry.score, best, 20);
        let name = if entry.is_pangram {
            entry.text.to_uppercase().bright_yellow().bold().to_string()
        } else {
            entry.text.clone()
        };
        println!("   {name:<12} {} {:3}", bar.green(), entry.score);
    }

    println!(
        "\n   {} words, {} pangrams, max score {}",
        result.entries.len(),
        result.pangram_count,
        result.max_score.to_string().bright_yellow().bold()
    );
}

/// Print verdicts for a batch of submissions
pub fn print_validate_result(result: &ValidateResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} ",
        format!("Puzzle {}", result.puzzle_id).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    for line in hive_lines(result.letters) {
        println!("   {line}");
    }
    println!();

    for (submission, verdict) in &result.verdicts {
        match verdict {
            Verdict::Accepted { score, is_pangram } => {
                let tag = if *is_pangram {
                    " PANGRAM!".bright_yellow().bold().to_string()
                } else {
                    String::new()
                };
                println!(
                    "   ✅ {:<12} {}{}",
                    submission.to_lowercase(),
                    format!("+{score}").green().bold(),
                    tag
                );
            }
            Verdict::Rejected(reason) => {
                println!(
                    "   ❌ {:<12} {}",
                    submission.to_lowercase(),
                    reason.message().red()
                );
            }
        }
    }

    println!(
        "\n   Session score: {}",
        result.session_score.to_string().bright_yellow().bold()
    );
}
